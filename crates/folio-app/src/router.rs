//! View routing (View in TEA pattern, minus the drawing)
//!
//! `route` is the single place that turns navigation state into content:
//! given a [`ViewState`] and the catalog, it produces exactly one content
//! payload plus the navigation affordances valid from that state. The TUI
//! and the headless JSON mode both consume the same [`RenderPass`], so
//! routing stays renderer-agnostic and re-entrant renders are idempotent
//! by construction.

use std::path::PathBuf;

use serde::Serialize;
use tracing::warn;
use url::Url;

use folio_core::catalog::{
    Catalog, CertificationEntry, ContentFragment, ExternalLink, PortfolioDocItem, ProjectEntry,
    ProjectStatus, SkillCategory,
};
use folio_core::remote;
use folio_core::resolver::{self, ResolvedResource};

use crate::state::{Section, SiteContext, ViewState};

/// Document id of the resume, referenced from the home section
pub const RESUME_DOC_ID: &str = "resume";

// ─────────────────────────────────────────────────────────────────────────────
// Affordances
// ─────────────────────────────────────────────────────────────────────────────

/// Opaque interaction id reported back by the renderer
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum AffordanceId {
    /// Open the detail view for a project
    SelectProject(String),
    /// Jump straight to the featured project's detail view
    OpenFeatured,
    /// Return from a detail view to the project list
    Back,
    /// Save a portfolio document by id
    SaveDoc(String),
    /// Save a certification PDF by id
    SaveCertification(String),
    /// Save a document attached to a project detail view
    SaveProjectFile {
        project_id: String,
        logical_name: String,
    },
}

/// A navigation control offered to the renderer
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Affordance {
    pub id: AffordanceId,
    pub label: String,
}

impl Affordance {
    fn new(id: AffordanceId, label: impl Into<String>) -> Self {
        Self {
            id,
            label: label.into(),
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Notices
// ─────────────────────────────────────────────────────────────────────────────

/// Severity of an inline notice
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum NoticeSeverity {
    Info,
    Warning,
    Error,
}

/// An inline, non-fatal notice co-located with the content it concerns.
/// The rest of the page renders normally around it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Notice {
    pub severity: NoticeSeverity,
    pub text: String,
}

impl Notice {
    pub fn info(text: impl Into<String>) -> Self {
        Self {
            severity: NoticeSeverity::Info,
            text: text.into(),
        }
    }

    pub fn warning(text: impl Into<String>) -> Self {
        Self {
            severity: NoticeSeverity::Warning,
            text: text.into(),
        }
    }

    pub fn error(text: impl Into<String>) -> Self {
        Self {
            severity: NoticeSeverity::Error,
            text: text.into(),
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Content payloads
// ─────────────────────────────────────────────────────────────────────────────

/// A resolved save control: where the bytes live and the filename offered
/// to the user when saving
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DocumentControl {
    pub file_name: String,
    pub source: PathBuf,
}

/// A certification card on the home section
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CertificationCard {
    pub id: String,
    pub title: String,
    pub covers: Vec<String>,
    /// None when the PDF could not be resolved (a notice is emitted and the
    /// save affordance is omitted) or the certification has no document yet
    pub control: Option<DocumentControl>,
}

/// Teaser for the featured project on the home section
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FeaturedCard {
    pub id: String,
    pub title: String,
    pub summary: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HomeView {
    pub name: String,
    pub bio: Vec<String>,
    pub completed_certifications: Vec<CertificationCard>,
    pub in_progress_certifications: Vec<CertificationCard>,
    pub links: Vec<ExternalLink>,
    pub featured: Option<FeaturedCard>,
    pub resume: Option<DocumentControl>,
}

/// One project card in the grouped list
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProjectCard {
    pub id: String,
    pub title: String,
    pub status: ProjectStatus,
    pub summary: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProjectGroup {
    pub heading: String,
    pub status: ProjectStatus,
    pub cards: Vec<ProjectCard>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProjectListView {
    pub intro: String,
    pub groups: Vec<ProjectGroup>,
}

/// Where the renderer should fetch an image from
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum ImageSource {
    /// Resolved on disk
    Local(PathBuf),
    /// Local resolution failed; fetch from the derived remote URL
    Remote(Url),
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ImageView {
    pub logical_name: String,
    pub source: ImageSource,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProjectDetailView {
    pub id: String,
    pub title: String,
    pub status: ProjectStatus,
    pub summary: String,
    pub details: Vec<ContentFragment>,
    pub images: Vec<ImageView>,
    /// Resolved project documents; unresolved ones become notices instead
    pub documents: Vec<DocumentControl>,
    pub links: Vec<ExternalLink>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SkillsView {
    pub categories: Vec<SkillCategory>,
}

/// One portfolio piece on the certification portfolio section
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DocCard {
    pub id: String,
    pub title: String,
    pub description: String,
    pub control: Option<DocumentControl>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CertPortfolioView {
    pub title: String,
    pub intro: String,
    pub items: Vec<DocCard>,
}

/// The single content payload a render pass projects
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum ContentPayload {
    Home(HomeView),
    ProjectList(ProjectListView),
    ProjectDetail(ProjectDetailView),
    Skills(SkillsView),
    CertPortfolio(CertPortfolioView),
}

/// Everything the renderer needs for one pass: the payload, the
/// affordances valid from the current state, and inline notices
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RenderPass {
    pub section: Section,
    pub payload: ContentPayload,
    pub affordances: Vec<Affordance>,
    pub notices: Vec<Notice>,
}

// ─────────────────────────────────────────────────────────────────────────────
// Routing
// ─────────────────────────────────────────────────────────────────────────────

/// Resolve the current state to exactly one content payload.
///
/// Pure apart from the resolver's read-only existence checks: routing the
/// same state against the same file set yields an identical pass. A
/// selected project id absent from the catalog yields the project list
/// with a "project unavailable" notice (the update function performs the
/// matching state reset), never a panic.
pub fn route(view: &ViewState, catalog: &Catalog, ctx: &SiteContext) -> RenderPass {
    match view.active_section {
        Section::Home => route_home(catalog, ctx),
        Section::Projects => match view.selected_project_id.as_deref() {
            Some(id) => match catalog.lookup_project(id) {
                Some(entry) => route_project_detail(entry, ctx),
                None => {
                    warn!("selected project id not in catalog: {:?}", id);
                    let mut pass = route_project_list(catalog);
                    pass.notices.insert(
                        0,
                        Notice::warning(format!("Project unavailable: {id}")),
                    );
                    pass
                }
            },
            None => route_project_list(catalog),
        },
        Section::Skills => route_skills(catalog),
        Section::Certifications => route_cert_portfolio(catalog, ctx),
    }
}

fn route_home(catalog: &Catalog, ctx: &SiteContext) -> RenderPass {
    let profile = catalog.profile();
    let mut affordances = Vec::new();
    let mut notices = Vec::new();

    let featured = catalog.featured_project().map(|p| {
        affordances.push(Affordance::new(
            AffordanceId::OpenFeatured,
            format!("Featured project: {}", p.title),
        ));
        FeaturedCard {
            id: p.id.clone(),
            title: p.title.clone(),
            summary: p.summary.clone(),
        }
    });

    let mut completed = Vec::new();
    let mut in_progress = Vec::new();
    for cert in catalog.certifications() {
        let card = certification_card(cert, ctx, &mut affordances, &mut notices);
        match cert.status {
            folio_core::catalog::CertificationStatus::Completed => completed.push(card),
            folio_core::catalog::CertificationStatus::InProgress => in_progress.push(card),
        }
    }

    let resume = match catalog.lookup_doc(RESUME_DOC_ID) {
        Some(doc) => {
            let control = resolve_control(&doc.source_filename, &doc.display_filename, ctx);
            match control {
                Some(control) => {
                    affordances.push(Affordance::new(
                        AffordanceId::SaveDoc(doc.id.clone()),
                        "View Resume",
                    ));
                    Some(control)
                }
                None => {
                    notices.push(Notice::error("Resume file not found."));
                    None
                }
            }
        }
        None => None,
    };

    RenderPass {
        section: Section::Home,
        payload: ContentPayload::Home(HomeView {
            name: profile.name.clone(),
            bio: profile.bio.clone(),
            completed_certifications: completed,
            in_progress_certifications: in_progress,
            links: profile.links.clone(),
            featured,
            resume,
        }),
        affordances,
        notices,
    }
}

fn certification_card(
    cert: &CertificationEntry,
    ctx: &SiteContext,
    affordances: &mut Vec<Affordance>,
    notices: &mut Vec<Notice>,
) -> CertificationCard {
    let control = match (&cert.source_filename, &cert.display_filename) {
        (Some(source), Some(display)) => match resolve_control(source, display, ctx) {
            Some(control) => {
                affordances.push(Affordance::new(
                    AffordanceId::SaveCertification(cert.id.clone()),
                    "View Certification",
                ));
                Some(control)
            }
            None => {
                notices.push(Notice::error(format!("{} file not found.", cert.title)));
                None
            }
        },
        // In-progress certifications have no document yet.
        _ => None,
    };

    CertificationCard {
        id: cert.id.clone(),
        title: cert.title.clone(),
        covers: cert.covers.clone(),
        control,
    }
}

fn route_project_list(catalog: &Catalog) -> RenderPass {
    let mut groups = Vec::new();
    let mut affordances = Vec::new();

    for status in [
        ProjectStatus::Completed,
        ProjectStatus::InProgress,
        ProjectStatus::Planned,
    ] {
        let cards: Vec<ProjectCard> = catalog
            .projects_with_status(status)
            .map(|p| {
                affordances.push(Affordance::new(
                    AffordanceId::SelectProject(p.id.clone()),
                    p.title.clone(),
                ));
                ProjectCard {
                    id: p.id.clone(),
                    title: p.title.clone(),
                    status: p.status,
                    summary: p.summary.clone(),
                }
            })
            .collect();
        // Empty groups still render their heading, matching the authored
        // layout ("(No projects currently planned)").
        groups.push(ProjectGroup {
            heading: status.group_heading().to_string(),
            status,
            cards,
        });
    }

    RenderPass {
        section: Section::Projects,
        payload: ContentPayload::ProjectList(ProjectListView {
            intro: "Below are the projects that I have completed, are in progress, or are to-do:"
                .to_string(),
            groups,
        }),
        affordances,
        notices: Vec::new(),
    }
}

fn route_project_detail(entry: &ProjectEntry, ctx: &SiteContext) -> RenderPass {
    let mut affordances = vec![Affordance::new(AffordanceId::Back, "Back to projects")];
    let mut notices = Vec::new();

    let images = entry
        .image_refs
        .iter()
        .map(|name| {
            let source = match resolver::resolve(name, &ctx.roots) {
                ResolvedResource::Found { path } => ImageSource::Local(path),
                ResolvedResource::NotFound => ImageSource::Remote(remote_url(name, ctx)),
            };
            ImageView {
                logical_name: name.clone(),
                source,
            }
        })
        .collect();

    let mut documents = Vec::new();
    for name in &entry.doc_refs {
        match resolver::resolve(name, &ctx.roots) {
            ResolvedResource::Found { path } => {
                affordances.push(Affordance::new(
                    AffordanceId::SaveProjectFile {
                        project_id: entry.id.clone(),
                        logical_name: name.clone(),
                    },
                    "View Document",
                ));
                documents.push(DocumentControl {
                    file_name: name.clone(),
                    source: path,
                });
            }
            ResolvedResource::NotFound => {
                notices.push(Notice::error(format!("File not found: {name}")));
            }
        }
    }

    RenderPass {
        section: Section::Projects,
        payload: ContentPayload::ProjectDetail(ProjectDetailView {
            id: entry.id.clone(),
            title: entry.title.clone(),
            status: entry.status,
            summary: entry.summary.clone(),
            details: entry.details.clone(),
            images,
            documents,
            links: entry.external_links.clone(),
        }),
        affordances,
        notices,
    }
}

fn route_skills(catalog: &Catalog) -> RenderPass {
    RenderPass {
        section: Section::Skills,
        payload: ContentPayload::Skills(SkillsView {
            categories: catalog.skills().to_vec(),
        }),
        affordances: Vec::new(),
        notices: Vec::new(),
    }
}

fn route_cert_portfolio(catalog: &Catalog, ctx: &SiteContext) -> RenderPass {
    let mut affordances = Vec::new();
    let mut notices = Vec::new();

    let items = catalog
        .docs()
        .iter()
        .map(|doc| doc_card(doc, ctx, &mut affordances, &mut notices))
        .collect();

    RenderPass {
        section: Section::Certifications,
        payload: ContentPayload::CertPortfolio(CertPortfolioView {
            title: "Google Professional Cybersecurity Certification Portfolio".to_string(),
            intro: "This certification equips learners with in-demand skills needed for \
                    entry-level cybersecurity roles. The curriculum covers topics like security \
                    models, tools (SIEM, EDR), networks, threats, vulnerabilities, Python \
                    scripting for security tasks, SQL, and incident response frameworks like \
                    NIST. Below are the portfolio projects completed as part of this program."
                .to_string(),
            items,
        }),
        affordances,
        notices,
    }
}

fn doc_card(
    doc: &PortfolioDocItem,
    ctx: &SiteContext,
    affordances: &mut Vec<Affordance>,
    notices: &mut Vec<Notice>,
) -> DocCard {
    let control = resolve_control(&doc.source_filename, &doc.display_filename, ctx);
    match &control {
        Some(_) => {
            let label = if doc.id == RESUME_DOC_ID {
                "View Resume"
            } else {
                "View Document"
            };
            affordances.push(Affordance::new(AffordanceId::SaveDoc(doc.id.clone()), label));
        }
        None => notices.push(Notice::error(format!(
            "File not found: {}",
            doc.source_filename
        ))),
    }

    DocCard {
        id: doc.id.clone(),
        title: doc.title.clone(),
        description: doc.description.clone(),
        control,
    }
}

fn resolve_control(
    source_filename: &str,
    display_filename: &str,
    ctx: &SiteContext,
) -> Option<DocumentControl> {
    match resolver::resolve(source_filename, &ctx.roots) {
        ResolvedResource::Found { path } => Some(DocumentControl {
            file_name: display_filename.to_string(),
            source: path,
        }),
        ResolvedResource::NotFound => None,
    }
}

fn remote_url(logical_name: &str, ctx: &SiteContext) -> Url {
    match &ctx.remote_base {
        Some(base) => remote::remote_image_url_from(base, logical_name),
        None => remote::remote_image_url(logical_name),
    }
}
