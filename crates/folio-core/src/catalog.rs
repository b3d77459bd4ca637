//! Typed content catalog
//!
//! The catalog is the static table behind every section of the site:
//! profile/bio, project entries, certification records, portfolio
//! documents, and the skills grid. It is authored once at startup and
//! never mutated afterwards. Construction validates id uniqueness so a
//! bad table fails fast instead of producing ambiguous lookups mid-render.

use std::collections::HashSet;

use serde::Serialize;

use crate::error::{Error, Result};

/// Lifecycle status of a project entry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ProjectStatus {
    /// Finished and documented
    Completed,
    /// Actively being built
    InProgress,
    /// Planned but not started
    Planned,
}

impl ProjectStatus {
    /// Human-readable label used in section headings and status tags
    pub fn label(&self) -> &'static str {
        match self {
            ProjectStatus::Completed => "Completed",
            ProjectStatus::InProgress => "In Progress",
            ProjectStatus::Planned => "Planned",
        }
    }

    /// Heading used for the grouped project list
    pub fn group_heading(&self) -> &'static str {
        match self {
            ProjectStatus::Completed => "Completed Projects",
            ProjectStatus::InProgress => "In Progress Projects",
            ProjectStatus::Planned => "To-Do Projects",
        }
    }
}

/// One block of body content inside a project detail view
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum ContentFragment {
    /// A paragraph of prose
    Text(String),
    /// A bolded subheading introducing the fragments after it
    Subheading(String),
    /// A bulleted list
    Bullets(Vec<String>),
}

impl ContentFragment {
    pub fn text(s: impl Into<String>) -> Self {
        Self::Text(s.into())
    }

    pub fn subheading(s: impl Into<String>) -> Self {
        Self::Subheading(s.into())
    }

    pub fn bullets<I, S>(items: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::Bullets(items.into_iter().map(Into::into).collect())
    }
}

/// A labelled external URL (GitHub repo, LinkedIn profile, mailto)
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ExternalLink {
    pub label: String,
    pub url: String,
}

impl ExternalLink {
    pub fn new(label: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            url: url.into(),
        }
    }
}

/// A single project shown on the projects section
///
/// Immutable once constructed. `image_refs` and `doc_refs` hold logical
/// filenames resolved through the resource resolver at render time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProjectEntry {
    /// Unique key used by navigation state and affordance ids
    pub id: String,
    pub title: String,
    pub status: ProjectStatus,
    /// Short card text shown in the project list
    pub summary: String,
    /// Ordered body content for the detail view
    pub details: Vec<ContentFragment>,
    /// Logical image filenames (resolved locally, else remote fallback)
    pub image_refs: Vec<String>,
    /// Logical document filenames (resolved locally, else a notice)
    pub doc_refs: Vec<String>,
    pub external_links: Vec<ExternalLink>,
    /// Featured projects get a shortcut affordance on the home section
    pub featured: bool,
}

impl ProjectEntry {
    pub fn new(
        id: impl Into<String>,
        title: impl Into<String>,
        status: ProjectStatus,
        summary: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            status,
            summary: summary.into(),
            details: Vec::new(),
            image_refs: Vec::new(),
            doc_refs: Vec::new(),
            external_links: Vec::new(),
            featured: false,
        }
    }

    pub fn with_detail(mut self, fragment: ContentFragment) -> Self {
        self.details.push(fragment);
        self
    }

    pub fn with_image(mut self, logical_name: impl Into<String>) -> Self {
        self.image_refs.push(logical_name.into());
        self
    }

    pub fn with_doc(mut self, logical_name: impl Into<String>) -> Self {
        self.doc_refs.push(logical_name.into());
        self
    }

    pub fn with_link(mut self, label: impl Into<String>, url: impl Into<String>) -> Self {
        self.external_links.push(ExternalLink::new(label, url));
        self
    }

    pub fn featured(mut self) -> Self {
        self.featured = true;
        self
    }
}

/// A downloadable portfolio document (certification portfolio pieces, resume)
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PortfolioDocItem {
    /// Unique key within the document namespace
    pub id: String,
    pub title: String,
    pub description: String,
    /// Filename as it exists on disk (authored case, spaces and all)
    pub source_filename: String,
    /// Cleaned filename offered when the document is saved
    pub display_filename: String,
}

impl PortfolioDocItem {
    pub fn new(
        id: impl Into<String>,
        title: impl Into<String>,
        description: impl Into<String>,
        source_filename: impl Into<String>,
        display_filename: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            description: description.into(),
            source_filename: source_filename.into(),
            display_filename: display_filename.into(),
        }
    }
}

/// Completion state of a certification record
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum CertificationStatus {
    Completed,
    InProgress,
}

/// A certification shown on the home section
///
/// Completed certifications carry the PDF filenames for the save control;
/// in-progress ones have no document yet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CertificationEntry {
    pub id: String,
    pub title: String,
    /// "Covers: ..." bullets shown under the title
    pub covers: Vec<String>,
    pub status: CertificationStatus,
    pub source_filename: Option<String>,
    pub display_filename: Option<String>,
}

impl CertificationEntry {
    pub fn completed(
        id: impl Into<String>,
        title: impl Into<String>,
        source_filename: impl Into<String>,
        display_filename: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            covers: Vec::new(),
            status: CertificationStatus::Completed,
            source_filename: Some(source_filename.into()),
            display_filename: Some(display_filename.into()),
        }
    }

    pub fn in_progress(id: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            covers: Vec::new(),
            status: CertificationStatus::InProgress,
            source_filename: None,
            display_filename: None,
        }
    }

    pub fn with_covers<I, S>(mut self, covers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.covers = covers.into_iter().map(Into::into).collect();
        self
    }
}

/// Named proficiency level for a skill
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum SkillLevel {
    Beginner,
    Intermediate,
    Advanced,
}

impl SkillLevel {
    pub fn label(&self) -> &'static str {
        match self {
            SkillLevel::Beginner => "Beginner",
            SkillLevel::Intermediate => "Intermediate",
            SkillLevel::Advanced => "Advanced",
        }
    }
}

/// A single skill with its level badge
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Skill {
    pub name: String,
    pub level: SkillLevel,
}

impl Skill {
    pub fn new(name: impl Into<String>, level: SkillLevel) -> Self {
        Self {
            name: name.into(),
            level,
        }
    }
}

/// A named group of skills shown as one card in the skills grid
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SkillCategory {
    pub name: String,
    pub skills: Vec<Skill>,
}

impl SkillCategory {
    pub fn new<I>(name: impl Into<String>, skills: I) -> Self
    where
        I: IntoIterator<Item = Skill>,
    {
        Self {
            name: name.into(),
            skills: skills.into_iter().collect(),
        }
    }
}

/// Site owner profile shown on the home section
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Profile {
    pub name: String,
    /// Bio paragraphs, in display order
    pub bio: Vec<String>,
    /// "Connect with me" links
    pub links: Vec<ExternalLink>,
}

/// The static table behind every section of the site
///
/// Read-only after construction; may be shared freely across render passes.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Catalog {
    profile: Profile,
    projects: Vec<ProjectEntry>,
    docs: Vec<PortfolioDocItem>,
    certifications: Vec<CertificationEntry>,
    skills: Vec<SkillCategory>,
}

impl Catalog {
    /// Build a catalog, validating id uniqueness per namespace.
    ///
    /// Fails with [`Error::DuplicateCatalogId`] on the first repeated id.
    /// Lookups after a successful construction are unambiguous.
    pub fn new(
        profile: Profile,
        projects: Vec<ProjectEntry>,
        docs: Vec<PortfolioDocItem>,
        certifications: Vec<CertificationEntry>,
        skills: Vec<SkillCategory>,
    ) -> Result<Self> {
        check_unique_ids(projects.iter().map(|p| p.id.as_str()))?;
        check_unique_ids(docs.iter().map(|d| d.id.as_str()))?;
        check_unique_ids(certifications.iter().map(|c| c.id.as_str()))?;

        Ok(Self {
            profile,
            projects,
            docs,
            certifications,
            skills,
        })
    }

    /// Look up a project by id. Key equality over unique string ids.
    pub fn lookup_project(&self, id: &str) -> Option<&ProjectEntry> {
        self.projects.iter().find(|p| p.id == id)
    }

    /// Look up a portfolio document by id.
    pub fn lookup_doc(&self, id: &str) -> Option<&PortfolioDocItem> {
        self.docs.iter().find(|d| d.id == id)
    }

    /// Look up a certification record by id.
    pub fn lookup_certification(&self, id: &str) -> Option<&CertificationEntry> {
        self.certifications.iter().find(|c| c.id == id)
    }

    /// All projects in authored order
    pub fn projects(&self) -> &[ProjectEntry] {
        &self.projects
    }

    /// Projects filtered to one status, preserving authored order
    pub fn projects_with_status(
        &self,
        status: ProjectStatus,
    ) -> impl Iterator<Item = &ProjectEntry> {
        self.projects.iter().filter(move |p| p.status == status)
    }

    /// The first featured project, if any
    pub fn featured_project(&self) -> Option<&ProjectEntry> {
        self.projects.iter().find(|p| p.featured)
    }

    pub fn docs(&self) -> &[PortfolioDocItem] {
        &self.docs
    }

    pub fn certifications(&self) -> &[CertificationEntry] {
        &self.certifications
    }

    pub fn skills(&self) -> &[SkillCategory] {
        &self.skills
    }

    pub fn profile(&self) -> &Profile {
        &self.profile
    }
}

fn check_unique_ids<'a>(ids: impl Iterator<Item = &'a str>) -> Result<()> {
    let mut seen = HashSet::new();
    for id in ids {
        if !seen.insert(id) {
            return Err(Error::duplicate_catalog_id(id));
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_profile() -> Profile {
        Profile {
            name: "Test Person".to_string(),
            bio: vec!["First paragraph.".to_string()],
            links: vec![ExternalLink::new("GitHub", "https://github.com/test")],
        }
    }

    fn test_projects() -> Vec<ProjectEntry> {
        vec![
            ProjectEntry::new(
                "cyberdeck",
                "Cyberdeck",
                ProjectStatus::Completed,
                "A portable Kali Linux machine.",
            )
            .with_image("kali closed.jpg")
            .featured(),
            ProjectEntry::new(
                "cipherless_relay",
                "Cipherless Relay",
                ProjectStatus::InProgress,
                "Seed-mapped messaging without traditional encryption.",
            ),
        ]
    }

    #[test]
    fn test_lookup_project_round_trip() {
        let catalog = Catalog::new(test_profile(), test_projects(), vec![], vec![], vec![])
            .unwrap();

        let entry = catalog.lookup_project("cipherless_relay").unwrap();
        assert_eq!(entry.title, "Cipherless Relay");
        assert_eq!(entry.status, ProjectStatus::InProgress);

        let entry = catalog.lookup_project("cyberdeck").unwrap();
        assert_eq!(entry.image_refs, vec!["kali closed.jpg"]);
        assert!(entry.featured);
    }

    #[test]
    fn test_lookup_missing_id_returns_none() {
        let catalog = Catalog::new(test_profile(), test_projects(), vec![], vec![], vec![])
            .unwrap();
        assert!(catalog.lookup_project("ghost_project").is_none());
        assert!(catalog.lookup_doc("ghost_doc").is_none());
    }

    #[test]
    fn test_duplicate_project_id_fails_construction() {
        let mut projects = test_projects();
        projects.push(ProjectEntry::new(
            "cyberdeck",
            "Cyberdeck again",
            ProjectStatus::Planned,
            "Duplicate id.",
        ));

        let err = Catalog::new(test_profile(), projects, vec![], vec![], vec![]).unwrap_err();
        assert!(matches!(err, Error::DuplicateCatalogId { ref id } if id == "cyberdeck"));
        assert!(err.is_fatal());
    }

    #[test]
    fn test_duplicate_doc_id_fails_construction() {
        let docs = vec![
            PortfolioDocItem::new("resume", "Resume", "d", "#8 Resume.pdf", "Resume.pdf"),
            PortfolioDocItem::new("resume", "Resume 2", "d", "r2.pdf", "r2.pdf"),
        ];
        let err = Catalog::new(test_profile(), vec![], docs, vec![], vec![]).unwrap_err();
        assert!(matches!(err, Error::DuplicateCatalogId { .. }));
    }

    #[test]
    fn test_same_id_across_namespaces_is_allowed() {
        // Project ids and document ids are separate key spaces.
        let projects = vec![ProjectEntry::new(
            "resume",
            "Resume Generator",
            ProjectStatus::Planned,
            "A project that happens to share a doc id.",
        )];
        let docs = vec![PortfolioDocItem::new(
            "resume",
            "Resume",
            "My resume.",
            "#8 Resume.pdf",
            "Resume.pdf",
        )];
        assert!(Catalog::new(test_profile(), projects, docs, vec![], vec![]).is_ok());
    }

    #[test]
    fn test_projects_with_status_preserves_order() {
        let catalog = Catalog::new(test_profile(), test_projects(), vec![], vec![], vec![])
            .unwrap();
        let completed: Vec<_> = catalog
            .projects_with_status(ProjectStatus::Completed)
            .map(|p| p.id.as_str())
            .collect();
        assert_eq!(completed, vec!["cyberdeck"]);
    }

    #[test]
    fn test_featured_project() {
        let catalog = Catalog::new(test_profile(), test_projects(), vec![], vec![], vec![])
            .unwrap();
        assert_eq!(catalog.featured_project().unwrap().id, "cyberdeck");
    }

    #[test]
    fn test_status_labels() {
        assert_eq!(ProjectStatus::Completed.label(), "Completed");
        assert_eq!(ProjectStatus::InProgress.label(), "In Progress");
        assert_eq!(ProjectStatus::Planned.group_heading(), "To-Do Projects");
    }
}
