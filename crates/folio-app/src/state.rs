//! Application state (Model in TEA pattern)

use serde::Serialize;
use url::Url;

use folio_core::catalog::Catalog;
use folio_core::resolver::SearchRoots;

use crate::config::Settings;
use crate::router::Notice;

/// Exclusive top-level section selector
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub enum Section {
    #[default]
    Home,
    Projects,
    Skills,
    Certifications,
}

impl Section {
    /// All sections in tab order
    pub const ALL: [Section; 4] = [
        Section::Home,
        Section::Projects,
        Section::Skills,
        Section::Certifications,
    ];

    /// Tab label
    pub fn title(&self) -> &'static str {
        match self {
            Section::Home => "Home",
            Section::Projects => "Projects",
            Section::Skills => "Skills",
            Section::Certifications => "Cybersecurity Cert",
        }
    }

    /// Position within the tab bar
    pub fn index(&self) -> usize {
        match self {
            Section::Home => 0,
            Section::Projects => 1,
            Section::Skills => 2,
            Section::Certifications => 3,
        }
    }

    /// The section after this one, wrapping around
    pub fn next(&self) -> Section {
        Section::ALL[(self.index() + 1) % Section::ALL.len()]
    }

    /// The section before this one, wrapping around
    pub fn prev(&self) -> Section {
        Section::ALL[(self.index() + Section::ALL.len() - 1) % Section::ALL.len()]
    }
}

/// Session-scoped navigation state
///
/// Exactly one instance per session, created with defaults at startup and
/// mutated only by navigation interactions. `selected_project_id` is Some
/// only while the Projects section is active; a stale id that no longer
/// matches the catalog routes to the "project unavailable" fallback rather
/// than crashing.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct ViewState {
    pub active_section: Section,
    pub selected_project_id: Option<String>,
}

impl ViewState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Select a top-level section.
    ///
    /// Leaving Projects clears the project selection; re-entering Projects
    /// with a selection still set resumes the detail view.
    pub fn go_to_section(&mut self, section: Section) {
        if section != Section::Projects {
            self.selected_project_id = None;
        }
        self.active_section = section;
    }

    /// Enter the detail view for a project.
    ///
    /// Also used by the featured-project shortcut, which may fire from any
    /// section; the section switches to Projects as part of the transition.
    pub fn select_project(&mut self, id: impl Into<String>) {
        self.active_section = Section::Projects;
        self.selected_project_id = Some(id.into());
    }

    /// Return from a detail view to the project list.
    ///
    /// The one reserved back interaction; a no-op outside the detail view.
    pub fn back(&mut self) {
        self.selected_project_id = None;
    }

    pub fn in_project_detail(&self) -> bool {
        self.active_section == Section::Projects && self.selected_project_id.is_some()
    }
}

/// Everything routing needs besides the navigation state: the search roots
/// for local resolution and an optional remote image base override.
#[derive(Debug, Clone, PartialEq)]
pub struct SiteContext {
    pub roots: SearchRoots,
    pub remote_base: Option<Url>,
}

impl SiteContext {
    pub fn new(roots: SearchRoots) -> Self {
        Self {
            roots,
            remote_base: None,
        }
    }

    pub fn with_remote_base(mut self, base: Url) -> Self {
        self.remote_base = Some(base);
        self
    }
}

/// Top-level application state
pub struct AppState {
    /// Static content table, read-only after startup
    pub catalog: Catalog,
    /// Session navigation state
    pub view: ViewState,
    /// Resolution context (search roots, remote base)
    pub context: SiteContext,
    /// Loaded settings
    pub settings: Settings,
    /// Cursor over the current pass's affordances (renderer-side selection)
    pub cursor: usize,
    /// Vertical scroll offset for long section bodies
    pub scroll: u16,
    /// Transient notices from completed interactions (saves), shown in the
    /// status bar until the next navigation
    pub session_notices: Vec<Notice>,
    should_quit: bool,
}

impl AppState {
    pub fn new(catalog: Catalog, context: SiteContext, settings: Settings) -> Self {
        Self {
            catalog,
            view: ViewState::new(),
            context,
            settings,
            cursor: 0,
            scroll: 0,
            session_notices: Vec::new(),
            should_quit: false,
        }
    }

    pub fn request_quit(&mut self) {
        self.should_quit = true;
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Reset renderer-side selection after a navigation transition
    pub fn reset_viewport(&mut self) {
        self.cursor = 0;
        self.scroll = 0;
        self.session_notices.clear();
    }

    pub fn push_session_notice(&mut self, notice: Notice) {
        self.session_notices.push(notice);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_view_state() {
        let view = ViewState::new();
        assert_eq!(view.active_section, Section::Home);
        assert!(view.selected_project_id.is_none());
    }

    #[test]
    fn test_leaving_projects_clears_selection() {
        let mut view = ViewState::new();
        view.select_project("cyberdeck");
        assert!(view.in_project_detail());

        view.go_to_section(Section::Skills);
        assert_eq!(view.active_section, Section::Skills);
        assert!(view.selected_project_id.is_none());
    }

    #[test]
    fn test_reentering_projects_keeps_selection() {
        let mut view = ViewState::new();
        view.select_project("cyberdeck");
        view.go_to_section(Section::Projects);
        assert_eq!(view.selected_project_id.as_deref(), Some("cyberdeck"));
        assert!(view.in_project_detail());
    }

    #[test]
    fn test_back_always_returns_to_list() {
        for id in ["cyberdeck", "cipherless_relay", "not_even_real"] {
            let mut view = ViewState::new();
            view.select_project(id);
            view.back();
            assert_eq!(view.active_section, Section::Projects);
            assert!(view.selected_project_id.is_none());
            assert!(!view.in_project_detail());
        }
    }

    #[test]
    fn test_back_outside_detail_is_noop() {
        let mut view = ViewState::new();
        view.go_to_section(Section::Skills);
        view.back();
        assert_eq!(view.active_section, Section::Skills);
    }

    #[test]
    fn test_select_project_from_any_section_switches_to_projects() {
        let mut view = ViewState::new();
        view.go_to_section(Section::Home);
        view.select_project("personal_website");
        assert_eq!(view.active_section, Section::Projects);
        assert!(view.in_project_detail());
    }

    #[test]
    fn test_section_cycling() {
        assert_eq!(Section::Home.next(), Section::Projects);
        assert_eq!(Section::Certifications.next(), Section::Home);
        assert_eq!(Section::Home.prev(), Section::Certifications);
        assert_eq!(Section::Projects.prev(), Section::Home);
    }
}
