//! Main render/view function (View in TEA pattern)

use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::widgets::Block;
use ratatui::Frame;

use folio_app::router::{self, ContentPayload};
use folio_app::state::AppState;

use crate::layout;
use crate::theme::palette;
use crate::widgets::{
    CertPortfolioWidget, HomeWidget, NoticeStrip, ProjectDetailWidget, ProjectListWidget,
    SiteHeader, SkillsWidget, StatusBar,
};

/// Render the complete UI (View function in TEA)
///
/// Pure: routing plus drawing, no state mutation. Rendering the same state
/// twice paints the same screen.
pub fn view(frame: &mut Frame, state: &AppState) {
    let area = frame.area();

    // Fill entire terminal with deepest background color
    let bg_block = Block::default().style(Style::default().bg(palette::DEEPEST_BG));
    frame.render_widget(bg_block, area);

    let areas = layout::create(area);
    let pass = router::route(&state.view, &state.catalog, &state.context);
    let site_name = &state.catalog.profile().name;

    frame.render_widget(
        SiteHeader::new(site_name, state.view.active_section),
        areas.header,
    );

    // Inline notices sit above the section body.
    let mut body = areas.body;
    if !pass.notices.is_empty() {
        let strip = NoticeStrip::new(&pass.notices);
        let height = strip.height().min(body.height / 2);
        let strip_area = Rect { height, ..body };
        frame.render_widget(strip, strip_area);
        body = Rect {
            y: body.y + height,
            height: body.height - height,
            ..body
        };
    }

    match &pass.payload {
        ContentPayload::Home(home) => {
            frame.render_widget(HomeWidget::new(home, &pass, state.cursor, state.scroll), body);
        }
        ContentPayload::ProjectList(list) => {
            frame.render_widget(
                ProjectListWidget::new(list, &pass, state.cursor, state.scroll),
                body,
            );
        }
        ContentPayload::ProjectDetail(detail) => {
            frame.render_widget(
                ProjectDetailWidget::new(detail, &pass, state.cursor, state.scroll),
                body,
            );
        }
        ContentPayload::Skills(skills) => {
            frame.render_widget(SkillsWidget::new(skills, state.scroll), body);
        }
        ContentPayload::CertPortfolio(portfolio) => {
            frame.render_widget(
                CertPortfolioWidget::new(portfolio, &pass, state.cursor, state.scroll),
                body,
            );
        }
    }

    frame.render_widget(
        StatusBar::new(
            state.view.active_section,
            state.view.in_project_detail(),
            &state.session_notices,
            site_name,
        ),
        areas.status,
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use folio_app::config::Settings;
    use folio_app::content;
    use folio_app::state::{Section, SiteContext};
    use folio_core::resolver::SearchRoots;
    use ratatui::{backend::TestBackend, Terminal};
    use tempfile::TempDir;

    fn test_state(dir: &TempDir) -> AppState {
        let catalog = content::site_catalog().unwrap();
        let ctx = SiteContext::new(SearchRoots::from_roots(vec![dir.path().to_path_buf()]));
        AppState::new(catalog, ctx, Settings::default())
    }

    fn draw(state: &AppState) -> String {
        let backend = TestBackend::new(120, 40);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal.draw(|f| view(f, state)).unwrap();
        terminal
            .backend()
            .buffer()
            .content
            .iter()
            .map(|c| c.symbol())
            .collect()
    }

    #[test]
    fn test_view_renders_every_section_without_panic() {
        let dir = TempDir::new().unwrap();
        let mut state = test_state(&dir);
        for section in Section::ALL {
            state.view.go_to_section(section);
            let content = draw(&state);
            assert!(content.contains(section.title()));
        }
    }

    #[test]
    fn test_view_renders_detail_for_selected_project() {
        let dir = TempDir::new().unwrap();
        let mut state = test_state(&dir);
        state.view.select_project("cyberdeck");
        let content = draw(&state);
        assert!(content.contains("Cyberdeck"));
        assert!(content.contains("Back to projects"));
    }

    #[test]
    fn test_view_renders_fallback_for_stale_selection() {
        let dir = TempDir::new().unwrap();
        let mut state = test_state(&dir);
        state.view.select_project("ghost_project");
        let content = draw(&state);
        // Self-heals to the list with an inline notice.
        assert!(content.contains("Project unavailable"));
        assert!(content.contains("Completed Projects"));
    }
}
