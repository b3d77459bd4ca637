//! Home section widget: bio, featured project, certifications, links

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::Widget,
};

use folio_app::router::{AffordanceId, CertificationCard, HomeView, RenderPass};

use crate::theme::styles;
use crate::widgets::{affordance_index, affordance_line, render_lines, separator};

/// Home section: name, bio, featured shortcut, certification grid,
/// social links, resume control
pub struct HomeWidget<'a> {
    view: &'a HomeView,
    pass: &'a RenderPass,
    cursor: usize,
    scroll: u16,
}

impl<'a> HomeWidget<'a> {
    pub fn new(view: &'a HomeView, pass: &'a RenderPass, cursor: usize, scroll: u16) -> Self {
        Self {
            view,
            pass,
            cursor,
            scroll,
        }
    }

    fn selected(&self, id: &AffordanceId) -> bool {
        affordance_index(self.pass, id) == Some(self.cursor)
    }

    fn cert_lines(&self, lines: &mut Vec<Line<'static>>, card: &CertificationCard, completed: bool) {
        lines.push(Line::from(Span::styled(
            card.title.clone(),
            styles::heading(),
        )));
        for covered in &card.covers {
            lines.push(Line::from(Span::styled(
                format!("  • {covered}"),
                styles::text_secondary(),
            )));
        }
        match &card.control {
            Some(control) => {
                let id = AffordanceId::SaveCertification(card.id.clone());
                let mut line = affordance_line("View Certification", self.selected(&id));
                line.push_span(Span::styled(
                    format!("  → {}", control.file_name),
                    styles::text_muted(),
                ));
                lines.push(line);
            }
            None if completed => {
                lines.push(Line::from(Span::styled(
                    "  (certification file not found)",
                    styles::notice_style(folio_app::router::NoticeSeverity::Error),
                )));
            }
            None => {}
        }
        lines.push(Line::default());
    }

    fn build_lines(&self) -> Vec<Line<'static>> {
        let mut lines = Vec::new();

        lines.push(Line::from(Span::styled(
            self.view.name.clone(),
            styles::accent_bold(),
        )));
        lines.push(Line::default());
        for paragraph in &self.view.bio {
            lines.push(Line::from(Span::styled(
                paragraph.clone(),
                styles::text_primary(),
            )));
            lines.push(Line::default());
        }

        if let Some(featured) = &self.view.featured {
            lines.push(separator());
            let label = format!("Featured project: {}", featured.title);
            lines.push(affordance_line(
                &label,
                self.selected(&AffordanceId::OpenFeatured),
            ));
            lines.push(Line::from(Span::styled(
                format!("  {}", featured.summary),
                styles::text_secondary(),
            )));
            lines.push(Line::default());
        }

        lines.push(separator());
        lines.push(Line::from(Span::styled(
            "Completed Certifications",
            styles::heading(),
        )));
        lines.push(Line::default());
        for card in &self.view.completed_certifications {
            self.cert_lines(&mut lines, card, true);
        }

        lines.push(separator());
        lines.push(Line::from(Span::styled(
            "In Progress Certifications",
            styles::heading(),
        )));
        lines.push(Line::default());
        for card in &self.view.in_progress_certifications {
            self.cert_lines(&mut lines, card, false);
        }

        lines.push(separator());
        lines.push(Line::from(Span::styled(
            "Connect with Me",
            styles::heading(),
        )));
        for link in &self.view.links {
            lines.push(Line::from(vec![
                Span::styled(format!("  {}: ", link.label), styles::text_secondary()),
                Span::styled(link.url.clone(), styles::link()),
            ]));
        }
        if let Some(resume) = &self.view.resume {
            let id = AffordanceId::SaveDoc(folio_app::router::RESUME_DOC_ID.to_string());
            let mut line = affordance_line("View Resume", self.selected(&id));
            line.push_span(Span::styled(
                format!("  → {}", resume.file_name),
                styles::text_muted(),
            ));
            lines.push(line);
        }

        lines
    }
}

impl Widget for HomeWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        render_lines(self.build_lines(), self.scroll, area, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use folio_app::content;
    use folio_app::router::{self, ContentPayload};
    use folio_app::state::{SiteContext, ViewState};
    use folio_core::resolver::SearchRoots;
    use ratatui::{backend::TestBackend, Terminal};
    use tempfile::TempDir;

    fn home_pass() -> (TempDir, RenderPass) {
        let dir = TempDir::new().unwrap();
        let catalog = content::site_catalog().unwrap();
        let ctx = SiteContext::new(SearchRoots::from_roots(vec![dir.path().to_path_buf()]));
        let pass = router::route(&ViewState::new(), &catalog, &ctx);
        (dir, pass)
    }

    fn rendered(pass: &RenderPass) -> String {
        let ContentPayload::Home(view) = &pass.payload else {
            panic!("expected home payload");
        };
        let backend = TestBackend::new(100, 40);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal
            .draw(|f| f.render_widget(HomeWidget::new(view, pass, 0, 0), f.area()))
            .unwrap();
        terminal
            .backend()
            .buffer()
            .content
            .iter()
            .map(|c| c.symbol())
            .collect()
    }

    #[test]
    fn test_home_renders_name_and_headings() {
        let (_dir, pass) = home_pass();
        let content = rendered(&pass);
        assert!(content.contains("Mischa Nelson"));
        assert!(content.contains("Completed Certifications"));
        assert!(content.contains("Featured project: Personal Website"));
    }

    #[test]
    fn test_home_marks_missing_certification_files() {
        // No PDFs in the temp root, so completed certifications show the
        // inline missing-file marker.
        let (_dir, pass) = home_pass();
        let content = rendered(&pass);
        assert!(content.contains("(certification file not found)"));
    }
}
