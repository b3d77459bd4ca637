//! Certification portfolio widget: the Google Cybersecurity document set

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::Widget,
};

use folio_app::router::{AffordanceId, CertPortfolioView, NoticeSeverity, RenderPass};

use crate::theme::styles;
use crate::widgets::{affordance_index, affordance_line, render_lines, separator};

/// Certification portfolio: intro plus one card per document
pub struct CertPortfolioWidget<'a> {
    view: &'a CertPortfolioView,
    pass: &'a RenderPass,
    cursor: usize,
    scroll: u16,
}

impl<'a> CertPortfolioWidget<'a> {
    pub fn new(
        view: &'a CertPortfolioView,
        pass: &'a RenderPass,
        cursor: usize,
        scroll: u16,
    ) -> Self {
        Self {
            view,
            pass,
            cursor,
            scroll,
        }
    }

    fn build_lines(&self) -> Vec<Line<'static>> {
        let mut lines = Vec::new();

        lines.push(Line::from(Span::styled(
            self.view.title.clone(),
            styles::accent_bold(),
        )));
        lines.push(Line::default());
        lines.push(Line::from(Span::styled(
            self.view.intro.clone(),
            styles::text_secondary(),
        )));
        lines.push(Line::default());
        lines.push(separator());
        lines.push(Line::from(Span::styled(
            "Portfolio Pieces",
            styles::heading(),
        )));
        lines.push(Line::default());

        for item in &self.view.items {
            lines.push(Line::from(Span::styled(
                item.title.clone(),
                styles::heading(),
            )));
            lines.push(Line::from(Span::styled(
                format!("  {}", item.description),
                styles::text_secondary(),
            )));
            match &item.control {
                Some(control) => {
                    let id = AffordanceId::SaveDoc(item.id.clone());
                    let selected = affordance_index(self.pass, &id) == Some(self.cursor);
                    let label = if item.id == folio_app::router::RESUME_DOC_ID {
                        "View Resume"
                    } else {
                        "View Document"
                    };
                    let mut line = affordance_line(label, selected);
                    line.push_span(Span::styled(
                        format!("  → {}", control.file_name),
                        styles::text_muted(),
                    ));
                    lines.push(line);
                }
                None => {
                    lines.push(Line::from(Span::styled(
                        "  (file not found)",
                        styles::notice_style(NoticeSeverity::Error),
                    )));
                }
            }
            lines.push(Line::default());
        }

        lines
    }
}

impl Widget for CertPortfolioWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        render_lines(self.build_lines(), self.scroll, area, buf);
    }
}
