//! Inline notice strip
//!
//! Renders the render pass's notices above the section body. Failures are
//! inline and co-located with the section; the rest of the page keeps
//! rendering normally.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::Widget,
};

use folio_app::router::Notice;

use crate::theme::styles;
use crate::widgets::render_lines;

/// Strip of inline notices for the current pass
pub struct NoticeStrip<'a> {
    notices: &'a [Notice],
}

impl<'a> NoticeStrip<'a> {
    pub fn new(notices: &'a [Notice]) -> Self {
        Self { notices }
    }

    /// Rows needed to show every notice
    pub fn height(&self) -> u16 {
        self.notices.len() as u16
    }
}

impl Widget for NoticeStrip<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.height == 0 {
            return;
        }
        let lines = self
            .notices
            .iter()
            .map(|n| {
                Line::from(vec![
                    Span::styled("⚠ ", styles::notice_style(n.severity)),
                    Span::styled(n.text.clone(), styles::notice_style(n.severity)),
                ])
            })
            .collect();
        render_lines(lines, 0, area, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::{backend::TestBackend, Terminal};

    #[test]
    fn test_notice_strip_renders_text() {
        let notices = vec![
            Notice::error("File not found: #8 Resume.pdf"),
            Notice::warning("Project unavailable: ghost"),
        ];

        let backend = TestBackend::new(80, 2);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal
            .draw(|f| f.render_widget(NoticeStrip::new(&notices), f.area()))
            .unwrap();

        let content: String = terminal
            .backend()
            .buffer()
            .content
            .iter()
            .map(|c| c.symbol())
            .collect();
        assert!(content.contains("File not found: #8 Resume.pdf"));
        assert!(content.contains("Project unavailable: ghost"));
    }

    #[test]
    fn test_height_matches_notice_count() {
        let notices = vec![Notice::info("Saved Resume.pdf")];
        assert_eq!(NoticeStrip::new(&notices).height(), 1);
    }
}
