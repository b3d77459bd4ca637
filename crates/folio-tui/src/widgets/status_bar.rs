//! Status bar widget: key hints, session notices, footer line

use chrono::Datelike;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::Widget,
};

use folio_app::router::Notice;
use folio_app::state::Section;

use crate::theme::styles;

/// Bottom bar: key hints for the current view, the latest session notice,
/// and a copyright footer
pub struct StatusBar<'a> {
    section: Section,
    in_detail: bool,
    notices: &'a [Notice],
    site_name: &'a str,
}

impl<'a> StatusBar<'a> {
    pub fn new(
        section: Section,
        in_detail: bool,
        notices: &'a [Notice],
        site_name: &'a str,
    ) -> Self {
        Self {
            section,
            in_detail,
            notices,
            site_name,
        }
    }

    fn hint_spans(&self) -> Vec<Span<'static>> {
        let mut hints: Vec<(&str, &str)> = vec![("Tab", "Section")];
        if self.in_detail {
            hints.push(("Esc", "Back"));
        } else if self.section == Section::Projects {
            hints.push(("↑↓", "Select"));
            hints.push(("Enter", "Open"));
        } else {
            hints.push(("↑↓", "Select"));
            hints.push(("Enter", "Activate"));
        }
        if self.section == Section::Home {
            hints.push(("f", "Featured"));
        }
        hints.push(("PgUp/PgDn", "Scroll"));
        hints.push(("q", "Quit"));

        let mut spans = Vec::new();
        for (key, label) in hints {
            spans.push(Span::styled("[", styles::text_muted()));
            spans.push(Span::styled(key.to_string(), styles::accent()));
            spans.push(Span::styled(format!("] {label}  "), styles::text_muted()));
        }
        spans
    }
}

impl Widget for StatusBar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.height == 0 {
            return;
        }

        // Row 1: key hints, then the most recent session notice
        let mut spans = self.hint_spans();
        if let Some(notice) = self.notices.last() {
            spans.push(Span::styled(
                notice.text.clone(),
                styles::notice_style(notice.severity),
            ));
        }
        buf.set_line(area.x + 1, area.y, &Line::from(spans), area.width);

        // Row 2: footer
        if area.height >= 2 {
            let year = chrono::Local::now().year();
            let footer = Line::from(Span::styled(
                format!("© {year} {} · Built with Rust and ratatui", self.site_name),
                styles::text_muted(),
            ));
            buf.set_line(area.x + 1, area.y + 1, &footer, area.width);
        }
    }
}
