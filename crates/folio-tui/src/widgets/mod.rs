//! Widgets for the portfolio TUI
//!
//! Each section widget consumes the payload of a
//! [`RenderPass`](folio_app::RenderPass) plus the cursor position and
//! builds styled lines; none of them mutate application state.

pub mod cert_portfolio;
pub mod header;
pub mod home;
pub mod notices;
pub mod project_detail;
pub mod project_list;
pub mod skills;
pub mod status_bar;

pub use cert_portfolio::CertPortfolioWidget;
pub use header::SiteHeader;
pub use home::HomeWidget;
pub use notices::NoticeStrip;
pub use project_detail::ProjectDetailWidget;
pub use project_list::ProjectListWidget;
pub use skills::SkillsWidget;
pub use status_bar::StatusBar;

use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::text::{Line, Span, Text};
use ratatui::widgets::{Paragraph, Widget, Wrap};
use unicode_width::UnicodeWidthStr;

use folio_app::router::{AffordanceId, RenderPass};

use crate::theme::styles;

/// Position of an affordance id within the pass's affordance list.
///
/// Widgets use this to decide whether the element they are drawing is the
/// one under the cursor, without assuming anything about emission order.
pub fn affordance_index(pass: &RenderPass, id: &AffordanceId) -> Option<usize> {
    pass.affordances.iter().position(|a| &a.id == id)
}

/// Render pre-built lines as a wrapped, scrollable paragraph
pub(crate) fn render_lines(lines: Vec<Line<'static>>, scroll: u16, area: Rect, buf: &mut Buffer) {
    Paragraph::new(Text::from(lines))
        .wrap(Wrap { trim: false })
        .scroll((scroll, 0))
        .render(area, buf);
}

/// A bracketed affordance label, highlighted when under the cursor
pub(crate) fn affordance_line(label: &str, selected: bool) -> Line<'static> {
    if selected {
        Line::from(Span::styled(
            format!("▸ [ {label} ]"),
            styles::focused_selected(),
        ))
    } else {
        Line::from(Span::styled(format!("  [ {label} ]"), styles::accent()))
    }
}

/// A muted horizontal separator, like the authored "---" dividers
pub(crate) fn separator() -> Line<'static> {
    Line::from(Span::styled("─".repeat(40), styles::text_muted()))
}

/// Truncate a string to a maximum display width, adding an ellipsis
pub fn truncate_width(s: &str, max_width: usize) -> String {
    if s.width() <= max_width {
        return s.to_string();
    }
    if max_width <= 1 {
        return "…".to_string();
    }
    let mut out = String::new();
    for c in s.chars() {
        if out.width() + 1 >= max_width {
            break;
        }
        out.push(c);
    }
    out.push('…');
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate_width_short() {
        assert_eq!(truncate_width("Short", 10), "Short");
    }

    #[test]
    fn test_truncate_width_long() {
        assert_eq!(truncate_width("Cyberdeck (Kali Linux)", 10), "Cyberdeck…");
    }

    #[test]
    fn test_truncate_width_tiny() {
        assert_eq!(truncate_width("AB", 1), "…");
    }

    #[test]
    fn test_truncate_width_wide_chars() {
        // Full-width characters count double.
        let truncated = truncate_width("日本語テスト", 5);
        assert!(truncated.width() <= 5);
        assert!(truncated.ends_with('…'));
    }
}
