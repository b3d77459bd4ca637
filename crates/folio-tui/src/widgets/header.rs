//! Header widget: site title and section tabs

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{Tabs, Widget},
};

use folio_app::state::Section;

use crate::theme::{palette, styles};
use crate::widgets::truncate_width;

/// Main header showing the site name and the section tab bar
pub struct SiteHeader<'a> {
    site_name: &'a str,
    active: Section,
}

impl<'a> SiteHeader<'a> {
    pub fn new(site_name: &'a str, active: Section) -> Self {
        Self { site_name, active }
    }

    fn tab_titles() -> Vec<Line<'static>> {
        Section::ALL
            .iter()
            .map(|s| Line::from(format!(" {} ", s.title())))
            .collect()
    }
}

impl Widget for SiteHeader<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = styles::panel_block(false).style(Style::default().bg(palette::CARD_BG));
        let inner = block.inner(area);
        block.render(area, buf);

        if inner.height == 0 || inner.width == 0 {
            return;
        }

        // Left: site name
        let name = truncate_width(self.site_name, (inner.width / 3).max(8) as usize);
        let name_line = Line::from(vec![
            Span::raw(" "),
            Span::styled(name, styles::accent_bold()),
        ]);
        let name_width = name_line.width() as u16;
        buf.set_line(inner.x, inner.y, &name_line, inner.width);

        // Right of the name: section tabs
        let tabs_x = inner.x + name_width + 2;
        if tabs_x < inner.x + inner.width {
            let tabs_area = Rect {
                x: tabs_x,
                y: inner.y,
                width: inner.width.saturating_sub(name_width + 2),
                height: 1,
            };
            Tabs::new(Self::tab_titles())
                .select(self.active.index())
                .style(styles::text_secondary())
                .highlight_style(styles::focused_selected())
                .divider("│")
                .render(tabs_area, buf);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::{backend::TestBackend, Terminal};

    fn buffer_content(terminal: &Terminal<TestBackend>) -> String {
        terminal
            .backend()
            .buffer()
            .content
            .iter()
            .map(|c| c.symbol())
            .collect()
    }

    #[test]
    fn test_header_renders_site_name_and_tabs() {
        let backend = TestBackend::new(100, 3);
        let mut terminal = Terminal::new(backend).unwrap();

        terminal
            .draw(|f| {
                let header = SiteHeader::new("Mischa Nelson", Section::Home);
                f.render_widget(header, f.area());
            })
            .unwrap();

        let content = buffer_content(&terminal);
        assert!(content.contains("Mischa Nelson"));
        assert!(content.contains("Home"));
        assert!(content.contains("Projects"));
        assert!(content.contains("Skills"));
    }

    #[test]
    fn test_header_narrow_terminal_does_not_panic() {
        let backend = TestBackend::new(20, 3);
        let mut terminal = Terminal::new(backend).unwrap();

        terminal
            .draw(|f| {
                let header = SiteHeader::new("Mischa Nelson", Section::Certifications);
                f.render_widget(header, f.area());
            })
            .unwrap();
    }
}
