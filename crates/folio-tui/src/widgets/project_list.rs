//! Project list widget: status-grouped cards with select affordances

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::Widget,
};

use folio_app::router::{AffordanceId, ProjectListView, RenderPass};

use crate::theme::styles;
use crate::widgets::{affordance_index, render_lines, separator};

/// Grouped project list, one select affordance per entry
pub struct ProjectListWidget<'a> {
    view: &'a ProjectListView,
    pass: &'a RenderPass,
    cursor: usize,
    scroll: u16,
}

impl<'a> ProjectListWidget<'a> {
    pub fn new(view: &'a ProjectListView, pass: &'a RenderPass, cursor: usize, scroll: u16) -> Self {
        Self {
            view,
            pass,
            cursor,
            scroll,
        }
    }

    fn build_lines(&self) -> Vec<Line<'static>> {
        let mut lines = Vec::new();

        lines.push(Line::from(Span::styled("Projects", styles::accent_bold())));
        lines.push(Line::from(Span::styled(
            self.view.intro.clone(),
            styles::text_secondary(),
        )));
        lines.push(Line::default());

        for group in &self.view.groups {
            lines.push(separator());
            lines.push(Line::from(Span::styled(
                group.heading.clone(),
                styles::heading(),
            )));
            lines.push(Line::default());

            if group.cards.is_empty() {
                lines.push(Line::from(Span::styled(
                    "  (No projects currently planned)",
                    styles::text_muted(),
                )));
                lines.push(Line::default());
                continue;
            }

            for card in &group.cards {
                let id = AffordanceId::SelectProject(card.id.clone());
                let selected = affordance_index(self.pass, &id) == Some(self.cursor);
                let (icon, icon_style) = styles::status_indicator(card.status);

                let marker = if selected { "▸ " } else { "  " };
                let mut line = Line::default();
                line.push_span(Span::styled(marker.to_string(), styles::accent()));
                line.push_span(Span::styled(format!("{icon} "), icon_style));
                line.push_span(Span::styled(
                    card.title.clone(),
                    if selected {
                        styles::focused_selected()
                    } else {
                        styles::heading()
                    },
                ));
                line.push_span(Span::styled(
                    format!("  [{}]", card.status.label()),
                    icon_style,
                ));
                lines.push(line);

                lines.push(Line::from(Span::styled(
                    format!("    {}", card.summary),
                    styles::text_secondary(),
                )));
                lines.push(Line::default());
            }
        }

        lines
    }
}

impl Widget for ProjectListWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        render_lines(self.build_lines(), self.scroll, area, buf);
    }
}
