//! Skills section widget: categorized two-column grid with level badges

use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    text::{Line, Span},
    widgets::Widget,
};

use folio_app::router::SkillsView;
use folio_core::catalog::SkillCategory;

use crate::theme::styles;
use crate::widgets::render_lines;

/// Two-column skills grid; categories alternate between columns like the
/// authored layout
pub struct SkillsWidget<'a> {
    view: &'a SkillsView,
    scroll: u16,
}

impl<'a> SkillsWidget<'a> {
    pub fn new(view: &'a SkillsView, scroll: u16) -> Self {
        Self { view, scroll }
    }

    fn category_lines(category: &SkillCategory) -> Vec<Line<'static>> {
        let mut lines = Vec::new();
        lines.push(Line::from(Span::styled(
            category.name.clone(),
            styles::heading(),
        )));
        for skill in &category.skills {
            lines.push(Line::from(vec![
                Span::styled(format!("  {} ", skill.name), styles::text_primary()),
                Span::styled(
                    format!("[{}]", skill.level.label()),
                    styles::level_style(skill.level),
                ),
            ]));
        }
        lines.push(Line::default());
        lines
    }

    fn column_lines(&self, column: usize) -> Vec<Line<'static>> {
        let mut lines = vec![
            if column == 0 {
                Line::from(Span::styled("My Skills", styles::accent_bold()))
            } else {
                Line::default()
            },
            Line::default(),
        ];
        for (i, category) in self.view.categories.iter().enumerate() {
            if i % 2 == column {
                lines.extend(Self::category_lines(category));
            }
        }
        lines
    }
}

impl Widget for SkillsWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let columns =
            Layout::horizontal([Constraint::Percentage(50), Constraint::Percentage(50)])
                .split(area);
        render_lines(self.column_lines(0), self.scroll, columns[0], buf);
        render_lines(self.column_lines(1), self.scroll, columns[1], buf);
    }
}
