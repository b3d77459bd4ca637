//! Semantic style builders for the portfolio theme.

use folio_app::router::NoticeSeverity;
use folio_core::catalog::{ProjectStatus, SkillLevel};
use ratatui::style::{Modifier, Style};
use ratatui::widgets::{Block, BorderType, Borders};

use super::palette;

// --- Text styles ---
pub fn text_primary() -> Style {
    Style::default().fg(palette::TEXT_PRIMARY)
}

pub fn text_secondary() -> Style {
    Style::default().fg(palette::TEXT_SECONDARY)
}

pub fn text_muted() -> Style {
    Style::default().fg(palette::TEXT_MUTED)
}

// --- Accent styles ---
pub fn accent() -> Style {
    Style::default().fg(palette::ACCENT)
}

pub fn accent_bold() -> Style {
    Style::default()
        .fg(palette::ACCENT)
        .add_modifier(Modifier::BOLD)
}

pub fn heading() -> Style {
    Style::default()
        .fg(palette::TEXT_PRIMARY)
        .add_modifier(Modifier::BOLD)
}

pub fn link() -> Style {
    Style::default()
        .fg(palette::LINK)
        .add_modifier(Modifier::UNDERLINED)
}

// --- Selection styles ---
/// "Black on Cyan" - used for the affordance under the cursor
pub fn focused_selected() -> Style {
    Style::default()
        .fg(palette::CONTRAST_FG)
        .bg(palette::ACCENT)
        .add_modifier(Modifier::BOLD)
}

// --- Status indicators ---
/// Icon and style for a project status tag
pub fn status_indicator(status: ProjectStatus) -> (&'static str, Style) {
    match status {
        ProjectStatus::Completed => ("●", Style::default().fg(palette::STATUS_COMPLETED)),
        ProjectStatus::InProgress => ("◐", Style::default().fg(palette::STATUS_IN_PROGRESS)),
        ProjectStatus::Planned => ("○", Style::default().fg(palette::STATUS_PLANNED)),
    }
}

/// Style for a skill level badge
pub fn level_style(level: SkillLevel) -> Style {
    let color = match level {
        SkillLevel::Advanced => palette::LEVEL_ADVANCED,
        SkillLevel::Intermediate => palette::LEVEL_INTERMEDIATE,
        SkillLevel::Beginner => palette::LEVEL_BEGINNER,
    };
    Style::default().fg(color)
}

/// Style for an inline notice
pub fn notice_style(severity: NoticeSeverity) -> Style {
    let color = match severity {
        NoticeSeverity::Error => palette::NOTICE_ERROR,
        NoticeSeverity::Warning => palette::NOTICE_WARNING,
        NoticeSeverity::Info => palette::NOTICE_INFO,
    };
    Style::default().fg(color)
}

// --- Block builders ---
/// Rounded panel block; focused panels get the active border color
pub fn panel_block(focused: bool) -> Block<'static> {
    let border_style = if focused {
        Style::default().fg(palette::BORDER_ACTIVE)
    } else {
        Style::default().fg(palette::BORDER_DIM)
    };
    Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(border_style)
}
