//! Screen layout definitions for the TUI

use ratatui::layout::{Constraint, Layout, Rect};

/// Screen areas for the main layout
#[derive(Debug, Clone, Copy)]
pub struct ScreenAreas {
    /// Header area (site title + section tabs)
    pub header: Rect,

    /// Section body area
    pub body: Rect,

    /// Status bar area (key hints, session notices, footer line)
    pub status: Rect,
}

/// Create the main screen layout
///
/// # Arguments
/// * `area` - Total screen area
pub fn create(area: Rect) -> ScreenAreas {
    // Layout: bordered header, body (remaining), two status rows
    let constraints = vec![
        Constraint::Length(3), // Header (top border + title/tabs row + bottom border)
        Constraint::Min(3),    // Body
        Constraint::Length(2), // Status bar + footer
    ];

    let chunks = Layout::vertical(constraints).split(area);

    ScreenAreas {
        header: chunks[0],
        body: chunks[1],
        status: chunks[2],
    }
}
