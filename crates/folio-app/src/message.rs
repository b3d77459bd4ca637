//! Message types for the application (TEA pattern)

use crate::input_key::InputKey;
use crate::router::AffordanceId;
use crate::state::Section;

/// All possible messages/actions in the application
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Message {
    /// Keyboard event from terminal
    Key(InputKey),

    /// Request to quit
    Quit,

    // ─────────────────────────────────────────────────────────
    // Navigation Messages
    // ─────────────────────────────────────────────────────────
    /// Select a top-level section (tab)
    GoToSection(Section),

    /// An affordance from the current render pass was activated
    Activate(AffordanceId),

    // ─────────────────────────────────────────────────────────
    // Viewport Messages
    // ─────────────────────────────────────────────────────────
    /// Move the affordance cursor up
    CursorUp,
    /// Move the affordance cursor down
    CursorDown,
    /// Scroll the section body up one line
    ScrollUp,
    /// Scroll the section body down one line
    ScrollDown,
    /// Reset scroll to the top of the section body
    ScrollToTop,

    // ─────────────────────────────────────────────────────────
    // Save Completion
    // ─────────────────────────────────────────────────────────
    /// A document copy finished (ok or with an error message)
    SaveCompleted {
        file_name: String,
        error: Option<String>,
    },
}
