//! Key event handlers
//!
//! Translates abstract input keys into messages. Enter activates the
//! affordance under the cursor, which requires a routing pass; everything
//! else is a direct mapping.

use crate::input_key::InputKey;
use crate::message::Message;
use crate::router;
use crate::state::{AppState, Section};

/// Map a key press to a message for the current state
pub fn handle_key(state: &AppState, key: InputKey) -> Option<Message> {
    match key {
        InputKey::Char('q') | InputKey::CharCtrl('c') => Some(Message::Quit),

        // Direct section selection
        InputKey::Char('1') => Some(Message::GoToSection(Section::Home)),
        InputKey::Char('2') => Some(Message::GoToSection(Section::Projects)),
        InputKey::Char('3') => Some(Message::GoToSection(Section::Skills)),
        InputKey::Char('4') => Some(Message::GoToSection(Section::Certifications)),

        // Tab cycling
        InputKey::Tab => Some(Message::GoToSection(state.view.active_section.next())),
        InputKey::BackTab => Some(Message::GoToSection(state.view.active_section.prev())),

        // Featured-project shortcut
        InputKey::Char('f') => Some(Message::Activate(router::AffordanceId::OpenFeatured)),

        // Back out of a detail view
        InputKey::Esc | InputKey::Char('b') | InputKey::Left => {
            if state.view.in_project_detail() {
                Some(Message::Activate(router::AffordanceId::Back))
            } else {
                None
            }
        }

        // Affordance cursor
        InputKey::Up | InputKey::Char('k') => Some(Message::CursorUp),
        InputKey::Down | InputKey::Char('j') => Some(Message::CursorDown),

        // Body scroll
        InputKey::PageUp => Some(Message::ScrollUp),
        InputKey::PageDown => Some(Message::ScrollDown),
        InputKey::Home => Some(Message::ScrollToTop),

        // Activate the affordance under the cursor
        InputKey::Enter => {
            let pass = router::route(&state.view, &state.catalog, &state.context);
            pass.affordances
                .get(state.cursor)
                .map(|a| Message::Activate(a.id.clone()))
        }

        _ => None,
    }
}
