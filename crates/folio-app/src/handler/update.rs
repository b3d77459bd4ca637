//! Main update function - handles state transitions (TEA pattern)

use tracing::{info, warn};

use folio_core::resolver::{self, ResolvedResource};

use crate::message::Message;
use crate::router::{self, AffordanceId, Notice};
use crate::state::AppState;

use super::{keys::handle_key, UpdateAction, UpdateResult};

/// Process a message and update state
/// Returns optional follow-up message and/or action
pub fn update(state: &mut AppState, message: Message) -> UpdateResult {
    match message {
        Message::Quit => {
            state.request_quit();
            UpdateResult::none()
        }

        Message::Key(key) => {
            if let Some(msg) = handle_key(state, key) {
                UpdateResult::message(msg)
            } else {
                UpdateResult::none()
            }
        }

        Message::GoToSection(section) => {
            state.view.go_to_section(section);
            state.reset_viewport();
            UpdateResult::none()
        }

        Message::Activate(id) => handle_activate(state, id),

        // ─────────────────────────────────────────────────────────
        // Viewport Messages
        // ─────────────────────────────────────────────────────────
        Message::CursorUp => {
            state.cursor = state.cursor.saturating_sub(1);
            UpdateResult::none()
        }
        Message::CursorDown => {
            let len = router::route(&state.view, &state.catalog, &state.context)
                .affordances
                .len();
            state.cursor = (state.cursor + 1).min(len.saturating_sub(1));
            UpdateResult::none()
        }
        Message::ScrollUp => {
            state.scroll = state.scroll.saturating_sub(1);
            UpdateResult::none()
        }
        Message::ScrollDown => {
            state.scroll = state.scroll.saturating_add(1);
            UpdateResult::none()
        }
        Message::ScrollToTop => {
            state.scroll = 0;
            UpdateResult::none()
        }

        Message::SaveCompleted { file_name, error } => {
            match error {
                Some(error) => {
                    warn!("save failed for {:?}: {}", file_name, error);
                    state.push_session_notice(Notice::error(format!(
                        "Failed to save {file_name}: {error}"
                    )));
                }
                None => {
                    info!("saved document {:?}", file_name);
                    state.push_session_notice(Notice::info(format!("Saved {file_name}")));
                }
            }
            UpdateResult::none()
        }
    }
}

/// Handle an activated affordance from the current render pass
fn handle_activate(state: &mut AppState, id: AffordanceId) -> UpdateResult {
    match id {
        AffordanceId::SelectProject(project_id) => {
            if state.catalog.lookup_project(&project_id).is_some() {
                state.view.select_project(project_id);
                state.reset_viewport();
            } else {
                // Stale or bogus id: reset to the nearest stable parent
                // state and surface a non-fatal notice.
                warn!("activated project id not in catalog: {:?}", project_id);
                state.view.back();
                state.reset_viewport();
                state.push_session_notice(Notice::warning(format!(
                    "Project unavailable: {project_id}"
                )));
            }
            UpdateResult::none()
        }

        AffordanceId::OpenFeatured => {
            if let Some(featured) = state.catalog.featured_project() {
                let id = featured.id.clone();
                state.view.select_project(id);
                state.reset_viewport();
            }
            UpdateResult::none()
        }

        AffordanceId::Back => {
            state.view.back();
            state.reset_viewport();
            UpdateResult::none()
        }

        AffordanceId::SaveDoc(doc_id) => {
            let Some(doc) = state.catalog.lookup_doc(&doc_id) else {
                warn!("activated doc id not in catalog: {:?}", doc_id);
                state.push_session_notice(Notice::warning(format!(
                    "Document unavailable: {doc_id}"
                )));
                return UpdateResult::none();
            };
            let source = doc.source_filename.clone();
            let display = doc.display_filename.clone();
            save_action(state, &source, &display)
        }

        AffordanceId::SaveCertification(cert_id) => {
            let Some(cert) = state.catalog.lookup_certification(&cert_id) else {
                warn!("activated certification id not in catalog: {:?}", cert_id);
                state.push_session_notice(Notice::warning(format!(
                    "Certification unavailable: {cert_id}"
                )));
                return UpdateResult::none();
            };
            match (cert.source_filename.clone(), cert.display_filename.clone()) {
                (Some(source), Some(display)) => save_action(state, &source, &display),
                _ => UpdateResult::none(),
            }
        }

        AffordanceId::SaveProjectFile { logical_name, .. } => {
            let display = logical_name.clone();
            save_action(state, &logical_name, &display)
        }
    }
}

/// Resolve a document and hand the byte copy to the event loop
fn save_action(state: &mut AppState, source_filename: &str, display_filename: &str) -> UpdateResult {
    match resolver::resolve(source_filename, &state.context.roots) {
        ResolvedResource::Found { path } => UpdateResult::action(UpdateAction::SaveDocument {
            source: path,
            file_name: display_filename.to_string(),
        }),
        ResolvedResource::NotFound => {
            state.push_session_notice(Notice::error(format!(
                "File not found: {source_filename}"
            )));
            UpdateResult::none()
        }
    }
}
