//! Main TUI runner - entry point and event loop

use std::collections::VecDeque;

use folio_app::handler::{update, UpdateAction};
use folio_app::message::Message;
use folio_app::state::AppState;
use folio_core::prelude::*;

use crate::{event, render, terminal};

/// Run the TUI until the user quits
pub fn run(state: &mut AppState) -> Result<()> {
    terminal::install_panic_hook();
    let mut term = ratatui::init();
    let result = run_loop(&mut term, state);
    ratatui::restore();
    result
}

/// Main event loop: draw, poll, update
fn run_loop(terminal: &mut ratatui::DefaultTerminal, state: &mut AppState) -> Result<()> {
    while !state.should_quit() {
        terminal.draw(|frame| render::view(frame, state))?;

        if let Some(message) = event::poll()? {
            process_message(state, message);
        }
    }
    Ok(())
}

/// Run a message and any follow-ups/actions it produces to completion
pub fn process_message(state: &mut AppState, message: Message) {
    let mut queue = VecDeque::from([message]);
    while let Some(message) = queue.pop_front() {
        let result = update(state, message);
        if let Some(follow_up) = result.message {
            queue.push_back(follow_up);
        }
        if let Some(action) = result.action {
            queue.push_back(handle_action(state, action));
        }
    }
}

/// Perform a side-effecting action and report its outcome as a message
fn handle_action(state: &AppState, action: UpdateAction) -> Message {
    match action {
        UpdateAction::SaveDocument { source, file_name } => {
            let dest_dir = state.settings.save_dir();
            let dest = dest_dir.join(&file_name);
            let copied = std::fs::create_dir_all(&dest_dir)
                .and_then(|_| std::fs::copy(&source, &dest));
            match copied {
                Ok(_) => {
                    info!("saved {} to {}", source.display(), dest.display());
                    Message::SaveCompleted {
                        file_name,
                        error: None,
                    }
                }
                Err(e) => {
                    warn!("failed to save {}: {}", source.display(), e);
                    Message::SaveCompleted {
                        file_name,
                        error: Some(e.to_string()),
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use folio_app::config::{OutputSettings, Settings};
    use folio_app::content;
    use folio_app::router::AffordanceId;
    use folio_app::state::SiteContext;
    use folio_core::resolver::SearchRoots;
    use tempfile::TempDir;

    #[test]
    fn test_save_flow_copies_document_and_notices() {
        let assets = TempDir::new().unwrap();
        let out = TempDir::new().unwrap();
        std::fs::write(assets.path().join("#8 Resume.pdf"), b"%PDF-1.4 resume").unwrap();

        let catalog = content::site_catalog().unwrap();
        let ctx = SiteContext::new(SearchRoots::from_roots(vec![assets.path().to_path_buf()]));
        let settings = Settings {
            output: OutputSettings {
                save_dir: Some(out.path().to_path_buf()),
            },
            ..Settings::default()
        };
        let mut state = AppState::new(catalog, ctx, settings);

        process_message(
            &mut state,
            Message::Activate(AffordanceId::SaveDoc("resume".to_string())),
        );

        // Copied under the cleaned display filename.
        let saved = out.path().join("Resume.pdf");
        assert_eq!(std::fs::read(saved).unwrap(), b"%PDF-1.4 resume");
        assert!(state
            .session_notices
            .iter()
            .any(|n| n.text == "Saved Resume.pdf"));
    }

    #[test]
    fn test_save_flow_missing_source_notices_without_copy() {
        let assets = TempDir::new().unwrap();
        let out = TempDir::new().unwrap();

        let catalog = content::site_catalog().unwrap();
        let ctx = SiteContext::new(SearchRoots::from_roots(vec![assets.path().to_path_buf()]));
        let settings = Settings {
            output: OutputSettings {
                save_dir: Some(out.path().to_path_buf()),
            },
            ..Settings::default()
        };
        let mut state = AppState::new(catalog, ctx, settings);

        process_message(
            &mut state,
            Message::Activate(AffordanceId::SaveDoc("resume".to_string())),
        );

        assert!(!out.path().join("Resume.pdf").exists());
        assert!(state
            .session_notices
            .iter()
            .any(|n| n.text == "File not found: #8 Resume.pdf"));
    }
}
