//! Handler module - TEA update function and event handlers
//!
//! Organized into submodules:
//! - `update`: Main update() function and message dispatch
//! - `keys`: Key event handlers per section/view

pub(crate) mod keys;
pub(crate) mod update;


use std::path::PathBuf;

use crate::message::Message;

// Re-export main entry point
pub use update::update;

/// Actions that the event loop should perform after update
///
/// The update function never does I/O beyond the resolver's existence
/// checks; byte copies happen in the event loop and report back with
/// [`Message::SaveCompleted`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UpdateAction {
    /// Copy a resolved document to the save directory
    SaveDocument {
        /// Resolved on-disk source
        source: PathBuf,
        /// Filename offered to the user (cleaned display name)
        file_name: String,
    },
}

/// Result of processing a message
#[derive(Debug, Default, PartialEq, Eq)]
pub struct UpdateResult {
    /// Optional follow-up message to process
    pub message: Option<Message>,
    /// Optional action for the event loop to perform
    pub action: Option<UpdateAction>,
}

impl UpdateResult {
    pub fn none() -> Self {
        Self::default()
    }

    pub fn message(msg: Message) -> Self {
        Self {
            message: Some(msg),
            action: None,
        }
    }

    pub fn action(action: UpdateAction) -> Self {
        Self {
            message: None,
            action: Some(action),
        }
    }
}
