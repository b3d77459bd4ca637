//! folio-app - Application state and navigation for folio
//!
//! This crate implements the TEA (The Elm Architecture) pattern for state
//! management: a [`Message`] enum, an [`update`] function over [`AppState`],
//! and a [`router`] that resolves navigation state to renderable content.
//! It also owns the authored site content and configuration loading.

pub mod config;
pub mod content;
pub mod handler;
pub mod input_key;
pub mod message;
pub mod router;
pub mod state;

// Re-export primary types
pub use config::{load_settings, Settings};
pub use content::site_catalog;
pub use handler::{update, UpdateAction, UpdateResult};
pub use input_key::InputKey;
pub use message::Message;
pub use router::{route, Affordance, AffordanceId, ContentPayload, Notice, RenderPass};
pub use state::{AppState, Section, SiteContext, ViewState};
