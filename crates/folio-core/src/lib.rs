//! # folio-core - Core Domain Types
//!
//! Foundation crate for folio. Provides the content catalog, resource
//! resolution, remote image fallback, error handling, and logging setup.
//!
//! This crate has **zero internal dependencies** -- it only depends on
//! external crates (serde, thiserror, tracing, url, percent-encoding).
//!
//! ## Public API
//!
//! ### Catalog (`catalog`)
//! - [`Catalog`] - Static, id-validated table behind every site section
//! - [`ProjectEntry`], [`ProjectStatus`], [`ContentFragment`] - Project data
//! - [`PortfolioDocItem`], [`CertificationEntry`] - Downloadable documents
//! - [`SkillCategory`], [`Skill`], [`SkillLevel`] - Skills grid data
//! - [`Profile`], [`ExternalLink`] - Owner bio and social links
//!
//! ### Resource Resolution (`resolver`)
//! - [`SearchRoots`] - Ordered candidate directories for asset lookup
//! - [`resolve()`] - First-existing-candidate resolution
//! - [`ResolvedResource`] - Found path or an explicit not-found marker
//!
//! ### Remote Fallback (`remote`)
//! - [`remote_image_url()`] - Percent-encoded fallback URL for an image
//!
//! ### Error Handling (`error`)
//! - [`Error`] - Custom error enum with `fatal` vs `recoverable` classification
//! - [`Result`] - Type alias for `std::result::Result<T, Error>`
//! - [`ResultExt`] - Extension trait for adding error context
//!
//! ## Prelude
//!
//! Import commonly used types with:
//! ```rust
//! use folio_core::prelude::*;
//! ```

pub mod catalog;
pub mod error;
pub mod logging;
pub mod remote;
pub mod resolver;

/// Prelude for common imports used throughout all folio crates
pub mod prelude {
    pub use super::error::{Error, Result, ResultExt};
    pub use tracing::{debug, error, info, instrument, trace, warn};
}

// Re-export commonly used types at crate root for convenience
pub use catalog::{
    Catalog, CertificationEntry, CertificationStatus, ContentFragment, ExternalLink,
    PortfolioDocItem, Profile, ProjectEntry, ProjectStatus, Skill, SkillCategory, SkillLevel,
};
pub use error::{Error, Result, ResultExt};
pub use remote::{remote_image_url, remote_image_url_from, REMOTE_IMAGE_BASE};
pub use resolver::{read_bytes, resolve, ResolvedResource, SearchRoots, DEFAULT_ASSET_DIR};
