//! Application error types with rich context

use thiserror::Error;

/// Result type alias using our Error type
pub type Result<T> = std::result::Result<T, Error>;

/// Application error types organized by layer/domain
#[derive(Debug, Error)]
pub enum Error {
    // ─────────────────────────────────────────────────────────────
    // Common/Infrastructure Errors
    // ─────────────────────────────────────────────────────────────
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),

    // ─────────────────────────────────────────────────────────────
    // Terminal/TUI Errors
    // ─────────────────────────────────────────────────────────────
    #[error("Terminal error: {message}")]
    Terminal { message: String },

    // ─────────────────────────────────────────────────────────────
    // Catalog Errors
    // ─────────────────────────────────────────────────────────────
    #[error("No catalog entry for id: {id}")]
    CatalogMiss { id: String },

    #[error("Duplicate catalog id: {id}")]
    DuplicateCatalogId { id: String },

    // ─────────────────────────────────────────────────────────────
    // Resource Errors
    // ─────────────────────────────────────────────────────────────
    #[error("Resource not found in any search root: {name}")]
    ResourceNotFound { name: String },

    // ─────────────────────────────────────────────────────────────
    // Configuration Errors
    // ─────────────────────────────────────────────────────────────
    #[error("Configuration error: {message}")]
    Config { message: String },

    #[error("Invalid configuration: {message}")]
    ConfigInvalid { message: String },
}

// ─────────────────────────────────────────────────────────────────
// Convenience Constructors
// ─────────────────────────────────────────────────────────────────

impl Error {
    pub fn terminal(message: impl Into<String>) -> Self {
        Self::Terminal {
            message: message.into(),
        }
    }

    pub fn catalog_miss(id: impl Into<String>) -> Self {
        Self::CatalogMiss { id: id.into() }
    }

    pub fn duplicate_catalog_id(id: impl Into<String>) -> Self {
        Self::DuplicateCatalogId { id: id.into() }
    }

    pub fn resource_not_found(name: impl Into<String>) -> Self {
        Self::ResourceNotFound { name: name.into() }
    }

    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    pub fn config_invalid(message: impl Into<String>) -> Self {
        Self::ConfigInvalid {
            message: message.into(),
        }
    }

    /// Check if this is a recoverable error.
    ///
    /// Recoverable errors surface as inline notices next to the content
    /// they affect; the rest of the page continues to render.
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self,
            Error::CatalogMiss { .. } | Error::ResourceNotFound { .. } | Error::Config { .. }
        )
    }

    /// Check if this error should abort startup.
    ///
    /// A duplicate catalog id would make lookups ambiguous at render time,
    /// so construction fails immediately instead.
    pub fn is_fatal(&self) -> bool {
        matches!(
            self,
            Error::DuplicateCatalogId { .. } | Error::ConfigInvalid { .. }
        )
    }
}

// ─────────────────────────────────────────────────────────────────
// Error Context Extensions
// ─────────────────────────────────────────────────────────────────

/// Extension trait for adding context to Results
pub trait ResultExt<T> {
    /// Add context to an error
    fn context(self, context: impl Into<String>) -> Result<T>;

    /// Add context with a closure (lazy evaluation)
    fn with_context<F>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> String;
}

impl<T, E: Into<Error>> ResultExt<T> for std::result::Result<T, E> {
    fn context(self, context: impl Into<String>) -> Result<T> {
        self.map_err(|e| {
            let err = e.into();
            tracing::error!("{}: {:?}", context.into(), err);
            err
        })
    }

    fn with_context<F>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> String,
    {
        self.map_err(|e| {
            let err = e.into();
            tracing::error!("{}: {:?}", f(), err);
            err
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display_messages() {
        let err = Error::catalog_miss("ghost_project");
        assert_eq!(err.to_string(), "No catalog entry for id: ghost_project");

        let err = Error::resource_not_found("kali closed.jpg");
        assert!(err.to_string().contains("kali closed.jpg"));
    }

    #[test]
    fn test_error_from_io() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: Error = io_err.into();
        assert!(matches!(err, Error::Io(_)));
    }

    #[test]
    fn test_error_is_fatal() {
        assert!(Error::duplicate_catalog_id("cyberdeck").is_fatal());
        assert!(Error::config_invalid("bad assets.dir_name").is_fatal());
        assert!(!Error::catalog_miss("cyberdeck").is_fatal());
        assert!(!Error::resource_not_found("x.pdf").is_fatal());
    }

    #[test]
    fn test_error_is_recoverable() {
        assert!(Error::catalog_miss("cyberdeck").is_recoverable());
        assert!(Error::resource_not_found("x.pdf").is_recoverable());
        assert!(Error::config("missing folio.toml").is_recoverable());
        assert!(!Error::duplicate_catalog_id("cyberdeck").is_recoverable());
    }

    #[test]
    fn test_error_constructors() {
        let _ = Error::terminal("test");
        let _ = Error::catalog_miss("test");
        let _ = Error::duplicate_catalog_id("test");
        let _ = Error::resource_not_found("test");
        let _ = Error::config("test");
        let _ = Error::config_invalid("test");
    }
}
