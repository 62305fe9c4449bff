//! Error types for the Zatalog plugin.
//!
//! This module defines the centralized error type [`ZatalogError`] and a type alias
//! [`Result`] used throughout the plugin. All errors are implemented with the
//! `thiserror` crate.

use thiserror::Error;

/// The main error type for Zatalog operations.
///
/// Feed failures (`Http`, `Decode`) never abort the plugin: the event handler
/// records them on the product store so the UI can tell a failed load apart
/// from a search that matched nothing.
///
/// # Examples
///
/// ```
/// use zatalog::ZatalogError;
///
/// let err = ZatalogError::Http { status: 503 };
/// assert_eq!(err.to_string(), "Feed request failed with HTTP status 503");
/// ```
#[derive(Debug, Error)]
pub enum ZatalogError {
    /// The feed endpoint answered with a non-success status.
    ///
    /// Zellij also reports transport failures (DNS, refused connections) as
    /// a non-success status, so this variant covers both.
    #[error("Feed request failed with HTTP status {status}")]
    Http {
        /// Status code reported by the host.
        status: u16,
    },

    /// The feed body could not be turned into a product list.
    ///
    /// Raised when the body is not JSON or its top level is not an array.
    /// Individual malformed records do not raise this; they are skipped.
    #[error("Feed decode error: {0}")]
    Decode(String),

    /// Filesystem or I/O operation failed.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Theme file could not be read or parsed.
    #[error("Theme error: {0}")]
    Theme(String),

    /// Configuration is invalid.
    #[error("Configuration error: {0}")]
    Config(String),
}

/// A specialized `Result` type for Zatalog operations.
pub type Result<T> = std::result::Result<T, ZatalogError>;
