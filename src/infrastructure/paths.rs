//! Path utilities for the Zellij sandbox environment.

use std::path::PathBuf;

/// Mount point of the plugin's private data directory.
const DATA_DIR: &str = "/data";

/// Mount point of the host filesystem.
const HOST_PREFIX: &str = "/host";

/// Returns the plugin data directory, where the log file lives.
#[must_use]
pub fn data_dir() -> PathBuf {
    PathBuf::from(DATA_DIR)
}

/// Expands tilde paths to use the `/host` prefix for Zellij sandbox.
///
/// In the Zellij sandbox environment, the host's home directory (`~`) maps to `/host`.
///
/// # Examples
///
/// ```
/// use zatalog::infrastructure::expand_tilde;
///
/// assert_eq!(expand_tilde("~/themes/dark.toml"), "/host/themes/dark.toml");
/// assert_eq!(expand_tilde("~"), "/host");
/// assert_eq!(expand_tilde("/absolute/path"), "/absolute/path");
/// ```
#[must_use]
pub fn expand_tilde(path: &str) -> String {
    if path.starts_with("~/") {
        path.replacen('~', HOST_PREFIX, 1)
    } else if path == "~" {
        HOST_PREFIX.to_string()
    } else {
        path.to_string()
    }
}

/// Removes the `/host` prefix from sandbox paths for log and error messages.
///
/// # Examples
///
/// ```
/// use zatalog::infrastructure::strip_host_prefix;
///
/// assert_eq!(strip_host_prefix("/host/themes/dark.toml"), "/themes/dark.toml");
/// assert_eq!(strip_host_prefix("/absolute/path"), "/absolute/path");
/// assert_eq!(strip_host_prefix("/hostname/x"), "/hostname/x");
/// ```
#[must_use]
pub fn strip_host_prefix(path: &str) -> String {
    match path.strip_prefix(HOST_PREFIX) {
        Some("") => "/".to_string(),
        Some(rest) if rest.starts_with('/') => rest.to_string(),
        _ => path.to_string(),
    }
}
