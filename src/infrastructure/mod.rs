//! Infrastructure layer for filesystem and environment interactions.
//!
//! Zellij runs the plugin in a WASI sandbox: the plugin's private data
//! directory is mounted at `/data` and the host filesystem is reachable
//! under `/host`.

pub mod paths;

pub use paths::{data_dir, expand_tilde, strip_host_prefix};
