//! Structured logging to a rotating JSON file.
//!
//! # Architecture
//!
//! ```text
//! tracing macros → EnvFilter → fmt JSON layer → FileWriter → /data/zatalog.log
//! ```
//!
//! # Features
//!
//! - **JSON Lines**: One object per event with level, target, fields, and span
//! - **Automatic Rotation**: Files rotate at 5MB with 3-backup retention
//! - **Level Filtering**: `trace_level` config option, default `"info"`
//!
//! # Usage
//!
//! Initialize tracing early in plugin lifecycle:
//!
//! ```rust,no_run
//! use zatalog::observability::init_tracing;
//! use zatalog::Config;
//!
//! let config = Config::default();
//! init_tracing(&config);
//!
//! tracing::debug!("plugin initialized");
//! ```
//!
//! # Modules
//!
//! - [`init`]: Tracing initialization and subscriber setup
//! - [`file_writer`]: Rotating file writer with size-based rotation

mod file_writer;
mod init;

pub use file_writer::{FileWriter, FileWriterHandle, MAX_BACKUP_FILES, MAX_FILE_SIZE_BYTES};
pub use init::{init_tracing, LOG_FILE_NAME};
