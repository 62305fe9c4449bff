//! Tracing initialization and subscriber setup.

use super::file_writer::FileWriter;
use crate::infrastructure::paths;
use crate::Config;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Name of the log file inside the plugin data directory.
pub const LOG_FILE_NAME: &str = "zatalog.log";

/// Level used when `trace_level` is not configured.
const DEFAULT_LEVEL: &str = "info";

/// Initializes the tracing subscriber with a JSON file layer.
///
/// Sets up a subscriber pipeline that:
/// 1. Filters spans and events by the configured trace level
/// 2. Formats each event as one JSON object per line
/// 3. Writes to a rotating file with backups
///
/// # File Location
///
/// Logs are written to `/data/zatalog.log`, the plugin's sandboxed data
/// directory.
///
/// # Initialization Behavior
///
/// - Creates the data directory if it doesn't exist
/// - Silently skips setup if directory creation fails (logging is optional)
/// - Idempotent: only the first call installs a subscriber
pub fn init_tracing(config: &Config) {
    let level = config.trace_level.as_deref().unwrap_or(DEFAULT_LEVEL);

    let data_dir = paths::data_dir();
    if std::fs::create_dir_all(&data_dir).is_err() {
        return;
    }

    let filter = EnvFilter::try_new(level).unwrap_or_else(|_| EnvFilter::new(DEFAULT_LEVEL));
    let writer = FileWriter::new(data_dir.join(LOG_FILE_NAME));

    let file_layer = fmt::layer()
        .json()
        .with_ansi(false)
        .with_current_span(true)
        .with_span_list(false)
        .with_writer(writer);

    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(file_layer)
        .try_init();
}
