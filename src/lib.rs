//! Zatalog: a Zellij plugin for browsing a remote product catalog.
//!
//! Zatalog fetches a JSON array of products once, then lets the user:
//! - Search names and descriptions with a debounced, case-insensitive query
//! - Cycle a stable price sort through none → ascending → descending
//! - Switch between a card grid and a list
//! - See the count and average price of whatever is currently shown
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────┐
//! │  Zellij Plugin Shim (main.rs)                       │  ← Entry point
//! └─────────────────────────────────────────────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Application Layer (app/)                           │  ← State machine
//! │  - Event handling, debouncing                       │
//! │  - Action dispatching                               │
//! │  - View model computation                           │
//! └─────────────────────────────────────────────────────┘
//!         │                    │                    │
//! ┌───────────────┐   ┌───────────────┐   ┌───────────────┐
//! │ UI Layer      │   │ Catalog Layer │   │ Feed Layer    │
//! │ (ui/)         │   │ (catalog/)    │   │ (feed/)       │
//! │ - Rendering   │   │ - Store       │   │ - Requests    │
//! │ - Theming     │   │ - Filter/sort │   │ - Decoding    │
//! │ - Components  │   │ - Statistics  │   │ - Validation  │
//! └───────────────┘   └───────────────┘   └───────────────┘
//!         │                    │                    │
//! ┌─────────────────────────────────────────────────────┐
//! │  Infrastructure & Domain Layers                     │
//! │  - Sandbox paths (infrastructure/)                  │
//! │  - Error types, Product model (domain/)             │
//! └─────────────────────────────────────────────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Observability (observability/)                     │
//! │  - JSON logs to a rotating file                     │
//! └─────────────────────────────────────────────────────┘
//! ```
//!
//! # Configuration
//!
//! ```kdl
//! pane {
//!     plugin location="file:/path/to/zatalog.wasm" {
//!         feed_url "https://example.com/products.json"
//!         debounce_ms "300"
//!         default_view "list"
//!         theme "catppuccin-mocha"
//!         trace_level "info"
//!     }
//! }
//! ```
//!
//! # Initialization Flow
//!
//! 1. Parse configuration, initialize tracing, build `AppState`
//! 2. Request `WebAccess` permission
//! 3. On grant, `Event::Start` issues the feed request
//! 4. `WebRequestResult` becomes `Event::FeedResponse`, which loads the store
//!
//! # Example
//!
//! ```rust
//! use zatalog::{handle_event, initialize, Action, Config, Event};
//!
//! let mut state = initialize(&Config::default());
//! let (_, actions) = handle_event(&mut state, &Event::Start)?;
//! assert!(matches!(actions.as_slice(), [Action::FetchFeed(_)]));
//! # Ok::<(), zatalog::ZatalogError>(())
//! ```

#![allow(clippy::multiple_crate_versions)]

pub mod app;
pub mod catalog;
pub mod domain;
pub mod feed;
pub mod infrastructure;
pub mod observability;
pub mod ui;

pub use app::{handle_event, Action, AppState, Event, InputMode, ViewMode};
pub use catalog::SortMode;
pub use domain::{Product, ProductId, Result, ZatalogError};
pub use ui::Theme;

use app::debounce::DEFAULT_QUIET_PERIOD;
use infrastructure::{expand_tilde, strip_host_prefix};
use std::collections::BTreeMap;
use std::time::Duration;

/// Product feed used when `feed_url` is not configured.
pub const DEFAULT_FEED_URL: &str = "https://gist.githubusercontent.com/biswajitch/1ee5579ebb718236f344148cdf008fab/raw/b84cfb813202fab96ae7ab719023c030d02c5bf1/products.json";

/// Plugin configuration parsed from Zellij's configuration system.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Absolute http(s) URL of the product feed.
    pub feed_url: String,

    /// Quiet period before a typed query takes effect. Default: 300ms
    pub debounce: Duration,

    /// Presentation on startup. Default: cards
    pub default_view: ViewMode,

    /// Built-in theme name to use.
    ///
    /// Options: `catppuccin-mocha`, `catppuccin-latte`, `gruvbox-dark`.
    /// Ignored if `theme_file` is set.
    pub theme_name: Option<String>,

    /// Path to a custom TOML theme file. `~` refers to the host home.
    ///
    /// Takes precedence over `theme_name`. See [`ui::theme`] for format.
    pub theme_file: Option<String>,

    /// Log level filter, e.g. `debug` or `zatalog=trace`. Default: `"info"`
    pub trace_level: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            feed_url: DEFAULT_FEED_URL.to_string(),
            debounce: DEFAULT_QUIET_PERIOD,
            default_view: ViewMode::Card,
            theme_name: None,
            theme_file: None,
            trace_level: None,
        }
    }
}

impl Config {
    /// Parses configuration from Zellij's configuration map.
    ///
    /// # Parsing Rules
    ///
    /// - `feed_url`: trimmed string
    /// - `debounce_ms`: integer milliseconds (falls back to 300 on parse error)
    /// - `default_view`: `card` or `list` (falls back to `card`)
    /// - `theme`, `theme_file`, `trace_level`: passed through
    ///
    /// # Example
    ///
    /// ```rust
    /// use std::collections::BTreeMap;
    /// use std::time::Duration;
    /// use zatalog::{Config, ViewMode};
    ///
    /// let mut map = BTreeMap::new();
    /// map.insert("debounce_ms".to_string(), "150".to_string());
    /// map.insert("default_view".to_string(), "list".to_string());
    ///
    /// let config = Config::from_zellij(&map);
    /// assert_eq!(config.debounce, Duration::from_millis(150));
    /// assert_eq!(config.default_view, ViewMode::List);
    /// ```
    #[must_use]
    pub fn from_zellij(config: &BTreeMap<String, String>) -> Self {
        let feed_url = config
            .get("feed_url")
            .map_or_else(|| DEFAULT_FEED_URL.to_string(), |url| url.trim().to_string());

        let debounce = config.get("debounce_ms").map_or(DEFAULT_QUIET_PERIOD, |raw| {
            raw.trim().parse::<u64>().map(Duration::from_millis).unwrap_or_else(|_| {
                tracing::warn!(debounce_ms = %raw, "invalid debounce_ms, using default");
                DEFAULT_QUIET_PERIOD
            })
        });

        let default_view = config.get("default_view").map_or(ViewMode::Card, |raw| {
            ViewMode::from_config(raw).unwrap_or_else(|| {
                tracing::warn!(default_view = %raw, "invalid default_view, using cards");
                ViewMode::Card
            })
        });

        Self {
            feed_url,
            debounce,
            default_view,
            theme_name: config.get("theme").cloned(),
            theme_file: config.get("theme_file").cloned(),
            trace_level: config.get("trace_level").cloned(),
        }
    }

    /// Checks that the configuration can be used to load a feed.
    ///
    /// # Errors
    ///
    /// Returns [`ZatalogError::Config`] if `feed_url` is empty or not an
    /// `http://` / `https://` URL.
    pub fn validate(&self) -> Result<()> {
        if self.feed_url.is_empty() {
            return Err(ZatalogError::Config("feed_url is empty".to_string()));
        }
        if !(self.feed_url.starts_with("https://") || self.feed_url.starts_with("http://")) {
            return Err(ZatalogError::Config(format!(
                "feed_url must start with http:// or https://, got {}",
                self.feed_url
            )));
        }
        Ok(())
    }

    /// Resolves the configured theme, falling back to the default.
    fn load_theme(&self) -> Theme {
        self.theme_file.as_ref().map_or_else(
            || {
                self.theme_name.as_ref().map_or_else(Theme::default, |theme_name| {
                    Theme::from_name(theme_name).unwrap_or_else(|| {
                        tracing::debug!(theme_name = %theme_name, "unknown theme, using default");
                        Theme::default()
                    })
                })
            },
            |theme_file| {
                let path = expand_tilde(theme_file);
                Theme::from_file(&path).unwrap_or_else(|e| {
                    tracing::warn!(
                        theme_file = %strip_host_prefix(&path),
                        error = %e,
                        "failed to load theme from file, using default"
                    );
                    Theme::default()
                })
            },
        )
    }
}

/// Initializes the plugin state from configuration.
///
/// Creates an `AppState` with the resolved theme, startup view, and
/// debounce period. No request is made yet: the first load happens on
/// `Event::Start`, once web access is granted.
///
/// An invalid configuration does not abort startup. The store is marked
/// failed with the configuration error, which the UI shows in place of the
/// catalog.
///
/// # Example
///
/// ```rust
/// use zatalog::{initialize, Config};
///
/// let config = Config { feed_url: "ftp://example.com".to_string(), ..Default::default() };
/// let state = initialize(&config);
/// assert!(state.feed_url.is_none());
/// ```
pub fn initialize(config: &Config) -> AppState {
    tracing::debug!(
        feed_url = %config.feed_url,
        debounce_ms = config.debounce.as_millis(),
        default_view = ?config.default_view,
        "initializing zatalog plugin"
    );

    let theme = config.load_theme();

    match config.validate() {
        Ok(()) => AppState::new(theme, config.default_view, config.debounce, Some(config.feed_url.clone())),
        Err(e) => {
            tracing::warn!(error = %e, "invalid configuration, feed disabled");
            let mut state = AppState::new(theme, config.default_view, config.debounce, None);
            state.store.mark_unavailable(e.to_string());
            state
        }
    }
}
