//! Actions representing side effects to be executed by the plugin runtime.
//!
//! The event handler never calls into Zellij. It returns a `Vec<Action>` and
//! the plugin shim (`main.rs`) turns each action into a host call. This keeps
//! the whole state machine testable off-host.
//!
//! # Example
//!
//! ```rust
//! use zatalog::app::Action;
//! use zatalog::feed::FeedRequest;
//! use std::time::Duration;
//!
//! let actions = vec![
//!     Action::FetchFeed(FeedRequest::new(1, "https://example.com/products.json")),
//!     Action::StartQuietPeriod(Duration::from_millis(300)),
//! ];
//! ```

use crate::feed::FeedRequest;
use std::time::Duration;

/// Commands representing side effects to be executed by the plugin runtime.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Hides the plugin pane.
    ///
    /// Sent when the user explicitly requests to exit (pressing 'q').
    CloseFocus,

    /// Issues an HTTP GET for the product feed.
    ///
    /// The request id must be attached to the web request context so the
    /// response can be matched to its load cycle.
    FetchFeed(FeedRequest),

    /// Starts one debounce timer of the given length.
    ///
    /// When it elapses the shim reports `Event::QuietPeriodElapsed`.
    StartQuietPeriod(Duration),
}
