//! Application layer coordinating state, events, and actions.
//!
//! This module sits between the plugin runtime (`main.rs`) and the
//! catalog/feed layers. It implements the event-driven state machine that
//! powers the interactive UI.
//!
//! # Architecture
//!
//! ```text
//! Keys / Timers / Web results → Events → Event Handler → State Mutations → Actions → Host calls
//!                                   ↑                                          ↓
//!                                   └──── Timer and WebRequestResult events ───┘
//! ```
//!
//! # Modules
//!
//! - [`actions`]: Side effect commands emitted by the event handler
//! - [`debounce`]: Quiet-period tracking for the search query
//! - [`handler`]: Event processing logic and state transition coordinator
//! - [`modes`]: Input and view mode types
//! - [`state`]: Central application state container and view model computation

pub mod actions;
pub mod debounce;
pub mod handler;
pub mod modes;
pub mod state;

pub use actions::Action;
pub use debounce::Debouncer;
pub use handler::{handle_event, Event};
pub use modes::{InputMode, ViewMode};
pub use state::AppState;
