//! Event handling and state transition logic.
//!
//! This module implements the core event handler that processes user input,
//! timer ticks, and feed responses, translating them into state changes and
//! action sequences.
//!
//! # Architecture
//!
//! The handler follows a unidirectional data flow pattern:
//! 1. Events arrive from the plugin shim
//! 2. [`handle_event`] pattern-matches the event type
//! 3. State mutations occur via `AppState` methods
//! 4. Actions are collected and returned for execution
//!
//! # Event Types
//!
//! - **Navigation**: `KeyDown`, `KeyUp`
//! - **Search input**: `SearchMode`, `LeaveSearch`, `ClearSearch`, `Char`, `Backspace`
//! - **Pipeline controls**: `CycleSort`, `ShowCards`, `ShowList`
//! - **Loading**: `Start`, `Reload`, `PermissionDenied`, `FeedResponse`
//! - **Timers**: `QuietPeriodElapsed`
//!
//! # Example
//!
//! ```rust
//! use zatalog::app::{handle_event, AppState, Event, ViewMode};
//! use zatalog::ui::Theme;
//! use std::time::Duration;
//!
//! let mut state = AppState::new(Theme::default(), ViewMode::Card, Duration::from_millis(300), None);
//! let (should_render, actions) = handle_event(&mut state, &Event::CycleSort)?;
//! assert!(should_render);
//! assert!(actions.is_empty());
//! # Ok::<(), zatalog::ZatalogError>(())
//! ```

use super::modes::{InputMode, ViewMode};
use crate::app::{Action, AppState};
use crate::domain::error::Result;
use crate::feed::{check_status, decode_products, FeedRequest};

/// Events triggered by user input, host timers, or feed responses.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// Web access was granted; performs the initial load.
    Start,
    /// Web access was denied; no load can happen.
    PermissionDenied,

    /// Moves selection cursor down by one position (wraps to top).
    KeyDown,
    /// Moves selection cursor up by one position (wraps to bottom).
    KeyUp,
    /// Hides the plugin pane.
    CloseFocus,

    /// Focuses the search box.
    SearchMode,
    /// Leaves the search box, keeping the query.
    LeaveSearch,
    /// Leaves the search box and empties the query.
    ClearSearch,
    /// Appends a character to the raw query.
    Char(char),
    /// Removes the last character from the raw query.
    Backspace,

    /// Advances the price sort cycle.
    CycleSort,
    /// Switches to the card grid.
    ShowCards,
    /// Switches to the list.
    ShowList,

    /// Starts a new load cycle, superseding any request in flight.
    Reload,

    /// One debounce timer elapsed.
    QuietPeriodElapsed,

    /// The host finished a feed request.
    ///
    /// Transport failures arrive here as well, with a non-2xx status.
    FeedResponse {
        /// Request id recovered from the web request context.
        request_id: u64,
        /// HTTP status reported by the host.
        status: u16,
        /// Raw response body.
        body: Vec<u8>,
    },
}

/// Processes an event, mutates application state, and returns actions to execute.
///
/// Returns `(should_render, actions)`. `should_render` is `false` when the
/// event left everything visible unchanged.
///
/// # Errors
///
/// Currently infallible for every event; the `Result` keeps the plugin
/// shim's error path uniform with the rest of the crate.
///
/// # Example
///
/// ```rust
/// use zatalog::app::{handle_event, Action, AppState, Event, ViewMode};
/// use zatalog::ui::Theme;
/// use std::time::Duration;
///
/// let mut state = AppState::new(Theme::default(), ViewMode::Card, Duration::from_millis(300), None);
/// handle_event(&mut state, &Event::SearchMode)?;
/// let (_, actions) = handle_event(&mut state, &Event::Char('m'))?;
/// assert_eq!(actions, vec![Action::StartQuietPeriod(Duration::from_millis(300))]);
/// assert_eq!(state.raw_query, "m");
/// assert_eq!(state.effective_query, "");
/// # Ok::<(), zatalog::ZatalogError>(())
/// ```
pub fn handle_event(state: &mut AppState, event: &Event) -> Result<(bool, Vec<Action>)> {
    let _span = tracing::debug_span!("handle_event", event_type = ?EventKind(event)).entered();

    match event {
        Event::Start | Event::Reload => Ok((true, start_load(state))),
        Event::PermissionDenied => {
            tracing::warn!("web access permission denied");
            state.store.mark_unavailable("web access permission denied");
            Ok((true, vec![]))
        }
        Event::KeyDown => {
            state.move_selection_down();
            Ok((true, vec![]))
        }
        Event::KeyUp => {
            state.move_selection_up();
            Ok((true, vec![]))
        }
        Event::CloseFocus => Ok((false, vec![Action::CloseFocus])),
        Event::SearchMode => {
            tracing::debug!("entering search mode");
            state.input_mode = InputMode::Search;
            Ok((true, vec![]))
        }
        Event::LeaveSearch => {
            tracing::debug!(query = %state.raw_query, "leaving search mode");
            state.input_mode = InputMode::Browse;
            Ok((true, vec![]))
        }
        Event::ClearSearch => {
            let was_searching = state.input_mode == InputMode::Search;
            state.input_mode = InputMode::Browse;

            if state.raw_query.is_empty() {
                return Ok((was_searching, vec![]));
            }
            state.raw_query.clear();
            Ok((true, vec![schedule_commit(state)]))
        }
        Event::Char(c) => {
            if state.input_mode != InputMode::Search {
                return Ok((false, vec![]));
            }

            state.raw_query.push(*c);
            tracing::trace!(query = %state.raw_query, char = %c, "raw query updated");
            Ok((true, vec![schedule_commit(state)]))
        }
        Event::Backspace => {
            if state.input_mode != InputMode::Search || state.raw_query.pop().is_none() {
                return Ok((false, vec![]));
            }
            Ok((true, vec![schedule_commit(state)]))
        }
        Event::QuietPeriodElapsed => {
            let changed = state
                .debouncer
                .elapse()
                .is_some_and(|query| state.commit_query(query));
            Ok((changed, vec![]))
        }
        Event::CycleSort => {
            state.advance_sort();
            Ok((true, vec![]))
        }
        Event::ShowCards => Ok((set_view(state, ViewMode::Card), vec![])),
        Event::ShowList => Ok((set_view(state, ViewMode::List), vec![])),
        Event::FeedResponse {
            request_id,
            status,
            body,
        } => {
            let outcome = check_status(*status).and_then(|()| decode_products(body));

            let accepted = match outcome {
                Ok(batch) => state
                    .store
                    .complete_load(*request_id, batch, chrono::Utc::now().timestamp()),
                Err(e) => state.store.fail_load(*request_id, e.to_string()),
            };

            if accepted {
                state.refresh_derived();
            }
            Ok((accepted, vec![]))
        }
    }
}

/// Begins a load cycle if a feed URL is configured.
fn start_load(state: &mut AppState) -> Vec<Action> {
    let Some(url) = state.feed_url.clone() else {
        tracing::debug!("no valid feed url, skipping load");
        return vec![];
    };

    let request_id = state.store.begin_load();
    tracing::debug!(request_id = request_id, url = %url, "requesting product feed");
    vec![Action::FetchFeed(FeedRequest::new(request_id, url))]
}

/// Registers the current raw query with the debouncer and returns the timer
/// action for it.
fn schedule_commit(state: &mut AppState) -> Action {
    state.debouncer.schedule(&state.raw_query);
    Action::StartQuietPeriod(state.debouncer.quiet_period())
}

fn set_view(state: &mut AppState, view_mode: ViewMode) -> bool {
    if state.view_mode == view_mode {
        return false;
    }
    tracing::debug!(view = ?view_mode, "view mode changed");
    state.view_mode = view_mode;
    true
}

/// Debug wrapper that omits response bodies from span fields.
struct EventKind<'a>(&'a Event);

impl std::fmt::Debug for EventKind<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.0 {
            Event::FeedResponse {
                request_id,
                status,
                body,
            } => f
                .debug_struct("FeedResponse")
                .field("request_id", request_id)
                .field("status", status)
                .field("body_len", &body.len())
                .finish(),
            other => write!(f, "{other:?}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::Theme;
    use std::time::Duration;

    const FEED_URL: &str = "https://example.com/products.json";
    const BODY: &[u8] = br#"[
        {"id": 1, "name": "Wireless Mouse", "description": "Silent clicks", "price": 25.99, "image": ""},
        {"id": 2, "name": "Desk Lamp", "description": "Dimmable", "price": 34.5, "image": ""}
    ]"#;

    fn state() -> AppState {
        AppState::new(
            Theme::default(),
            ViewMode::Card,
            Duration::from_millis(300),
            Some(FEED_URL.to_string()),
        )
    }

    fn start(state: &mut AppState) -> u64 {
        let (_, actions) = handle_event(state, &Event::Start).unwrap();
        match actions.as_slice() {
            [Action::FetchFeed(request)] => {
                assert_eq!(request.url, FEED_URL);
                request.request_id
            }
            other => panic!("expected a single fetch, got {other:?}"),
        }
    }

    fn respond(state: &mut AppState, request_id: u64, status: u16, body: &[u8]) -> bool {
        let event = Event::FeedResponse {
            request_id,
            status,
            body: body.to_vec(),
        };
        handle_event(state, &event).unwrap().0
    }

    #[test]
    fn start_loads_and_replaces_store() {
        let mut state = state();
        let request_id = start(&mut state);
        assert!(state.derived().products.is_empty());

        assert!(respond(&mut state, request_id, 200, BODY));
        assert_eq!(state.derived().stats.count, 2);
        assert_eq!(state.store.revision(), 1);
    }

    #[test]
    fn start_without_feed_url_issues_nothing() {
        let mut state = AppState::new(Theme::default(), ViewMode::Card, Duration::from_millis(300), None);
        let (_, actions) = handle_event(&mut state, &Event::Start).unwrap();
        assert!(actions.is_empty());
    }

    #[test]
    fn stale_response_is_ignored() {
        let mut state = state();
        let first = start(&mut state);
        let (_, actions) = handle_event(&mut state, &Event::Reload).unwrap();
        assert_eq!(actions.len(), 1);

        assert!(!respond(&mut state, first, 200, BODY));
        assert!(state.derived().products.is_empty());
    }

    #[test]
    fn failed_reload_keeps_previous_products() {
        let mut state = state();
        let first = start(&mut state);
        respond(&mut state, first, 200, BODY);

        handle_event(&mut state, &Event::Reload).unwrap();
        let second = first + 1;
        assert!(respond(&mut state, second, 503, b"unavailable"));

        assert_eq!(state.derived().stats.count, 2);
        assert!(matches!(
            state.store.status(),
            crate::catalog::LoadStatus::Failed { message } if message.contains("503")
        ));
    }

    #[test]
    fn typing_outside_search_mode_is_ignored() {
        let mut state = state();
        let (render, actions) = handle_event(&mut state, &Event::Char('x')).unwrap();
        assert!(!render);
        assert!(actions.is_empty());
        assert!(state.raw_query.is_empty());
    }

    #[test]
    fn query_takes_effect_after_quiet_period() {
        let mut state = state();
        let request_id = start(&mut state);
        respond(&mut state, request_id, 200, BODY);

        handle_event(&mut state, &Event::SearchMode).unwrap();
        for c in "lamp".chars() {
            handle_event(&mut state, &Event::Char(c)).unwrap();
        }
        assert_eq!(state.derived().stats.count, 2);

        let renders: Vec<bool> = (0..4)
            .map(|_| handle_event(&mut state, &Event::QuietPeriodElapsed).unwrap().0)
            .collect();
        assert_eq!(renders, vec![false, false, false, true]);
        assert_eq!(state.effective_query, "lamp");
        assert_eq!(state.derived().products[0].name, "Desk Lamp");
    }

    #[test]
    fn backspace_on_empty_query_does_nothing() {
        let mut state = state();
        handle_event(&mut state, &Event::SearchMode).unwrap();
        let (render, actions) = handle_event(&mut state, &Event::Backspace).unwrap();
        assert!(!render);
        assert!(actions.is_empty());
    }

    #[test]
    fn clear_search_debounces_the_empty_query() {
        let mut state = state();
        handle_event(&mut state, &Event::SearchMode).unwrap();
        handle_event(&mut state, &Event::Char('z')).unwrap();
        handle_event(&mut state, &Event::QuietPeriodElapsed).unwrap();
        assert_eq!(state.effective_query, "z");

        let (_, actions) = handle_event(&mut state, &Event::ClearSearch).unwrap();
        assert_eq!(actions, vec![Action::StartQuietPeriod(Duration::from_millis(300))]);
        assert_eq!(state.input_mode, InputMode::Browse);
        assert_eq!(state.effective_query, "z");

        handle_event(&mut state, &Event::QuietPeriodElapsed).unwrap();
        assert_eq!(state.effective_query, "");
    }

    #[test]
    fn view_switch_renders_only_on_change() {
        let mut state = state();
        assert!(!handle_event(&mut state, &Event::ShowCards).unwrap().0);
        assert!(handle_event(&mut state, &Event::ShowList).unwrap().0);
        assert_eq!(state.view_mode, ViewMode::List);
    }

    #[test]
    fn permission_denied_marks_store_failed() {
        let mut state = state();
        handle_event(&mut state, &Event::PermissionDenied).unwrap();
        let vm = state.compute_viewmodel_at(30, 100, 0);
        assert_eq!(vm.empty_state.map(|e| e.message), Some("Could not load products".to_string()));
    }
}
