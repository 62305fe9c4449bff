//! Zellij plugin wrapper and entry point.
//!
//! This module is the thin integration layer between the Zatalog library and
//! the Zellij plugin system. It implements `ZellijPlugin`, translates host
//! events into library events, and turns library actions into host calls.
//!
//! # Plugin Lifecycle
//!
//! 1. **Load**: Parse config, initialize tracing, create `AppState`
//! 2. **Permissions**: Request `WebAccess`; the first feed request waits for it
//! 3. **Update**: Map keys, timers, and web results to library events
//! 4. **Render**: Call library render function
//!
//! # Event Mapping
//!
//! - `PermissionRequestResult(Granted)` → `Event::Start`
//! - `Timer` → `Event::QuietPeriodElapsed`
//! - `WebRequestResult` with our request id → `Event::FeedResponse`
//! - `Key` → see below
//!
//! # Keybindings
//!
//! Global (all modes):
//! - `Ctrl+n`: Move down
//! - `Ctrl+p`: Move up
//!
//! In browse mode:
//! - `j`/`Down`, `k`/`Up`: Move selection
//! - `/`: Focus the search box
//! - `s`: Cycle price sort
//! - `c` / `l`: Card grid / list
//! - `r`: Reload the feed
//! - `Esc`: Clear the search
//! - `q`: Hide the plugin
//!
//! In search mode:
//! - Printable keys: Edit the query
//! - `Enter`: Keep the query and browse
//! - `Esc`: Clear the query and browse

#![allow(clippy::multiple_crate_versions)]

use std::collections::BTreeMap;
use zellij_tile::prelude::*;
use zellij_tile::prelude::Event as HostEvent;

use zatalog::feed::request_id_from_context;
use zatalog::{handle_event, Action, Config, Event, InputMode};

register_plugin!(State);

/// Plugin state wrapper.
struct State {
    /// Core application state from library layer.
    app: zatalog::app::AppState,
}

impl Default for State {
    fn default() -> Self {
        Self {
            app: zatalog::initialize(&Config::default()),
        }
    }
}

impl ZellijPlugin for State {
    /// Initializes the plugin on load.
    ///
    /// # Permissions
    ///
    /// Requests `WebAccess` to fetch the product feed.
    ///
    /// # Subscriptions
    ///
    /// - `Key`: Keyboard input
    /// - `Timer`: Debounce quiet periods
    /// - `WebRequestResult`: Feed responses
    /// - `PermissionRequestResult`: Triggers the first load
    fn load(&mut self, configuration: BTreeMap<String, String>) {
        let config = Config::from_zellij(&configuration);
        zatalog::observability::init_tracing(&config);

        let span = tracing::debug_span!("plugin_load");
        let _guard = span.entered();

        self.app = zatalog::initialize(&config);
        tracing::debug!("app state initialized");

        request_permission(&[PermissionType::WebAccess]);
        subscribe(&[
            EventType::Key,
            EventType::Timer,
            EventType::WebRequestResult,
            EventType::PermissionRequestResult,
        ]);

        tracing::debug!("plugin load complete - waiting for permissions");
    }

    /// Handles incoming Zellij events.
    ///
    /// Returns `true` if the UI should re-render.
    fn update(&mut self, event: HostEvent) -> bool {
        let event_name = Self::event_label(&event);
        let span = tracing::debug_span!("plugin_update_event", event_type = %event_name);
        let _guard = span.entered();

        let our_event = match event {
            HostEvent::Key(ref key) => match self.map_key_event(key) {
                Some(event) => event,
                None => return false,
            },
            HostEvent::Timer(_elapsed) => Event::QuietPeriodElapsed,
            HostEvent::WebRequestResult(status, _headers, body, context) => {
                match Self::map_web_result_event(status, body, &context) {
                    Some(event) => event,
                    None => return false,
                }
            }
            HostEvent::PermissionRequestResult(status) => match status {
                PermissionStatus::Granted => {
                    tracing::debug!("web access granted - starting initial load");
                    Event::Start
                }
                PermissionStatus::Denied => Event::PermissionDenied,
            },
            _ => return false,
        };

        match handle_event(&mut self.app, &our_event) {
            Ok((should_render, actions)) => {
                tracing::debug!(
                    action_count = actions.len(),
                    should_render = should_render,
                    "event handled successfully"
                );
                for a in actions {
                    Self::execute_action(&a);
                }
                should_render
            }
            Err(e) => {
                tracing::error!(error = %e, "error handling event");
                false
            }
        }
    }

    /// Renders the plugin UI.
    fn render(&mut self, rows: usize, cols: usize) {
        zatalog::ui::render(&self.app, rows, cols);
    }
}

impl State {
    /// Short name of a host event for the update span.
    fn event_label(event: &HostEvent) -> String {
        match event {
            HostEvent::Key(key) => format!("Key({:?})", key.bare_key),
            HostEvent::Timer(..) => "Timer".to_string(),
            HostEvent::WebRequestResult(status, ..) => {
                format!("WebRequestResult({status})")
            }
            HostEvent::PermissionRequestResult(..) => {
                "PermissionRequestResult".to_string()
            }
            _ => "Other".to_string(),
        }
    }

    /// Maps keyboard events to application events.
    fn map_key_event(&self, key: &KeyWithModifier) -> Option<Event> {
        tracing::trace!(bare_key = ?key.bare_key, "key event");

        if key.bare_key == BareKey::Char('n') && key.has_modifiers(&[KeyModifier::Ctrl]) {
            return Some(Event::KeyDown);
        }
        if key.bare_key == BareKey::Char('p') && key.has_modifiers(&[KeyModifier::Ctrl]) {
            return Some(Event::KeyUp);
        }

        match self.app.input_mode {
            InputMode::Search => Some(match key.bare_key {
                BareKey::Down => Event::KeyDown,
                BareKey::Up => Event::KeyUp,
                BareKey::Esc => Event::ClearSearch,
                BareKey::Enter => Event::LeaveSearch,
                BareKey::Backspace => Event::Backspace,
                BareKey::Char(c) => Event::Char(c),
                _ => return None,
            }),
            InputMode::Browse => Some(match key.bare_key {
                BareKey::Down | BareKey::Char('j') => Event::KeyDown,
                BareKey::Up | BareKey::Char('k') => Event::KeyUp,
                BareKey::Char('/') => Event::SearchMode,
                BareKey::Char('s') => Event::CycleSort,
                BareKey::Char('c') => Event::ShowCards,
                BareKey::Char('l') => Event::ShowList,
                BareKey::Char('r') => Event::Reload,
                BareKey::Char('q') => Event::CloseFocus,
                BareKey::Esc => Event::ClearSearch,
                _ => return None,
            }),
        }
    }

    /// Maps a web request result to a feed response.
    ///
    /// Results without our request id in their context are ignored.
    fn map_web_result_event(status: u16, body: Vec<u8>, context: &BTreeMap<String, String>) -> Option<Event> {
        let Some(request_id) = request_id_from_context(context) else {
            tracing::debug!(status = status, "ignoring web result without request id");
            return None;
        };

        tracing::debug!(
            request_id = request_id,
            status = status,
            body_len = body.len(),
            "feed response received"
        );
        Some(Event::FeedResponse {
            request_id,
            status,
            body,
        })
    }

    /// Executes an action returned from event handling.
    ///
    /// # Actions
    ///
    /// - `CloseFocus`: Hide the plugin pane
    /// - `FetchFeed`: Issue the HTTP GET with the request id in its context
    /// - `StartQuietPeriod`: Start one host timer
    #[tracing::instrument(level = "debug")]
    fn execute_action(action: &Action) {
        match action {
            Action::CloseFocus => {
                tracing::debug!("closing plugin focus");
                hide_self();
            }
            Action::FetchFeed(request) => {
                tracing::debug!(request_id = request.request_id, url = %request.url, "fetching feed");
                web_request(
                    &request.url,
                    HttpVerb::Get,
                    BTreeMap::new(),
                    vec![],
                    request.context(),
                );
            }
            Action::StartQuietPeriod(duration) => {
                set_timeout(duration.as_secs_f64());
            }
        }
    }
}
