//! End-to-end behavior of the catalog screen, driven through `handle_event`
//! the same way the plugin shim drives it.

use zatalog::catalog::LoadStatus;
use zatalog::ui::UIViewModel;
use zatalog::{handle_event, initialize, Action, AppState, Config, Event, SortMode, ViewMode};

const FIXTURE: &[u8] = include_bytes!("fixtures/products.json");

/// Plays the role of the Zellij host: tracks outstanding timers and feed
/// requests produced by the handler.
struct Harness {
    state: AppState,
    pending_timers: usize,
    requests: Vec<u64>,
}

impl Harness {
    fn new() -> Self {
        Self {
            state: initialize(&Config::default()),
            pending_timers: 0,
            requests: Vec::new(),
        }
    }

    /// Starts the plugin and answers the first request with the fixture.
    fn loaded() -> Self {
        let mut harness = Self::new();
        harness.send(&Event::Start);
        let request_id = harness.last_request();
        harness.respond(request_id, 200, FIXTURE);
        harness
    }

    fn send(&mut self, event: &Event) -> bool {
        let (should_render, actions) = handle_event(&mut self.state, event).unwrap();
        for action in actions {
            match action {
                Action::StartQuietPeriod(_) => self.pending_timers += 1,
                Action::FetchFeed(request) => self.requests.push(request.request_id),
                Action::CloseFocus => {}
            }
        }
        should_render
    }

    fn last_request(&self) -> u64 {
        *self.requests.last().unwrap()
    }

    fn respond(&mut self, request_id: u64, status: u16, body: &[u8]) -> bool {
        self.send(&Event::FeedResponse {
            request_id,
            status,
            body: body.to_vec(),
        })
    }

    /// Replaces the query the way a user would: clear, focus, type.
    fn type_query(&mut self, query: &str) {
        self.send(&Event::ClearSearch);
        self.send(&Event::SearchMode);
        for c in query.chars() {
            self.send(&Event::Char(c));
        }
    }

    /// Lets every outstanding debounce timer elapse.
    fn settle(&mut self) {
        while self.pending_timers > 0 {
            self.pending_timers -= 1;
            self.send(&Event::QuietPeriodElapsed);
        }
    }

    fn search(&mut self, query: &str) {
        self.type_query(query);
        self.settle();
    }

    fn viewmodel(&self) -> UIViewModel {
        self.state.compute_viewmodel_at(60, 120, 0)
    }

    fn names(&self) -> Vec<String> {
        self.state
            .derived()
            .products
            .iter()
            .map(|p| p.name.clone())
            .collect()
    }
}

#[test]
fn loading_screen_reports_zero_statistics() {
    let mut harness = Harness::new();
    harness.send(&Event::Start);

    let vm = harness.viewmodel();
    assert_eq!(vm.stats.total, "Total Products: 0");
    assert_eq!(vm.stats.average, "Average Price: $0.00");
    assert_eq!(vm.header.status, "Loading products...");
    assert_eq!(vm.empty_state.unwrap().message, "Loading products...");
}

#[test]
fn initial_load_shows_every_product() {
    let harness = Harness::loaded();

    let vm = harness.viewmodel();
    assert_eq!(vm.stats.total, "Total Products: 10");
    assert_eq!(vm.stats.average, "Average Price: $66.16");
    assert!(vm.empty_state.is_none());
    assert_eq!(harness.names()[0], "Wireless Mouse");
}

#[test]
fn search_narrows_and_clearing_restores() {
    let mut harness = Harness::loaded();

    harness.search("mouse");
    assert_eq!(harness.names(), vec!["Wireless Mouse"]);

    harness.search("");
    assert_eq!(harness.state.derived().stats.count, 10);
}

#[test]
fn statistics_follow_the_search() {
    let mut harness = Harness::loaded();

    harness.search("speaker");
    let vm = harness.viewmodel();
    assert_eq!(vm.stats.total, "Total Products: 1");
    assert_eq!(vm.stats.average, "Average Price: $45.50");

    harness.search("USB-C");
    let vm = harness.viewmodel();
    assert_eq!(vm.stats.total, "Total Products: 1");
    assert_eq!(vm.stats.average, "Average Price: $32.00");
}

#[test]
fn search_matches_names_and_descriptions() {
    let mut harness = Harness::loaded();

    harness.search("bluetooth");
    assert_eq!(harness.names(), vec!["Bluetooth Speaker"]);

    harness.search("WIRELESS");
    assert_eq!(harness.names(), vec!["Wireless Mouse", "Desk Lamp"]);
}

#[test]
fn unmatched_search_shows_no_match_state() {
    let mut harness = Harness::loaded();
    harness.search("nonexistent");

    let vm = harness.viewmodel();
    assert!(vm.items.is_empty());
    assert_eq!(vm.stats.total, "Total Products: 0");
    assert_eq!(vm.stats.average, "Average Price: $0.00");
    assert_eq!(vm.empty_state.unwrap().message, "No products match \"nonexistent\"");
}

#[test]
fn sort_cycle_orders_by_price_and_returns_to_feed_order() {
    let mut harness = Harness::loaded();

    harness.send(&Event::CycleSort);
    assert_eq!(harness.state.sort_mode, SortMode::Ascending);
    assert_eq!(harness.viewmodel().items[0].price, "$14.75");

    harness.send(&Event::CycleSort);
    assert_eq!(harness.state.sort_mode, SortMode::Descending);
    assert_eq!(harness.viewmodel().items[0].price, "$199.99");

    harness.send(&Event::CycleSort);
    assert_eq!(harness.state.sort_mode, SortMode::None);
    assert_eq!(harness.names()[0], "Wireless Mouse");
}

#[test]
fn sort_applies_within_search_results() {
    let mut harness = Harness::loaded();
    harness.search("with");
    let unsorted = harness.names();

    harness.send(&Event::CycleSort);
    let prices: Vec<f64> = harness.state.derived().products.iter().map(|p| p.price).collect();
    assert!(prices.windows(2).all(|w| w[0] <= w[1]));
    assert_eq!(prices.len(), unsorted.len());
}

#[test]
fn search_then_sort_keeps_the_filtered_statistics() {
    let mut harness = Harness::loaded();
    harness.search("head");
    assert_eq!(harness.viewmodel().items.len(), 1);
    assert_eq!(harness.names(), vec!["Noise Cancelling Headphones"]);

    harness.send(&Event::CycleSort);
    let vm = harness.viewmodel();
    assert!(vm.controls.sort_label.contains('↑'));
    assert!(vm.controls.sort_active);
    assert_eq!(vm.items.len(), 1);
    assert_eq!(vm.stats.total, "Total Products: 1");
    assert_eq!(vm.stats.average, "Average Price: $199.99");
}

#[test]
fn burst_of_keystrokes_commits_once() {
    let mut harness = Harness::loaded();
    harness.type_query("mou");
    assert_eq!(harness.state.raw_query, "mou");
    assert_eq!(harness.state.effective_query, "");
    assert_eq!(harness.state.derived().stats.count, 10);

    let renders: Vec<bool> = (0..harness.pending_timers)
        .map(|_| harness.send(&Event::QuietPeriodElapsed))
        .collect();
    harness.pending_timers = 0;

    assert_eq!(renders.iter().filter(|r| **r).count(), 1);
    assert_eq!(renders.last(), Some(&true));
    assert_eq!(harness.state.effective_query, "mou");
    assert_eq!(harness.names(), vec!["Wireless Mouse"]);
}

#[test]
fn view_mode_survives_searching_and_sorting() {
    let mut harness = Harness::loaded();
    harness.send(&Event::ShowList);

    harness.search("lamp");
    harness.send(&Event::CycleSort);
    harness.search("");

    assert_eq!(harness.state.view_mode, ViewMode::List);
    assert_eq!(harness.viewmodel().layout, ViewMode::List);
}

#[test]
fn switching_view_leaves_subset_untouched() {
    let mut harness = Harness::loaded();
    harness.search("with");
    let before = harness.state.derived().clone();

    harness.send(&Event::ShowList);
    harness.send(&Event::ShowCards);

    assert_eq!(harness.state.derived(), &before);
}

#[test]
fn failed_reload_keeps_the_catalog() {
    let mut harness = Harness::loaded();
    harness.send(&Event::Reload);
    let request_id = harness.last_request();
    harness.respond(request_id, 500, b"Internal Server Error");

    let vm = harness.viewmodel();
    assert_eq!(vm.stats.total, "Total Products: 10");
    assert!(vm.header.is_error);
    assert!(vm.header.status.contains("500"));
}

#[test]
fn failed_first_load_is_distinct_from_no_results() {
    let mut harness = Harness::new();
    harness.send(&Event::Start);
    let request_id = harness.last_request();
    harness.respond(request_id, 200, b"not json");

    let vm = harness.viewmodel();
    assert_eq!(vm.empty_state.unwrap().message, "Could not load products");
    assert!(matches!(harness.state.store.status(), LoadStatus::Failed { .. }));

    harness.send(&Event::Reload);
    let retry = harness.last_request();
    harness.respond(retry, 200, FIXTURE);
    assert_eq!(harness.state.derived().stats.count, 10);
}

#[test]
fn responses_to_superseded_requests_are_ignored() {
    let mut harness = Harness::new();
    harness.send(&Event::Start);
    let first = harness.last_request();
    harness.send(&Event::Reload);
    let second = harness.last_request();

    assert!(!harness.respond(first, 200, FIXTURE));
    assert!(harness.state.derived().products.is_empty());

    assert!(harness.respond(second, 200, br#"[{"id": 1, "name": "Only", "description": "", "price": 1, "image": ""}]"#));
    assert_eq!(harness.names(), vec!["Only"]);
}

#[test]
fn malformed_records_are_skipped_and_reported() {
    let mut harness = Harness::new();
    harness.send(&Event::Start);
    let request_id = harness.last_request();
    harness.respond(
        request_id,
        200,
        br#"[
            {"id": 1, "name": "Good", "description": "", "price": 5, "image": ""},
            {"id": 2, "name": "Free lunch", "description": "", "price": -5, "image": ""}
        ]"#,
    );

    assert_eq!(harness.names(), vec!["Good"]);
    assert_eq!(harness.viewmodel().header.status, "1 product, loaded just now, 1 malformed skipped");
}

#[test]
fn selection_wraps_and_resets_on_new_query() {
    let mut harness = Harness::loaded();
    harness.send(&Event::KeyUp);
    assert_eq!(harness.state.selected_product().unwrap().name, "Desk Lamp");

    harness.search("with");
    assert_eq!(harness.state.selected_index, 0);
    assert!(harness.viewmodel().items[0].is_selected);
}

#[test]
fn quit_hides_the_pane() {
    let mut harness = Harness::loaded();
    let (should_render, actions) = handle_event(&mut harness.state, &Event::CloseFocus).unwrap();
    assert!(!should_render);
    assert_eq!(actions, vec![Action::CloseFocus]);
}
