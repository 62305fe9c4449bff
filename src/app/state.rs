//! Application state management and view model computation.
//!
//! This module defines [`AppState`], the central state container for the
//! plugin. It holds the product store, both query strings, the sort and view
//! modes, and the memoized derived view. It is mutated only by
//! [`handle_event`](crate::app::handle_event).
//!
//! # State Components
//!
//! - **Store**: Products of the last successful load and the load status
//! - **Query State**: `raw_query` follows every keystroke, `effective_query`
//!   follows it after the debounce quiet period
//! - **Sort Mode**: Three-state price ordering cycle
//! - **View Mode**: Card grid or list, rendering only
//! - **Derived**: Cached filter → sort → stats result
//! - **Selection**: Cursor within the derived products
//!
//! # View Model Computation
//!
//! [`AppState::compute_viewmodel`] turns a state snapshot into a
//! [`UIViewModel`], handling windowing for both layouts, text truncation, and
//! match highlighting of the effective query.
//!
//! # Example
//!
//! ```rust
//! use zatalog::app::{AppState, ViewMode};
//! use zatalog::ui::Theme;
//! use std::time::Duration;
//!
//! let state = AppState::new(Theme::default(), ViewMode::Card, Duration::from_millis(300), None);
//! let viewmodel = state.compute_viewmodel(24, 80);
//! assert_eq!(viewmodel.stats.total, "Total Products: 0");
//! ```

use super::debounce::Debouncer;
use super::modes::{InputMode, ViewMode};
use crate::catalog::{describe_age, match_ranges, DerivedCache, DerivedView, LoadStatus, ProductStore, SortMode};
use crate::domain::{format_price, Product};
use crate::ui::components::{
    list_description_width, BOTTOM_CHROME_ROWS, CARD_GAP, CARD_HEIGHT, CARD_TEXT_WIDTH, CARD_WIDTH, LIST_IMAGE_WIDTH,
    LIST_NAME_WIDTH, TOP_CHROME_ROWS,
};
use crate::ui::helpers::fit_text;
use crate::ui::theme::Theme;
use crate::ui::viewmodel::{
    ControlsInfo, DisplayItem, EmptyState, FooterInfo, HeaderInfo, StatsInfo, UIViewModel,
};
use std::time::Duration;

/// Title shown in the header bar.
const TITLE: &str = "Product Catalog";

/// Central application state container.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Raw products and load lifecycle.
    pub store: ProductStore,

    /// Query exactly as typed. Shown in the search box.
    pub raw_query: String,

    /// Query the derived view is filtered by.
    ///
    /// Always some past value of `raw_query`; only the debouncer writes it.
    pub effective_query: String,

    /// Quiet-period tracking for `raw_query` changes.
    pub debouncer: Debouncer,

    /// Current price ordering.
    pub sort_mode: SortMode,

    /// Current presentation.
    pub view_mode: ViewMode,

    /// Current input handling mode.
    pub input_mode: InputMode,

    /// Zero-based index of the selected product within the derived view.
    pub selected_index: usize,

    /// Color scheme for UI rendering.
    pub theme: Theme,

    /// Feed location. `None` when the configured URL was rejected.
    pub feed_url: Option<String>,

    derived: DerivedCache,
}

impl AppState {
    /// Creates a new application state with an empty store.
    ///
    /// # Example
    ///
    /// ```rust
    /// use zatalog::app::{AppState, ViewMode};
    /// use zatalog::ui::Theme;
    /// use std::time::Duration;
    ///
    /// let state = AppState::new(
    ///     Theme::default(),
    ///     ViewMode::List,
    ///     Duration::from_millis(300),
    ///     Some("https://example.com/products.json".to_string()),
    /// );
    /// assert_eq!(state.selected_index, 0);
    /// assert!(state.derived().products.is_empty());
    /// ```
    #[must_use]
    pub fn new(theme: Theme, view_mode: ViewMode, quiet_period: Duration, feed_url: Option<String>) -> Self {
        let mut state = Self {
            store: ProductStore::new(),
            raw_query: String::new(),
            effective_query: String::new(),
            debouncer: Debouncer::new(quiet_period),
            sort_mode: SortMode::None,
            view_mode,
            input_mode: InputMode::Browse,
            selected_index: 0,
            theme,
            feed_url,
            derived: DerivedCache::default(),
        };
        state.refresh_derived();
        state
    }

    /// The current derived view (filtered, sorted, summarized).
    #[must_use]
    pub const fn derived(&self) -> &DerivedView {
        self.derived.view()
    }

    /// Brings the derived view up to date and clamps the selection.
    ///
    /// Returns `true` if the view was recomputed.
    pub fn refresh_derived(&mut self) -> bool {
        let recomputed = self
            .derived
            .refresh(&self.store, &self.effective_query, self.sort_mode);

        let len = self.derived.view().products.len();
        self.selected_index = if len == 0 { 0 } else { self.selected_index.min(len - 1) };
        recomputed
    }

    /// Commits a settled query. Returns `true` if the effective query changed.
    pub fn commit_query(&mut self, query: String) -> bool {
        if query == self.effective_query {
            return false;
        }

        tracing::debug!(query = %query, "effective query updated");
        self.effective_query = query;
        self.selected_index = 0;
        self.refresh_derived();
        true
    }

    /// Advances the sort mode one step through its cycle.
    pub fn advance_sort(&mut self) {
        self.sort_mode = self.sort_mode.next();
        tracing::debug!(sort = self.sort_mode.label(), "sort mode changed");
        self.refresh_derived();
    }

    /// Moves selection cursor down by one position, wrapping to top if at end.
    pub fn move_selection_down(&mut self) {
        let len = self.derived().products.len();
        if len == 0 {
            return;
        }
        self.selected_index = (self.selected_index + 1) % len;
    }

    /// Moves selection cursor up by one position, wrapping to bottom if at start.
    pub fn move_selection_up(&mut self) {
        let len = self.derived().products.len();
        if len == 0 {
            return;
        }
        if self.selected_index == 0 {
            self.selected_index = len - 1;
        } else {
            self.selected_index -= 1;
        }
    }

    /// Returns the currently selected product, if any.
    #[must_use]
    pub fn selected_product(&self) -> Option<&Product> {
        self.derived().products.get(self.selected_index)
    }

    /// Computes a renderable UI view model from current state and terminal dimensions.
    ///
    /// Load ages in the header are measured against the current wall clock.
    #[must_use]
    pub fn compute_viewmodel(&self, rows: usize, cols: usize) -> UIViewModel {
        self.compute_viewmodel_at(rows, cols, chrono::Utc::now().timestamp())
    }

    /// Like [`compute_viewmodel`](Self::compute_viewmodel) with an explicit
    /// current Unix time.
    ///
    /// # Windowing Algorithm
    ///
    /// The content area is measured in units: one row per product in list
    /// layout, one grid row of `columns` cards in card layout. The window is
    /// centered on the unit holding the selection and shifted back when it
    /// would run past the end.
    #[must_use]
    pub fn compute_viewmodel_at(&self, rows: usize, cols: usize, now: i64) -> UIViewModel {
        let view = self.derived();
        let available_rows = Self::calculate_available_rows(rows);

        let (columns, unit_rows) = match self.view_mode {
            ViewMode::List => (1, 1),
            ViewMode::Card => (Self::card_columns(cols), CARD_HEIGHT),
        };
        let capacity_units = (available_rows / unit_rows).max(1);
        let total_units = view.products.len().div_ceil(columns);
        let selected_unit = self.selected_index / columns;

        let (start_unit, end_unit) = visible_window(selected_unit, total_units, capacity_units);
        let visible_start = start_unit * columns;
        let visible_end = (end_unit * columns).min(view.products.len());

        let items: Vec<DisplayItem> = view.products[visible_start..visible_end]
            .iter()
            .enumerate()
            .map(|(relative_idx, product)| {
                self.compute_display_item(product, visible_start + relative_idx, cols)
            })
            .collect();

        UIViewModel {
            header: self.compute_header(now),
            controls: self.compute_controls(),
            items,
            layout: self.view_mode,
            columns,
            selected_index: self.selected_index.saturating_sub(visible_start),
            stats: StatsInfo {
                total: format!("Total Products: {}", view.stats.count),
                average: format!("Average Price: {}", format_price(view.stats.average_price)),
            },
            footer: self.compute_footer(),
            empty_state: self.compute_empty_state(),
        }
    }

    fn compute_display_item(&self, product: &Product, absolute_idx: usize, cols: usize) -> DisplayItem {
        let (name_width, description_width, image_width) = match self.view_mode {
            ViewMode::Card => (CARD_TEXT_WIDTH, CARD_TEXT_WIDTH, CARD_TEXT_WIDTH),
            ViewMode::List => (LIST_NAME_WIDTH, list_description_width(cols), LIST_IMAGE_WIDTH),
        };

        let (name, name_highlights) = fit_text(
            &product.name,
            &match_ranges(&product.name, &self.effective_query),
            name_width,
        );
        let (description, description_highlights) = fit_text(
            &product.description,
            &match_ranges(&product.description, &self.effective_query),
            description_width,
        );
        let (image, _) = fit_text(&product.image, &[], image_width);

        DisplayItem {
            name,
            description,
            price: product.display_price(),
            image,
            is_selected: absolute_idx == self.selected_index,
            name_highlights,
            description_highlights,
        }
    }

    fn compute_header(&self, now: i64) -> HeaderInfo {
        let product_count = self.store.products().len();

        let (status, is_error) = match self.store.status() {
            LoadStatus::Idle => ("Waiting for web access permission".to_string(), false),
            LoadStatus::Loading { .. } if product_count > 0 => {
                (format!("{}, reloading...", count_label(product_count)), false)
            }
            LoadStatus::Loading { .. } => ("Loading products...".to_string(), false),
            LoadStatus::Loaded { loaded_at, rejected } => {
                let mut status = format!("{}, loaded {}", count_label(product_count), describe_age(now, *loaded_at));
                if *rejected > 0 {
                    status.push_str(&format!(", {rejected} malformed skipped"));
                }
                (status, false)
            }
            LoadStatus::Failed { message } if product_count > 0 => {
                (format!("Reload failed: {message} (showing previous results)"), true)
            }
            LoadStatus::Failed { message } => (format!("Load failed: {message}"), true),
        };

        HeaderInfo {
            title: TITLE.to_string(),
            status,
            is_error,
        }
    }

    fn compute_controls(&self) -> ControlsInfo {
        let sort_label = self.sort_mode.indicator().map_or_else(
            || format!("Price ({})", self.sort_mode.label()),
            |arrow| format!("Price {arrow} ({})", self.sort_mode.label()),
        );

        ControlsInfo {
            query: self.raw_query.clone(),
            search_active: self.input_mode == InputMode::Search,
            view_mode: self.view_mode,
            sort_label,
            sort_active: self.sort_mode != SortMode::None,
        }
    }

    fn compute_footer(&self) -> FooterInfo {
        let keybindings = match self.input_mode {
            InputMode::Browse => {
                "j/k: navigate  /: search  s: sort  c: cards  l: list  r: reload  Esc: clear  q: quit"
            }
            InputMode::Search => "Type to search  Enter: done  Esc: clear  Ctrl+n/p: navigate",
        };

        FooterInfo {
            keybindings: keybindings.to_string(),
        }
    }

    /// Picks the empty-state message, keeping "nothing loaded" apart from
    /// "nothing matched".
    fn compute_empty_state(&self) -> Option<EmptyState> {
        if !self.derived().products.is_empty() {
            return None;
        }

        let empty = if !self.store.is_empty() {
            EmptyState {
                message: format!("No products match \"{}\"", self.effective_query),
                subtitle: "Press Esc to clear the search".to_string(),
            }
        } else {
            match self.store.status() {
                LoadStatus::Idle => EmptyState {
                    message: "Waiting for permission".to_string(),
                    subtitle: "Grant web access to fetch the catalog".to_string(),
                },
                LoadStatus::Loading { .. } => EmptyState {
                    message: "Loading products...".to_string(),
                    subtitle: "Fetching the catalog feed".to_string(),
                },
                LoadStatus::Failed { message } => EmptyState {
                    message: "Could not load products".to_string(),
                    subtitle: format!("{message}. Press r to retry"),
                },
                LoadStatus::Loaded { .. } => EmptyState {
                    message: "The catalog is empty".to_string(),
                    subtitle: "Press r to reload".to_string(),
                },
            }
        };

        Some(empty)
    }

    /// Rows left for the product area after the header, controls, and footer.
    const fn calculate_available_rows(total_rows: usize) -> usize {
        total_rows.saturating_sub(TOP_CHROME_ROWS + BOTTOM_CHROME_ROWS)
    }

    /// Number of cards that fit side by side.
    fn card_columns(cols: usize) -> usize {
        ((cols + CARD_GAP) / (CARD_WIDTH + CARD_GAP)).max(1)
    }
}

/// Window of `capacity` units out of `total`, centered on `selected`.
fn visible_window(selected: usize, total: usize, capacity: usize) -> (usize, usize) {
    let mut start = selected.saturating_sub(capacity / 2);
    let end = (start + capacity).min(total);

    if end - start < capacity && total >= capacity {
        start = end.saturating_sub(capacity);
    }
    (start.min(end), end)
}

/// "1 product", "3 products".
fn count_label(count: usize) -> String {
    if count == 1 {
        "1 product".to_string()
    } else {
        format!("{count} products")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ProductId;
    use crate::feed::FeedBatch;
    use crate::ui::helpers::char_len;

    fn product(id: u64, name: &str, price: f64) -> Product {
        Product::new(ProductId::from(id), name, format!("{name} description"), price, "")
    }

    fn loaded_state(view_mode: ViewMode, count: u64) -> AppState {
        let mut state = AppState::new(Theme::default(), view_mode, Duration::from_millis(300), None);
        let request_id = state.store.begin_load();
        let products = (1..=count).map(|i| product(i, &format!("Item {i}"), i as f64)).collect();
        state.store.complete_load(request_id, FeedBatch { products, rejected: 0 }, 1_000);
        state.refresh_derived();
        state
    }

    #[test]
    fn window_centers_on_selection() {
        assert_eq!(visible_window(0, 20, 5), (0, 5));
        assert_eq!(visible_window(10, 20, 5), (8, 13));
        assert_eq!(visible_window(19, 20, 5), (15, 20));
        assert_eq!(visible_window(2, 3, 10), (0, 3));
        assert_eq!(visible_window(0, 0, 4), (0, 0));
    }

    #[test]
    fn selection_wraps_both_ways() {
        let mut state = loaded_state(ViewMode::List, 3);
        state.move_selection_up();
        assert_eq!(state.selected_index, 2);
        state.move_selection_down();
        assert_eq!(state.selected_index, 0);
    }

    #[test]
    fn selection_is_clamped_when_the_subset_shrinks() {
        let mut state = loaded_state(ViewMode::List, 12);
        state.selected_index = 11;
        state.commit_query("Item 1".to_string());
        assert_eq!(state.derived().products.len(), 4);
        assert_eq!(state.selected_index, 0);

        state.selected_index = 3;
        state.effective_query = "Item 12".to_string();
        state.refresh_derived();
        assert_eq!(state.selected_index, 0);
    }

    #[test]
    fn list_viewmodel_windows_rows() {
        let mut state = loaded_state(ViewMode::List, 50);
        state.selected_index = 40;

        let vm = state.compute_viewmodel_at(23, 100, 1_000);
        let visible = 23 - TOP_CHROME_ROWS - BOTTOM_CHROME_ROWS;
        assert_eq!(vm.items.len(), visible);
        assert_eq!(vm.columns, 1);
        assert!(vm.items[vm.selected_index].is_selected);
        assert_eq!(vm.items[vm.selected_index].name, "Item 41");
    }

    #[test]
    fn card_viewmodel_fills_grid_rows() {
        let state = loaded_state(ViewMode::Card, 20);
        let cols = CARD_WIDTH * 3 + CARD_GAP * 2;
        let rows = TOP_CHROME_ROWS + BOTTOM_CHROME_ROWS + CARD_HEIGHT * 2;

        let vm = state.compute_viewmodel_at(rows, cols, 1_000);
        assert_eq!(vm.columns, 3);
        assert_eq!(vm.items.len(), 6);
        assert_eq!(vm.layout, ViewMode::Card);
    }

    #[test]
    fn header_and_stats_reflect_load() {
        let state = loaded_state(ViewMode::Card, 4);
        let vm = state.compute_viewmodel_at(40, 120, 1_030);

        assert_eq!(vm.header.status, "4 products, loaded just now");
        assert!(!vm.header.is_error);
        assert_eq!(vm.stats.total, "Total Products: 4");
        assert_eq!(vm.stats.average, "Average Price: $2.50");
    }

    #[test]
    fn header_count_is_pluralized() {
        let one = loaded_state(ViewMode::Card, 1);
        assert_eq!(one.compute_viewmodel_at(40, 120, 1_000).header.status, "1 product, loaded just now");

        let none = loaded_state(ViewMode::Card, 0);
        assert_eq!(none.compute_viewmodel_at(40, 120, 1_000).header.status, "0 products, loaded just now");

        let mut reloading = loaded_state(ViewMode::Card, 1);
        reloading.store.begin_load();
        assert_eq!(reloading.compute_viewmodel_at(40, 120, 1_000).header.status, "1 product, reloading...");
    }

    #[test]
    fn image_uri_is_fitted_to_its_slot() {
        let uri = "https://via.placeholder.com/250x150?text=Wireless+Mouse";
        let mut state = AppState::new(Theme::default(), ViewMode::Card, Duration::from_millis(300), None);
        let request_id = state.store.begin_load();
        let products = vec![
            Product::new(ProductId::from(1), "Mouse", "", 25.99, uri),
            Product::new(ProductId::from(2), "Lamp", "", 34.5, "lamp.png"),
        ];
        state.store.complete_load(request_id, FeedBatch { products, rejected: 0 }, 0);
        state.refresh_derived();

        let cards = state.compute_viewmodel_at(40, 120, 0);
        assert_eq!(cards.items[0].image, fit_text(uri, &[], CARD_TEXT_WIDTH).0);
        assert_eq!(char_len(&cards.items[0].image), CARD_TEXT_WIDTH);
        assert!(cards.items[0].image.ends_with("..."));
        assert_eq!(cards.items[1].image, "lamp.png");

        state.view_mode = ViewMode::List;
        let list = state.compute_viewmodel_at(40, 120, 0);
        assert_eq!(char_len(&list.items[0].image), LIST_IMAGE_WIDTH);
        assert!(list.items[0].image.starts_with("https://via.placeholder"));
        assert_eq!(list.items[1].image, "lamp.png");
    }

    #[test]
    fn sort_label_shows_direction() {
        let mut state = loaded_state(ViewMode::Card, 2);
        assert_eq!(state.compute_viewmodel_at(40, 120, 0).controls.sort_label, "Price (none)");

        state.advance_sort();
        let controls = state.compute_viewmodel_at(40, 120, 0).controls;
        assert_eq!(controls.sort_label, "Price ↑ (ascending)");
        assert!(controls.sort_active);

        state.advance_sort();
        assert_eq!(
            state.compute_viewmodel_at(40, 120, 0).controls.sort_label,
            "Price ↓ (descending)"
        );
    }

    #[test]
    fn effective_query_is_highlighted() {
        let mut state = loaded_state(ViewMode::List, 3);
        state.commit_query("item 2".to_string());

        let vm = state.compute_viewmodel_at(40, 120, 0);
        assert_eq!(vm.items.len(), 1);
        assert_eq!(vm.items[0].name_highlights, vec![(0, 6)]);
        assert_eq!(vm.items[0].description_highlights, vec![(0, 6)]);
    }

    #[test]
    fn empty_states_distinguish_failure_from_no_match() {
        let mut state = AppState::new(Theme::default(), ViewMode::Card, Duration::from_millis(300), None);
        let request_id = state.store.begin_load();
        state.store.fail_load(request_id, "Feed request failed with HTTP status 500");
        state.refresh_derived();

        let failed = state.compute_viewmodel_at(40, 120, 0);
        assert_eq!(failed.empty_state.map(|e| e.message), Some("Could not load products".to_string()));
        assert!(failed.header.is_error);

        let mut state = loaded_state(ViewMode::Card, 3);
        state.commit_query("nonexistent".to_string());
        let no_match = state.compute_viewmodel_at(40, 120, 0);
        assert_eq!(
            no_match.empty_state.map(|e| e.message),
            Some("No products match \"nonexistent\"".to_string())
        );
        assert_eq!(no_match.stats.total, "Total Products: 0");
        assert_eq!(no_match.stats.average, "Average Price: $0.00");
    }
}
