//! Memoized derived view: filter, then sort, then aggregate.
//!
//! The derived subset depends on exactly three inputs: the store revision,
//! the effective query, and the sort mode. [`DerivedCache`] keeps the last
//! result together with that key and recomputes the whole view whenever the
//! key changes. It never patches a previous result.

use super::filter::filter_products;
use super::sort::{sort_products, SortMode};
use super::stats::Statistics;
use super::store::ProductStore;
use crate::domain::Product;

/// Filtered and ordered products plus their statistics.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct DerivedView {
    /// Products to render, in display order.
    pub products: Vec<Product>,
    /// Aggregate over `products`.
    pub stats: Statistics,
}

/// Computes the derived view from scratch.
///
/// # Example
///
/// ```rust
/// use zatalog::catalog::{derive_view, SortMode};
/// use zatalog::domain::{Product, ProductId};
///
/// let products = vec![
///     Product::new(ProductId::from(1), "Mouse", "", 20.0, ""),
///     Product::new(ProductId::from(2), "Mousepad", "", 10.0, ""),
///     Product::new(ProductId::from(3), "Lamp", "", 30.0, ""),
/// ];
/// let view = derive_view(&products, "mouse", SortMode::Ascending);
/// assert_eq!(view.products[0].name, "Mousepad");
/// assert_eq!(view.stats.count, 2);
/// ```
#[must_use]
pub fn derive_view(products: &[Product], query: &str, sort: SortMode) -> DerivedView {
    let mut subset = filter_products(products, query);
    sort_products(&mut subset, sort);
    let stats = Statistics::from_products(&subset);

    DerivedView {
        products: subset,
        stats,
    }
}

/// Memoization key: exactly the inputs the derived view depends on.
#[derive(Debug, Clone, PartialEq, Eq)]
struct DerivedKey {
    revision: u64,
    query: String,
    sort: SortMode,
}

/// Cache for the derived view.
#[derive(Debug, Clone, Default)]
pub struct DerivedCache {
    key: Option<DerivedKey>,
    view: DerivedView,
}

impl DerivedCache {
    /// Brings the cached view up to date with the given inputs.
    ///
    /// Returns `true` if the view was recomputed, `false` on a cache hit.
    pub fn refresh(&mut self, store: &ProductStore, query: &str, sort: SortMode) -> bool {
        let up_to_date = self.key.as_ref().is_some_and(|key| {
            key.revision == store.revision() && key.sort == sort && key.query == query
        });
        if up_to_date {
            return false;
        }

        let _span = tracing::debug_span!("derive_view",
            revision = store.revision(),
            query_len = query.len(),
            sort = ?sort
        ).entered();

        self.view = derive_view(store.products(), query, sort);
        self.key = Some(DerivedKey {
            revision: store.revision(),
            query: query.to_string(),
            sort,
        });

        tracing::debug!(
            count = self.view.stats.count,
            average_price = self.view.stats.average_price,
            "derived view recomputed"
        );
        true
    }

    /// The most recently computed view.
    #[must_use]
    pub const fn view(&self) -> &DerivedView {
        &self.view
    }
}
