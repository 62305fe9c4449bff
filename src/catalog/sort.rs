//! Price ordering for the derived product subset.
//!
//! The sort button cycles through three states. Ordering is stable in both
//! directions so products with equal prices keep their post-filter order.

use crate::domain::Product;
use std::cmp::Ordering;

/// Price ordering applied to the filtered subset.
///
/// Only [`SortMode::next`] moves between states:
///
/// ```text
/// None → Ascending → Descending → None
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SortMode {
    /// Feed order.
    #[default]
    None,
    /// Cheapest first.
    Ascending,
    /// Most expensive first.
    Descending,
}

impl SortMode {
    /// Returns the next state in the sort cycle.
    ///
    /// # Example
    ///
    /// ```rust
    /// use zatalog::catalog::SortMode;
    ///
    /// let mode = SortMode::None.next().next().next();
    /// assert_eq!(mode, SortMode::None);
    /// ```
    #[must_use]
    pub const fn next(self) -> Self {
        match self {
            Self::None => Self::Ascending,
            Self::Ascending => Self::Descending,
            Self::Descending => Self::None,
        }
    }

    /// Human-readable name shown next to the sort control.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::None => "none",
            Self::Ascending => "ascending",
            Self::Descending => "descending",
        }
    }

    /// Arrow drawn on the sort control, if any.
    #[must_use]
    pub const fn indicator(self) -> Option<char> {
        match self {
            Self::None => None,
            Self::Ascending => Some('↑'),
            Self::Descending => Some('↓'),
        }
    }
}

/// Orders `products` in place according to `mode`.
///
/// `slice::sort_by` is stable, which gives the tie-break: equal prices keep
/// their relative order. Prices are compared with `f64::total_cmp`; the feed
/// decoder already rejects non-finite prices.
pub fn sort_products(products: &mut [Product], mode: SortMode) {
    let compare: fn(&Product, &Product) -> Ordering = match mode {
        SortMode::None => return,
        SortMode::Ascending => |a, b| a.price.total_cmp(&b.price),
        SortMode::Descending => |a, b| b.price.total_cmp(&a.price),
    };

    tracing::trace!(count = products.len(), mode = ?mode, "sorting by price");
    products.sort_by(compare);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ProductId;

    fn priced(id: u64, price: f64) -> Product {
        Product::new(ProductId::from(id), format!("p{id}"), "", price, "")
    }

    fn ids(products: &[Product]) -> Vec<ProductId> {
        products.iter().map(|p| p.id.clone()).collect()
    }

    #[test]
    fn cycle_visits_every_state_in_order() {
        assert_eq!(SortMode::default(), SortMode::None);
        assert_eq!(SortMode::None.next(), SortMode::Ascending);
        assert_eq!(SortMode::Ascending.next(), SortMode::Descending);
        assert_eq!(SortMode::Descending.next(), SortMode::None);
    }

    #[test]
    fn none_keeps_order() {
        let mut products = vec![priced(1, 3.0), priced(2, 1.0), priced(3, 2.0)];
        sort_products(&mut products, SortMode::None);
        assert_eq!(ids(&products), vec![ProductId::from(1), ProductId::from(2), ProductId::from(3)]);
    }

    #[test]
    fn ascending_is_stable_among_ties() {
        let mut products = vec![priced(1, 5.0), priced(2, 1.0), priced(3, 5.0), priced(4, 1.0)];
        sort_products(&mut products, SortMode::Ascending);
        assert_eq!(
            ids(&products),
            vec![ProductId::from(2), ProductId::from(4), ProductId::from(1), ProductId::from(3)]
        );
    }

    #[test]
    fn descending_is_stable_among_ties() {
        let mut products = vec![priced(1, 5.0), priced(2, 1.0), priced(3, 5.0), priced(4, 1.0)];
        sort_products(&mut products, SortMode::Descending);
        assert_eq!(
            ids(&products),
            vec![ProductId::from(1), ProductId::from(3), ProductId::from(2), ProductId::from(4)]
        );
    }

    #[test]
    fn indicators_match_direction() {
        assert_eq!(SortMode::None.indicator(), None);
        assert_eq!(SortMode::Ascending.indicator(), Some('↑'));
        assert_eq!(SortMode::Descending.indicator(), Some('↓'));
        assert_eq!(SortMode::Descending.label(), "descending");
    }
}
