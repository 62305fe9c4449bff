//! Summary statistics over the derived product subset.

use crate::domain::Product;

/// Count and mean price of a product sequence.
///
/// `average_price` is kept at full precision; rounding happens only when the
/// value is formatted for display.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Statistics {
    /// Number of products.
    pub count: usize,
    /// Arithmetic mean of prices, `0.0` for an empty sequence.
    pub average_price: f64,
}

impl Statistics {
    /// Aggregates `products`.
    ///
    /// # Example
    ///
    /// ```rust
    /// use zatalog::catalog::Statistics;
    ///
    /// let stats = Statistics::from_products(&[]);
    /// assert_eq!(stats.count, 0);
    /// assert_eq!(stats.average_price, 0.0);
    /// ```
    #[must_use]
    pub fn from_products(products: &[Product]) -> Self {
        if products.is_empty() {
            return Self::default();
        }

        let total: f64 = products.iter().map(|p| p.price).sum();
        #[allow(clippy::cast_precision_loss)]
        let average_price = total / products.len() as f64;

        Self {
            count: products.len(),
            average_price,
        }
    }
}
