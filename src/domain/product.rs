//! Product domain model.
//!
//! A [`Product`] is one record of the remote catalog feed. Products are
//! immutable once decoded; the store replaces the whole list on every load.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Opaque product identifier.
///
/// Feeds in the wild use either numbers or strings for ids, so both are
/// accepted. Any JSON number is valid, including negative and fractional
/// ones. Two ids are equal only when both kind and value match.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ProductId {
    /// Numeric id, kept exactly as the feed wrote it.
    Number(serde_json::Number),
    /// Textual id.
    Text(String),
}

impl From<u64> for ProductId {
    fn from(n: u64) -> Self {
        Self::Number(n.into())
    }
}

impl fmt::Display for ProductId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(n) => write!(f, "{n}"),
            Self::Text(s) => f.write_str(s),
        }
    }
}

/// A single catalog entry.
///
/// # Fields
///
/// - `id`: Unique identifier within one feed
/// - `name`: Display name, searched case-insensitively
/// - `description`: Free text, searched case-insensitively
/// - `price`: Non-negative price in the feed's currency
/// - `image`: Image URI; terminals can't draw it, so it is shown as text
///   under the description on cards and in its own column in the list
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    pub description: String,
    pub price: f64,
    pub image: String,
}

impl Product {
    /// Creates a product from its parts.
    ///
    /// # Examples
    ///
    /// ```
    /// use zatalog::domain::{Product, ProductId};
    ///
    /// let mouse = Product::new(ProductId::from(1), "Wireless Mouse", "Silent clicks", 25.99, "mouse.png");
    /// assert_eq!(mouse.display_price(), "$25.99");
    /// ```
    #[must_use]
    pub fn new(
        id: ProductId,
        name: impl Into<String>,
        description: impl Into<String>,
        price: f64,
        image: impl Into<String>,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            description: description.into(),
            price,
            image: image.into(),
        }
    }

    /// Returns the price formatted for display, e.g. `"$45.50"`.
    #[must_use]
    pub fn display_price(&self) -> String {
        format_price(self.price)
    }
}

/// Formats an amount as dollars with two fraction digits, rounding half-up.
///
/// `format!("{:.2}")` alone rounds the binary value, which does not always
/// agree with half-up on decimal input; the amount is rounded to whole cents
/// first.
///
/// # Examples
///
/// ```
/// use zatalog::domain::format_price;
///
/// assert_eq!(format_price(45.5), "$45.50");
/// assert_eq!(format_price(0.125), "$0.13");
/// assert_eq!(format_price(0.0), "$0.00");
/// ```
#[must_use]
pub fn format_price(amount: f64) -> String {
    let cents = (amount * 100.0).round();
    format!("${:.2}", cents / 100.0)
}
