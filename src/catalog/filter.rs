//! Case-insensitive substring filtering over product names and descriptions.

use crate::domain::Product;

/// Returns `true` if `product` matches an already lowercased needle.
///
/// A product matches when its name or its description contains the needle.
/// The empty needle matches everything.
#[must_use]
pub fn matches_lowercased(product: &Product, needle: &str) -> bool {
    if needle.is_empty() {
        return true;
    }
    product.name.to_lowercase().contains(needle) || product.description.to_lowercase().contains(needle)
}

/// Filters `products` by `query`, preserving store order.
///
/// Matching is a case-insensitive substring test against the name or the
/// description. The query is used verbatim: a query of spaces only matches
/// products containing those spaces. Only the exactly empty query is the
/// identity filter.
///
/// # Example
///
/// ```rust
/// use zatalog::catalog::filter_products;
/// use zatalog::domain::{Product, ProductId};
///
/// let products = vec![
///     Product::new(ProductId::from(1), "Wireless Mouse", "Silent clicks", 25.99, ""),
///     Product::new(ProductId::from(2), "Desk Lamp", "Dimmable", 34.5, ""),
/// ];
/// let hits = filter_products(&products, "MOUSE");
/// assert_eq!(hits.len(), 1);
/// assert_eq!(hits[0].name, "Wireless Mouse");
/// ```
#[must_use]
pub fn filter_products(products: &[Product], query: &str) -> Vec<Product> {
    let _span = tracing::debug_span!("filter_products",
        total_products = products.len(),
        query_len = query.len()
    ).entered();

    if query.is_empty() {
        return products.to_vec();
    }

    let needle = query.to_lowercase();
    let filtered: Vec<Product> = products
        .iter()
        .filter(|product| matches_lowercased(product, &needle))
        .cloned()
        .collect();

    tracing::debug!(filtered_count = filtered.len(), "search filter applied");
    filtered
}

/// Character ranges of every case-insensitive occurrence of `query` in `text`.
///
/// Ranges are `(start, end)` character indices, end exclusive, and never
/// overlap. Returns no ranges for an empty query, or when lowercasing changes
/// the character count of `text` or `query` (the indices would not line up
/// with the original text).
///
/// # Example
///
/// ```rust
/// use zatalog::catalog::match_ranges;
///
/// assert_eq!(match_ranges("Mouse and mousepad", "MOUSE"), vec![(0, 5), (10, 15)]);
/// ```
#[must_use]
pub fn match_ranges(text: &str, query: &str) -> Vec<(usize, usize)> {
    if query.is_empty() {
        return Vec::new();
    }

    let haystack = text.to_lowercase();
    let needle = query.to_lowercase();
    if haystack.chars().count() != text.chars().count()
        || needle.chars().count() != query.chars().count()
    {
        return Vec::new();
    }

    let needle_chars = needle.chars().count();
    haystack
        .match_indices(&needle)
        .map(|(byte_offset, _)| {
            let start = haystack[..byte_offset].chars().count();
            (start, start + needle_chars)
        })
        .collect()
}
