//! Feed body decoding and record validation.
//!
//! The feed is a JSON array of product objects. The top level must parse;
//! individual records that are malformed are dropped and counted so one bad
//! entry does not take the whole catalog down.

use crate::domain::error::{Result, ZatalogError};
use crate::domain::{Product, ProductId};
use serde_json::Value;
use std::collections::HashSet;

/// Products decoded from one feed response.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct FeedBatch {
    /// Valid products in feed order.
    pub products: Vec<Product>,
    /// Number of records that were skipped.
    pub rejected: usize,
}

/// Checks that the host reported a successful HTTP status.
///
/// # Errors
///
/// Returns [`ZatalogError::Http`] for any status outside `200..=299`.
pub fn check_status(status: u16) -> Result<()> {
    if (200..300).contains(&status) {
        Ok(())
    } else {
        Err(ZatalogError::Http { status })
    }
}

/// Decodes a feed body into a [`FeedBatch`].
///
/// A record is rejected when it:
/// - is missing a field or has a field of the wrong type
/// - has a negative or non-finite price
/// - repeats an id already seen earlier in the feed
///
/// # Errors
///
/// Returns [`ZatalogError::Decode`] if the body is not JSON or is not an array.
///
/// # Example
///
/// ```rust
/// use zatalog::feed::decode_products;
///
/// let body = br#"[{"id": 1, "name": "Mouse", "description": "", "price": 9.5, "image": ""}, {"id": 2}]"#;
/// let batch = decode_products(body)?;
/// assert_eq!(batch.products.len(), 1);
/// assert_eq!(batch.rejected, 1);
/// # Ok::<(), zatalog::ZatalogError>(())
/// ```
pub fn decode_products(body: &[u8]) -> Result<FeedBatch> {
    let _span = tracing::debug_span!("decode_products", body_len = body.len()).entered();

    let root: Value = serde_json::from_slice(body)
        .map_err(|e| ZatalogError::Decode(format!("feed body is not valid JSON: {e}")))?;

    let records = match root {
        Value::Array(records) => records,
        other => {
            return Err(ZatalogError::Decode(format!(
                "expected a JSON array of products, found {}",
                json_kind(&other)
            )));
        }
    };

    let mut batch = FeedBatch {
        products: Vec::with_capacity(records.len()),
        rejected: 0,
    };
    let mut seen: HashSet<ProductId> = HashSet::with_capacity(records.len());

    for (index, record) in records.into_iter().enumerate() {
        match validate_record(record, &seen) {
            Ok(product) => {
                seen.insert(product.id.clone());
                batch.products.push(product);
            }
            Err(reason) => {
                tracing::warn!(index = index, reason = %reason, "skipping malformed product record");
                batch.rejected += 1;
            }
        }
    }

    tracing::debug!(
        product_count = batch.products.len(),
        rejected = batch.rejected,
        "feed decoded"
    );

    Ok(batch)
}

fn validate_record(record: Value, seen: &HashSet<ProductId>) -> std::result::Result<Product, String> {
    let product: Product = serde_json::from_value(record).map_err(|e| e.to_string())?;

    if !product.price.is_finite() || product.price < 0.0 {
        return Err(format!("invalid price {} for product {}", product.price, product.id));
    }
    if seen.contains(&product.id) {
        return Err(format!("duplicate product id {}", product.id));
    }

    Ok(product)
}

const fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
