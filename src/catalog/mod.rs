//! Catalog layer: the product store and the derived-state pipeline.
//!
//! ```text
//! ProductStore ──► filter (effective query) ──► sort (SortMode) ──► DerivedView
//!                                                                   ├─► renderers
//!                                                                   └─► Statistics
//! ```
//!
//! # Modules
//!
//! - `store`: Product list ownership and load lifecycle
//! - `filter`: Case-insensitive substring matching
//! - `sort`: Three-state stable price ordering
//! - `stats`: Count and mean price
//! - `derived`: Memoized composition of the above

pub mod derived;
pub mod filter;
pub mod sort;
pub mod stats;
pub mod store;

pub use derived::{derive_view, DerivedCache, DerivedView};
pub use filter::{filter_products, match_ranges, matches_lowercased};
pub use sort::{sort_products, SortMode};
pub use stats::Statistics;
pub use store::{describe_age, LoadStatus, ProductStore};
