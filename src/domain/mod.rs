//! Domain layer for the Zatalog plugin.
//!
//! Core types that know nothing about Zellij, rendering, or the feed
//! transport.
//!
//! # Organization
//!
//! - [`error`]: Error types and result aliases
//! - [`product`]: Product record and price formatting

pub mod error;
pub mod product;

pub use error::{Result, ZatalogError};
pub use product::{format_price, Product, ProductId};
