//! Product feed retrieval support.
//!
//! The HTTP call itself is made by the Zellij host (`web_request`); this
//! module only describes requests and turns responses into products.
//!
//! - `request`: Request descriptor and context-map tagging
//! - `decode`: Status check, JSON decoding, and record validation

pub mod decode;
pub mod request;

pub use decode::{check_status, decode_products, FeedBatch};
pub use request::{request_id_from_context, FeedRequest, REQUEST_ID_KEY};
