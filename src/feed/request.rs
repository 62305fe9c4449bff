//! Feed request descriptors.
//!
//! Zellij echoes the context map of a web request back in the matching
//! `WebRequestResult` event. The request id is stored there so the handler
//! can tell the current load apart from superseded ones.

use std::collections::BTreeMap;

/// Context key carrying the load-cycle request id.
pub const REQUEST_ID_KEY: &str = "zatalog_request_id";

/// One HTTP GET of the product feed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeedRequest {
    /// Load-cycle id assigned by the product store.
    pub request_id: u64,
    /// Absolute feed URL.
    pub url: String,
}

impl FeedRequest {
    #[must_use]
    pub fn new(request_id: u64, url: impl Into<String>) -> Self {
        Self {
            request_id,
            url: url.into(),
        }
    }

    /// Builds the context map to attach to the web request.
    #[must_use]
    pub fn context(&self) -> BTreeMap<String, String> {
        BTreeMap::from([(REQUEST_ID_KEY.to_string(), self.request_id.to_string())])
    }
}

/// Extracts the request id from a web request result context.
///
/// Returns `None` for results that were not issued by the feed loader.
#[must_use]
pub fn request_id_from_context(context: &BTreeMap<String, String>) -> Option<u64> {
    context.get(REQUEST_ID_KEY)?.parse().ok()
}
