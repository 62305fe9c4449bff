//! Product store and feed load lifecycle.
//!
//! The store owns the product list of the latest successful load. Every load
//! cycle is identified by a request id; responses for any other id are stale
//! and ignored. A successful load replaces the list wholesale and bumps the
//! revision, which is what the derived-view cache keys on.
//!
//! On a failed load the previous list is kept (retain-last-good) and the
//! failure is recorded in [`LoadStatus::Failed`].

use crate::domain::Product;
use crate::feed::FeedBatch;

/// Number of seconds in one minute.
const SECONDS_PER_MINUTE: i64 = 60;

/// Number of seconds in one hour.
const SECONDS_PER_HOUR: i64 = 3600;

/// Number of seconds in one day.
const SECONDS_PER_DAY: i64 = 86400;

/// State of the most recent load cycle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadStatus {
    /// No load has been requested yet.
    Idle,

    /// A request is in flight.
    Loading {
        /// Id of the outstanding request.
        request_id: u64,
    },

    /// The last request succeeded.
    Loaded {
        /// Unix timestamp of completion.
        loaded_at: i64,
        /// Records dropped by the decoder as malformed.
        rejected: usize,
    },

    /// The last request failed. Previously loaded products, if any, remain.
    Failed {
        /// Description of the failure.
        message: String,
    },
}

/// Holds the raw product list for the current load cycle.
#[derive(Debug, Clone)]
pub struct ProductStore {
    products: Vec<Product>,
    revision: u64,
    status: LoadStatus,
    next_request_id: u64,
}

impl Default for ProductStore {
    fn default() -> Self {
        Self::new()
    }
}

impl ProductStore {
    /// Creates an empty store with no load in progress.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            products: Vec::new(),
            revision: 0,
            status: LoadStatus::Idle,
            next_request_id: 1,
        }
    }

    /// Products of the last successful load, in feed order.
    #[must_use]
    pub fn products(&self) -> &[Product] {
        &self.products
    }

    /// Increments every time the product list is replaced.
    #[must_use]
    pub const fn revision(&self) -> u64 {
        self.revision
    }

    #[must_use]
    pub const fn status(&self) -> &LoadStatus {
        &self.status
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    /// Starts a new load cycle and returns its request id.
    ///
    /// Any request still in flight becomes stale: its response will be
    /// rejected by [`complete_load`](Self::complete_load) and
    /// [`fail_load`](Self::fail_load).
    pub fn begin_load(&mut self) -> u64 {
        let request_id = self.next_request_id;
        self.next_request_id += 1;
        self.status = LoadStatus::Loading { request_id };
        tracing::debug!(request_id = request_id, "feed load started");
        request_id
    }

    /// Returns `true` if `request_id` is the outstanding request.
    #[must_use]
    pub fn is_outstanding(&self, request_id: u64) -> bool {
        matches!(self.status, LoadStatus::Loading { request_id: current } if current == request_id)
    }

    /// Replaces the product list with a decoded batch.
    ///
    /// Returns `false` (and changes nothing) when the response belongs to a
    /// stale or unknown request.
    pub fn complete_load(&mut self, request_id: u64, batch: FeedBatch, loaded_at: i64) -> bool {
        if !self.is_outstanding(request_id) {
            tracing::debug!(request_id = request_id, "ignoring stale feed response");
            return false;
        }

        tracing::debug!(
            request_id = request_id,
            product_count = batch.products.len(),
            rejected = batch.rejected,
            "feed load completed"
        );

        self.products = batch.products;
        self.revision += 1;
        self.status = LoadStatus::Loaded {
            loaded_at,
            rejected: batch.rejected,
        };
        true
    }

    /// Records a failed load, keeping the previous product list.
    ///
    /// Returns `false` when the failure belongs to a stale request.
    pub fn fail_load(&mut self, request_id: u64, message: impl Into<String>) -> bool {
        if !self.is_outstanding(request_id) {
            tracing::debug!(request_id = request_id, "ignoring stale feed failure");
            return false;
        }

        let message = message.into();
        tracing::warn!(
            request_id = request_id,
            error = %message,
            retained_products = self.products.len(),
            "feed load failed"
        );
        self.status = LoadStatus::Failed { message };
        true
    }

    /// Marks the store as failed without a request, e.g. for bad configuration.
    pub fn mark_unavailable(&mut self, message: impl Into<String>) {
        self.status = LoadStatus::Failed { message: message.into() };
    }
}

/// Describes how long ago `then` was, relative to `now` (both Unix seconds).
///
/// - Less than 1 minute: "just now"
/// - Less than 1 hour: "5m ago"
/// - Less than 1 day: "3h ago"
/// - Otherwise: "7d ago"
///
/// # Example
///
/// ```rust
/// use zatalog::catalog::describe_age;
///
/// assert_eq!(describe_age(1_000, 1_000), "just now");
/// assert_eq!(describe_age(1_300, 1_000), "5m ago");
/// ```
#[must_use]
pub fn describe_age(now: i64, then: i64) -> String {
    let diff = (now - then).max(0);

    if diff < SECONDS_PER_MINUTE {
        "just now".to_string()
    } else if diff < SECONDS_PER_HOUR {
        format!("{}m ago", diff / SECONDS_PER_MINUTE)
    } else if diff < SECONDS_PER_DAY {
        format!("{}h ago", diff / SECONDS_PER_HOUR)
    } else {
        format!("{}d ago", diff / SECONDS_PER_DAY)
    }
}
