//! Per-request diagnostics hooks.
//!
//! The dispatcher reports every outgoing request, and every transport failure, to a
//! [`RequestObserver`]. The default observer writes to `tracing`; [`LastRequest`] also
//! keeps the most recent request around for inspection.

use serde::Serialize;
use std::sync::{Arc, RwLock};
use tracing::{error, trace};

use crate::query::Params;

/// Description of one outgoing request.
///
/// Never contains the API key: credentials travel in headers, which are not recorded.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RequestRecord {
    /// HTTP method (`GET`, `POST`, …).
    pub method: String,
    /// Fully resolved request URL.
    pub url: String,
    /// Parameters after path identifiers were removed.
    pub params: Params,
}

impl RequestRecord {
    /// Create a new record.
    #[must_use]
    pub fn new(method: impl Into<String>, url: impl Into<String>, params: Params) -> Self {
        Self {
            method: method.into(),
            url: url.into(),
            params,
        }
    }
}

/// Observer notified by the dispatcher around each request.
#[cfg_attr(test, mockall::automock)]
pub trait RequestObserver: Send + Sync {
    /// Called immediately before the request is sent.
    fn on_request(&self, record: &RequestRecord);

    /// Called once when the request could not be completed at the transport level.
    fn on_transport_error(&self, record: &RequestRecord, error: &str);
}

/// Observer that writes request diagnostics to `tracing`.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingObserver;

impl RequestObserver for TracingObserver {
    fn on_request(&self, record: &RequestRecord) {
        trace!(
            method = %record.method,
            url = %record.url,
            params = record.params.len(),
            "Sending Vultr request"
        );
    }

    fn on_transport_error(&self, record: &RequestRecord, error: &str) {
        error!(
            method = %record.method,
            url = %record.url,
            error = %error,
            "Vultr request failed before a response was received"
        );
    }
}

/// Observer that remembers the most recent request, then delegates.
#[derive(Clone)]
pub struct LastRequest {
    inner: Arc<dyn RequestObserver>,
    last: Arc<RwLock<Option<RequestRecord>>>,
}

impl LastRequest {
    /// Record requests and forward them to `inner`.
    #[must_use]
    pub fn new(inner: Arc<dyn RequestObserver>) -> Self {
        Self {
            inner,
            last: Arc::new(RwLock::new(None)),
        }
    }

    /// The most recently observed request, if any.
    #[must_use]
    pub fn last(&self) -> Option<RequestRecord> {
        self.last.read().ok().and_then(|last| last.clone())
    }
}

impl Default for LastRequest {
    fn default() -> Self {
        Self::new(Arc::new(TracingObserver))
    }
}

impl std::fmt::Debug for LastRequest {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LastRequest")
            .field("last", &self.last())
            .finish_non_exhaustive()
    }
}

impl RequestObserver for LastRequest {
    fn on_request(&self, record: &RequestRecord) {
        if let Ok(mut last) = self.last.write() {
            *last = Some(record.clone());
        }
        self.inner.on_request(record);
    }

    fn on_transport_error(&self, record: &RequestRecord, error: &str) {
        self.inner.on_transport_error(record, error);
    }
}
