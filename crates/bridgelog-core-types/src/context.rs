//! Execution context threaded through log calls
//!
//! A `LogContext` carries correlation ids, an optional deadline and a
//! shared cancellation flag. The logging adapter never looks inside it;
//! it only hands it to the diagnostic facility.

use serde::{Deserialize, Serialize};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::{Duration, Instant};
use uuid::Uuid;

/// Unique identifier for a single request or operation
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RequestId(String);

impl RequestId {
    /// Generate a new random RequestId using UUIDv7
    pub fn new() -> Self {
        Self(Uuid::now_v7().to_string())
    }

    /// Get the string representation
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Create from an existing string (for deserialization)
    pub fn from_string(s: String) -> Self {
        Self(s)
    }
}

impl Default for RequestId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for RequestId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Trace identifier for distributed tracing across service boundaries
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TraceId(String);

impl TraceId {
    /// Generate a new random TraceId using UUIDv7
    pub fn new() -> Self {
        Self(Uuid::now_v7().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn from_string(s: String) -> Self {
        Self(s)
    }
}

impl Default for TraceId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for TraceId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Context carried through a log call
///
/// `LogContext::background()` is the empty default used when a caller
/// supplies no context: it has no ids, no deadline and can never be
/// cancelled. Clones share the cancellation flag.
#[derive(Debug, Clone, Default)]
pub struct LogContext {
    request_id: Option<RequestId>,
    trace_id: Option<TraceId>,
    deadline: Option<Instant>,
    cancelled: Option<Arc<AtomicBool>>,
}

impl LogContext {
    /// The non-cancellable, valueless default context
    pub fn background() -> Self {
        Self::default()
    }

    /// Create a cancellable context with a fresh RequestId
    pub fn new() -> Self {
        Self {
            request_id: Some(RequestId::new()),
            trace_id: None,
            deadline: None,
            cancelled: Some(Arc::new(AtomicBool::new(false))),
        }
    }

    /// Create a cancellable context with an existing RequestId
    pub fn with_request_id(request_id: RequestId) -> Self {
        Self {
            request_id: Some(request_id),
            ..Self::new()
        }
    }

    /// Add a TraceId to the context
    pub fn with_trace_id(mut self, trace_id: TraceId) -> Self {
        self.trace_id = Some(trace_id);
        self
    }

    /// Set a deadline relative to now
    pub fn with_timeout(self, timeout: Duration) -> Self {
        self.with_deadline(Instant::now() + timeout)
    }

    pub fn with_deadline(mut self, deadline: Instant) -> Self {
        self.deadline = Some(deadline);
        self
    }

    pub fn request_id(&self) -> Option<&RequestId> {
        self.request_id.as_ref()
    }

    pub fn trace_id(&self) -> Option<&TraceId> {
        self.trace_id.as_ref()
    }

    pub fn deadline(&self) -> Option<Instant> {
        self.deadline
    }

    /// Signal cancellation to every clone of this context
    ///
    /// Has no effect on a background context.
    pub fn cancel(&self) {
        if let Some(flag) = &self.cancelled {
            flag.store(true, Ordering::Release);
        }
    }

    /// Whether the context was cancelled or its deadline has passed
    pub fn is_done(&self) -> bool {
        let cancelled = self
            .cancelled
            .as_ref()
            .is_some_and(|flag| flag.load(Ordering::Acquire));
        let expired = self.deadline.is_some_and(|d| Instant::now() >= d);
        cancelled || expired
    }

    /// True for a context with no values and no way to be cancelled
    pub fn is_background(&self) -> bool {
        self.request_id.is_none()
            && self.trace_id.is_none()
            && self.deadline.is_none()
            && self.cancelled.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_id_generation() {
        let id1 = RequestId::new();
        let id2 = RequestId::new();

        // Should generate different IDs
        assert_ne!(id1, id2);
        assert!(!id1.as_str().is_empty());
    }

    #[test]
    fn test_request_id_display() {
        let id = RequestId::new();
        assert_eq!(format!("{}", id), id.as_str());
    }

    #[test]
    fn test_background_is_empty() {
        let ctx = LogContext::background();
        assert!(ctx.is_background());
        assert!(ctx.request_id().is_none());
        assert!(ctx.trace_id().is_none());
        assert!(ctx.deadline().is_none());
    }

    #[test]
    fn test_background_cannot_be_cancelled() {
        let ctx = LogContext::background();
        ctx.cancel();
        assert!(!ctx.is_done());
    }

    #[test]
    fn test_cancel_is_shared_between_clones() {
        let ctx = LogContext::new();
        let clone = ctx.clone();
        assert!(!clone.is_done());

        ctx.cancel();
        assert!(clone.is_done());
    }

    #[test]
    fn test_expired_deadline_is_done() {
        let ctx = LogContext::new().with_deadline(Instant::now());
        assert!(ctx.is_done());

        let later = LogContext::new().with_timeout(Duration::from_secs(3600));
        assert!(!later.is_done());
    }

    #[test]
    fn test_context_with_ids() {
        let request_id = RequestId::from_string("req-1".to_string());
        let trace_id = TraceId::new();
        let ctx = LogContext::with_request_id(request_id.clone()).with_trace_id(trace_id.clone());

        assert!(!ctx.is_background());
        assert_eq!(ctx.request_id(), Some(&request_id));
        assert_eq!(ctx.trace_id(), Some(&trace_id));
    }

    #[test]
    fn test_serialization() {
        let id = RequestId::new();
        let json = serde_json::to_string(&id).unwrap();
        let deserialized: RequestId = serde_json::from_str(&json).unwrap();
        assert_eq!(id, deserialized);
    }
}
