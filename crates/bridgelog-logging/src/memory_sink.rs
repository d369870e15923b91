//! In-memory diagnostic sink for asserting routing decisions

use crate::sink::DiagnosticSink;
use bridgelog_core_types::{DiagnosticLevel, LogArg, LogContext};
use bridgelog_errors::DiagnosticError;
use std::sync::Mutex;

/// One call received by a `MemorySink`
#[derive(Debug, Clone)]
pub struct RecordedCall {
    pub level: DiagnosticLevel,
    pub context: LogContext,
    pub message: String,
    pub arg_count: usize,
}

/// Sink that keeps every call it receives
#[derive(Debug, Default)]
pub struct MemorySink {
    calls: Mutex<Vec<RecordedCall>>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of all recorded calls, in arrival order
    pub fn calls(&self) -> Vec<RecordedCall> {
        self.calls.lock().map(|c| c.clone()).unwrap_or_default()
    }

    /// Number of calls recorded at `level`
    pub fn count(&self, level: DiagnosticLevel) -> usize {
        self.calls
            .lock()
            .map(|c| c.iter().filter(|call| call.level == level).count())
            .unwrap_or_default()
    }

    pub fn last(&self) -> Option<RecordedCall> {
        self.calls.lock().ok().and_then(|c| c.last().cloned())
    }

    pub fn is_empty(&self) -> bool {
        self.calls.lock().map(|c| c.is_empty()).unwrap_or(true)
    }

    pub fn clear(&self) {
        self.calls.lock().map(|mut c| c.clear()).ok();
    }

    fn push(&self, level: DiagnosticLevel, ctx: &LogContext, args: &[LogArg]) {
        let call = RecordedCall {
            level,
            context: ctx.clone(),
            message: DiagnosticError::new(args).to_string(),
            arg_count: args.len(),
        };
        self.calls.lock().map(|mut c| c.push(call)).ok();
    }
}

impl DiagnosticSink for MemorySink {
    fn log_debug(&self, ctx: &LogContext, args: &[LogArg]) {
        self.push(DiagnosticLevel::Debug, ctx, args);
    }

    fn log_info(&self, ctx: &LogContext, args: &[LogArg]) {
        self.push(DiagnosticLevel::Info, ctx, args);
    }

    fn log_warning(&self, ctx: &LogContext, args: &[LogArg]) {
        self.push(DiagnosticLevel::Warning, ctx, args);
    }

    fn log_error(&self, ctx: &LogContext, args: &[LogArg]) {
        self.push(DiagnosticLevel::Error, ctx, args);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_records_in_order() {
        let sink = MemorySink::new();
        sink.log_info(&LogContext::background(), &[LogArg::from("first")]);
        sink.log_warning(&LogContext::background(), &[LogArg::from("second")]);

        let calls = sink.calls();
        assert_eq!(calls.len(), 2);
        assert_eq!(calls[0].message, "first");
        assert_eq!(calls[1].level, DiagnosticLevel::Warning);
        assert_eq!(sink.count(DiagnosticLevel::Info), 1);
    }

    #[test]
    fn test_clear() {
        let sink = MemorySink::new();
        sink.log_error(&LogContext::background(), &[]);
        assert!(!sink.is_empty());

        sink.clear();
        assert!(sink.is_empty());
        assert!(sink.last().is_none());
    }
}
