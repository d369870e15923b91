//! Level-mapping adapter
//!
//! Translates each `ContextLogger` call into at most one `DiagnosticSink`
//! call. Debug, info and warn map one to one. Error maps to error unless
//! the noise predicate demotes it to debug. Trace, fatal and panic have no
//! counterpart in the facility and are dropped.

use crate::logger::ContextLogger;
use crate::noise::should_demote;
use crate::sink::{DiagnosticSink, TracingSink};
use bridgelog_core_types::{DiagnosticLevel, LogArg, LogContext, Severity};
use bridgelog_errors::{DiagnosticError, ErrorConstructor};

/// `ContextLogger` implementation forwarding to a `DiagnosticSink`
///
/// Holds no mutable state. The error constructor is kept to match the
/// facility's error-producing convention; the routing logic never calls it.
pub struct LevelMappingAdapter<S> {
    sink: S,
    new_error: ErrorConstructor,
}

impl<S: DiagnosticSink> LevelMappingAdapter<S> {
    pub fn new(sink: S, new_error: ErrorConstructor) -> Self {
        Self { sink, new_error }
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    /// Build a facility error from log arguments with the wired constructor
    pub fn new_error(&self, args: &[LogArg]) -> DiagnosticError {
        (self.new_error)(args)
    }

    /// Facility level a call would be recorded at, or `None` if dropped
    pub fn resolve(&self, severity: Severity, args: &[LogArg]) -> Option<DiagnosticLevel> {
        match severity.diagnostic_level()? {
            DiagnosticLevel::Error if should_demote(args) => Some(DiagnosticLevel::Debug),
            level => Some(level),
        }
    }

    fn record(&self, severity: Severity, ctx: &LogContext, args: &[LogArg]) {
        if let Some(level) = self.resolve(severity, args) {
            self.sink.log(level, ctx, args);
        }
    }
}

impl LevelMappingAdapter<TracingSink> {
    /// Adapter over a `TracingSink` sharing the same error constructor
    pub fn with_tracing(new_error: ErrorConstructor) -> Self {
        Self::new(TracingSink::with_constructor(new_error), new_error)
    }
}

impl<S: DiagnosticSink> ContextLogger for LevelMappingAdapter<S> {
    fn trace(&self, _args: &[LogArg]) {}

    fn debug(&self, args: &[LogArg]) {
        self.record(Severity::Debug, &LogContext::background(), args);
    }

    fn info(&self, args: &[LogArg]) {
        self.record(Severity::Info, &LogContext::background(), args);
    }

    fn warn(&self, args: &[LogArg]) {
        self.record(Severity::Warn, &LogContext::background(), args);
    }

    fn error(&self, args: &[LogArg]) {
        self.record(Severity::Error, &LogContext::background(), args);
    }

    fn fatal(&self, _args: &[LogArg]) {}

    fn panic(&self, _args: &[LogArg]) {}

    fn trace_context(&self, _ctx: &LogContext, _args: &[LogArg]) {}

    fn debug_context(&self, ctx: &LogContext, args: &[LogArg]) {
        self.record(Severity::Debug, ctx, args);
    }

    fn info_context(&self, ctx: &LogContext, args: &[LogArg]) {
        self.record(Severity::Info, ctx, args);
    }

    fn warn_context(&self, ctx: &LogContext, args: &[LogArg]) {
        self.record(Severity::Warn, ctx, args);
    }

    fn error_context(&self, ctx: &LogContext, args: &[LogArg]) {
        self.record(Severity::Error, ctx, args);
    }

    fn fatal_context(&self, _ctx: &LogContext, _args: &[LogArg]) {}

    fn panic_context(&self, _ctx: &LogContext, _args: &[LogArg]) {}
}

impl<S: std::fmt::Debug> std::fmt::Debug for LevelMappingAdapter<S> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LevelMappingAdapter")
            .field("sink", &self.sink)
            .finish_non_exhaustive()
    }
}
