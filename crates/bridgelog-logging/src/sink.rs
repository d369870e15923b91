//! The underlying diagnostic facility
//!
//! `DiagnosticSink` is the four-level recording interface the adapter
//! forwards to. `TracingSink` implements it on top of `tracing`.

use bridgelog_core_types::{schema::COMPONENT_BRIDGE, DiagnosticLevel, LogArg, LogContext};
use bridgelog_errors::{DiagnosticError, ErrorConstructor};
use std::sync::Arc;
use tracing::Level;

/// Leveled, context-aware recorder
///
/// Implementations handle their own concurrency; they are called from
/// any thread without coordination.
pub trait DiagnosticSink: Send + Sync {
    fn log_debug(&self, ctx: &LogContext, args: &[LogArg]);
    fn log_info(&self, ctx: &LogContext, args: &[LogArg]);
    fn log_warning(&self, ctx: &LogContext, args: &[LogArg]);
    fn log_error(&self, ctx: &LogContext, args: &[LogArg]);

    /// Record at a level chosen at runtime
    fn log(&self, level: DiagnosticLevel, ctx: &LogContext, args: &[LogArg]) {
        match level {
            DiagnosticLevel::Debug => self.log_debug(ctx, args),
            DiagnosticLevel::Info => self.log_info(ctx, args),
            DiagnosticLevel::Warning => self.log_warning(ctx, args),
            DiagnosticLevel::Error => self.log_error(ctx, args),
        }
    }
}

impl<T: DiagnosticSink + ?Sized> DiagnosticSink for Arc<T> {
    fn log_debug(&self, ctx: &LogContext, args: &[LogArg]) {
        (**self).log_debug(ctx, args)
    }

    fn log_info(&self, ctx: &LogContext, args: &[LogArg]) {
        (**self).log_info(ctx, args)
    }

    fn log_warning(&self, ctx: &LogContext, args: &[LogArg]) {
        (**self).log_warning(ctx, args)
    }

    fn log_error(&self, ctx: &LogContext, args: &[LogArg]) {
        (**self).log_error(ctx, args)
    }
}

impl<T: DiagnosticSink + ?Sized> DiagnosticSink for &T {
    fn log_debug(&self, ctx: &LogContext, args: &[LogArg]) {
        (**self).log_debug(ctx, args)
    }

    fn log_info(&self, ctx: &LogContext, args: &[LogArg]) {
        (**self).log_info(ctx, args)
    }

    fn log_warning(&self, ctx: &LogContext, args: &[LogArg]) {
        (**self).log_warning(ctx, args)
    }

    fn log_error(&self, ctx: &LogContext, args: &[LogArg]) {
        (**self).log_error(ctx, args)
    }
}

macro_rules! emit {
    ($level:expr, $ctx:expr, $message:expr) => {
        tracing::event!(
            target: "bridgelog",
            $level,
            component = COMPONENT_BRIDGE,
            request_id = $ctx.request_id().map(|id| id.as_str()),
            trace_id = $ctx.trace_id().map(|id| id.as_str()),
            "{}",
            $message
        )
    };
}

/// Diagnostic facility backed by `tracing` events
///
/// Each call becomes one event under the `bridgelog` target. The message
/// is the record built by the facility's error constructor; correlation
/// ids from the context are attached as fields when present.
#[derive(Debug, Clone, Copy)]
pub struct TracingSink {
    new_error: ErrorConstructor,
}

impl TracingSink {
    pub fn new() -> Self {
        Self::with_constructor(DiagnosticError::new)
    }

    /// Use a custom constructor to build the recorded message
    pub fn with_constructor(new_error: ErrorConstructor) -> Self {
        Self { new_error }
    }

    fn render(&self, args: &[LogArg]) -> DiagnosticError {
        (self.new_error)(args)
    }
}

impl Default for TracingSink {
    fn default() -> Self {
        Self::new()
    }
}

impl DiagnosticSink for TracingSink {
    fn log_debug(&self, ctx: &LogContext, args: &[LogArg]) {
        let record = self.render(args);
        emit!(Level::DEBUG, ctx, record);
    }

    fn log_info(&self, ctx: &LogContext, args: &[LogArg]) {
        let record = self.render(args);
        emit!(Level::INFO, ctx, record);
    }

    fn log_warning(&self, ctx: &LogContext, args: &[LogArg]) {
        let record = self.render(args);
        emit!(Level::WARN, ctx, record);
    }

    fn log_error(&self, ctx: &LogContext, args: &[LogArg]) {
        let record = self.render(args);
        emit!(Level::ERROR, ctx, record);
    }
}
