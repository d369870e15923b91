//! Logging interface expected by callers

use bridgelog_core_types::{LogArg, LogContext};

/// Seven-level logging interface with context-bound variants
///
/// Every operation is fire-and-forget: it returns immediately and never
/// reports failure to the caller.
pub trait ContextLogger: Send + Sync {
    fn trace(&self, args: &[LogArg]);
    fn debug(&self, args: &[LogArg]);
    fn info(&self, args: &[LogArg]);
    fn warn(&self, args: &[LogArg]);
    fn error(&self, args: &[LogArg]);
    fn fatal(&self, args: &[LogArg]);
    fn panic(&self, args: &[LogArg]);

    fn trace_context(&self, ctx: &LogContext, args: &[LogArg]);
    fn debug_context(&self, ctx: &LogContext, args: &[LogArg]);
    fn info_context(&self, ctx: &LogContext, args: &[LogArg]);
    fn warn_context(&self, ctx: &LogContext, args: &[LogArg]);
    fn error_context(&self, ctx: &LogContext, args: &[LogArg]);
    fn fatal_context(&self, ctx: &LogContext, args: &[LogArg]);
    fn panic_context(&self, ctx: &LogContext, args: &[LogArg]);
}
