//! Core types shared across the bridgelog crates
//!
//! This crate provides the vocabulary used by both the error facility
//! and the logging adapter:
//!
//! - **Levels**: `Severity` (caller side) and `DiagnosticLevel` (facility side)
//! - **Arguments**: `LogArg`, the heterogeneous log argument
//! - **Context**: `LogContext` with `RequestId` / `TraceId` correlation
//! - **Schema constants**: Canonical field keys for structured events

pub mod args;
pub mod context;
pub mod level;
pub mod schema;

pub use args::{DynError, LogArg};
pub use context::{LogContext, RequestId, TraceId};
pub use level::{DiagnosticLevel, Severity};
