//! Leveled logging bridge with noise suppression
//!
//! This crate adapts the seven-level, context-aware `ContextLogger`
//! interface onto a four-level `DiagnosticSink`:
//! - Single adapter type (`LevelMappingAdapter`) translating every call
//!   into at most one sink call
//! - Demotion of end-of-stream noise from UDP decoding to debug level
//! - A `tracing`-backed sink and subscriber initialisation via `init(profile)`
//! - Test capture tooling (`MemorySink`, `init_test_capture`)
//!
//! # Usage
//!
//! ```rust
//! use bridgelog_errors::DiagnosticError;
//! use bridgelog_logging::{log_args, ContextLogger, LevelMappingAdapter};
//!
//! let logger = LevelMappingAdapter::with_tracing(DiagnosticError::new);
//! logger.info(&log_args!["listening on ", 5353u16]);
//!
//! // Recorded at debug level, not error
//! logger.error(&log_args!["decode udp message: EOF"]);
//! ```

pub mod adapter;
pub mod init;
pub mod logger;
pub mod macros;
pub mod memory_sink;
pub mod noise;
pub mod sink;
pub mod test_capture;

pub use adapter::LevelMappingAdapter;
pub use bridgelog_core_types::{DiagnosticLevel, LogArg, LogContext, Severity};
pub use init::{init, Profile};
pub use logger::ContextLogger;
pub use memory_sink::{MemorySink, RecordedCall};
pub use noise::{is_noisy_error, is_noisy_text, should_demote};
pub use sink::{DiagnosticSink, TracingSink};
pub use test_capture::{init_test_capture, CapturedEvent, TestCapture};
