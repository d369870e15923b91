//! Error facility for bridgelog
//!
//! - `DiagnosticError`: the diagnostic facility's native error/record object,
//!   built from a list of log arguments
//! - `EndOfStream`: canonical end-of-stream sentinels
//! - `chain`: bounded traversal of an error's cause chain

pub mod chain;
pub mod diagnostic;
pub mod eof;

pub use chain::{chain, chain_is, render_chain, Chain, MAX_CHAIN_DEPTH};
pub use diagnostic::{DiagnosticError, ErrorConstructor};
pub use eof::EndOfStream;
