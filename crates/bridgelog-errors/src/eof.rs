//! Canonical end-of-stream sentinels

use bridgelog_core_types::LogArg;
use std::io;
use thiserror::Error;

/// A read reached the end of available data
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EndOfStream {
    /// Clean end of input
    #[error("EOF")]
    Eof,

    /// Input ended in the middle of a frame
    #[error("unexpected EOF")]
    UnexpectedEof,
}

impl EndOfStream {
    /// Whether this single error value is an end-of-stream sentinel
    ///
    /// Matches `EndOfStream` itself and `std::io::Error` of kind
    /// `UnexpectedEof`. Does not look at causes; see `chain_is` for that.
    pub fn matches(err: &(dyn std::error::Error + 'static)) -> bool {
        if err.downcast_ref::<EndOfStream>().is_some() {
            return true;
        }
        err.downcast_ref::<io::Error>()
            .is_some_and(|io_err| io_err.kind() == io::ErrorKind::UnexpectedEof)
    }
}

impl From<EndOfStream> for io::Error {
    fn from(eos: EndOfStream) -> Self {
        io::Error::new(io::ErrorKind::UnexpectedEof, eos)
    }
}

impl From<EndOfStream> for LogArg {
    fn from(eos: EndOfStream) -> Self {
        LogArg::error(eos)
    }
}
