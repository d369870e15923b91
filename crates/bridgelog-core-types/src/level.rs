//! Severity vocabularies
//!
//! Callers log with seven severities; the diagnostic facility only
//! understands four. `Severity::diagnostic_level` is the single place
//! where one maps onto the other.

use std::fmt;

/// Severity requested by a caller, ordered from least to most important
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Severity {
    Trace,
    Debug,
    Info,
    Warn,
    Error,
    Fatal,
    Panic,
}

impl Severity {
    /// Facility level this severity is recorded at
    ///
    /// Returns `None` for trace, fatal and panic: the facility has no
    /// such levels and those calls are dropped rather than approximated.
    pub fn diagnostic_level(&self) -> Option<DiagnosticLevel> {
        match self {
            Severity::Debug => Some(DiagnosticLevel::Debug),
            Severity::Info => Some(DiagnosticLevel::Info),
            Severity::Warn => Some(DiagnosticLevel::Warning),
            Severity::Error => Some(DiagnosticLevel::Error),
            Severity::Trace | Severity::Fatal | Severity::Panic => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Trace => "trace",
            Severity::Debug => "debug",
            Severity::Info => "info",
            Severity::Warn => "warn",
            Severity::Error => "error",
            Severity::Fatal => "fatal",
            Severity::Panic => "panic",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Level understood by the underlying diagnostic facility
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum DiagnosticLevel {
    Debug,
    Info,
    Warning,
    Error,
}

impl DiagnosticLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            DiagnosticLevel::Debug => "debug",
            DiagnosticLevel::Info => "info",
            DiagnosticLevel::Warning => "warning",
            DiagnosticLevel::Error => "error",
        }
    }
}

impl fmt::Display for DiagnosticLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
