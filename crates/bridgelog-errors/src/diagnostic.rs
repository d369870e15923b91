use bridgelog_core_types::{DiagnosticLevel, DynError, LogArg};
use std::fmt::Write as _;
use std::sync::Arc;

/// Signature of the facility's error-construction function
///
/// The logging adapter is wired with one of these; `DiagnosticError::new`
/// is the canonical implementation.
pub type ErrorConstructor = fn(&[LogArg]) -> DiagnosticError;

/// Native error/record object of the diagnostic facility
///
/// Built from the same argument list a log call receives. The message is
/// the arguments rendered in order and concatenated; the first non-nil
/// error argument becomes the cause.
#[derive(Debug, Clone)]
pub struct DiagnosticError {
    level: DiagnosticLevel,
    message: String,
    source: Option<Arc<DynError>>,
}

impl DiagnosticError {
    /// Build a record from log arguments, at error level
    pub fn new(args: &[LogArg]) -> Self {
        let mut message = String::new();
        for arg in args {
            // Writing into a String cannot fail
            let _ = write!(message, "{}", arg);
        }

        let source = args.iter().find_map(|arg| match arg {
            LogArg::Error(Some(err)) => Some(Arc::clone(err)),
            _ => None,
        });

        Self {
            level: DiagnosticLevel::Error,
            message,
            source,
        }
    }

    /// Set the level this record is reported at
    pub fn with_level(mut self, level: DiagnosticLevel) -> Self {
        self.level = level;
        self
    }

    /// Replace the message
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = message.into();
        self
    }

    /// Set the underlying cause
    pub fn with_source<E>(mut self, source: E) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        self.source = Some(Arc::new(source));
        self
    }

    pub fn level(&self) -> DiagnosticLevel {
        self.level
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    /// Get the cause, if any
    pub fn source_error(&self) -> Option<&DynError> {
        self.source.as_deref()
    }
}

impl std::fmt::Display for DiagnosticError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.message)
    }
}

impl std::error::Error for DiagnosticError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.source
            .as_deref()
            .map(|err| err as &(dyn std::error::Error + 'static))
    }
}

impl From<DiagnosticError> for LogArg {
    fn from(err: DiagnosticError) -> Self {
        LogArg::error(err)
    }
}
