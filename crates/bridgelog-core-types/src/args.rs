//! Heterogeneous log arguments
//!
//! Callers pass an ordered list of arguments of mixed type. `LogArg`
//! keeps the three cases the classification logic cares about apart:
//! plain strings, error values (possibly nil) and everything else.

use std::fmt;
use std::sync::Arc;

/// Thread-safe dynamic error, the form error arguments are carried in
pub type DynError = dyn std::error::Error + Send + Sync + 'static;

/// A single argument of a log call
#[derive(Debug, Clone)]
pub enum LogArg {
    /// A plain string, often a pre-formatted message
    Text(String),
    /// An error value; `None` is a nil error
    Error(Option<Arc<DynError>>),
    /// Any other value, kept in its rendered form
    Value(String),
}

impl LogArg {
    /// Wrap a plain string argument
    pub fn text(s: impl Into<String>) -> Self {
        LogArg::Text(s.into())
    }

    /// Wrap an error value
    pub fn error<E>(err: E) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        LogArg::Error(Some(Arc::new(err)))
    }

    /// A nil error argument
    pub fn nil_error() -> Self {
        LogArg::Error(None)
    }

    /// Wrap any displayable value that is neither a string nor an error
    pub fn value(v: impl fmt::Display) -> Self {
        LogArg::Value(v.to_string())
    }

    /// The string, if this is a plain string argument
    pub fn as_text(&self) -> Option<&str> {
        match self {
            LogArg::Text(s) => Some(s),
            _ => None,
        }
    }

    /// The error, if this is a non-nil error argument
    pub fn as_error(&self) -> Option<&DynError> {
        match self {
            LogArg::Error(Some(err)) => Some(err.as_ref()),
            _ => None,
        }
    }
}

impl fmt::Display for LogArg {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LogArg::Text(s) => f.write_str(s),
            LogArg::Error(Some(err)) => write!(f, "{}", err),
            LogArg::Error(None) => f.write_str("<nil>"),
            LogArg::Value(v) => f.write_str(v),
        }
    }
}

impl From<&str> for LogArg {
    fn from(s: &str) -> Self {
        LogArg::Text(s.to_string())
    }
}

impl From<String> for LogArg {
    fn from(s: String) -> Self {
        LogArg::Text(s)
    }
}

impl From<&String> for LogArg {
    fn from(s: &String) -> Self {
        LogArg::Text(s.clone())
    }
}

impl From<std::io::Error> for LogArg {
    fn from(err: std::io::Error) -> Self {
        LogArg::error(err)
    }
}

impl From<Box<DynError>> for LogArg {
    fn from(err: Box<DynError>) -> Self {
        LogArg::Error(Some(Arc::from(err)))
    }
}

impl From<Arc<DynError>> for LogArg {
    fn from(err: Arc<DynError>) -> Self {
        LogArg::Error(Some(err))
    }
}

impl From<Option<Arc<DynError>>> for LogArg {
    fn from(err: Option<Arc<DynError>>) -> Self {
        LogArg::Error(err)
    }
}

macro_rules! impl_from_value {
    ($($ty:ty),* $(,)?) => {
        $(
            impl From<$ty> for LogArg {
                fn from(v: $ty) -> Self {
                    LogArg::Value(v.to_string())
                }
            }
        )*
    };
}

impl_from_value!(i8, i16, i32, i64, isize, u8, u16, u32, u64, usize, f32, f64, bool, char);
