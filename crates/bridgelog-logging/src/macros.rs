//! Argument-building macro

/// Build a `Vec<LogArg>` from heterogeneous expressions
///
/// Each expression is converted with `LogArg::from`: strings become
/// text, I/O and crate errors become error arguments, numbers and bools
/// become values.
///
/// # Example
///
/// ```
/// use bridgelog_logging::{log_args, LogArg};
///
/// let args = log_args!["peer ", "10.0.0.7", " dropped after ", 3u32, " retries"];
/// assert_eq!(args.len(), 5);
/// assert!(matches!(args[3], LogArg::Value(_)));
///
/// let empty = log_args![];
/// assert!(empty.is_empty());
/// ```
#[macro_export]
macro_rules! log_args {
    () => {
        ::std::vec::Vec::<$crate::LogArg>::new()
    };
    ($($arg:expr),+ $(,)?) => {
        ::std::vec![$($crate::LogArg::from($arg)),+]
    };
}
