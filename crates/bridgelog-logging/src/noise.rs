//! Noise-demotion predicate
//!
//! UDP transports usually end each logical connection with a bare
//! end-of-stream instead of a close handshake, so the decoder reports an
//! EOF for every one of them. Error-level calls describing that condition
//! are recorded at debug level instead.

use bridgelog_core_types::LogArg;
use bridgelog_errors::{chain_is, render_chain, EndOfStream};
use std::error::Error;

const UDP_DECODE_PHRASE: &str = "decode udp message";
const EOF_PHRASE: &str = "eof";

/// Whether an error-level call with these arguments should be demoted
///
/// True as soon as any argument is a noisy error or a noisy string.
/// Nil errors and other values never match; an empty list never demotes.
pub fn should_demote(args: &[LogArg]) -> bool {
    args.iter().any(|arg| {
        if let Some(err) = arg.as_error() {
            return is_noisy_error(err);
        }
        arg.as_text().is_some_and(is_noisy_text)
    })
}

/// Classify a single error value
///
/// Noisy if it is, or wraps, an end-of-stream sentinel, or if its message
/// (including causes) mentions both a UDP decode and an EOF.
pub fn is_noisy_error(err: &(dyn Error + 'static)) -> bool {
    chain_is(err, EndOfStream::matches) || is_noisy_text(&render_chain(err))
}

/// Case-insensitive match on "decode udp message" together with "eof"
pub fn is_noisy_text(s: &str) -> bool {
    let lower = s.to_lowercase();
    lower.contains(UDP_DECODE_PHRASE) && lower.contains(EOF_PHRASE)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;

    #[test]
    fn test_noisy_text_is_case_insensitive() {
        assert!(is_noisy_text("decode UDP message: EOF"));
        assert!(is_noisy_text("Decode Udp Message failed: unexpected eof"));
    }

    #[test]
    fn test_text_needs_both_phrases() {
        assert!(!is_noisy_text("decode udp message: checksum mismatch"));
        assert!(!is_noisy_text("read tcp stream: EOF"));
        assert!(!is_noisy_text(""));
    }

    #[test]
    fn test_sentinel_errors_are_noisy() {
        assert!(is_noisy_error(&EndOfStream::Eof));
        assert!(is_noisy_error(&EndOfStream::UnexpectedEof));
        assert!(is_noisy_error(&io::Error::new(
            io::ErrorKind::UnexpectedEof,
            "early end"
        )));
    }

    #[test]
    fn test_unrelated_error_is_not_noisy() {
        let err = io::Error::new(io::ErrorKind::ConnectionReset, "connection reset by peer");
        assert!(!is_noisy_error(&err));
    }

    #[test]
    fn test_empty_arguments_never_demote() {
        assert!(!should_demote(&[]));
    }

    #[test]
    fn test_nil_error_and_values_are_inert() {
        assert!(!should_demote(&[LogArg::nil_error(), LogArg::from(7u32)]));
        assert!(should_demote(&[
            LogArg::nil_error(),
            LogArg::from(7u32),
            LogArg::from("decode udp message: got eof"),
        ]));
    }

    #[test]
    fn test_value_with_phrases_is_inert() {
        // Only strings and errors are inspected
        let arg = LogArg::value("decode udp message: EOF");
        assert!(!should_demote(&[arg]));
    }

    #[test]
    fn test_match_is_position_independent() {
        let noisy = LogArg::error(EndOfStream::Eof);
        let plain = LogArg::from("relay closed");
        assert!(should_demote(&[noisy.clone(), plain.clone()]));
        assert!(should_demote(&[plain, noisy]));
    }
}
