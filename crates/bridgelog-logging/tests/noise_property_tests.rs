use bridgelog_core_types::{DiagnosticLevel, LogArg};
use bridgelog_errors::{DiagnosticError, EndOfStream};
use bridgelog_logging::{should_demote, ContextLogger, LevelMappingAdapter, MemorySink};
use proptest::prelude::*;
use thiserror::Error;

#[derive(Error, Debug)]
#[error("{0}")]
struct MessageError(String);

/// Flip the case of each character according to `mask`
fn scramble_case(s: &str, mask: &[bool]) -> String {
    s.chars()
        .zip(mask.iter().cycle())
        .map(|(c, upper)| {
            if *upper {
                c.to_ascii_uppercase()
            } else {
                c.to_ascii_lowercase()
            }
        })
        .collect()
}

fn error_level_of(args: &[LogArg]) -> DiagnosticLevel {
    let logger = LevelMappingAdapter::new(MemorySink::new(), DiagnosticError::new);
    logger.error(args);
    logger.sink().last().map(|c| c.level).unwrap_or(DiagnosticLevel::Error)
}

proptest! {
    #[test]
    fn udp_eof_error_messages_always_demote(
        prefix in "[a-z ]{0,12}",
        middle in "[a-z0-9 :]{0,12}",
        suffix in "[a-z ]{0,12}",
        mask in proptest::collection::vec(any::<bool>(), 1..16),
    ) {
        let message = format!("{}decode udp message{}eof{}", prefix, middle, suffix);
        let message = scramble_case(&message, &mask);
        let arg = LogArg::error(MessageError(message));

        prop_assert_eq!(error_level_of(&[arg]), DiagnosticLevel::Debug);
    }

    #[test]
    fn udp_eof_strings_always_demote(
        before in "[a-z ]{0,12}",
        mask in proptest::collection::vec(any::<bool>(), 1..16),
    ) {
        let message = scramble_case(&format!("{}decode udp message: eof", before), &mask);
        prop_assert!(should_demote(&[LogArg::Text(message)]));
    }

    #[test]
    fn messages_without_eof_never_demote(message in "[a-df-z :]{0,40}") {
        // No 'e' in the alphabet, so neither phrase can appear
        let args = [LogArg::Text(message.clone()), LogArg::error(MessageError(message))];
        prop_assert!(!should_demote(&args));
    }

    #[test]
    fn sentinel_anywhere_in_arguments_demotes(
        position in 0usize..5,
        filler in proptest::collection::vec("[a-z]{1,8}", 4),
    ) {
        let mut args: Vec<LogArg> = filler.into_iter().map(LogArg::Value).collect();
        args.insert(position.min(args.len()), LogArg::from(EndOfStream::Eof));
        prop_assert!(should_demote(&args));
    }

    #[test]
    fn values_and_nil_errors_are_inert(values in proptest::collection::vec(any::<i64>(), 0..8)) {
        let mut args: Vec<LogArg> = values.into_iter().map(LogArg::from).collect();
        args.push(LogArg::nil_error());
        prop_assert_eq!(error_level_of(&args), DiagnosticLevel::Error);
    }
}
