//! Canonical schema constants for structured log events
//!
//! These constants keep field names consistent between the tracing
//! facility and the test capture tooling.

// Canonical field keys for structured logging
pub const FIELD_COMPONENT: &str = "component";
pub const FIELD_MESSAGE: &str = "message";
pub const FIELD_REQUEST_ID: &str = "request_id";
pub const FIELD_TRACE_ID: &str = "trace_id";

/// Value of the `component` field on every bridged event
pub const COMPONENT_BRIDGE: &str = "bridgelog";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_field_keys_are_distinct() {
        let keys = [
            FIELD_COMPONENT,
            FIELD_MESSAGE,
            FIELD_REQUEST_ID,
            FIELD_TRACE_ID,
        ];
        for (i, a) in keys.iter().enumerate() {
            assert!(!a.is_empty());
            for b in &keys[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }
}
