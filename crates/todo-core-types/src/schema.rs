//! Names shared by every structured log line
//!
//! `tracing` macros need literal field names, so these constants are the
//! reference the macros are written against and what tests look fields up
//! by.

/// Values of the `event` field
pub mod event {
    pub const START: &str = "start";
    pub const END: &str = "end";
    pub const END_ERROR: &str = "end_error";
}

/// Field keys
pub mod field {
    pub const COMPONENT: &str = "component";
    pub const OP: &str = "op";
    pub const EVENT: &str = "event";
    pub const DURATION_MS: &str = "duration_ms";

    pub const REQUEST_ID: &str = "request_id";
    pub const TODO_ID: &str = "todo_id";

    pub const HTTP_METHOD: &str = "http.method";
    pub const HTTP_PATH: &str = "http.path";
    pub const HTTP_STATUS: &str = "http.status";

    pub const ERR_KIND: &str = "err.kind";
    pub const ERR_CODE: &str = "err.code";
    pub const ERR_MESSAGE: &str = "err.message";
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_fields_share_prefix() {
        for key in [field::ERR_KIND, field::ERR_CODE, field::ERR_MESSAGE] {
            assert!(key.starts_with("err."));
        }
    }

    #[test]
    fn test_event_values_are_distinct() {
        let values = [event::START, event::END, event::END_ERROR];
        for (i, a) in values.iter().enumerate() {
            for b in &values[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }
}
