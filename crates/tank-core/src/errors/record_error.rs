/// Errors raised while coercing a persisted record into a `TrackedItem`.
#[derive(Debug, thiserror::Error)]
pub enum RecordError {
    #[error("record is missing required field {field}")]
    MissingField { field: &'static str },

    #[error("record field {field} is not an RFC 3339 timestamp: {value}")]
    InvalidTimestamp { field: &'static str, value: String },
}
