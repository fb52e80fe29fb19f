use thiserror::Error;

/// Caller defects, detected before any bytes are produced or interpreted.
/// None of these are retryable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum LayoutError {
    #[error("value {value} does not fit 8-byte field {field}")]
    AmountOutOfRange { field: &'static str, value: u128 },

    #[error("layout declares {expected} fields, {got} values supplied")]
    FieldCount { expected: usize, got: usize },

    #[error("value type does not match declared type of field {field}")]
    FieldType { field: &'static str },

    #[error("buffer is {got} bytes, layout span is {expected}")]
    SpanMismatch { expected: usize, got: usize },

    #[error("discriminant {got} does not match expected {expected}")]
    Discriminant { expected: u8, got: u8 },
}
