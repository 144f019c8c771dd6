//! Timeline error types
//!
//! Errors raised while validating a record sequence or a slider position.

use thiserror::Error;

/// Errors building a timeline from records
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TimelineError {
    /// No records to span
    #[error("Timeline needs at least one record")]
    Empty,

    /// Record at `index` is not newer than the one before it
    #[error("Records must be strictly ascending by timestamp (record {index} does not move forward)")]
    Unordered { index: usize },
}

/// Errors reading a range endpoint
#[derive(Error, Debug, Clone, PartialEq)]
pub enum RangeError {
    /// Input is not a number at all
    #[error("Invalid range percent: {0:?} is not a number")]
    NotANumber(String),

    /// NaN or infinite
    #[error("Invalid range percent: {0} is not finite")]
    NotFinite(f64),
}

/// Result type alias for timeline construction
pub type TimelineResult<T> = Result<T, TimelineError>;

/// Result type alias for range parsing
pub type RangeResult<T> = Result<T, RangeError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = TimelineError::Unordered { index: 3 };
        assert_eq!(
            err.to_string(),
            "Records must be strictly ascending by timestamp (record 3 does not move forward)"
        );

        let err = RangeError::NotANumber("abc".to_string());
        assert_eq!(err.to_string(), "Invalid range percent: \"abc\" is not a number");
    }
}
