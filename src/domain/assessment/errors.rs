//! Scoring error types.

use thiserror::Error;

use crate::domain::foundation::{DomainError, ErrorCode, ValidationError};

/// Errors that abort scoring of a submission.
///
/// Unanswered items are not errors: they mark the affected dimensions as
/// incomplete and the report is still produced.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ScoringError {
    /// The item sequence does not have exactly one slot per survey item.
    #[error("Expected {expected} survey items, got {actual}")]
    MalformedInput { expected: usize, actual: usize },

    /// A response value is off the 1-5 scale.
    #[error("Item {item} has invalid response: {source}")]
    InvalidResponse {
        item: usize,
        #[source]
        source: ValidationError,
    },

    /// A raw dimension total is outside the reachable 5-25 range.
    #[error("Raw total {raw_total} is outside the 5-25 range")]
    RawTotalOutOfRange { raw_total: u8 },
}

impl ScoringError {
    pub fn malformed_input(expected: usize, actual: usize) -> Self {
        ScoringError::MalformedInput { expected, actual }
    }

    pub fn invalid_response(item: usize, source: ValidationError) -> Self {
        ScoringError::InvalidResponse { item, source }
    }

    pub fn code(&self) -> ErrorCode {
        match self {
            ScoringError::MalformedInput { .. } => ErrorCode::MalformedInput,
            ScoringError::InvalidResponse { .. } => ErrorCode::ValidationFailed,
            ScoringError::RawTotalOutOfRange { .. } => ErrorCode::OutOfRange,
        }
    }
}

impl From<ScoringError> for DomainError {
    fn from(err: ScoringError) -> Self {
        let domain = DomainError::new(err.code(), err.to_string());
        match err {
            ScoringError::MalformedInput { expected, actual } => domain
                .with_detail("expected", expected.to_string())
                .with_detail("actual", actual.to_string()),
            ScoringError::InvalidResponse { item, source } => {
                let domain = domain.with_detail("item", item.to_string());
                match source {
                    ValidationError::OutOfRange { actual, .. } => {
                        domain.with_detail("response", actual.to_string())
                    }
                }
            }
            ScoringError::RawTotalOutOfRange { raw_total } => {
                domain.with_detail("raw_total", raw_total.to_string())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn malformed_input_displays_counts() {
        let err = ScoringError::malformed_input(45, 44);
        assert_eq!(err.to_string(), "Expected 45 survey items, got 44");
        assert_eq!(err.code(), ErrorCode::MalformedInput);
    }

    #[test]
    fn invalid_response_names_item() {
        let err = ScoringError::invalid_response(
            12,
            ValidationError::out_of_range("response", 1, 5, 9),
        );
        assert_eq!(
            err.to_string(),
            "Item 12 has invalid response: Field 'response' must be between 1 and 5, got 9"
        );
        assert_eq!(err.code(), ErrorCode::ValidationFailed);
    }

    #[test]
    fn converts_to_domain_error_with_details() {
        let err: DomainError = ScoringError::malformed_input(45, 12).into();
        assert_eq!(err.code, ErrorCode::MalformedInput);
        assert_eq!(err.message, "Expected 45 survey items, got 12");
        assert_eq!(err.details.get("actual"), Some(&"12".to_string()));

        let err: DomainError =
            ScoringError::invalid_response(3, ValidationError::out_of_range("response", 1, 5, -1))
                .into();
        assert_eq!(err.code, ErrorCode::ValidationFailed);
        assert_eq!(err.details.get("item"), Some(&"3".to_string()));
        assert_eq!(err.details.get("response"), Some(&"-1".to_string()));
    }
}
