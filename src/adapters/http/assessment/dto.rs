//! HTTP DTOs for assessment endpoints.
//!
//! The success body is the narrative payload itself; only the request and
//! error envelopes live here.

use serde::{Deserialize, Serialize};

use crate::adapters::narrative::ParticipantInfo;
use crate::domain::assessment::RawItem;
use crate::domain::foundation::DomainError;

// ════════════════════════════════════════════════════════════════════════════
// Request DTOs
// ════════════════════════════════════════════════════════════════════════════

/// Request to score one survey submission.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoreAssessmentRequest {
    #[serde(default)]
    pub participant: ParticipantInfo,
    /// One entry per survey item; `null` marks an unanswered item.
    pub responses: Vec<Option<RawItem>>,
}

// ════════════════════════════════════════════════════════════════════════════
// Response DTOs
// ════════════════════════════════════════════════════════════════════════════

#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
}

/// Standard error response for API errors.
#[derive(Debug, Clone, Serialize)]
pub struct ErrorResponse {
    pub code: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<serde_json::Value>,
}

impl ErrorResponse {
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: None,
        }
    }

    pub fn malformed(message: impl Into<String>) -> Self {
        Self::new("MALFORMED_INPUT", message)
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self::new("INTERNAL_ERROR", message)
    }

    /// Builds a response from a domain error, attaching its details when
    /// `verbose` is set.
    pub fn from_domain(error: &DomainError, verbose: bool) -> Self {
        let details = (verbose && !error.details.is_empty())
            .then(|| serde_json::to_value(&error.details).ok())
            .flatten();
        Self {
            code: error.code.to_string(),
            message: error.message.clone(),
            details,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::ErrorCode;

    #[test]
    fn request_accepts_nulls_and_missing_participant() {
        let json = r#"{"responses": [{"response": 4, "reverseScored": true}, null, {}]}"#;
        let req: ScoreAssessmentRequest = serde_json::from_str(json).unwrap();

        assert_eq!(req.participant, ParticipantInfo::default());
        assert_eq!(req.responses.len(), 3);
        assert_eq!(req.responses[0], Some(RawItem::answered(4, true)));
        assert_eq!(req.responses[1], None);
        assert_eq!(req.responses[2], Some(RawItem::default()));
    }

    #[test]
    fn error_response_hides_details_unless_verbose() {
        let error = DomainError::new(ErrorCode::ValidationFailed, "bad item").with_detail("item", "4");

        let terse = ErrorResponse::from_domain(&error, false);
        assert_eq!(terse.code, "VALIDATION_FAILED");
        assert!(terse.details.is_none());

        let verbose = ErrorResponse::from_domain(&error, true);
        assert_eq!(verbose.details.unwrap()["item"], "4");
    }
}
