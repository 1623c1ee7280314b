//! HTTP handlers for assessment endpoints.

use std::sync::Arc;

use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use tracing::{info, warn};

use crate::adapters::narrative::NarrativePayload;
use crate::application::{ScoreAssessmentCommand, ScoreAssessmentHandler};
use crate::domain::foundation::{DomainError, ErrorCode, SubmissionId, Timestamp};

use super::dto::{ErrorResponse, HealthResponse, ScoreAssessmentRequest};

// ════════════════════════════════════════════════════════════════════════════
// Handler state
// ════════════════════════════════════════════════════════════════════════════

#[derive(Clone)]
pub struct AssessmentAppState {
    score_handler: Arc<ScoreAssessmentHandler>,
    verbose_errors: bool,
}

impl AssessmentAppState {
    pub fn new(score_handler: Arc<ScoreAssessmentHandler>) -> Self {
        Self {
            score_handler,
            verbose_errors: false,
        }
    }

    /// Include domain error details in error bodies.
    pub fn with_verbose_errors(mut self, verbose: bool) -> Self {
        self.verbose_errors = verbose;
        self
    }
}

// ════════════════════════════════════════════════════════════════════════════
// Error handling
// ════════════════════════════════════════════════════════════════════════════

/// Errors returned by assessment endpoints.
#[derive(Debug)]
pub enum ApiError {
    /// The body could not be decoded as a request.
    InvalidBody(String),
    /// Scoring rejected the submission.
    Domain { error: DomainError, verbose: bool },
}

impl ApiError {
    fn status(&self) -> StatusCode {
        match self {
            ApiError::InvalidBody(_) => StatusCode::BAD_REQUEST,
            ApiError::Domain { error, .. } => match error.code {
                ErrorCode::MalformedInput => StatusCode::BAD_REQUEST,
                ErrorCode::ValidationFailed | ErrorCode::OutOfRange => {
                    StatusCode::UNPROCESSABLE_ENTITY
                }
                ErrorCode::InternalError => StatusCode::INTERNAL_SERVER_ERROR,
            },
        }
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ApiError::InvalidBody(rejection.body_text())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let body = match self {
            ApiError::InvalidBody(message) => ErrorResponse::malformed(message),
            ApiError::Domain { error, verbose } => {
                if error.code == ErrorCode::InternalError && !verbose {
                    ErrorResponse::internal("An unexpected error occurred")
                } else {
                    ErrorResponse::from_domain(&error, verbose)
                }
            }
        };
        (status, Json(body)).into_response()
    }
}

// ════════════════════════════════════════════════════════════════════════════
// HTTP handlers
// ════════════════════════════════════════════════════════════════════════════

/// POST /api/assessments/score - Score a survey submission
pub async fn score_assessment(
    State(state): State<AssessmentAppState>,
    body: Result<Json<ScoreAssessmentRequest>, JsonRejection>,
) -> Result<Json<NarrativePayload>, ApiError> {
    let Json(req) = body.map_err(|rejection| {
        warn!(error = %rejection.body_text(), "Rejected assessment body");
        ApiError::from(rejection)
    })?;

    let submission_id = SubmissionId::new();
    let cmd = ScoreAssessmentCommand {
        responses: req.responses,
    };

    let report = state
        .score_handler
        .handle(cmd)
        .map_err(|error| ApiError::Domain {
            error,
            verbose: state.verbose_errors,
        })?;

    info!(
        submission_id = %submission_id,
        answered_items = report.answered_items(),
        "Assessment scored"
    );

    Ok(Json(NarrativePayload::from_report(
        &report,
        req.participant,
        submission_id,
        Timestamp::now(),
    )))
}

/// GET /health - Liveness probe
pub async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse { status: "ok" })
}
