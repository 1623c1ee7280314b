//! HTTP adapter for assessment endpoints.

mod dto;
mod handlers;
mod routes;

pub use dto::{ErrorResponse, HealthResponse, ScoreAssessmentRequest};
pub use handlers::{health_check, score_assessment, ApiError, AssessmentAppState};
pub use routes::assessment_routes;
