//! HTTP routes for assessment endpoints.

use axum::{routing::post, Router};

use super::handlers::{score_assessment, AssessmentAppState};

/// Creates the assessment router, mounted under `/api/assessments`.
pub fn assessment_routes(state: AssessmentAppState) -> Router {
    Router::new()
        .route("/score", post(score_assessment))
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::ScoreAssessmentHandler;
    use crate::ports::NoopObserver;
    use axum::body::Body;
    use http::{Request, StatusCode};
    use std::sync::Arc;
    use tower::ServiceExt;

    fn router() -> Router {
        let handler = Arc::new(ScoreAssessmentHandler::new(Arc::new(NoopObserver)));
        assessment_routes(AssessmentAppState::new(handler))
    }

    #[tokio::test]
    async fn score_route_only_accepts_post() {
        let response = router()
            .oneshot(Request::builder().uri("/score").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);
    }

    #[tokio::test]
    async fn unknown_path_is_not_found() {
        let response = router()
            .oneshot(Request::builder().uri("/rank").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }
}
