use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Router,
};
use serde::Deserialize;
use serde_json::json;

use super::domain::{AssessmentSubmission, SubmissionReference};
use super::repository::SubmissionRepository;
use super::service::{AssessmentService, AssessmentServiceError};
use crate::workflows::storage::RepositoryError;

#[derive(Debug, Default, Deserialize)]
pub(crate) struct QuestionsQuery {
    #[serde(default)]
    pub(crate) industry: Option<String>,
}

/// Router exposing the public ten-question assessment.
pub fn assessment_router<S>(service: Arc<AssessmentService<S>>) -> Router
where
    S: SubmissionRepository + 'static,
{
    Router::new()
        .route("/public/10q/questions", get(questions_handler::<S>))
        .route("/public/10q/submit", post(submit_handler::<S>))
        .route(
            "/public/10q/submissions/:reference",
            get(submission_handler::<S>),
        )
        .with_state(service)
}

pub(crate) async fn questions_handler<S>(
    State(service): State<Arc<AssessmentService<S>>>,
    Query(query): Query<QuestionsQuery>,
) -> Response
where
    S: SubmissionRepository + 'static,
{
    let set = service.questions(query.industry);
    (StatusCode::OK, axum::Json(set)).into_response()
}

pub(crate) async fn submit_handler<S>(
    State(service): State<Arc<AssessmentService<S>>>,
    axum::Json(submission): axum::Json<AssessmentSubmission>,
) -> Response
where
    S: SubmissionRepository + 'static,
{
    match service.submit(submission) {
        Ok(record) => {
            let payload = json!({
                "ok": true,
                "reference": record.reference,
                "company": record.company,
                "industry": record.industry,
                "assessment": record.assessment,
            });
            (StatusCode::OK, axum::Json(payload)).into_response()
        }
        Err(err) => error_response(err),
    }
}

pub(crate) async fn submission_handler<S>(
    State(service): State<Arc<AssessmentService<S>>>,
    Path(reference): Path<String>,
) -> Response
where
    S: SubmissionRepository + 'static,
{
    match service.get(&SubmissionReference(reference)) {
        Ok(record) => (StatusCode::OK, axum::Json(record)).into_response(),
        Err(err) => error_response(err),
    }
}

fn error_response(err: AssessmentServiceError) -> Response {
    let status = match &err {
        AssessmentServiceError::Repository(RepositoryError::Conflict) => StatusCode::CONFLICT,
        AssessmentServiceError::Repository(RepositoryError::NotFound) => StatusCode::NOT_FOUND,
        AssessmentServiceError::Repository(RepositoryError::Unavailable(_)) => {
            StatusCode::INTERNAL_SERVER_ERROR
        }
    };

    let payload = json!({
        "ok": false,
        "error": err.to_string(),
    });
    (status, axum::Json(payload)).into_response()
}
