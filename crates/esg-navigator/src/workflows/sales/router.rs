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

use super::domain::{LeadId, LeadSubmission};
use super::repository::{CrmPublisher, LeadRepository};
use super::service::{LeadServiceError, SalesQualificationService};
use crate::workflows::storage::RepositoryError;

const DEFAULT_RECENT_LIMIT: usize = 20;

#[derive(Debug, Default, Deserialize)]
pub(crate) struct RecentQuery {
    #[serde(default)]
    pub(crate) limit: Option<usize>,
}

/// Router exposing lead qualification and lookup.
pub fn sales_router<R, C>(service: Arc<SalesQualificationService<R, C>>) -> Router
where
    R: LeadRepository + 'static,
    C: CrmPublisher + 'static,
{
    Router::new()
        .route("/api/sales/qualify", post(qualify_handler::<R, C>))
        .route("/api/sales/leads", get(recent_handler::<R, C>))
        .route("/api/sales/leads/:lead_id", get(lead_handler::<R, C>))
        .with_state(service)
}

pub(crate) async fn qualify_handler<R, C>(
    State(service): State<Arc<SalesQualificationService<R, C>>>,
    axum::Json(submission): axum::Json<LeadSubmission>,
) -> Response
where
    R: LeadRepository + 'static,
    C: CrmPublisher + 'static,
{
    match service.qualify(submission) {
        Ok(entry) => {
            let payload = json!({
                "success": true,
                "lead_id": entry.lead_id,
                "qualification": entry.qualification,
            });
            (StatusCode::OK, axum::Json(payload)).into_response()
        }
        Err(err) => error_response(err),
    }
}

pub(crate) async fn lead_handler<R, C>(
    State(service): State<Arc<SalesQualificationService<R, C>>>,
    Path(lead_id): Path<String>,
) -> Response
where
    R: LeadRepository + 'static,
    C: CrmPublisher + 'static,
{
    match service.get(&LeadId(lead_id)) {
        Ok(entry) => (StatusCode::OK, axum::Json(entry)).into_response(),
        Err(err) => error_response(err),
    }
}

pub(crate) async fn recent_handler<R, C>(
    State(service): State<Arc<SalesQualificationService<R, C>>>,
    Query(query): Query<RecentQuery>,
) -> Response
where
    R: LeadRepository + 'static,
    C: CrmPublisher + 'static,
{
    let limit = query.limit.unwrap_or(DEFAULT_RECENT_LIMIT);
    match service.recent(limit) {
        Ok(entries) => (StatusCode::OK, axum::Json(json!({ "leads": entries }))).into_response(),
        Err(err) => error_response(err),
    }
}

fn error_response(err: LeadServiceError) -> Response {
    let status = match &err {
        LeadServiceError::Repository(RepositoryError::Conflict) => StatusCode::CONFLICT,
        LeadServiceError::Repository(RepositoryError::NotFound) => StatusCode::NOT_FOUND,
        LeadServiceError::Repository(RepositoryError::Unavailable(_))
        | LeadServiceError::Crm(_) => StatusCode::INTERNAL_SERVER_ERROR,
    };

    let payload = json!({
        "success": false,
        "error": err.to_string(),
    });
    (status, axum::Json(payload)).into_response()
}
