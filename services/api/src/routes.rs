use crate::infra::AppState;
use axum::http::{header, StatusCode};
use axum::response::IntoResponse;
use axum::Extension;
use axum::Json;
use esg_navigator::workflows::assessment::{
    assessment_router, AssessmentService, SubmissionRepository,
};
use esg_navigator::workflows::sales::{
    sales_router, CrmPublisher, LeadRepository, SalesQualificationService,
};
use serde_json::json;
use std::sync::Arc;

pub(crate) fn with_workflow_routes<R, C, S>(
    sales: Arc<SalesQualificationService<R, C>>,
    assessment: Arc<AssessmentService<S>>,
) -> axum::Router
where
    R: LeadRepository + 'static,
    C: CrmPublisher + 'static,
    S: SubmissionRepository + 'static,
{
    sales_router(sales)
        .merge(assessment_router(assessment))
        .route("/health", axum::routing::get(healthcheck))
        .route("/ready", axum::routing::get(readiness_endpoint))
        .route("/metrics", axum::routing::get(metrics_endpoint))
}

pub(crate) async fn healthcheck() -> Json<serde_json::Value> {
    Json(json!({ "status": "ok" }))
}

pub(crate) async fn readiness_endpoint(Extension(state): Extension<AppState>) -> impl IntoResponse {
    let ready = state.readiness.load(std::sync::atomic::Ordering::Relaxed);
    let status = if ready {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };

    let payload = if ready {
        json!({ "status": "ready" })
    } else {
        json!({ "status": "initializing" })
    };

    (status, Json(payload))
}

pub(crate) async fn metrics_endpoint(Extension(state): Extension<AppState>) -> impl IntoResponse {
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "text/plain; version=0.0.4")],
        state.metrics.render(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infra::{CrmOutbox, InMemoryLeadRepository, InMemorySubmissionRepository};
    use esg_navigator::workflows::sales::QualificationRules;
    use metrics_exporter_prometheus::PrometheusBuilder;
    use std::sync::atomic::{AtomicBool, Ordering};
    use tower::ServiceExt;

    fn app(outbox: Arc<CrmOutbox>, readiness: Arc<AtomicBool>) -> axum::Router {
        let sales = Arc::new(SalesQualificationService::new(
            Arc::new(InMemoryLeadRepository::default()),
            outbox,
            QualificationRules::standard(),
        ));
        let assessment = Arc::new(AssessmentService::new(Arc::new(
            InMemorySubmissionRepository::default(),
        )));
        let state = AppState {
            readiness,
            metrics: Arc::new(PrometheusBuilder::new().build_recorder().handle()),
        };

        with_workflow_routes(sales, assessment).layer(Extension(state))
    }

    async fn read_json(response: axum::response::Response) -> serde_json::Value {
        let body = axum::body::to_bytes(response.into_body(), 64 * 1024)
            .await
            .expect("read body");
        serde_json::from_slice(&body).expect("json payload")
    }

    fn get(uri: &str) -> axum::http::Request<axum::body::Body> {
        axum::http::Request::get(uri)
            .body(axum::body::Body::empty())
            .expect("request builds")
    }

    #[tokio::test]
    async fn healthcheck_reports_ok() {
        let Json(body) = healthcheck().await;
        assert_eq!(body, json!({ "status": "ok" }));
    }

    #[tokio::test]
    async fn readiness_tracks_flag() {
        let readiness = Arc::new(AtomicBool::new(false));
        let router = app(Arc::new(CrmOutbox::default()), readiness.clone());

        let response = router.clone().oneshot(get("/ready")).await.expect("route");
        assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);
        assert_eq!(read_json(response).await["status"], json!("initializing"));

        readiness.store(true, Ordering::Release);
        let response = router.oneshot(get("/ready")).await.expect("route");
        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn metrics_render_as_text() {
        let router = app(Arc::new(CrmOutbox::default()), Arc::new(AtomicBool::new(true)));

        let response = router.oneshot(get("/metrics")).await.expect("route");

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            response
                .headers()
                .get(header::CONTENT_TYPE)
                .and_then(|value| value.to_str().ok()),
            Some("text/plain; version=0.0.4")
        );
    }

    #[tokio::test]
    async fn workflow_routes_are_mounted_together() {
        let outbox = Arc::new(CrmOutbox::default());
        let router = app(outbox.clone(), Arc::new(AtomicBool::new(true)));

        let questions = router
            .clone()
            .oneshot(get("/public/10q/questions?industry=Mining"))
            .await
            .expect("route");
        assert_eq!(questions.status(), StatusCode::OK);

        let qualify = router
            .oneshot(
                axum::http::Request::post("/api/sales/qualify")
                    .header(header::CONTENT_TYPE, "application/json")
                    .body(axum::body::Body::from(
                        json!({
                            "company_name": "Sibanye Resources",
                            "industry": "Retail",
                            "employee_count": 10,
                        })
                        .to_string(),
                    ))
                    .expect("request builds"),
            )
            .await
            .expect("route");
        assert_eq!(qualify.status(), StatusCode::OK);
        let payload = read_json(qualify).await;
        assert_eq!(payload["qualification"]["overall_score"], json!(95));
        assert_eq!(payload["qualification"]["estimated_value"], json!(237_500));

        let events = outbox.events();
        assert_eq!(events.len(), 1);
        assert_eq!(events[0].template, "lead_qualified");
    }
}
