use crate::cli::ServeArgs;
use crate::infra::{AppState, CrmOutbox, InMemoryLeadRepository, InMemorySubmissionRepository};
use crate::routes::with_workflow_routes;
use axum::Extension;
use axum_prometheus::PrometheusMetricLayer;
use esg_navigator::config::AppConfig;
use esg_navigator::error::AppError;
use esg_navigator::telemetry;
use esg_navigator::workflows::assessment::AssessmentService;
use esg_navigator::workflows::sales::SalesQualificationService;
use std::sync::atomic::Ordering;
use std::sync::Arc;
use tracing::info;

pub(crate) async fn run(mut args: ServeArgs) -> Result<(), AppError> {
    let mut config = AppConfig::load()?;

    if let Some(host) = args.host.take() {
        config.server.host = host;
    }
    if let Some(port) = args.port.take() {
        config.server.port = port;
    }

    telemetry::init(&config.telemetry)?;

    let rules = config.scoring.qualification_rules()?;
    if let Some(path) = &config.scoring.rules_path {
        info!(path = %path.display(), "loaded qualification rules");
    }

    let (prometheus_layer, prometheus_handle) = PrometheusMetricLayer::pair();
    let readiness_flag = Arc::new(std::sync::atomic::AtomicBool::new(false));
    let app_state = AppState {
        readiness: readiness_flag.clone(),
        metrics: Arc::new(prometheus_handle),
    };

    let sales_service = Arc::new(SalesQualificationService::new(
        Arc::new(InMemoryLeadRepository::default()),
        Arc::new(CrmOutbox::default()),
        rules,
    ));
    let assessment_service = Arc::new(AssessmentService::new(Arc::new(
        InMemorySubmissionRepository::default(),
    )));

    let app = with_workflow_routes(sales_service, assessment_service)
        .layer(Extension(app_state))
        .layer(prometheus_layer);

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    readiness_flag.store(true, Ordering::Release);

    info!(?config.environment, %addr, "esg navigator scoring service ready");

    axum::serve(listener, app).await?;
    Ok(())
}
