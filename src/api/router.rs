use std::path::Path;

use axum::{http::Uri, middleware, response::Redirect, routing::get, Router};
use tower_http::{
    request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer},
    services::{ServeDir, ServeFile},
    trace::TraceLayer,
};

use super::health;
use super::middleware::{
    logging_middleware, metrics_middleware, request_guard_middleware,
    security_headers_middleware,
};
use super::state::AppState;
use super::types::ApiError;
use super::v1;
use crate::infrastructure::observability::{create_metrics_router, PrometheusMetrics};

/// Health probes and the versioned prediction API
fn api_routes() -> Router<AppState> {
    Router::new()
        .route("/health", get(health::health_check))
        .route("/ready", get(health::ready_check))
        .route("/live", get(health::live_check))
        .nest("/v1", v1::create_v1_router())
        .fallback(route_not_found)
}

async fn route_not_found(uri: Uri) -> ApiError {
    ApiError::not_found(format!("No route for {}", uri.path())).with_code("route_not_found")
}

fn with_middleware(router: Router) -> Router {
    router
        .layer(middleware::from_fn(security_headers_middleware))
        .layer(middleware::from_fn(request_guard_middleware))
        .layer(middleware::from_fn(logging_middleware))
        .layer(middleware::from_fn(metrics_middleware))
        .layer(TraceLayer::new_for_http())
        .layer(PropagateRequestIdLayer::x_request_id())
        .layer(SetRequestIdLayer::x_request_id(MakeRequestUuid))
}

fn with_metrics(router: Router, metrics: Option<PrometheusMetrics>) -> Router {
    match metrics {
        Some(m) => router.merge(create_metrics_router(m)),
        None => router,
    }
}

/// Create API router (no UI)
pub fn create_api_router(state: AppState, metrics: Option<PrometheusMetrics>) -> Router {
    let router = with_middleware(api_routes().with_state(state));
    with_metrics(router, metrics)
}

/// Create router with both API and the static UI served from `ui_dir` at `/ui`
pub fn create_router_with_ui(
    state: AppState,
    metrics: Option<PrometheusMetrics>,
    ui_dir: impl AsRef<Path>,
) -> Router {
    let ui_dir = ui_dir.as_ref();
    let ui = ServeDir::new(ui_dir).fallback(ServeFile::new(ui_dir.join("index.html")));

    let router = api_routes()
        .nest_service("/ui", ui)
        .route("/", get(|| async { Redirect::permanent("/ui/") }))
        .with_state(state);

    with_metrics(with_middleware(router), metrics)
}
