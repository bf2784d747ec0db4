pub mod pages;
pub mod relationships;
pub mod services;
pub mod session;

use axum::{
    middleware,
    routing::get,
    Json, Router,
};
use tower_http::{
    cors::CorsLayer,
    trace::{TraceLayer, DefaultMakeSpan, DefaultOnRequest, DefaultOnResponse, DefaultOnFailure},
};
use tracing::Level;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use common::types::Health;

use crate::metrics;
use crate::openapi::ApiDoc;
use crate::state::AppState;

#[utoipa::path(get, path = "/health", tag = "health", responses((status = 200, description = "OK", body = crate::openapi::HealthResponse)))]
pub async fn health() -> Json<Health> {
    Json(Health { status: "ok" })
}

/// Build the full application router: public probes, JSON API, session-gated pages and docs
pub fn build_router(state: AppState, cors: CorsLayer) -> Router {
    // Public routes
    let public = Router::new()
        .route("/health", get(health))
        .route("/metrics", get(metrics::metrics))
        .route("/", get(pages::index));

    // JSON API
    let api = Router::new()
        .route("/api/relationships", get(relationships::list).post(relationships::create))
        .route(
            "/api/relationships/:id",
            get(relationships::get).put(relationships::update).delete(relationships::delete),
        )
        .route("/api/services", get(services::list).post(services::set));

    // Session-gated routes
    let gated = Router::new()
        .route("/api/session", get(session::current))
        .route("/deals", get(pages::deals))
        .route_layer(middleware::from_fn_with_state(state.clone(), session::require_session));

    // Compose
    public
        .merge(api)
        .merge(gated)
        .route_layer(middleware::from_fn(metrics::track_metrics))
        .merge(SwaggerUi::new("/docs").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .with_state(state)
        .layer(cors)
        .layer(
            TraceLayer::new_for_http()
                // 每次请求创建 span，包含方法和路径等，日志级别为 INFO
                .make_span_with(
                    DefaultMakeSpan::new()
                        .level(Level::INFO)
                        .include_headers(false),
                )
                .on_request(
                    DefaultOnRequest::new()
                        .level(Level::INFO),
                )
                // 响应返回时打点，包含状态码与耗时
                .on_response(
                    DefaultOnResponse::new()
                        .level(Level::INFO)
                        .include_headers(false),
                )
                // 失败（5xx 等）时以 ERROR 记录
                .on_failure(
                    DefaultOnFailure::new()
                        .level(Level::ERROR),
                )
        )
}
