pub mod dishes;

use std::sync::Arc;

use axum::{
    routing::get,
    Json, Router,
};
use tower_http::{
    cors::CorsLayer,
    services::ServeDir,
    trace::{DefaultMakeSpan, DefaultOnFailure, DefaultOnRequest, DefaultOnResponse, TraceLayer},
};
use tracing::Level;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use common::types::Health;
use service::dish::{DishRepository, DishService};

use crate::{metrics, openapi::ApiDoc};

/// Shared handler state: the injected dish store behind its service.
#[derive(Clone)]
pub struct AppState {
    pub dishes: DishService<dyn DishRepository>,
}

impl AppState {
    pub fn new(repo: Arc<dyn DishRepository>) -> Self {
        Self { dishes: DishService::new(repo) }
    }
}

#[utoipa::path(get, path = "/health", tag = "health", responses((status = 200, description = "OK", body = crate::openapi::HealthResponse)))]
pub async fn health() -> Json<Health> {
    Json(Health { status: "ok" })
}

/// Build the full application router: dish API, health, metrics, docs and static files.
pub fn build_router(state: AppState, cors: CorsLayer, static_dir: &str) -> Router {
    let api = Router::new()
        .route("/api/dishes", get(dishes::list).post(dishes::create))
        // one segment name for both lookups: GET reads it as a name, PUT/DELETE as an id
        .route(
            "/api/dishes/:key",
            get(dishes::get_by_name).put(dishes::update).delete(dishes::delete),
        );

    Router::new()
        .route("/health", get(health))
        .route("/metrics", get(metrics::metrics_handler))
        .merge(api)
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .fallback_service(ServeDir::new(static_dir))
        .with_state(state)
        .layer(cors)
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(
                    DefaultMakeSpan::new()
                        .level(Level::INFO)
                        .include_headers(false),
                )
                .on_request(DefaultOnRequest::new().level(Level::INFO))
                .on_response(
                    DefaultOnResponse::new()
                        .level(Level::INFO)
                        .include_headers(false),
                )
                // 5xx responses are logged at ERROR
                .on_failure(DefaultOnFailure::new().level(Level::ERROR)),
        )
}
