mod jobs;
mod scrape;

use std::sync::Arc;

use axum::{
    extract::State,
    http::{header, HeaderName, Method},
    routing::get,
    Extension, Json, Router,
};
use chrono::{DateTime, Utc};
use mido_catalog::MockCatalog;
use mido_core::{AppConfig, JobVariant};
use serde::Serialize;
use tower::ServiceBuilder;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::middleware::{request_id, RequestId, REQUEST_ID_HEADER};

/// Shared, read-only state handed to every handler.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
    pub catalog: MockCatalog,
}

impl AppState {
    #[must_use]
    pub fn new(config: Arc<AppConfig>) -> Self {
        let catalog = MockCatalog::from_app_config(&config);
        Self { config, catalog }
    }
}

#[derive(Debug, Serialize)]
pub struct ApiResponse<T: Serialize> {
    pub data: T,
    pub meta: ResponseMeta,
}

#[derive(Debug, Serialize)]
pub struct ResponseMeta {
    pub request_id: String,
    pub timestamp: DateTime<Utc>,
}

impl ResponseMeta {
    pub(super) fn new(request_id: String) -> Self {
        Self {
            request_id,
            timestamp: Utc::now(),
        }
    }
}

/// Flat `{ "error": "..." }` body used by the scrape endpoint.
#[derive(Debug, Serialize)]
pub(super) struct ErrorBody {
    pub error: &'static str,
}

#[derive(Debug, Serialize, PartialEq, Eq)]
struct HealthData {
    status: &'static str,
    variant: JobVariant,
    integrations: IntegrationsData,
}

#[derive(Debug, Serialize, PartialEq, Eq)]
struct IntegrationsData {
    auth: &'static str,
    payments: &'static str,
    database: &'static str,
}

fn build_cors() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(tower_http::cors::Any)
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([
            header::CONTENT_TYPE,
            header::AUTHORIZATION,
            HeaderName::from_static(REQUEST_ID_HEADER),
        ])
}

fn v1_router() -> Router<AppState> {
    Router::new()
        .route("/api/v1/health", get(health))
        .route(
            "/api/v1/scraping/jobs",
            get(jobs::list_jobs).post(jobs::create_job),
        )
        .layer(build_cors())
}

pub fn build_app(state: AppState) -> Router {
    Router::new()
        .merge(v1_router())
        .merge(scrape::router())
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(axum::middleware::from_fn(request_id)),
        )
        .with_state(state)
}

async fn health(
    State(state): State<AppState>,
    Extension(req_id): Extension<RequestId>,
) -> Json<ApiResponse<HealthData>> {
    let config = &state.config;
    Json(ApiResponse {
        data: HealthData {
            status: "ok",
            variant: state.catalog.variant,
            integrations: IntegrationsData {
                auth: config.auth.status(),
                payments: config.payments.status(),
                database: config.database.status(),
            },
        },
        meta: ResponseMeta::new(req_id.0),
    })
}
