// Web server: Axum-based JSON API over the three scorers.
//
// All scoring routes live under /api/v1 and take an AnalysisRequest body.
// The server holds no state between requests beyond the compiled pattern
// tables, so handlers share one Analyzer behind an Arc.

use std::sync::Arc;

use anyhow::Result;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::info;

use crate::config::Config;
use crate::scoring::analysis::Analyzer;

pub mod handlers;

/// Shared application state threaded through all Axum handlers.
#[derive(Clone)]
pub struct AppState {
    pub analyzer: Arc<Analyzer>,
    pub config: Arc<Config>,
}

impl AppState {
    pub fn new(config: Config, analyzer: Analyzer) -> Self {
        Self {
            analyzer: Arc::new(analyzer),
            config: Arc::new(config),
        }
    }
}

/// Start the Axum web server and block until it exits.
pub async fn run_server(config: Config, analyzer: Analyzer) -> Result<()> {
    let addr = format!("{}:{}", config.bind, config.port);
    let app = build_router(AppState::new(config, analyzer));

    info!("SafeDose API listening on http://{addr}");

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;
    Ok(())
}

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/api/v1/health", get(health))
        .route("/api/v1/analyze", post(handlers::analyze::analyze))
        .route(
            "/api/v1/detect-misinformation",
            post(handlers::analyze::detect_misinformation),
        )
        .route(
            "/api/v1/analyze-persuasion",
            post(handlers::analyze::analyze_persuasion),
        )
        .route(
            "/api/v1/get-trusted-alternatives",
            post(handlers::analyze::get_trusted_alternatives),
        )
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Liveness check, always returns 200 OK.
async fn health() -> impl IntoResponse {
    (
        StatusCode::OK,
        axum::Json(serde_json::json!({
            "status": "healthy",
            "message": "SafeDose.ai API is running",
        })),
    )
}

/// Typed JSON error response helper.
pub fn api_error(status: StatusCode, message: &str) -> Response {
    (status, axum::Json(serde_json::json!({ "error": message }))).into_response()
}
