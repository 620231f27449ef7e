// Web server: Axum-based HTTP API around the comparison pipeline.
//
// POST /check-plagiarism accepts a batch of {email, text} entries and
// returns one result per unordered pair. GET /health is the liveness probe.
// The API is stateless: every request builds its own vocabulary and the
// lexicon is shared read-only.

use std::sync::Arc;

use anyhow::Result;
use axum::http::{header, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::info;

use crate::lexicon::traits::Lexicon;

pub mod handlers;

/// Shared application state threaded through all Axum handlers.
#[derive(Clone)]
pub struct AppState {
    pub lexicon: Arc<dyn Lexicon>,
}

/// Start the Axum web server and block until it exits.
pub async fn run_server(lexicon: Arc<dyn Lexicon>, port: u16, bind: &str) -> Result<()> {
    let app = build_router(AppState { lexicon });

    let addr = format!("{bind}:{port}");
    info!("Plagiarism API listening on http://{addr}");

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;
    Ok(())
}

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route(
            "/check-plagiarism",
            post(handlers::check::check_plagiarism),
        )
        .layer(
            CorsLayer::new()
                .allow_origin(tower_http::cors::Any)
                .allow_methods([
                    axum::http::Method::GET,
                    axum::http::Method::POST,
                    axum::http::Method::OPTIONS,
                ])
                .allow_headers([header::CONTENT_TYPE]),
        )
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Health check: always returns 200 OK.
async fn health() -> impl IntoResponse {
    (
        StatusCode::OK,
        axum::Json(serde_json::json!({ "status": "ok" })),
    )
}

/// Typed JSON error response helper.
pub fn api_error(status: StatusCode, message: &str) -> Response {
    (status, axum::Json(serde_json::json!({ "error": message }))).into_response()
}
