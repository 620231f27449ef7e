// POST /check-plagiarism: compare every pair in a submitted batch.
//
// Body:     { "files": [ { "email": "...", "text": "..." }, ... ] }
// Response: [ { "email", "with", "percentage", "status" }, ... ]
//
// Scoring is CPU-bound, so the batch runs on the blocking pool to keep the
// async runtime responsive.

use std::sync::Arc;

use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use tracing::{debug, error, info};

use crate::error::PlagiarismError;
use crate::loader::BatchRequest;
use crate::output::json::to_wire;
use crate::pipeline::compare::compare_documents;
use crate::web::{api_error, AppState};

/// POST /check-plagiarism: score all unordered pairs in the batch.
pub async fn check_plagiarism(
    State(state): State<AppState>,
    body: Result<Json<BatchRequest>, JsonRejection>,
) -> Response {
    let Json(request) = match body {
        Ok(body) => body,
        Err(rejection) => {
            return api_error(StatusCode::BAD_REQUEST, &rejection.body_text());
        }
    };

    if request.files.is_empty() {
        return api_error(StatusCode::BAD_REQUEST, "No files provided");
    }

    let (ids, texts) = request.into_parts();
    info!(emails = ids.len(), texts = texts.len(), "Received batch");
    for (id, text) in ids.iter().zip(&texts) {
        debug!(email = %id, chars = text.chars().count(), "Batch document");
    }

    let lexicon = Arc::clone(&state.lexicon);
    let outcome =
        tokio::task::spawn_blocking(move || compare_documents(lexicon.as_ref(), &ids, &texts))
            .await;

    match outcome {
        Ok(Ok(results)) => Json(to_wire(&results)).into_response(),
        Ok(Err(PlagiarismError::CountMismatch { .. })) => api_error(
            StatusCode::BAD_REQUEST,
            "Mismatch between texts and emails",
        ),
        Ok(Err(e)) if e.is_validation() => api_error(StatusCode::BAD_REQUEST, &e.to_string()),
        Ok(Err(e)) => {
            error!(error = %e, "Batch comparison failed");
            internal_error()
        }
        Err(e) => {
            error!(error = %e, "Comparison task panicked");
            internal_error()
        }
    }
}

fn internal_error() -> Response {
    api_error(
        StatusCode::INTERNAL_SERVER_ERROR,
        "An error occurred while processing the request",
    )
}
