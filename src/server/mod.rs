//! HTTP front end: an upload form and one JSON endpoint.
//!
//! Uploads are buffered in memory and analyzed on the blocking pool, so
//! concurrent requests never share a staging file.

use crate::service::AnalyzerService;
use axum::{
    body::Bytes,
    extract::{multipart::MultipartRejection, DefaultBodyLimit, Multipart, State},
    http::StatusCode,
    response::{Html, IntoResponse, Response},
    routing::get,
    Json, Router,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tower_http::trace::TraceLayer;
use tracing::{info, warn};

pub const VOLATILITY_ROUTE: &str = "/calculate_volatility";

const UPLOAD_FIELD: &str = "file";
const UPLOAD_FORM: &str = include_str!("index.html");

pub struct AppState {
    pub service: AnalyzerService,
}

/// Success body. Non-finite values serialize as `null`.
#[derive(Debug, Serialize, Deserialize)]
pub struct VolatilityResponse {
    pub annualized_volatility: Option<f64>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}

pub fn router(service: AnalyzerService, max_upload_bytes: usize) -> Router {
    let state = Arc::new(AppState { service });

    Router::new()
        .route(VOLATILITY_ROUTE, get(upload_form).post(calculate_volatility))
        .layer(DefaultBodyLimit::max(max_upload_bytes))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

fn error_response(status: StatusCode, message: impl Into<String>) -> Response {
    let body = ErrorResponse {
        error: message.into(),
    };
    (status, Json(body)).into_response()
}

async fn upload_form() -> Html<&'static str> {
    Html(UPLOAD_FORM)
}

async fn calculate_volatility(
    State(state): State<Arc<AppState>>,
    multipart: Result<Multipart, MultipartRejection>,
) -> Response {
    let Ok(mut multipart) = multipart else {
        return error_response(StatusCode::BAD_REQUEST, "No file provided");
    };

    loop {
        match multipart.next_field().await {
            Ok(Some(field)) => {
                if field.name() != Some(UPLOAD_FIELD) {
                    continue;
                }
                // A part without a filename is a plain form value, not an upload.
                let Some(filename) = field.file_name().map(str::to_string) else {
                    continue;
                };
                if filename.is_empty() {
                    return error_response(StatusCode::BAD_REQUEST, "No selected file");
                }
                return match field.bytes().await {
                    Ok(bytes) => analyze_upload(&state, &filename, bytes).await,
                    Err(err) => error_response(err.status(), err.body_text()),
                };
            }
            Ok(None) => break,
            Err(err) => return error_response(err.status(), err.body_text()),
        }
    }

    error_response(StatusCode::BAD_REQUEST, "No file provided")
}

async fn analyze_upload(state: &AppState, filename: &str, bytes: Bytes) -> Response {
    info!(filename, size = bytes.len(), "received upload");

    let service = state.service;
    let outcome = tokio::task::spawn_blocking(move || service.analyze_reader(bytes.as_ref())).await;

    let message = match outcome {
        Ok(Ok(report)) => {
            let body = VolatilityResponse {
                annualized_volatility: Some(report.annualized_volatility)
                    .filter(|v| v.is_finite()),
            };
            return (StatusCode::OK, Json(body)).into_response();
        }
        Ok(Err(err)) => {
            warn!(filename, error = ?err, "analysis failed");
            err.to_string()
        }
        Err(err) => {
            warn!(filename, error = %err, "analysis task aborted");
            err.to_string()
        }
    };

    error_response(
        StatusCode::INTERNAL_SERVER_ERROR,
        format!("Error processing the file: {}", message),
    )
}
