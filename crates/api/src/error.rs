use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use fantasy_core::error::CoreError;
use fantasy_espn::UpstreamError;
use serde_json::json;

/// Application-level error type for HTTP handlers.
///
/// Wraps [`CoreError`] for domain errors and [`UpstreamError`] for ESPN
/// failures. Implements [`IntoResponse`] to produce consistent JSON error
/// responses.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// A domain-level error from `fantasy_core`.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// ESPN could not be read.
    #[error(transparent)]
    Upstream(#[from] UpstreamError),
}

/// Convenience type alias for handler return values.
pub type AppResult<T> = Result<T, AppError>;

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message) = match &self {
            // --- CoreError variants ---
            AppError::Core(core) => match core {
                CoreError::Validation(msg) => {
                    (StatusCode::BAD_REQUEST, "VALIDATION_ERROR", msg.clone())
                }
                CoreError::MalformedDocument(msg) => {
                    tracing::warn!(error = %msg, "Unexpected ESPN document shape");
                    (
                        StatusCode::BAD_GATEWAY,
                        "UPSTREAM_MALFORMED",
                        "ESPN returned a document that could not be interpreted".to_string(),
                    )
                }
            },

            // --- Upstream errors ---
            AppError::Upstream(err) => classify_upstream_error(err),
        };

        let body = json!({
            "error": message,
            "code": code,
        });

        (status, axum::Json(body)).into_response()
    }
}

/// Classify an upstream failure into an HTTP status, error code, and message.
///
/// - A non-2xx ESPN response keeps its status and body.
/// - A timeout maps to 504.
/// - An unreadable body or any other transport failure maps to 502.
fn classify_upstream_error(err: &UpstreamError) -> (StatusCode, &'static str, String) {
    match err {
        UpstreamError::Status { status, body } => (
            StatusCode::from_u16(*status).unwrap_or(StatusCode::BAD_GATEWAY),
            "UPSTREAM_ERROR",
            body.clone(),
        ),
        UpstreamError::Request(req_err) if req_err.is_timeout() => {
            tracing::warn!(error = %req_err, "ESPN request timed out");
            (
                StatusCode::GATEWAY_TIMEOUT,
                "UPSTREAM_TIMEOUT",
                "ESPN did not respond in time".to_string(),
            )
        }
        UpstreamError::Request(req_err) if req_err.is_decode() => {
            tracing::warn!(error = %req_err, "ESPN response was not JSON");
            (
                StatusCode::BAD_GATEWAY,
                "UPSTREAM_MALFORMED",
                "ESPN returned a response that is not valid JSON".to_string(),
            )
        }
        UpstreamError::Request(req_err) => {
            tracing::warn!(error = %req_err, "ESPN request failed");
            (
                StatusCode::BAD_GATEWAY,
                "UPSTREAM_UNAVAILABLE",
                "ESPN could not be reached".to_string(),
            )
        }
        UpstreamError::InvalidCookies => {
            tracing::error!("ESPN cookies rejected as header values");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                "INTERNAL_ERROR",
                "An internal error occurred".to_string(),
            )
        }
    }
}
