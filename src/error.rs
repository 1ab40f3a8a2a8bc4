//! Common error type and alias.
//!
//! All upstream failures funnel into `AppError` and are rendered at the HTTP
//! boundary as a JSON envelope `{"success": false, "error": ...}`. Upstream
//! failures map to 502 so callers can distinguish relay errors from their own
//! bad requests without parsing the body.
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("HTTP client error: {0}")]
    HttpClient(#[from] reqwest::Error),

    #[error("Groq API error: {0}")]
    Groq(String),

    #[error("Shopify API error: {0}")]
    Shopify(String),

    #[error("configuration error: {0}")]
    Config(String),
}

pub type AppResult<T> = std::result::Result<T, AppError>;

impl AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            AppError::HttpClient(_) | AppError::Groq(_) | AppError::Shopify(_) => {
                StatusCode::BAD_GATEWAY
            }
            AppError::Config(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let body = json!({
            "success": false,
            "error": self.to_string(),
        });
        (self.status_code(), Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn upstream_errors_map_to_bad_gateway() {
        assert_eq!(
            AppError::Groq("boom".into()).status_code(),
            StatusCode::BAD_GATEWAY
        );
        assert_eq!(
            AppError::Shopify("boom".into()).status_code(),
            StatusCode::BAD_GATEWAY
        );
    }

    #[test]
    fn error_text_names_the_failing_upstream() {
        let err = AppError::Shopify("status 401".into());
        assert_eq!(err.to_string(), "Shopify API error: status 401");
    }
}
