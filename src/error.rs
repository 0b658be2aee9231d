use axum::{
    Json,
    http::{StatusCode, header},
    response::IntoResponse,
};
use serde_json::json;
use thiserror::Error;

pub type AppResult<T> = Result<T, AppError>;

/// Fallback shown to the caller whenever the submission could not be
/// delivered for reasons the caller cannot act on. Internal detail goes to
/// the log only.
const FALLBACK_MESSAGE: &str = "Failed to submit form. Please try again.";

/// Application error type
///
/// Every failure path of the gateway maps onto one of these variants; all
/// of them produce a structured `{success, message}` response rather than
/// terminating the process.
#[derive(Error, Debug)]
pub enum AppError {
    // ===== Rate Limiting =====
    #[error("submission rate limited, retry in {retry_after_secs}s")]
    RateLimited { retry_after_secs: u64 },

    // ===== Inbound Payload Errors =====
    #[error("unreadable submission payload: {0}")]
    Payload(String),

    // ===== Relay / Network Errors =====
    #[error("relay request failed: {0}")]
    Relay(#[from] reqwest::Error),
}

impl AppError {
    /// Get the HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::RateLimited { .. } => StatusCode::TOO_MANY_REQUESTS,
            AppError::Payload(_) | AppError::Relay(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Get the user-facing message (without sensitive details)
    pub fn user_message(&self) -> String {
        match self {
            AppError::RateLimited { retry_after_secs } => format!(
                "Please wait {} seconds before sending another message.",
                retry_after_secs
            ),
            AppError::Payload(_) | AppError::Relay(_) => FALLBACK_MESSAGE.to_string(),
        }
    }

    /// Get error code for log correlation
    pub fn error_code(&self) -> &'static str {
        match self {
            AppError::RateLimited { .. } => "RATE_LIMITED",
            AppError::Payload(_) => "PAYLOAD_ERROR",
            AppError::Relay(_) => "RELAY_ERROR",
        }
    }

    /// Log this error with appropriate level and context
    pub fn log(&self) {
        let status = self.status_code();
        let code = self.error_code();

        if status.is_server_error() {
            tracing::error!(
                error = %self,
                error_code = %code,
                status = %status.as_u16(),
                "Server error occurred"
            );
        } else {
            tracing::debug!(
                error = %self,
                error_code = %code,
                "Client error occurred"
            );
        }
    }

    /// Create a payload error
    pub fn payload(msg: impl Into<String>) -> Self {
        AppError::Payload(msg.into())
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        // Log the error with appropriate level
        self.log();

        let status = self.status_code();
        let body = json!({
            "success": false,
            "message": self.user_message(),
        });

        let mut response = (status, Json(body)).into_response();

        // Standard retry hint alongside the in-body message
        if let AppError::RateLimited { retry_after_secs } = self
            && let Ok(value) = header::HeaderValue::from_str(&retry_after_secs.to_string())
        {
            response.headers_mut().insert(header::RETRY_AFTER, value);
        }

        response
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rate_limited_maps_to_429() {
        let err = AppError::RateLimited {
            retry_after_secs: 90,
        };
        assert_eq!(err.status_code(), StatusCode::TOO_MANY_REQUESTS);
        assert_eq!(
            err.user_message(),
            "Please wait 90 seconds before sending another message."
        );
    }

    #[test]
    fn test_payload_error_is_masked_behind_fallback() {
        let err = AppError::payload("multipart stream ended unexpectedly");
        assert_eq!(err.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(err.user_message(), FALLBACK_MESSAGE);
        assert!(!err.user_message().contains("multipart"));
    }

    #[test]
    fn test_rate_limited_response_carries_retry_after_header() {
        let response = AppError::RateLimited {
            retry_after_secs: 42,
        }
        .into_response();
        assert_eq!(response.status(), StatusCode::TOO_MANY_REQUESTS);
        assert_eq!(
            response
                .headers()
                .get(header::RETRY_AFTER)
                .and_then(|v| v.to_str().ok()),
            Some("42")
        );
    }
}
