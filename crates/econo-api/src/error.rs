//! # API Error Types
//!
//! Structured error type implementing `axum::response::IntoResponse`.
//! Every variant renders a fixed plain-text body; the detail carried inside
//! the variant is for logs only and never reaches the client.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use econo_auth::TokenError;
use thiserror::Error;

/// Body of every 401 response.
pub const UNAUTHORIZED_BODY: &str = "Unauthorized";

/// Application-level error type that implements [`IntoResponse`] for Axum.
#[derive(Error, Debug)]
pub enum AppError {
    /// No route matches the request path (404).
    #[error("not found: {0}")]
    NotFound(String),

    /// The path matches but not with this method (405).
    #[error("method not allowed")]
    MethodNotAllowed,

    /// Token validation failed (401). The classification is logged by the
    /// auth gate; the client only ever sees [`UNAUTHORIZED_BODY`].
    #[error("unauthorized: {0}")]
    Unauthorized(TokenError),

    /// Internal server error (500). Message is logged but not returned to client.
    #[error("internal error: {0}")]
    Internal(String),
}

impl AppError {
    /// HTTP status and fixed response body for this error.
    fn status_and_body(&self) -> (StatusCode, &'static str) {
        match self {
            Self::NotFound(_) => (StatusCode::NOT_FOUND, "Not Found"),
            Self::MethodNotAllowed => (StatusCode::METHOD_NOT_ALLOWED, "Method Not Allowed"),
            Self::Unauthorized(_) => (StatusCode::UNAUTHORIZED, UNAUTHORIZED_BODY),
            Self::Internal(_) => (StatusCode::INTERNAL_SERVER_ERROR, "Internal Server Error"),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, body) = self.status_and_body();

        if matches!(&self, Self::Internal(_)) {
            tracing::error!(error = %self, "internal server error");
        }

        (status, body).into_response()
    }
}

/// Issuer-side signing failures are internal; everything else is a 401.
impl From<TokenError> for AppError {
    fn from(err: TokenError) -> Self {
        match err {
            TokenError::Signing(msg) => Self::Internal(format!("token signing failed: {msg}")),
            other => Self::Unauthorized(other),
        }
    }
}
