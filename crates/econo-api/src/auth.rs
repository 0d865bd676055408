//! # Authentication Gate
//!
//! Bearer token middleware for protected routes.
//!
//! ## Per-request lifecycle
//!
//! ```text
//! Unauthenticated ──► Validating ──┬──► Authorized  (handler runs)
//!                                  └──► Rejected    (401 "Unauthorized")
//! ```
//!
//! Each request starts a fresh lifecycle; the gate keeps no state between
//! requests. On success the verified claims are injected into the request
//! extensions, where handlers pick them up via [`VerifiedClaims`].

use std::sync::Arc;

use axum::extract::{FromRequestParts, Request, State};
use axum::http::header::AUTHORIZATION;
use axum::http::request::Parts;
use axum::http::HeaderMap;
use axum::middleware::Next;
use axum::response::{IntoResponse, Response};
use axum_extra::headers::authorization::{Authorization, Bearer};
use axum_extra::headers::Header;
use econo_auth::{Claims, TokenError, TokenValidator};

use crate::error::AppError;

/// Claims of the authenticated caller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VerifiedClaims(pub Claims);

/// Extracts the claims that [`auth_gate`] injected into extensions.
/// Returns 401 if no claims are present (gate didn't run or failed).
impl<S: Send + Sync> FromRequestParts<S> for VerifiedClaims {
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        parts
            .extensions
            .get::<VerifiedClaims>()
            .cloned()
            .ok_or(AppError::Unauthorized(TokenError::Missing))
    }
}

/// Pull the raw token out of `Authorization: Bearer <token>`.
///
/// The scheme is matched case-insensitively.
pub fn bearer_token(headers: &HeaderMap) -> Result<String, TokenError> {
    let mut values = headers.get_all(AUTHORIZATION).iter().peekable();
    if values.peek().is_none() {
        return Err(TokenError::Missing);
    }
    let auth = Authorization::<Bearer>::decode(&mut values).map_err(|_| {
        TokenError::Malformed("authorization header must use the Bearer scheme".into())
    })?;
    Ok(auth.token().to_string())
}

/// Run the full validator pipeline against a request's headers.
pub fn validate_request(
    validator: &TokenValidator,
    headers: &HeaderMap,
) -> Result<Claims, TokenError> {
    let token = bearer_token(headers)?;
    validator.verify(&token)
}

/// Middleware guarding a protected handler.
///
/// Forwards the request untouched (apart from the claims extension) when the
/// token is valid; otherwise responds 401 without invoking the handler. The
/// log line carries the failure class from [`TokenError::kind`] and nothing
/// derived from the token itself.
pub async fn auth_gate(
    State(validator): State<Arc<TokenValidator>>,
    mut request: Request,
    next: Next,
) -> Response {
    match validate_request(&validator, request.headers()) {
        Ok(claims) => {
            request.extensions_mut().insert(VerifiedClaims(claims));
            next.run(request).await
        }
        Err(err) => {
            tracing::warn!(
                reason = err.kind(),
                method = %request.method(),
                path = %request.uri().path(),
                "authentication failed"
            );
            AppError::Unauthorized(err).into_response()
        }
    }
}
