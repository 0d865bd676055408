//! # Token Issuance
//!
//! `GET /get-token` hands out a freshly signed demo token. The endpoint is
//! public and takes no credentials.

use axum::extract::State;

use crate::error::AppError;
use crate::state::AppState;

/// Issue a token for the demo identity, valid for the configured TTL.
///
/// The body is the raw compact token as `text/plain`. A signing failure
/// maps to a 500 through [`AppError`].
pub async fn get_token(State(state): State<AppState>) -> Result<String, AppError> {
    let token = state.issuer.issue()?;
    tracing::info!(ttl_hours = state.issuer.ttl().num_hours(), "issued token");
    Ok(token)
}
