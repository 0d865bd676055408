//! # Product Endpoints
//!
//! Both routes are protected; the auth gate has already run by the time these
//! handlers are invoked.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;

use crate::auth::VerifiedClaims;
use crate::state::AppState;

/// Body returned when feedback targets an unknown slug.
pub const PRODUCT_NOT_FOUND_BODY: &str = "Product Not Found";

/// `GET /products`: the full catalog as a JSON array, in catalog order.
pub async fn list_products(State(state): State<AppState>) -> Response {
    Json(state.catalog.products()).into_response()
}

/// `POST /products/{slug}/feedback`.
///
/// Echoes the matching product as JSON. An unknown slug is answered with
/// 200 and a plain-text notice, not a 404. Feedback content is not read or
/// stored.
pub async fn add_feedback(
    State(state): State<AppState>,
    Path(slug): Path<String>,
    VerifiedClaims(claims): VerifiedClaims,
) -> Response {
    match state.catalog.find_by_slug(&slug) {
        Some(product) => {
            tracing::info!(slug = %slug, caller = %claims.name, "feedback received");
            Json(product).into_response()
        }
        None => {
            tracing::debug!(slug = %slug, "feedback for unknown product");
            (StatusCode::OK, PRODUCT_NOT_FOUND_BODY).into_response()
        }
    }
}
