//! # econo-api — Product Catalog and Feedback Service
//!
//! A small HTTP service exposing a fixed product catalog and a feedback
//! endpoint, both behind an HS256 bearer-token gate, plus a public endpoint
//! that issues demo tokens.
//!
//! ## API Surface
//!
//! | Method | Path                        | Access    | Module                 |
//! |--------|-----------------------------|-----------|------------------------|
//! | GET    | `/`                         | public    | [`routes::assets`]     |
//! | GET    | `/static/*`                 | public    | [`routes::assets`]     |
//! | GET    | `/status`                   | public    | [`routes::status`]     |
//! | GET    | `/get-token`                | public    | [`routes::token`]      |
//! | GET    | `/products`                 | protected | [`routes::products`]   |
//! | POST   | `/products/{slug}/feedback` | protected | [`routes::products`]   |
//!
//! ## Middleware Stack (execution order)
//!
//! ```text
//! TraceLayer → Router ─┬─ public route ─────────────────► Handler
//!                      └─ protected route → auth_gate ──► Handler
//! ```
//!
//! Unmatched paths fall through to a plain-text 404; a matched path with
//! the wrong method gets a plain-text 405. Neither runs the auth gate.

pub mod auth;
pub mod config;
pub mod error;
pub mod middleware;
pub mod routes;
pub mod state;

use axum::Router;

pub use crate::error::AppError;
pub use crate::state::{AppConfig, AppState};

use crate::routes::{Access, RouteTable};

/// Assemble the full application router with all routes and middleware.
pub fn app(state: AppState) -> Router {
    let table = RouteTable::standard(&state.config);
    let protected = table
        .entries()
        .iter()
        .filter(|entry| entry.access == Access::Protected)
        .count();
    tracing::info!(
        routes = table.entries().len(),
        protected,
        products = state.catalog.products().len(),
        "router assembled"
    );

    table
        .into_router(state.validator.clone())
        .layer(middleware::tracing_layer::layer())
        .with_state(state)
}
