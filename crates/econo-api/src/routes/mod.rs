//! # Route Table
//!
//! Every endpoint is declared once, in [`RouteTable::standard`], together
//! with its [`Access`] level. [`RouteTable::into_router`] is the only place
//! routes are registered; every protected entry is wrapped in the
//! [`auth_gate`] before registration.
//!
//! | Method | Path                        | Access    | Module       |
//! |--------|-----------------------------|-----------|--------------|
//! | GET    | `/`                         | public    | [`assets`]   |
//! | GET    | `/static/*`                 | public    | [`assets`]   |
//! | GET    | `/status`                   | public    | [`status`]   |
//! | GET    | `/get-token`                | public    | [`token`]    |
//! | GET    | `/products`                 | protected | [`products`] |
//! | POST   | `/products/{slug}/feedback` | protected | [`products`] |

pub mod assets;
pub mod products;
pub mod status;
pub mod token;

use std::sync::Arc;

use axum::handler::Handler;
use axum::http::Method;
use axum::middleware::from_fn_with_state;
use axum::routing::{self, MethodRouter};
use axum::Router;
use econo_auth::TokenValidator;

use crate::auth::auth_gate;
use crate::error::AppError;
use crate::state::{AppConfig, AppState};

/// Whether a route sits behind the auth gate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Access {
    Public,
    Protected,
}

/// How an entry is attached to the router.
enum Endpoint {
    /// Matched on the exact path pattern.
    Route(MethodRouter<AppState>),
    /// Mounted under a path prefix, which is stripped before dispatch.
    Mount(MethodRouter),
}

/// One declared endpoint.
pub struct RouteEntry {
    pub method: Method,
    pub path: &'static str,
    pub access: Access,
    endpoint: Endpoint,
}

impl RouteEntry {
    pub fn get<H, T>(path: &'static str, access: Access, handler: H) -> Self
    where
        H: Handler<T, AppState>,
        T: 'static,
    {
        Self {
            method: Method::GET,
            path,
            access,
            endpoint: Endpoint::Route(routing::get(handler)),
        }
    }

    pub fn post<H, T>(path: &'static str, access: Access, handler: H) -> Self
    where
        H: Handler<T, AppState>,
        T: 'static,
    {
        Self {
            method: Method::POST,
            path,
            access,
            endpoint: Endpoint::Route(routing::post(handler)),
        }
    }

    /// A GET service on an exact path (e.g. a single file).
    pub fn get_service(
        path: &'static str,
        access: Access,
        service: MethodRouter<AppState>,
    ) -> Self {
        Self {
            method: Method::GET,
            path,
            access,
            endpoint: Endpoint::Route(service),
        }
    }

    /// A GET service mounted under `prefix` (e.g. a directory).
    pub fn mount(prefix: &'static str, access: Access, service: MethodRouter) -> Self {
        Self {
            method: Method::GET,
            path: prefix,
            access,
            endpoint: Endpoint::Mount(service),
        }
    }
}

impl std::fmt::Debug for RouteEntry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RouteEntry")
            .field("method", &self.method)
            .field("path", &self.path)
            .field("access", &self.access)
            .finish_non_exhaustive()
    }
}

/// Ordered list of endpoints, built during startup.
#[derive(Debug, Default)]
pub struct RouteTable {
    entries: Vec<RouteEntry>,
}

impl RouteTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, entry: RouteEntry) -> Self {
        self.entries.push(entry);
        self
    }

    pub fn entries(&self) -> &[RouteEntry] {
        &self.entries
    }

    /// The service's endpoints.
    pub fn standard(config: &AppConfig) -> Self {
        Self::new()
            .with(RouteEntry::get_service(
                "/",
                Access::Public,
                assets::index_page(config),
            ))
            .with(RouteEntry::mount(
                "/static",
                Access::Public,
                assets::static_files(config),
            ))
            .with(RouteEntry::get("/status", Access::Public, status::status))
            .with(RouteEntry::get("/get-token", Access::Public, token::get_token))
            .with(RouteEntry::get(
                "/products",
                Access::Protected,
                products::list_products,
            ))
            .with(RouteEntry::post(
                "/products/{slug}/feedback",
                Access::Protected,
                products::add_feedback,
            ))
    }

    /// Register every entry, gating the protected ones with `validator`.
    ///
    /// The gate is attached with `route_layer`, so it only runs for requests
    /// that matched the entry's path and method: unknown paths stay 404 and
    /// wrong methods stay 405. Mounted services get the same 405 fallback as
    /// routed ones, since the router-level fallback does not reach them.
    pub fn into_router(self, validator: Arc<TokenValidator>) -> Router<AppState> {
        let gate = from_fn_with_state(validator, auth_gate);

        let router = self
            .entries
            .into_iter()
            .fold(Router::new(), |router, entry| {
                tracing::debug!(
                    method = %entry.method,
                    path = entry.path,
                    access = ?entry.access,
                    "registering route"
                );
                match (entry.endpoint, entry.access) {
                    (Endpoint::Route(handler), Access::Public) => {
                        router.route(entry.path, handler)
                    }
                    (Endpoint::Route(handler), Access::Protected) => {
                        router.route(entry.path, handler.route_layer(gate.clone()))
                    }
                    (Endpoint::Mount(service), Access::Public) => {
                        router.nest_service(entry.path, service.fallback(method_not_allowed))
                    }
                    (Endpoint::Mount(service), Access::Protected) => router.nest_service(
                        entry.path,
                        service
                            .fallback(method_not_allowed)
                            .route_layer(gate.clone()),
                    ),
                }
            });

        router
            .fallback(not_found)
            .method_not_allowed_fallback(method_not_allowed)
    }
}

async fn not_found(uri: axum::http::Uri) -> AppError {
    AppError::NotFound(uri.path().to_string())
}

async fn method_not_allowed() -> AppError {
    AppError::MethodNotAllowed
}
