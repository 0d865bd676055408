//! # Application State
//!
//! Shared state for the Axum application, passed to all route handlers
//! via the `State` extractor.
//!
//! Everything here is built once at startup and is read-only afterwards,
//! so concurrent requests share it through `Arc` without locking.

use std::path::PathBuf;
use std::sync::Arc;

use chrono::Duration;
use econo_auth::{SigningSecret, TokenIssuer, TokenValidator};
use econo_core::{Catalog, StaticCatalog};

/// Default bind port.
pub const DEFAULT_PORT: u16 = 3000;

/// Default token time-to-live.
pub const DEFAULT_TOKEN_TTL_HOURS: i64 = 24;

/// Longest accepted token time-to-live (ten years).
pub const MAX_TOKEN_TTL_HOURS: i64 = 24 * 365 * 10;

/// Process-start configuration. Never changed at runtime.
///
/// `Debug` is safe to log: [`SigningSecret`] redacts itself.
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Port to bind the HTTP server to.
    pub port: u16,
    /// Shared HMAC secret for token issuance and validation.
    pub secret: SigningSecret,
    /// Lifetime of issued tokens.
    pub token_ttl: Duration,
    /// Directory served under `/static/`.
    pub static_dir: PathBuf,
    /// Directory holding `index.html`, served at `/`.
    pub views_dir: PathBuf,
}

impl AppConfig {
    /// Configuration with the given secret and defaults for everything else.
    pub fn with_secret(secret: SigningSecret) -> Self {
        Self {
            port: DEFAULT_PORT,
            secret,
            token_ttl: Duration::hours(DEFAULT_TOKEN_TTL_HOURS),
            static_dir: PathBuf::from("./static"),
            views_dir: PathBuf::from("./views"),
        }
    }

    /// Path of the index page.
    pub fn index_page(&self) -> PathBuf {
        self.views_dir.join("index.html")
    }
}

/// Shared application state.
///
/// The issuer and validator are both derived from `config.secret` here and
/// nowhere else, so they can never disagree on the key.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
    pub issuer: Arc<TokenIssuer>,
    pub validator: Arc<TokenValidator>,
    pub catalog: Arc<dyn Catalog>,
}

impl AppState {
    /// Build state with the seeded product catalog.
    pub fn from_config(config: AppConfig) -> Self {
        Self::with_catalog(config, Arc::new(StaticCatalog::seeded()))
    }

    /// Build state around an explicit catalog.
    pub fn with_catalog(config: AppConfig, catalog: Arc<dyn Catalog>) -> Self {
        let issuer = TokenIssuer::new(&config.secret, config.token_ttl);
        let validator = TokenValidator::new(&config.secret);
        Self {
            config: Arc::new(config),
            issuer: Arc::new(issuer),
            validator: Arc::new(validator),
            catalog,
        }
    }
}

impl std::fmt::Debug for AppState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppState")
            .field("config", &self.config)
            .field("issuer", &self.issuer)
            .field("validator", &self.validator)
            .field("products", &self.catalog.products().len())
            .finish()
    }
}
