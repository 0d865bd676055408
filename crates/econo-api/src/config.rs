//! # Command-Line Configuration
//!
//! Every setting can be passed as a flag or through the environment. Values
//! are validated once, then frozen into an [`AppConfig`].

use std::path::PathBuf;

use chrono::Duration;
use clap::{Parser, ValueEnum};
use econo_auth::{KeyError, SigningSecret};
use thiserror::Error;

use crate::state::{AppConfig, DEFAULT_PORT, DEFAULT_TOKEN_TTL_HOURS, MAX_TOKEN_TTL_HOURS};

/// Log output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LogFormat {
    /// Human-readable lines.
    Pretty,
    /// One JSON object per event.
    Json,
}

/// Command-line arguments for `econo-api`.
///
/// No `Debug` derive: `secret` is plain text here.
#[derive(Parser)]
#[command(
    name = "econo-api",
    version,
    about = "Product catalog and feedback API behind an HS256 bearer-token gate"
)]
pub struct Args {
    /// Port to listen on.
    #[arg(long, env = "PORT", default_value_t = DEFAULT_PORT)]
    pub port: u16,

    /// Shared HMAC secret used to sign and verify tokens.
    #[arg(
        long,
        env = "ECONO_SECRET",
        default_value = "secret",
        hide_env_values = true,
        hide_default_value = true
    )]
    pub secret: String,

    /// Lifetime of issued tokens, in hours.
    #[arg(long, env = "ECONO_TOKEN_TTL_HOURS", default_value_t = DEFAULT_TOKEN_TTL_HOURS)]
    pub token_ttl_hours: i64,

    /// Directory served under /static/.
    #[arg(long, env = "ECONO_STATIC_DIR", default_value = "./static")]
    pub static_dir: PathBuf,

    /// Directory containing index.html, served at /.
    #[arg(long, env = "ECONO_VIEWS_DIR", default_value = "./views")]
    pub views_dir: PathBuf,

    /// Log output format.
    #[arg(long, env = "ECONO_LOG_FORMAT", value_enum, default_value_t = LogFormat::Pretty)]
    pub log_format: LogFormat,
}

/// Invalid startup configuration.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("invalid secret: {0}")]
    Secret(#[from] KeyError),

    #[error("token TTL must be positive, got {0} hours")]
    NonPositiveTtl(i64),

    #[error("token TTL must be at most {max} hours, got {hours}")]
    TtlTooLong { hours: i64, max: i64 },
}

impl Args {
    /// Validate and freeze into an [`AppConfig`].
    pub fn into_config(self) -> Result<AppConfig, ConfigError> {
        let hours = self.token_ttl_hours;
        if hours <= 0 {
            return Err(ConfigError::NonPositiveTtl(hours));
        }
        let token_ttl = Some(hours)
            .filter(|h| *h <= MAX_TOKEN_TTL_HOURS)
            .and_then(Duration::try_hours)
            .ok_or(ConfigError::TtlTooLong {
                hours,
                max: MAX_TOKEN_TTL_HOURS,
            })?;
        let secret = SigningSecret::new(self.secret.into_bytes())?;

        Ok(AppConfig {
            port: self.port,
            secret,
            token_ttl,
            static_dir: self.static_dir,
            views_dir: self.views_dir,
        })
    }
}
