//! # Claim Set
//!
//! The payload carried inside every token.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Display name of the fixed identity the issuer vouches for.
pub const DEMO_SUBJECT_NAME: &str = "John Doe";

/// Claims carried by an Econo bearer token.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claims {
    pub admin: bool,
    pub name: String,
    /// Expiry as a Unix timestamp (seconds).
    pub exp: i64,
}

impl Claims {
    pub fn new(admin: bool, name: impl Into<String>, exp: i64) -> Self {
        Self {
            admin,
            name: name.into(),
            exp,
        }
    }

    /// The hardcoded demo identity with the given expiry.
    pub fn demo(expires_at: DateTime<Utc>) -> Self {
        Self::new(true, DEMO_SUBJECT_NAME, expires_at.timestamp())
    }
}
