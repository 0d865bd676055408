//! # Token Issuer
//!
//! Signs the fixed demo claim set. The only failure mode is an internal
//! encoding error, reported as [`TokenError::Signing`] for the caller to turn
//! into a 500.

use chrono::{DateTime, Duration, Utc};
use jsonwebtoken::{encode, EncodingKey, Header};

use crate::claims::Claims;
use crate::error::TokenError;
use crate::secret::SigningSecret;
use crate::ALGORITHM;

/// Issues HS256 tokens valid for a fixed time-to-live.
#[derive(Clone)]
pub struct TokenIssuer {
    encoding_key: EncodingKey,
    ttl: Duration,
}

impl TokenIssuer {
    pub fn new(secret: &SigningSecret, ttl: Duration) -> Self {
        Self {
            encoding_key: EncodingKey::from_secret(secret.as_bytes()),
            ttl,
        }
    }

    pub fn ttl(&self) -> Duration {
        self.ttl
    }

    /// Issue a demo token expiring `ttl` from now.
    pub fn issue(&self) -> Result<String, TokenError> {
        self.issue_at(Utc::now())
    }

    /// Issue a demo token as if the current time were `now`.
    ///
    /// Fails with [`TokenError::Signing`] if `now + ttl` is outside the
    /// representable time range.
    pub fn issue_at(&self, now: DateTime<Utc>) -> Result<String, TokenError> {
        let expires_at = now.checked_add_signed(self.ttl).ok_or_else(|| {
            TokenError::Signing("token expiry is out of the supported time range".into())
        })?;
        let claims = Claims::demo(expires_at);
        let token = self.sign(&claims)?;
        tracing::debug!(exp = claims.exp, "issued bearer token");
        Ok(token)
    }

    /// Sign an arbitrary claim set.
    pub fn sign(&self, claims: &Claims) -> Result<String, TokenError> {
        encode(&Header::new(ALGORITHM), claims, &self.encoding_key)
            .map_err(|e| TokenError::Signing(e.to_string()))
    }
}

impl std::fmt::Debug for TokenIssuer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TokenIssuer")
            .field("algorithm", &ALGORITHM)
            .field("ttl_secs", &self.ttl.num_seconds())
            .finish_non_exhaustive()
    }
}
