//! # Token Errors
//!
//! Validation failures are classified so operators can tell them apart in
//! logs. Clients never see the classification: the API maps every
//! [`TokenError`] to the same 401 response.

use thiserror::Error;

/// Classified token failure.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TokenError {
    /// No bearer token was presented.
    #[error("missing bearer token")]
    Missing,

    /// The token (or the header carrying it) is not well-formed.
    #[error("malformed token: {0}")]
    Malformed(String),

    /// The token header names an algorithm other than the configured one.
    #[error("algorithm mismatch: expected {expected}, got {found:?}")]
    AlgorithmMismatch {
        expected: &'static str,
        found: String,
    },

    /// The recomputed signature does not match.
    #[error("invalid token signature")]
    SignatureInvalid,

    /// The `exp` claim is in the past.
    #[error("token expired")]
    Expired,

    /// Encoding the token failed on the issuing side.
    #[error("token signing failed: {0}")]
    Signing(String),
}

impl TokenError {
    /// Stable, machine-readable classification for structured logs.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Missing => "missing_token",
            Self::Malformed(_) => "malformed_token",
            Self::AlgorithmMismatch { .. } => "algorithm_mismatch",
            Self::SignatureInvalid => "signature_invalid",
            Self::Expired => "expired_token",
            Self::Signing(_) => "signing_failed",
        }
    }
}

/// Invalid key material at construction time.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum KeyError {
    #[error("signing secret must not be empty")]
    EmptySecret,
}
