//! # Signing Secret
//!
//! The shared HMAC key. Custom `Debug` redacts the value to prevent
//! credential leakage in logs; the bytes are zeroized on drop.

use zeroize::{Zeroize, ZeroizeOnDrop};

use crate::error::KeyError;

/// Process-wide symmetric secret shared by [`TokenIssuer`](crate::TokenIssuer)
/// and [`TokenValidator`](crate::TokenValidator).
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct SigningSecret(Vec<u8>);

impl SigningSecret {
    /// Wrap raw secret bytes. Rejects an empty secret.
    pub fn new(bytes: impl Into<Vec<u8>>) -> Result<Self, KeyError> {
        let bytes = bytes.into();
        if bytes.is_empty() {
            return Err(KeyError::EmptySecret);
        }
        if bytes.len() < 32 {
            tracing::warn!(
                len = bytes.len(),
                "signing secret is shorter than recommended (32 bytes)"
            );
        }
        Ok(Self(bytes))
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }
}

impl std::fmt::Debug for SigningSecret {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_tuple("SigningSecret").field(&"[REDACTED]").finish()
    }
}
