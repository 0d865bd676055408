//! # Token Validator
//!
//! Verification runs as a fixed sequence, stopping at the first failure:
//!
//! 1. decode all three segments and parse the JSON . [`TokenError::Malformed`]
//! 2. compare the raw header's `alg` with HS256 .... [`TokenError::AlgorithmMismatch`]
//! 3. recompute the HMAC over header+claims ........ [`TokenError::SignatureInvalid`]
//! 4. compare `exp` with the current time .......... [`TokenError::Expired`]
//!
//! Steps 1 and 2 run before `jsonwebtoken` sees the token. Its header type
//! only models algorithms it implements, so a `"none"` header would
//! otherwise be reported as a JSON error instead of a downgrade attempt.

use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use base64::Engine as _;
use jsonwebtoken::errors::ErrorKind;
use jsonwebtoken::{decode, Algorithm, DecodingKey, Validation};
use serde::de::DeserializeOwned;
use serde::Deserialize;

use crate::claims::Claims;
use crate::error::TokenError;
use crate::secret::SigningSecret;
use crate::{ALGORITHM, ALGORITHM_NAME};

/// Longest `alg` value carried into an [`TokenError::AlgorithmMismatch`].
const MAX_REPORTED_ALG_LEN: usize = 16;

/// Verifies HS256 tokens against the shared secret.
///
/// Holds no mutable state: one validator can serve every request
/// concurrently.
#[derive(Clone)]
pub struct TokenValidator {
    decoding_key: DecodingKey,
    validation: Validation,
}

#[derive(Deserialize)]
struct RawHeader {
    alg: String,
}

impl TokenValidator {
    pub fn new(secret: &SigningSecret) -> Self {
        let mut validation = Validation::new(ALGORITHM);
        // Expiry is exact: a token is dead the second `exp` passes.
        validation.leeway = 0;
        validation.validate_exp = true;
        validation.validate_aud = false;
        validation.set_required_spec_claims(&["exp"]);

        Self {
            decoding_key: DecodingKey::from_secret(secret.as_bytes()),
            validation,
        }
    }

    /// Verify a raw token string and return its claims.
    pub fn verify(&self, token: &str) -> Result<Claims, TokenError> {
        let alg = parse_segments(token)?;
        match alg.parse::<Algorithm>() {
            Ok(parsed) if parsed == ALGORITHM => {}
            _ => {
                return Err(TokenError::AlgorithmMismatch {
                    expected: ALGORITHM_NAME,
                    found: alg.chars().take(MAX_REPORTED_ALG_LEN).collect(),
                })
            }
        }

        decode::<Claims>(token, &self.decoding_key, &self.validation)
            .map(|data| data.claims)
            .map_err(|e| classify(e.kind()))
    }
}

impl std::fmt::Debug for TokenValidator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TokenValidator")
            .field("algorithm", &ALGORITHM)
            .field("leeway_secs", &self.validation.leeway)
            .finish_non_exhaustive()
    }
}

/// Check that every segment is well-formed and return the header's `alg`.
///
/// Nothing parsed here is trusted; the claims are decoded only to reject
/// malformed payloads before any key material is used.
fn parse_segments(token: &str) -> Result<String, TokenError> {
    let mut segments = token.split('.');
    let (Some(header), Some(claims), Some(signature), None) = (
        segments.next(),
        segments.next(),
        segments.next(),
        segments.next(),
    ) else {
        return Err(TokenError::Malformed(
            "expected three dot-separated segments".into(),
        ));
    };

    let raw: RawHeader = decode_json(header, "header")?;
    decode_json::<Claims>(claims, "claims")?;
    URL_SAFE_NO_PAD
        .decode(signature)
        .map_err(|_| TokenError::Malformed("signature is not base64url".into()))?;
    Ok(raw.alg)
}

fn decode_json<T: DeserializeOwned>(segment: &str, name: &str) -> Result<T, TokenError> {
    let bytes = URL_SAFE_NO_PAD
        .decode(segment)
        .map_err(|_| TokenError::Malformed(format!("{name} is not base64url")))?;
    serde_json::from_slice(&bytes).map_err(|e| {
        TokenError::Malformed(format!("{name} is not valid JSON ({:?})", e.classify()))
    })
}

fn classify(kind: &ErrorKind) -> TokenError {
    match kind {
        ErrorKind::InvalidSignature => TokenError::SignatureInvalid,
        ErrorKind::ExpiredSignature => TokenError::Expired,
        ErrorKind::InvalidAlgorithm | ErrorKind::InvalidAlgorithmName => {
            TokenError::AlgorithmMismatch {
                expected: ALGORITHM_NAME,
                found: "unsupported".into(),
            }
        }
        ErrorKind::MissingRequiredClaim(claim) => {
            TokenError::Malformed(format!("missing required claim: {claim}"))
        }
        ErrorKind::Base64(e) => TokenError::Malformed(format!("invalid base64url: {e}")),
        ErrorKind::Json(e) => TokenError::Malformed(format!("invalid claims ({:?})", e.classify())),
        ErrorKind::Utf8(e) => TokenError::Malformed(format!("invalid utf-8: {e}")),
        other => TokenError::Malformed(format!("{other:?}")),
    }
}
