//! # econo-auth — Bearer Token Lifecycle
//!
//! Symmetric-key token issuance and validation for the Econo API.
//!
//! ## Token Format
//!
//! JWT compact serialization, signed with HMAC-SHA256:
//!
//! ```text
//! base64url({"typ":"JWT","alg":"HS256"}) . base64url({"admin":true,"name":"John Doe","exp":1700000000}) . base64url(sig)
//! ```
//!
//! ## Components
//!
//! - [`SigningSecret`]: the process-wide shared secret. Built once at startup,
//!   handed to both sides by reference, zeroized on drop.
//! - [`TokenIssuer`]: signs the fixed demo claim set with `exp = now + ttl`.
//! - [`TokenValidator`]: parses, checks the algorithm, verifies the signature,
//!   and checks expiry, in that order. Every failure is classified as a
//!   [`TokenError`] variant; none of them is partially trusted.
//!
//! ## Crate Policy
//!
//! - Transport agnostic: no HTTP types. Header extraction lives in `econo-api`.
//! - No global state. Keys are owned by the issuer/validator values.
//! - No `panic!()` or `.unwrap()` outside tests.

pub mod claims;
pub mod error;
pub mod issuer;
pub mod secret;
pub mod validator;

pub use claims::{Claims, DEMO_SUBJECT_NAME};
pub use error::{KeyError, TokenError};
pub use issuer::TokenIssuer;
pub use secret::SigningSecret;
pub use validator::TokenValidator;

/// The single signing algorithm accepted by this crate.
pub const ALGORITHM: jsonwebtoken::Algorithm = jsonwebtoken::Algorithm::HS256;

/// Header name of [`ALGORITHM`].
pub const ALGORITHM_NAME: &str = "HS256";
