//! Liveness endpoint.

/// Body returned by `GET /status`.
pub const STATUS_BODY: &str = "API is up and running";

/// Always 200 while the process is serving requests. Never authenticated.
pub async fn status() -> &'static str {
    STATUS_BODY
}
