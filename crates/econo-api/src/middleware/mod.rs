//! Cross-cutting HTTP middleware. Authentication lives in [`crate::auth`]
//! because it is applied per route rather than to the whole router.

pub mod tracing_layer;
