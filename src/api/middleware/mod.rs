//! HTTP middleware for request processing.
//!
//! Only request tracing is applied; the service has no authentication or
//! rate limiting.

pub mod tracing;
