//! HTTP middleware stack for the storefront.
//!
//! # Middleware Order (outermost first)
//!
//! 1. Sentry layers (binary only)
//! 2. `TraceLayer` (request tracing span)
//! 3. Request ID (tag the span, Sentry scope and response)

pub mod request_id;

pub use request_id::{REQUEST_ID_HEADER, request_id_middleware, request_span};
