//! HTTP request helper for a JSON backend.
//!
//! # Data Flow
//! ```text
//! ApiRequest { path, method (default GET), body? }
//!     → api.rs (base URL + path, JSON headers, cookie jar)
//!     → one outbound HTTP request
//!     → status >= 300 → ApiError::UnexpectedStatus(code)
//!     → status <  300 → response.rs (JSON value, or {} if absent/unparsable)
//! ```
//!
//! # Design Decisions
//! - Exactly one network call per invocation: no retry, cache or dedup
//! - Response parse failures are not errors
//! - Redirects are not followed unless configured, so 3xx is a failure

pub mod api;
pub mod request;
pub mod response;
pub mod types;

pub use api::ApiClient;
pub use request::{ApiRequest, Method};
pub use types::{ApiError, ApiResult, JsonMap};
