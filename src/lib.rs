//! JSON API client for a backend under a fixed base URL.
//!
//! ```no_run
//! # async fn demo() -> fetch_api::ApiResult<()> {
//! use fetch_api::{ApiClient, Method};
//!
//! let client = ApiClient::new("http://localhost:8000/v0")?;
//! let user = client.fetch_api("/users/1", None, None).await?;
//! let body = serde_json::json!({"name": "octocat"}).as_object().cloned();
//! client.fetch_api("/users", Some(Method::Post), body).await?;
//! # let _ = user;
//! # Ok(())
//! # }
//! ```

pub mod client;
pub mod config;
pub mod observability;

pub use client::{ApiClient, ApiError, ApiRequest, ApiResult, JsonMap, Method};
pub use config::ClientConfig;
