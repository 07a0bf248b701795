//! JSON API client.
//!
//! # Responsibilities
//! - Join the configured base URL and a request path
//! - Send one request with JSON `Accept`/`Content-Type` headers
//! - Keep and attach cookies when credentials are included
//! - Turn the response into a JSON value or an `unexpected status` error

use std::time::Duration;

use reqwest::header::{ACCEPT, CONTENT_TYPE};
use reqwest::redirect::Policy;
use reqwest::Client;
use serde::de::DeserializeOwned;
use serde_json::Value;
use url::Url;
use uuid::Uuid;

use crate::client::request::{ApiRequest, Method};
use crate::client::response::{empty_object, parse_body};
use crate::client::types::{ApiError, ApiResult, JsonMap};
use crate::config::validation::validate_base_url;
use crate::config::{ApiConfig, ClientConfig, TimeoutConfig};

const APPLICATION_JSON: &str = "application/json";

/// Client for a JSON backend under a fixed base URL.
///
/// Cloning is cheap; clones share the connection pool and the cookie jar.
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: Client,
    base_url: String,
}

impl ApiClient {
    /// Create a client for `base_url` with default settings.
    pub fn new(base_url: &str) -> ApiResult<Self> {
        let api = ApiConfig {
            base_url: base_url.to_string(),
            ..ApiConfig::default()
        };
        Self::build(&api, &TimeoutConfig::default())
    }

    /// Create a client from a loaded configuration.
    pub fn from_config(config: &ClientConfig) -> ApiResult<Self> {
        Self::build(&config.api, &config.timeouts)
    }

    fn build(api: &ApiConfig, timeouts: &TimeoutConfig) -> ApiResult<Self> {
        validate_base_url(&api.base_url)?;

        let redirect = if api.follow_redirects {
            Policy::default()
        } else {
            Policy::none()
        };

        let mut builder = Client::builder()
            .user_agent(api.user_agent.as_str())
            .cookie_store(api.include_credentials)
            .redirect(redirect);
        if let Some(secs) = timeouts.request_secs {
            builder = builder.timeout(Duration::from_secs(secs));
        }
        if let Some(secs) = timeouts.connect_secs {
            builder = builder.connect_timeout(Duration::from_secs(secs));
        }

        tracing::debug!(
            base_url = %api.base_url,
            include_credentials = api.include_credentials,
            follow_redirects = api.follow_redirects,
            "API client initialized"
        );

        Ok(Self {
            http: builder.build()?,
            base_url: api.base_url.clone(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Full URL for `path`. The path is appended verbatim.
    pub fn url_for(&self, path: &str) -> ApiResult<Url> {
        let raw = format!("{}{}", self.base_url, path);
        Url::parse(&raw).map_err(|source| ApiError::InvalidUrl { url: raw, source })
    }

    /// Perform one call: `method` defaults to GET, `body` is sent as JSON text.
    pub async fn fetch_api(
        &self,
        path: &str,
        method: Option<Method>,
        body: Option<JsonMap>,
    ) -> ApiResult<Value> {
        let request = ApiRequest {
            path: path.to_string(),
            method: method.unwrap_or_default(),
            body,
        };
        self.send(request).await
    }

    /// Send a request descriptor.
    ///
    /// Statuses of 300 or more fail with [`ApiError::UnexpectedStatus`].
    /// Otherwise the body is parsed as JSON; an empty or unparsable body
    /// yields `{}`.
    pub async fn send(&self, request: ApiRequest) -> ApiResult<Value> {
        let url = self.url_for(&request.path)?;
        let body = request.encoded_body()?;
        let call_id = Uuid::new_v4();

        tracing::debug!(
            call_id = %call_id,
            method = %request.method,
            url = %url,
            has_body = body.is_some(),
            "Sending API request"
        );

        let mut builder = self
            .http
            .request(request.method.into(), url)
            .header(ACCEPT, APPLICATION_JSON)
            .header(CONTENT_TYPE, APPLICATION_JSON);
        if let Some(body) = body {
            builder = builder.body(body);
        }

        let resp = builder.send().await.map_err(|e| {
            tracing::debug!(call_id = %call_id, error = %e, "API request failed");
            ApiError::Transport(e)
        })?;

        let status = resp.status().as_u16();
        if status >= 300 {
            tracing::debug!(call_id = %call_id, status, "Unexpected API status");
            return Err(ApiError::UnexpectedStatus(status));
        }

        let value = match resp.bytes().await {
            Ok(bytes) => parse_body(&bytes),
            Err(e) => {
                tracing::debug!(call_id = %call_id, error = %e, "Failed to read response body");
                empty_object()
            }
        };

        tracing::debug!(call_id = %call_id, status, "API request completed");
        Ok(value)
    }

    /// Send a request and deserialize the resulting value into `T`.
    pub async fn fetch_as<T: DeserializeOwned>(&self, request: ApiRequest) -> ApiResult<T> {
        let value = self.send(request).await?;
        serde_json::from_value(value).map_err(ApiError::Decode)
    }

    pub async fn get(&self, path: &str) -> ApiResult<Value> {
        self.send(ApiRequest::new(path)).await
    }

    pub async fn post(&self, path: &str, body: JsonMap) -> ApiResult<Value> {
        self.send(ApiRequest::new(path).method(Method::Post).body(body))
            .await
    }

    pub async fn put(&self, path: &str, body: JsonMap) -> ApiResult<Value> {
        self.send(ApiRequest::new(path).method(Method::Put).body(body))
            .await
    }

    pub async fn patch(&self, path: &str, body: JsonMap) -> ApiResult<Value> {
        self.send(ApiRequest::new(path).method(Method::Patch).body(body))
            .await
    }

    pub async fn delete(&self, path: &str) -> ApiResult<Value> {
        self.send(ApiRequest::new(path).method(Method::Delete)).await
    }
}
