//! Request descriptors.
//!
//! An [`ApiRequest`] is built per call and consumed by
//! [`ApiClient::send`](crate::client::ApiClient::send). The method defaults
//! to GET and the body is absent unless set.

use std::fmt;
use std::str::FromStr;

use serde::Serialize;
use serde_json::Value;

use crate::client::types::{ApiError, ApiResult, JsonMap};

/// HTTP method of an API call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Method {
    #[default]
    Get,
    Post,
    Put,
    Patch,
    Delete,
    Head,
    Options,
}

impl Method {
    pub fn as_str(&self) -> &'static str {
        match self {
            Method::Get => "GET",
            Method::Post => "POST",
            Method::Put => "PUT",
            Method::Patch => "PATCH",
            Method::Delete => "DELETE",
            Method::Head => "HEAD",
            Method::Options => "OPTIONS",
        }
    }

    /// Whether a request with this method may carry a body.
    pub fn allows_body(&self) -> bool {
        !matches!(self, Method::Get | Method::Head)
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Method {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_uppercase().as_str() {
            "GET" => Ok(Method::Get),
            "POST" => Ok(Method::Post),
            "PUT" => Ok(Method::Put),
            "PATCH" => Ok(Method::Patch),
            "DELETE" => Ok(Method::Delete),
            "HEAD" => Ok(Method::Head),
            "OPTIONS" => Ok(Method::Options),
            other => Err(format!("unsupported method '{}'", other)),
        }
    }
}

impl From<Method> for reqwest::Method {
    fn from(method: Method) -> Self {
        match method {
            Method::Get => reqwest::Method::GET,
            Method::Post => reqwest::Method::POST,
            Method::Put => reqwest::Method::PUT,
            Method::Patch => reqwest::Method::PATCH,
            Method::Delete => reqwest::Method::DELETE,
            Method::Head => reqwest::Method::HEAD,
            Method::Options => reqwest::Method::OPTIONS,
        }
    }
}

/// A single API call: path relative to the base URL, method and optional body.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ApiRequest {
    pub path: String,
    pub method: Method,
    pub body: Option<JsonMap>,
}

impl ApiRequest {
    /// GET request for `path` with no body.
    pub fn new(path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            method: Method::Get,
            body: None,
        }
    }

    pub fn method(mut self, method: Method) -> Self {
        self.method = method;
        self
    }

    pub fn body(mut self, body: JsonMap) -> Self {
        self.body = Some(body);
        self
    }

    /// Attach any serializable value as the body. It must serialize to an object.
    pub fn json<T: Serialize + ?Sized>(mut self, body: &T) -> ApiResult<Self> {
        match serde_json::to_value(body).map_err(ApiError::Serialize)? {
            Value::Object(map) => {
                self.body = Some(map);
                Ok(self)
            }
            _ => Err(ApiError::BodyNotObject),
        }
    }

    /// JSON text sent on the wire, if there is a body.
    pub fn encoded_body(&self) -> ApiResult<Option<String>> {
        let Some(body) = &self.body else {
            return Ok(None);
        };
        if !self.method.allows_body() {
            return Err(ApiError::BodyNotAllowed(self.method));
        }
        serde_json::to_string(body)
            .map(Some)
            .map_err(ApiError::Serialize)
    }
}
