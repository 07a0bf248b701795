//! Client error definitions.

use thiserror::Error;

use crate::client::request::Method;
use crate::config::validation::ValidationError;

/// JSON object used for request bodies.
pub type JsonMap = serde_json::Map<String, serde_json::Value>;

/// Errors that can occur during an API call.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The backend answered with a status of 300 or greater.
    #[error("unexpected status: {0}")]
    UnexpectedStatus(u16),

    /// The request could not be built or sent.
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// The base URL cannot have request paths appended to it.
    #[error("invalid base URL: {0}")]
    InvalidBaseUrl(#[from] ValidationError),

    /// Base URL and path do not form a valid URL.
    #[error("invalid URL '{url}': {source}")]
    InvalidUrl {
        url: String,
        #[source]
        source: url::ParseError,
    },

    /// The request body could not be serialized.
    #[error("failed to serialize request body: {0}")]
    Serialize(#[source] serde_json::Error),

    /// A typed request body did not serialize to a JSON object.
    #[error("request body must be a JSON object")]
    BodyNotObject,

    /// The method does not carry a body.
    #[error("{0} requests cannot have a body")]
    BodyNotAllowed(Method),

    /// The response value did not match the requested type.
    #[error("failed to decode response: {0}")]
    Decode(#[source] serde_json::Error),
}

impl ApiError {
    /// Status code carried by the error, if the backend answered at all.
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::UnexpectedStatus(code) => Some(*code),
            ApiError::Transport(e) => e.status().map(|s| s.as_u16()),
            _ => None,
        }
    }
}

/// Result type for API calls.
pub type ApiResult<T> = Result<T, ApiError>;
