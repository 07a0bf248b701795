//! Response body handling.
//!
//! A successful call yields the parsed JSON body. An absent, empty or
//! unparsable body degrades to an empty object instead of an error.

use serde_json::Value;

use crate::client::types::JsonMap;

/// The value returned when there is nothing to parse.
pub fn empty_object() -> Value {
    Value::Object(JsonMap::new())
}

/// Parse a response body, falling back to `{}`.
pub fn parse_body(bytes: &[u8]) -> Value {
    if bytes.is_empty() {
        return empty_object();
    }

    match serde_json::from_slice(bytes) {
        Ok(value) => value,
        Err(e) => {
            tracing::debug!(error = %e, len = bytes.len(), "Response body is not JSON");
            empty_object()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_parses_json() {
        assert_eq!(parse_body(br#"{"id":1}"#), json!({"id": 1}));
        assert_eq!(parse_body(b"[1,2]"), json!([1, 2]));
        assert_eq!(parse_body(b"null"), Value::Null);
    }

    #[test]
    fn test_empty_and_invalid_bodies() {
        assert_eq!(parse_body(b""), json!({}));
        assert_eq!(parse_body(b"   "), json!({}));
        assert_eq!(parse_body(b"<html>oops</html>"), json!({}));
        assert_eq!(parse_body(br#"{"id":"#), json!({}));
    }
}
