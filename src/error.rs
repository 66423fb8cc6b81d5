//! Fetch Errors
//!
//! Everything that can go wrong while loading recipes. None of these reach the
//! user: the gateway logs them and falls back to an empty collection.

use thiserror::Error;
use wasm_bindgen::{JsCast, JsValue};

#[derive(Error, Debug)]
pub enum FetchError {
    #[error("no browser window available")]
    NoWindow,

    #[error("network error: {0}")]
    Network(String),

    #[error("unexpected HTTP status {0}")]
    Status(u16),

    #[error("could not read response body: {0}")]
    Body(String),

    #[error("malformed recipe payload: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("request cancelled")]
    Cancelled,
}

impl FetchError {
    pub fn network(value: JsValue) -> Self {
        FetchError::Network(js_error_message(&value))
    }

    pub fn body(value: JsValue) -> Self {
        FetchError::Body(js_error_message(&value))
    }
}

/// Best-effort text for a thrown JS value
pub fn js_error_message(value: &JsValue) -> String {
    if let Some(err) = value.dyn_ref::<js_sys::Error>() {
        return String::from(err.message());
    }
    value.as_string().unwrap_or_else(|| format!("{:?}", value))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        assert_eq!(FetchError::Status(503).to_string(), "unexpected HTTP status 503");
        assert_eq!(FetchError::Cancelled.to_string(), "request cancelled");
    }

    #[test]
    fn test_decode_from_serde() {
        let err: FetchError = serde_json::from_str::<Vec<u8>>("not json").unwrap_err().into();
        assert!(matches!(err, FetchError::Decode(_)));
        assert!(err.to_string().starts_with("malformed recipe payload"));
    }
}
