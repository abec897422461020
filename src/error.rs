//! API Errors

use thiserror::Error;
use wasm_bindgen::JsValue;

/// Failure of a request against the blog API
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ApiError {
    /// Network or connection failure (fetch rejected)
    #[error("transport error: {0}")]
    Transport(String),
    /// Server answered with a non-success status
    #[error("server returned status {0}")]
    Status(u16),
    /// Body could not be decoded
    #[error("decode error: {0}")]
    Decode(String),
    #[error("browser window is not available")]
    NoWindow,
    /// Write attempted without a session token
    #[error("login required")]
    Unauthorized,
}

impl From<JsValue> for ApiError {
    fn from(value: JsValue) -> Self {
        ApiError::Transport(format!("{:?}", value))
    }
}

impl From<serde_json::Error> for ApiError {
    fn from(e: serde_json::Error) -> Self {
        ApiError::Decode(e.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        assert_eq!(ApiError::Status(503).to_string(), "server returned status 503");
        assert_eq!(ApiError::Unauthorized.to_string(), "login required");
    }

    #[test]
    fn test_from_serde_error() {
        let err = serde_json::from_str::<Vec<u64>>("{").unwrap_err();
        assert!(matches!(ApiError::from(err), ApiError::Decode(_)));
    }
}
