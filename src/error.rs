//! Frontend error type.

use thiserror::Error;
use wasm_bindgen::{JsCast, JsValue};

#[derive(Debug, Clone, PartialEq, Error)]
pub enum AppError {
    /// Non-2xx response; `message` is the body's `error` field when present
    #[error("HTTP error! status: {status}")]
    Http { status: u16, message: Option<String> },
    #[error("network error: {0}")]
    Transport(String),
    #[error("invalid response: {0}")]
    Decode(String),
    /// Rejected JS promise (Firebase SDK)
    #[error("{0}")]
    Js(String),
    #[error("not signed in")]
    NotSignedIn,
    #[error("invalid configuration: {0}")]
    Config(String),
}

impl AppError {
    /// Server-provided error text, if any
    pub fn server_message(&self) -> Option<&str> {
        match self {
            AppError::Http { message, .. } => message.as_deref(),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for AppError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_decode() {
            AppError::Decode(e.to_string())
        } else if let Some(status) = e.status() {
            AppError::Http { status: status.as_u16(), message: None }
        } else {
            AppError::Transport(e.to_string())
        }
    }
}

impl From<serde_wasm_bindgen::Error> for AppError {
    fn from(e: serde_wasm_bindgen::Error) -> Self {
        AppError::Decode(e.to_string())
    }
}

impl From<JsValue> for AppError {
    fn from(value: JsValue) -> Self {
        AppError::Js(js_error_message(&value))
    }
}

/// Best-effort message from a thrown JS value
pub fn js_error_message(value: &JsValue) -> String {
    if let Some(err) = value.dyn_ref::<js_sys::Error>() {
        return String::from(err.message());
    }
    if let Some(text) = value.as_string() {
        return text;
    }
    format!("{:?}", value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_http_error_display() {
        let err = AppError::Http { status: 500, message: None };
        assert_eq!(err.to_string(), "HTTP error! status: 500");
        assert_eq!(err.server_message(), None);
    }

    #[test]
    fn test_server_message() {
        let err = AppError::Http { status: 400, message: Some("Already friends".to_string()) };
        assert_eq!(err.server_message(), Some("Already friends"));
        assert_eq!(AppError::NotSignedIn.server_message(), None);
    }
}
