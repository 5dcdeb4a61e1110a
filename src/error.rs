//! Structured error types for nested-headers.
//!
//! Building the matrix itself cannot fail; these cover the JSON and I/O
//! boundary around it.

use wasm_bindgen::JsValue;

/// All errors that can occur reading header trees or writing matrices.
#[derive(Debug, thiserror::Error)]
pub enum NestedHeadersError {
    /// JSON (de)serialization error from serde_json.
    #[error("JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// Header node that violates the builder's input contract.
    #[error("Invalid header: {0}")]
    InvalidHeader(String),

    /// Reading headers or writing a matrix from the CLI.
    #[error("I/O error on {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, NestedHeadersError>;

impl NestedHeadersError {
    pub fn io(path: impl Into<String>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}

impl From<NestedHeadersError> for JsValue {
    fn from(e: NestedHeadersError) -> Self {
        JsValue::from_str(&e.to_string())
    }
}
