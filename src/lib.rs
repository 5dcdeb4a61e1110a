//! nested-headers - colspan matrices for nested column headers
//!
//! Flattens a forest of header trees into the per-level cell layout a grid
//! renderer needs to draw multi-row, column-spanning headers:
//! - One matrix row per header level
//! - Spanning headers followed by hidden placeholder cells
//! - Original colspan kept on every generated cell
//!
//! # Usage (Rust)
//!
//! ```rust
//! use nested_headers::{build_colspan_matrix, HeaderNodeData, TreeNode};
//!
//! let roots = vec![TreeNode::with_children(
//!     HeaderNodeData::new("2024", 2, 0),
//!     vec![
//!         TreeNode::new(HeaderNodeData::new("H1", 1, 1)),
//!         TreeNode::new(HeaderNodeData::new("H2", 1, 1)),
//!     ],
//! )];
//!
//! let matrix = build_colspan_matrix(&roots);
//! assert_eq!(matrix.level_count(), 2);
//! assert_eq!(matrix.row(0).map(<[_]>::len), Some(2));
//! ```
//!
//! # Usage (JavaScript)
//!
//! ```javascript
//! import init, { colspan_matrix_to_js } from 'nested-headers';
//! await init();
//! const matrix = colspan_matrix_to_js(JSON.stringify(headerRoots));
//! ```

pub mod error;
pub mod json;
pub mod matrix;
pub mod tree;
pub mod types;

use wasm_bindgen::prelude::*;

pub use error::{NestedHeadersError, Result};
pub use json::{
    build_colspan_matrix_json, matrix_to_json, parse_header_roots, MAX_COLSPAN, MAX_HEADER_LEVELS,
};
pub use matrix::{build_colspan_matrix, ColspanMatrix};
pub use tree::{Traversal, TreeNode};
pub use types::*;

/// Build a colspan matrix from a JSON array of header trees and return it as
/// a JSON string
///
/// # Errors
/// Returns an error if the input is not a valid header forest.
#[wasm_bindgen]
pub fn colspan_matrix(json: &str) -> std::result::Result<String, JsValue> {
    console_error_panic_hook::set_once();

    build_colspan_matrix_json(json).map_err(JsValue::from)
}

/// Build a colspan matrix from a JSON array of header trees and return it as
/// a `JsValue`
///
/// This skips the JSON round trip when the result is consumed directly in
/// JavaScript.
///
/// # Errors
/// Returns an error if the input is not a valid header forest.
#[wasm_bindgen]
pub fn colspan_matrix_to_js(json: &str) -> std::result::Result<JsValue, JsValue> {
    console_error_panic_hook::set_once();

    let roots = parse_header_roots(json)?;
    let matrix = build_colspan_matrix(&roots);

    serde_wasm_bindgen::to_value(&matrix)
        .map_err(|e| JsValue::from_str(&format!("Serialization error: {e}")))
}

/// Get the library version
#[must_use]
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}
