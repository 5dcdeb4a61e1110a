//! JSON input and output for header forests and colspan matrices.
//!
//! Header trees are read as an array of roots:
//! ```json
//! [
//!   {
//!     "data": { "label": "A1", "colspan": 2, "hidden": false, "headerLevel": 0 },
//!     "children": [
//!       { "data": { "label": "A2", "colspan": 1, "headerLevel": 1 } },
//!       { "data": { "label": "B2", "colspan": 1, "headerLevel": 1 } }
//!     ]
//!   }
//! ]
//! ```

use std::ops::ControlFlow;

use crate::error::{NestedHeadersError, Result};
use crate::matrix::{build_colspan_matrix, ColspanMatrix};
use crate::tree::{Traversal, TreeNode};
use crate::types::HeaderNodeData;

/// Highest header level accepted from JSON is `MAX_HEADER_LEVELS - 1`.
pub const MAX_HEADER_LEVELS: usize = 1024;

/// Widest colspan accepted from JSON (the XLSX column limit).
pub const MAX_COLSPAN: u32 = 16_384;

/// Parse a JSON array of header trees.
///
/// # Errors
/// Returns an error if the JSON is malformed, any node has `colspan` 0 or
/// above [`MAX_COLSPAN`], or any `headerLevel` is [`MAX_HEADER_LEVELS`] or more.
pub fn parse_header_roots(json: &str) -> Result<Vec<TreeNode<HeaderNodeData>>> {
    let roots: Vec<TreeNode<HeaderNodeData>> = serde_json::from_str(json)?;

    for root in &roots {
        check_headers(root)?;
    }

    Ok(roots)
}

fn header_problem(data: &HeaderNodeData) -> Option<String> {
    let problem = if data.colspan == 0 {
        "has colspan 0".to_string()
    } else if data.colspan > MAX_COLSPAN {
        format!("has colspan {} (max {MAX_COLSPAN})", data.colspan)
    } else if data.header_level >= MAX_HEADER_LEVELS {
        format!("exceeds the {MAX_HEADER_LEVELS} header level limit")
    } else {
        return None;
    };

    Some(format!(
        "header {:?} at level {} {problem}",
        data.label, data.header_level
    ))
}

fn check_headers(root: &TreeNode<HeaderNodeData>) -> Result<()> {
    let mut invalid: Option<String> = None;

    let _ = root.walk(Traversal::DepthFirst, |node| match header_problem(node.data()) {
        Some(problem) => {
            invalid = Some(problem);
            ControlFlow::Break(())
        }
        None => ControlFlow::Continue(()),
    });

    match invalid {
        Some(problem) => Err(NestedHeadersError::InvalidHeader(problem)),
        None => Ok(()),
    }
}

/// Serialize a matrix as a JSON array of rows.
///
/// # Errors
/// Returns an error if serialization fails.
pub fn matrix_to_json(matrix: &ColspanMatrix, pretty: bool) -> Result<String> {
    let json = if pretty {
        serde_json::to_string_pretty(matrix)?
    } else {
        serde_json::to_string(matrix)?
    };
    Ok(json)
}

/// Parse header trees from JSON, flatten them and return the matrix as JSON.
///
/// # Errors
/// Returns an error if the input is not a valid header forest.
pub fn build_colspan_matrix_json(json: &str) -> Result<String> {
    let roots = parse_header_roots(json)?;
    matrix_to_json(&build_colspan_matrix(&roots), false)
}

#[cfg(test)]
#[allow(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::indexing_slicing,
    clippy::panic,
    clippy::cast_possible_truncation
)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_roots_with_children() {
        let json = r#"[
            {
                "data": {"label": "A1", "colspan": 2, "headerLevel": 0},
                "children": [
                    {"data": {"label": "A2", "colspan": 1, "headerLevel": 1}},
                    {"data": {"label": "B2", "colspan": 1, "headerLevel": 1}}
                ]
            },
            {"data": {"label": "C1", "colspan": 1, "headerLevel": 0}}
        ]"#;
        let roots = parse_header_roots(json).unwrap();

        assert_eq!(roots.len(), 2);
        assert_eq!(roots[0].children().len(), 2);
        assert_eq!(roots[1].data().label, "C1");
    }

    #[test]
    fn test_parse_rejects_zero_colspan() {
        let json = r#"[
            {
                "data": {"label": "A1", "colspan": 1, "headerLevel": 0},
                "children": [{"data": {"label": "Bad", "colspan": 0, "headerLevel": 1}}]
            }
        ]"#;
        let err = parse_header_roots(json).unwrap_err();

        match err {
            NestedHeadersError::InvalidHeader(msg) => {
                assert!(msg.contains("\"Bad\""), "{msg}");
                assert!(msg.contains("level 1"), "{msg}");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_parse_rejects_header_level_past_limit() {
        for level in [MAX_HEADER_LEVELS as u64, u64::MAX, 1 << 62] {
            let json = format!(r#"[{{"data": {{"label": "A", "headerLevel": {level}}}}}]"#);
            let err = build_colspan_matrix_json(&json).unwrap_err();

            match err {
                NestedHeadersError::InvalidHeader(msg) => {
                    assert!(msg.contains("header level limit"), "{msg}");
                }
                other => panic!("unexpected error for level {level}: {other}"),
            }
        }
    }

    #[test]
    fn test_parse_accepts_deepest_allowed_level() {
        let json = format!(
            r#"[{{"data": {{"label": "A", "headerLevel": {}}}}}]"#,
            MAX_HEADER_LEVELS - 1
        );
        let roots = parse_header_roots(&json).unwrap();

        assert_eq!(roots[0].data().header_level, MAX_HEADER_LEVELS - 1);
    }

    #[test]
    fn test_parse_rejects_colspan_past_limit() {
        for colspan in [MAX_COLSPAN + 1, u32::MAX] {
            let json = format!(
                r#"[{{"data": {{"label": "Wide", "colspan": {colspan}, "headerLevel": 0}}}}]"#
            );
            let err = build_colspan_matrix_json(&json).unwrap_err();

            match err {
                NestedHeadersError::InvalidHeader(msg) => {
                    assert!(msg.contains(&format!("colspan {colspan}")), "{msg}");
                }
                other => panic!("unexpected error for colspan {colspan}: {other}"),
            }
        }
    }

    #[test]
    fn test_parse_rejects_oversized_nested_child() {
        let json = format!(
            r#"[{{
                "data": {{"label": "Top", "colspan": 1, "headerLevel": 0}},
                "children": [{{"data": {{"label": "Child", "colspan": {}, "headerLevel": 1}}}}]
            }}]"#,
            MAX_COLSPAN + 1
        );
        let err = parse_header_roots(&json).unwrap_err();

        assert!(err.to_string().contains("\"Child\""), "{err}");
    }

    #[test]
    fn test_parse_accepts_widest_allowed_colspan() {
        let json = format!(r#"[{{"data": {{"colspan": {MAX_COLSPAN}, "headerLevel": 0}}}}]"#);
        let roots = parse_header_roots(&json).unwrap();

        assert_eq!(build_colspan_matrix(&roots).total_cells(), MAX_COLSPAN as usize);
    }

    #[test]
    fn test_parse_rejects_missing_header_level() {
        let err = parse_header_roots(r#"[{"data": {"label": "A"}}]"#).unwrap_err();
        assert!(matches!(err, NestedHeadersError::Json(_)));
    }

    #[test]
    fn test_parse_rejects_negative_colspan() {
        let err =
            parse_header_roots(r#"[{"data": {"colspan": -1, "headerLevel": 0}}]"#).unwrap_err();
        assert!(matches!(err, NestedHeadersError::Json(_)));
    }

    #[test]
    fn test_build_json_end_to_end() {
        let json = r#"[{"data": {"label": "A1", "colspan": 2, "headerLevel": 0}}]"#;
        let output = build_colspan_matrix_json(json).unwrap();

        assert_eq!(
            output,
            r#"[[{"label":"A1","colspan":2,"origColspan":2,"hidden":false},{"label":"","colspan":1,"origColspan":2,"hidden":true}]]"#
        );
    }

    #[test]
    fn test_empty_forest_json() {
        assert_eq!(build_colspan_matrix_json("[]").unwrap(), "[]");
    }

    #[test]
    fn test_pretty_output_is_multiline() {
        let matrix = build_colspan_matrix(&parse_header_roots(
            r#"[{"data": {"label": "A", "headerLevel": 0}}]"#,
        )
        .unwrap());
        let pretty = matrix_to_json(&matrix, true).unwrap();

        assert!(pretty.contains('\n'));
        assert_eq!(
            serde_json::from_str::<ColspanMatrix>(&pretty).unwrap(),
            matrix
        );
    }
}
