//! Common test utilities and assertion helpers.
//!
//! This module provides assertions over colspan matrices, including a check
//! of the structural rules every built matrix must satisfy.
#![allow(
    dead_code,
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::indexing_slicing,
    clippy::panic,
    clippy::cast_possible_truncation
)]

use std::collections::BTreeMap;

use nested_headers::{CellDescriptor, ColspanMatrix, HeaderNodeData, Traversal, TreeNode};

// Re-export fixtures for convenience
pub use super::fixtures::*;

// ============================================================================
// Cell Assertions
// ============================================================================

/// Get a cell or panic with its position.
pub fn get_cell(matrix: &ColspanMatrix, level: usize, column: usize) -> &CellDescriptor {
    matrix
        .cell(level, column)
        .unwrap_or_else(|| panic!("No cell at level {level}, column {column}"))
}

/// Assert every field of one cell.
pub fn assert_cell(
    matrix: &ColspanMatrix,
    level: usize,
    column: usize,
    label: &str,
    colspan: u32,
    orig_colspan: u32,
    hidden: bool,
) {
    let expected = CellDescriptor {
        label: label.to_string(),
        colspan,
        orig_colspan,
        hidden,
    };
    assert_eq!(
        get_cell(matrix, level, column),
        &expected,
        "Cell at level {level}, column {column}"
    );
}

/// Assert the labels of one row, placeholders included as `""`.
pub fn assert_row_labels(matrix: &ColspanMatrix, level: usize, expected: &[&str]) {
    let row = matrix
        .row(level)
        .unwrap_or_else(|| panic!("No row at level {level}"));
    let labels: Vec<&str> = row.iter().map(|c| c.label.as_str()).collect();
    assert_eq!(labels, expected, "Labels at level {level}");
}

pub fn assert_row_width(matrix: &ColspanMatrix, level: usize, width: usize) {
    let row = matrix
        .row(level)
        .unwrap_or_else(|| panic!("No row at level {level}"));
    assert_eq!(row.len(), width, "Width at level {level}");
}

/// Assert which columns of a row are hidden.
pub fn assert_hidden_columns(matrix: &ColspanMatrix, level: usize, expected: &[usize]) {
    let row = matrix
        .row(level)
        .unwrap_or_else(|| panic!("No row at level {level}"));
    let hidden: Vec<usize> = row
        .iter()
        .enumerate()
        .filter(|(_, c)| c.hidden)
        .map(|(i, _)| i)
        .collect();
    assert_eq!(hidden, expected, "Hidden columns at level {level}");
}

// ============================================================================
// Structural Checks
// ============================================================================

/// Sum of colspans per header level across the whole forest.
pub fn colspan_sums(roots: &[TreeNode<HeaderNodeData>]) -> BTreeMap<usize, usize> {
    let mut sums = BTreeMap::new();
    for root in roots {
        root.for_each(Traversal::DepthFirst, |node| {
            let data = node.data();
            *sums.entry(data.header_level).or_insert(0) += data.colspan as usize;
        });
    }
    sums
}

/// Check the rules relating a forest to the matrix built from it:
/// - populated rows match the distinct levels of the forest
/// - each row is as wide as the sum of colspans at its level
/// - each spanning cell is followed by exactly `colspan - 1` placeholders
///   carrying its colspan as `orig_colspan`
pub fn assert_matrix_invariants(roots: &[TreeNode<HeaderNodeData>], matrix: &ColspanMatrix) {
    let sums = colspan_sums(roots);

    assert_eq!(
        matrix.populated_level_count(),
        sums.len(),
        "Populated rows vs distinct header levels"
    );

    for (level, row) in matrix.iter().enumerate() {
        let expected = sums.get(&level).copied().unwrap_or(0);
        assert_eq!(row.len(), expected, "Width at level {level}");

        let mut pending = 0u32;
        let mut span = 0u32;
        for (column, cell) in row.iter().enumerate() {
            if pending > 0 {
                assert!(
                    cell.hidden && cell.colspan == 1 && cell.label.is_empty(),
                    "Expected placeholder at level {level}, column {column}: {cell:?}"
                );
                assert_eq!(
                    cell.orig_colspan, span,
                    "Placeholder orig_colspan at level {level}, column {column}"
                );
                pending -= 1;
            } else {
                assert_eq!(
                    cell.colspan, cell.orig_colspan,
                    "Primary cell at level {level}, column {column}"
                );
                span = cell.colspan;
                pending = cell.colspan.saturating_sub(1);
            }
        }
        assert_eq!(pending, 0, "Row {level} ends inside a spanning header");
    }
}
