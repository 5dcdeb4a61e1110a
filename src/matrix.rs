//! Colspan matrix generation.
//!
//! Dumps a forest of header trees into a two-dimensional structure that header
//! renderers use to decide which TH cells to draw and which to suppress. The
//! outer index is the header level, the inner index the flattened column at
//! that level:
//!
//! ```text
//! [
//!   [ {A1, colspan 2, orig 2, visible}, {"", colspan 1, orig 2, hidden}, {B1, ...} ],
//!   [ {A2, colspan 1, orig 1, visible}, {B2, ...},                        {C2, ...} ],
//! ]
//! ```

use serde::{Deserialize, Serialize};

use crate::tree::{Traversal, TreeNode};
use crate::types::{CellDescriptor, HeaderNodeData};

/// Header cells grouped by level.
///
/// Rows are created the first time a level is referenced. A level that no
/// node references is an empty row.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ColspanMatrix {
    rows: Vec<Vec<CellDescriptor>>,
}

impl ColspanMatrix {
    pub fn new() -> Self {
        Self::default()
    }

    /// Row for `level`, creating it (and any lower missing levels) if necessary.
    #[allow(clippy::indexing_slicing)] // Safe: rows extended past level below
    fn level_row_mut(&mut self, level: usize) -> &mut Vec<CellDescriptor> {
        if self.rows.len() <= level {
            self.rows.resize_with(level + 1, Vec::new);
        }
        &mut self.rows[level]
    }

    /// Append the cells for one header node: the node's own cell followed by
    /// `colspan - 1` hidden placeholders.
    fn push_header(&mut self, data: &HeaderNodeData) {
        let row = self.level_row_mut(data.header_level);

        row.push(CellDescriptor::primary(data));
        for _ in 1..data.colspan {
            row.push(CellDescriptor::placeholder(data.colspan));
        }
    }

    pub fn rows(&self) -> &[Vec<CellDescriptor>] {
        &self.rows
    }

    pub fn into_rows(self) -> Vec<Vec<CellDescriptor>> {
        self.rows
    }

    /// Cells at `level`, or `None` past the deepest referenced level.
    pub fn row(&self, level: usize) -> Option<&[CellDescriptor]> {
        self.rows.get(level).map(Vec::as_slice)
    }

    pub fn cell(&self, level: usize, column: usize) -> Option<&CellDescriptor> {
        self.rows.get(level).and_then(|row| row.get(column))
    }

    /// Number of rows, counting empty rows below the deepest referenced level.
    pub fn level_count(&self) -> usize {
        self.rows.len()
    }

    /// Number of rows holding at least one cell.
    pub fn populated_level_count(&self) -> usize {
        self.rows.iter().filter(|row| !row.is_empty()).count()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Widest row in cells.
    pub fn max_row_width(&self) -> usize {
        self.rows.iter().map(Vec::len).max().unwrap_or(0)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Vec<CellDescriptor>> {
        self.rows.iter()
    }

    pub fn total_cells(&self) -> usize {
        self.rows.iter().map(Vec::len).sum()
    }
}

impl<'a> IntoIterator for &'a ColspanMatrix {
    type Item = &'a Vec<CellDescriptor>;
    type IntoIter = std::slice::Iter<'a, Vec<CellDescriptor>>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl From<ColspanMatrix> for Vec<Vec<CellDescriptor>> {
    fn from(matrix: ColspanMatrix) -> Self {
        matrix.into_rows()
    }
}

/// Flatten header trees into a [`ColspanMatrix`].
///
/// Each root is walked breadth-first, roots in order. Every visited node adds
/// `colspan` cells to the row of its `header_level`: one cell carrying its
/// label and hidden flag, then `colspan - 1` placeholders that are always
/// hidden and keep the node's colspan as `orig_colspan`.
///
/// Every node must have `colspan >= 1`. This is not checked; a node with
/// `colspan == 0` emits a single cell like a colspan-1 node would.
pub fn build_colspan_matrix(header_roots: &[TreeNode<HeaderNodeData>]) -> ColspanMatrix {
    let mut matrix = ColspanMatrix::new();

    for root in header_roots {
        root.for_each(Traversal::BreadthFirst, |node| {
            let data = node.data();
            log::trace!(
                "header {:?} level={} colspan={} hidden={}",
                data.label,
                data.header_level,
                data.colspan,
                data.hidden
            );
            matrix.push_header(data);
        });
    }

    log::debug!(
        "built colspan matrix: {} roots, {} levels, {} cells",
        header_roots.len(),
        matrix.level_count(),
        matrix.total_cells()
    );

    matrix
}

#[cfg(test)]
#[allow(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::indexing_slicing,
    clippy::panic
)]
mod tests {
    use super::*;

    fn header(label: &str, colspan: u32, level: usize) -> TreeNode<HeaderNodeData> {
        TreeNode::new(HeaderNodeData::new(label, colspan, level))
    }

    fn labels(row: &[CellDescriptor]) -> Vec<&str> {
        row.iter().map(|c| c.label.as_str()).collect()
    }

    #[test]
    fn test_empty_forest() {
        let matrix = build_colspan_matrix(&[]);
        assert!(matrix.is_empty());
        assert_eq!(matrix.level_count(), 0);
        assert_eq!(matrix.max_row_width(), 0);
    }

    #[test]
    fn test_spanning_root_emits_placeholders() {
        let matrix = build_colspan_matrix(&[header("A1", 3, 0)]);

        let row = matrix.row(0).unwrap();
        assert_eq!(row.len(), 3);
        assert_eq!(row[0], CellDescriptor::primary(&HeaderNodeData::new("A1", 3, 0)));
        assert_eq!(row[1], CellDescriptor::placeholder(3));
        assert_eq!(row[2], CellDescriptor::placeholder(3));
    }

    #[test]
    fn test_children_land_on_their_level() {
        let root = TreeNode::with_children(
            HeaderNodeData::new("Year", 2, 0),
            vec![header("H1", 1, 1), header("H2", 1, 1)],
        );
        let matrix = build_colspan_matrix(&[root]);

        assert_eq!(matrix.level_count(), 2);
        assert_eq!(labels(matrix.row(0).unwrap()), ["Year", ""]);
        assert_eq!(labels(matrix.row(1).unwrap()), ["H1", "H2"]);
    }

    #[test]
    fn test_hidden_node_keeps_own_colspan() {
        let root = TreeNode::new(HeaderNodeData::new("Collapsed", 2, 0).hidden(true));
        let matrix = build_colspan_matrix(&[root]);

        let cell = matrix.cell(0, 0).unwrap();
        assert!(cell.hidden);
        assert_eq!(cell.colspan, 2);
        assert!(!cell.is_placeholder());
        assert!(matrix.cell(0, 1).unwrap().is_placeholder());
    }

    #[test]
    fn test_zero_colspan_emits_single_cell() {
        let matrix = build_colspan_matrix(&[header("Z", 0, 0)]);

        let row = matrix.row(0).unwrap();
        assert_eq!(row.len(), 1);
        assert_eq!(row[0].colspan, 0);
        assert_eq!(row[0].orig_colspan, 0);
    }

    #[test]
    fn test_levels_are_not_renumbered() {
        let matrix = build_colspan_matrix(&[header("Deep", 1, 2)]);

        assert_eq!(matrix.level_count(), 3);
        assert_eq!(matrix.populated_level_count(), 1);
        assert!(matrix.row(0).unwrap().is_empty());
        assert!(matrix.row(1).unwrap().is_empty());
        assert_eq!(labels(matrix.row(2).unwrap()), ["Deep"]);
        assert_eq!(matrix.row(3), None);
    }

    #[test]
    fn test_serializes_as_nested_arrays() {
        let matrix = build_colspan_matrix(&[header("A", 2, 0)]);
        let json = serde_json::to_value(&matrix).unwrap();

        assert_eq!(
            json,
            serde_json::json!([[
                {"label": "A", "colspan": 2, "origColspan": 2, "hidden": false},
                {"label": "", "colspan": 1, "origColspan": 2, "hidden": true}
            ]])
        );
    }
}
