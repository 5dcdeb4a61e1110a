//! Test fixtures for building header forests.
//!
//! Header levels default to the node's depth in its tree, so most tests only
//! describe labels, spans and nesting.
//!
//! # Example
//!
//! ```rust,ignore
//! use fixtures::{forest, HeaderBuilder};
//!
//! let roots = forest([
//!     HeaderBuilder::new("2024")
//!         .colspan(2)
//!         .child(HeaderBuilder::new("H1"))
//!         .child(HeaderBuilder::new("H2")),
//!     HeaderBuilder::new("Total"),
//! ]);
//! ```
#![allow(
    dead_code,
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::indexing_slicing,
    clippy::panic,
    clippy::cast_possible_truncation
)]

use nested_headers::{HeaderNodeData, TreeNode};

// ============================================================================
// Header Builder
// ============================================================================

/// Builder for one header node and its subtree.
#[derive(Debug, Clone)]
pub struct HeaderBuilder {
    label: String,
    colspan: u32,
    hidden: bool,
    level: Option<usize>,
    children: Vec<HeaderBuilder>,
}

impl HeaderBuilder {
    pub fn new(label: &str) -> Self {
        Self {
            label: label.to_string(),
            colspan: 1,
            hidden: false,
            level: None,
            children: Vec::new(),
        }
    }

    pub fn colspan(mut self, colspan: u32) -> Self {
        self.colspan = colspan;
        self
    }

    pub fn hidden(mut self) -> Self {
        self.hidden = true;
        self
    }

    /// Pin the header level instead of deriving it from depth.
    pub fn level(mut self, level: usize) -> Self {
        self.level = Some(level);
        self
    }

    pub fn child(mut self, child: HeaderBuilder) -> Self {
        self.children.push(child);
        self
    }

    pub fn children(mut self, children: impl IntoIterator<Item = HeaderBuilder>) -> Self {
        self.children.extend(children);
        self
    }

    pub fn build(self) -> TreeNode<HeaderNodeData> {
        self.build_at(0)
    }

    fn build_at(self, depth: usize) -> TreeNode<HeaderNodeData> {
        let level = self.level.unwrap_or(depth);
        let data = HeaderNodeData::new(self.label, self.colspan, level).hidden(self.hidden);
        let children = self
            .children
            .into_iter()
            .map(|child| child.build_at(level + 1))
            .collect();

        TreeNode::with_children(data, children)
    }
}

/// Build one tree per builder, in order.
pub fn forest(roots: impl IntoIterator<Item = HeaderBuilder>) -> Vec<TreeNode<HeaderNodeData>> {
    roots.into_iter().map(HeaderBuilder::build).collect()
}

/// `count` visible leaf headers labeled `{prefix}1..={prefix}{count}`.
pub fn leaves(prefix: &str, count: usize) -> Vec<HeaderBuilder> {
    (1..=count)
        .map(|i| HeaderBuilder::new(&format!("{prefix}{i}")))
        .collect()
}

// ============================================================================
// Canned forests
// ============================================================================

/// Two years, each split into two halves, each half into two quarters,
/// followed by a flat "Total" column spanning the full depth.
pub fn yearly_report() -> Vec<TreeNode<HeaderNodeData>> {
    let year = |label: &str| {
        HeaderBuilder::new(label).colspan(4).children([
            HeaderBuilder::new("H1").colspan(2).children(leaves("Q", 2)),
            HeaderBuilder::new("H2").colspan(2).children(leaves("Q", 2)),
        ])
    };

    forest([year("2023"), year("2024"), HeaderBuilder::new("Total")])
}
