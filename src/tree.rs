//! Read-only header tree.
//!
//! A forest of header nodes is a `Vec<TreeNode<T>>`, one entry per root.
//! Nodes own their children in display order (left to right). The only way to
//! read a tree is through [`TreeNode::walk`], which visits every node of a
//! subtree exactly once in the requested [`Traversal`] order.

use std::collections::VecDeque;
use std::ops::ControlFlow;

use serde::{Deserialize, Serialize};

/// Order in which [`TreeNode::walk`] visits nodes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Traversal {
    /// All nodes of one depth before any node of the next
    BreadthFirst,
    /// Parent before its children (pre-order)
    #[default]
    DepthFirst,
    /// Children before their parent (post-order)
    DepthFirstPostOrder,
}

/// A node of a header tree with its payload and ordered children.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TreeNode<T> {
    pub data: T,
    #[serde(default = "Vec::new", skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<TreeNode<T>>,
}

impl<T> TreeNode<T> {
    /// Leaf node.
    pub fn new(data: T) -> Self {
        Self {
            data,
            children: Vec::new(),
        }
    }

    pub fn with_children(data: T, children: Vec<TreeNode<T>>) -> Self {
        Self { data, children }
    }

    pub fn data(&self) -> &T {
        &self.data
    }

    pub fn children(&self) -> &[TreeNode<T>] {
        &self.children
    }

    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }

    /// Visit every node of this subtree in `traversal` order.
    ///
    /// The visitor returns `ControlFlow::Break(())` to stop the walk early; the
    /// remaining nodes are then skipped and `walk` returns `Break`.
    pub fn walk<F>(&self, traversal: Traversal, mut visitor: F) -> ControlFlow<()>
    where
        F: FnMut(&TreeNode<T>) -> ControlFlow<()>,
    {
        match traversal {
            Traversal::BreadthFirst => self.walk_breadth_first(&mut visitor),
            Traversal::DepthFirst => self.walk_depth_first(&mut visitor),
            Traversal::DepthFirstPostOrder => self.walk_post_order(&mut visitor),
        }
    }

    /// Visit every node of this subtree in `traversal` order without stopping.
    pub fn for_each<F>(&self, traversal: Traversal, mut visitor: F)
    where
        F: FnMut(&TreeNode<T>),
    {
        let _ = self.walk(traversal, |node| {
            visitor(node);
            ControlFlow::Continue(())
        });
    }

    /// Number of nodes in this subtree, including `self`.
    pub fn node_count(&self) -> usize {
        1 + self
            .children
            .iter()
            .map(TreeNode::node_count)
            .sum::<usize>()
    }

    /// Number of levels in this subtree (1 for a leaf).
    pub fn depth(&self) -> usize {
        1 + self.children.iter().map(TreeNode::depth).max().unwrap_or(0)
    }

    fn walk_breadth_first<F>(&self, visitor: &mut F) -> ControlFlow<()>
    where
        F: FnMut(&TreeNode<T>) -> ControlFlow<()>,
    {
        let mut queue: VecDeque<&TreeNode<T>> = VecDeque::new();
        queue.push_back(self);

        while let Some(node) = queue.pop_front() {
            visitor(node)?;
            queue.extend(node.children.iter());
        }

        ControlFlow::Continue(())
    }

    fn walk_depth_first<F>(&self, visitor: &mut F) -> ControlFlow<()>
    where
        F: FnMut(&TreeNode<T>) -> ControlFlow<()>,
    {
        let mut stack: Vec<&TreeNode<T>> = vec![self];

        while let Some(node) = stack.pop() {
            visitor(node)?;
            // Reversed so the leftmost child is popped first
            stack.extend(node.children.iter().rev());
        }

        ControlFlow::Continue(())
    }

    fn walk_post_order<F>(&self, visitor: &mut F) -> ControlFlow<()>
    where
        F: FnMut(&TreeNode<T>) -> ControlFlow<()>,
    {
        // `true` once a node's children have been pushed above it
        let mut stack: Vec<(&TreeNode<T>, bool)> = vec![(self, false)];

        while let Some((node, expanded)) = stack.pop() {
            if expanded || node.children.is_empty() {
                visitor(node)?;
            } else {
                stack.push((node, true));
                stack.extend(node.children.iter().rev().map(|child| (child, false)));
            }
        }

        ControlFlow::Continue(())
    }
}

impl<T> From<T> for TreeNode<T> {
    fn from(data: T) -> Self {
        Self::new(data)
    }
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

    //        1
    //      /   \
    //     2     3
    //    / \     \
    //   4   5     6
    fn sample() -> TreeNode<u32> {
        TreeNode::with_children(
            1,
            vec![
                TreeNode::with_children(2, vec![TreeNode::new(4), TreeNode::new(5)]),
                TreeNode::with_children(3, vec![TreeNode::new(6)]),
            ],
        )
    }

    fn collect(tree: &TreeNode<u32>, traversal: Traversal) -> Vec<u32> {
        let mut visited = Vec::new();
        tree.for_each(traversal, |node| visited.push(node.data));
        visited
    }

    #[test]
    fn test_breadth_first_visits_level_by_level() {
        assert_eq!(collect(&sample(), Traversal::BreadthFirst), [1, 2, 3, 4, 5, 6]);
    }

    #[test]
    fn test_depth_first_is_pre_order() {
        assert_eq!(collect(&sample(), Traversal::DepthFirst), [1, 2, 4, 5, 3, 6]);
    }

    #[test]
    fn test_post_order_visits_children_first() {
        assert_eq!(
            collect(&sample(), Traversal::DepthFirstPostOrder),
            [4, 5, 2, 6, 3, 1]
        );
    }

    #[test]
    fn test_post_order_on_uneven_tree() {
        //   1
        //   ├── 2
        //   │   └── 3
        //   │       └── 4
        //   └── 5
        let tree = TreeNode::with_children(
            1,
            vec![
                TreeNode::with_children(
                    2,
                    vec![TreeNode::with_children(3, vec![TreeNode::new(4)])],
                ),
                TreeNode::new(5),
            ],
        );

        assert_eq!(collect(&tree, Traversal::DepthFirstPostOrder), [4, 3, 2, 5, 1]);
    }

    #[test]
    fn test_post_order_break_skips_ancestors() {
        let mut visited = Vec::new();
        let flow = sample().walk(Traversal::DepthFirstPostOrder, |node| {
            visited.push(node.data);
            if node.data == 2 {
                ControlFlow::Break(())
            } else {
                ControlFlow::Continue(())
            }
        });

        assert_eq!(flow, ControlFlow::Break(()));
        assert_eq!(visited, [4, 5, 2]);
    }

    #[test]
    fn test_default_traversal_is_depth_first() {
        assert_eq!(Traversal::default(), Traversal::DepthFirst);
    }

    #[test]
    fn test_break_stops_the_walk() {
        let tree = sample();
        for traversal in [
            Traversal::BreadthFirst,
            Traversal::DepthFirst,
            Traversal::DepthFirstPostOrder,
        ] {
            let mut visited = 0;
            let flow = tree.walk(traversal, |_| {
                visited += 1;
                if visited == 3 {
                    ControlFlow::Break(())
                } else {
                    ControlFlow::Continue(())
                }
            });

            assert_eq!(flow, ControlFlow::Break(()), "{traversal:?}");
            assert_eq!(visited, 3, "{traversal:?}");
        }
    }

    #[test]
    fn test_single_node_walk() {
        let leaf = TreeNode::from(7u32);
        assert!(leaf.is_leaf());
        assert_eq!(collect(&leaf, Traversal::BreadthFirst), [7]);
    }

    #[test]
    fn test_node_count_and_depth() {
        let tree = sample();
        assert_eq!(tree.node_count(), 6);
        assert_eq!(tree.depth(), 3);
        assert_eq!(TreeNode::new(0u32).depth(), 1);
    }

    #[test]
    fn test_deserialize_without_children() {
        let json = r#"{"data": 1, "children": [{"data": 2}]}"#;
        let tree: TreeNode<u32> = serde_json::from_str(json).unwrap();

        assert_eq!(tree.children().len(), 1);
        assert!(tree.children()[0].is_leaf());
    }
}
