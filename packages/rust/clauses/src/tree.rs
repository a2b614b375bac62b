//! Arena-backed clause tree.
//!
//! Nodes own an ordered list of child ids; each node also carries a
//! non-owning parent id for upward navigation. The id indirection rules out
//! shared ownership and reference cycles.

/// Identifier of a node within its tree's arena.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId(usize);

/// A single clause line with its place in the hierarchy.
#[derive(Debug, Clone)]
struct ClauseNode {
    text: String,
    parent: Option<NodeId>,
    children: Vec<NodeId>,
}

/// The clause hierarchy of one resolution, rooted at a synthetic
/// "document start" node.
#[derive(Debug, Clone)]
pub struct ClauseTree {
    nodes: Vec<ClauseNode>,
}

impl ClauseTree {
    /// Text of the synthetic root node.
    pub const ROOT_TEXT: &'static str = "Document Start";

    /// Create a tree holding only the synthetic root.
    pub fn new() -> Self {
        Self {
            nodes: vec![ClauseNode {
                text: Self::ROOT_TEXT.to_string(),
                parent: None,
                children: Vec::new(),
            }],
        }
    }

    /// The synthetic root id.
    pub fn root(&self) -> NodeId {
        NodeId(0)
    }

    /// Append a child under `parent`, returning the new node's id.
    pub fn add_child(&mut self, parent: NodeId, text: impl Into<String>) -> NodeId {
        let id = NodeId(self.nodes.len());
        self.nodes.push(ClauseNode {
            text: text.into(),
            parent: Some(parent),
            children: Vec::new(),
        });
        self.nodes[parent.0].children.push(id);
        id
    }

    /// A node's text payload.
    pub fn text(&self, id: NodeId) -> &str {
        &self.nodes[id.0].text
    }

    /// Replace a node's text payload.
    pub(crate) fn set_text(&mut self, id: NodeId, text: String) {
        self.nodes[id.0].text = text;
    }

    /// A node's children, in document order.
    pub fn children(&self, id: NodeId) -> &[NodeId] {
        &self.nodes[id.0].children
    }

    /// A node's parent; `None` for the root.
    pub fn parent(&self, id: NodeId) -> Option<NodeId> {
        self.nodes[id.0].parent
    }

    /// Number of real (non-root) nodes.
    pub fn len(&self) -> usize {
        self.nodes.len() - 1
    }

    /// Whether the tree holds no real nodes.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Depth-first flatten of the real nodes (root excluded), each node
    /// before its children — the full document order.
    pub fn flatten(&self) -> Vec<NodeId> {
        let mut order = Vec::with_capacity(self.len());
        let mut stack: Vec<NodeId> = self.children(self.root()).iter().rev().copied().collect();
        while let Some(id) = stack.pop() {
            order.push(id);
            stack.extend(self.children(id).iter().rev());
        }
        order
    }

    /// The flattened clause lines, in document order.
    pub fn lines(&self) -> Vec<&str> {
        self.flatten().into_iter().map(|id| self.text(id)).collect()
    }
}

impl Default for ClauseTree {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn children_keep_document_order() {
        let mut tree = ClauseTree::new();
        let first = tree.add_child(tree.root(), "1) first");
        let second = tree.add_child(tree.root(), "2) second");

        assert_eq!(tree.children(tree.root()), [first, second]);
        assert_eq!(tree.text(first), "1) first");
        assert_eq!(tree.parent(first), Some(tree.root()));
        assert_eq!(tree.parent(tree.root()), None);
    }

    #[test]
    fn flatten_is_depth_first_parent_before_children() {
        let mut tree = ClauseTree::new();
        let one = tree.add_child(tree.root(), "1)");
        let one_a = tree.add_child(one, "(a)");
        let one_a_i = tree.add_child(one_a, "i)");
        let one_b = tree.add_child(one, "(b)");
        let two = tree.add_child(tree.root(), "2)");

        assert_eq!(tree.flatten(), [one, one_a, one_a_i, one_b, two]);
        assert_eq!(tree.lines(), ["1)", "(a)", "i)", "(b)", "2)"]);
    }

    #[test]
    fn empty_tree_has_only_the_root() {
        let tree = ClauseTree::new();
        assert!(tree.is_empty());
        assert!(tree.flatten().is_empty());
        assert_eq!(tree.text(tree.root()), ClauseTree::ROOT_TEXT);
    }
}
