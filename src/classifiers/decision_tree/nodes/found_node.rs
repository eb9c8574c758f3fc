use crate::classifiers::decision_tree::nodes::node::Node;

/// Where an instance ended up when sorted down the tree.
///
/// `node` is a leaf, or the deepest split node whose test could not route
/// the instance any further.
pub struct FoundNode<'a> {
    node: &'a dyn Node,
}

impl<'a> FoundNode<'a> {
    pub fn new(node: &'a dyn Node) -> Self {
        Self { node }
    }

    pub fn get_node(&self) -> &'a dyn Node {
        self.node
    }
}
