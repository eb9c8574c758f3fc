use crate::classifiers::decision_tree::nodes::found_node::FoundNode;
use crate::classifiers::decision_tree::nodes::node::Node;
use crate::core::instances::Instance;

#[derive(Debug, Clone)]
pub struct LeafNode {
    observed_class_distribution: Vec<f64>,
}

impl LeafNode {
    pub fn new(observed_class_distribution: Vec<f64>) -> Self {
        Self {
            observed_class_distribution,
        }
    }
}

impl Node for LeafNode {
    fn get_observed_class_distribution(&self) -> &[f64] {
        &self.observed_class_distribution
    }

    fn filter_instance_to_leaf<'a>(&'a self, _instance: &dyn Instance) -> FoundNode<'a> {
        FoundNode::new(self)
    }

    fn subtree_depth(&self) -> usize {
        0
    }

    fn number_of_leaves(&self) -> usize {
        1
    }
}
