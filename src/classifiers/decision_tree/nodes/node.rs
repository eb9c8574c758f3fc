use crate::classifiers::decision_tree::nodes::found_node::FoundNode;
use crate::core::instances::Instance;

pub trait Node: Send + Sync {
    /// Class counts of the training rows that reached this node.
    fn get_observed_class_distribution(&self) -> &[f64];

    fn filter_instance_to_leaf<'a>(&'a self, instance: &dyn Instance) -> FoundNode<'a>;

    fn get_class_votes(&self) -> Vec<f64> {
        self.get_observed_class_distribution().to_vec()
    }

    fn subtree_depth(&self) -> usize;

    fn number_of_leaves(&self) -> usize;
}
