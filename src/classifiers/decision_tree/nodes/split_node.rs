use crate::classifiers::conditional_tests::InstanceConditionalTest;
use crate::classifiers::decision_tree::nodes::found_node::FoundNode;
use crate::classifiers::decision_tree::nodes::node::Node;
use crate::core::instances::Instance;

pub struct SplitNode {
    observed_class_distribution: Vec<f64>,
    split_test: Box<dyn InstanceConditionalTest>,
    children: Vec<Option<Box<dyn Node>>>,
}

impl SplitNode {
    pub fn new(
        split_test: Box<dyn InstanceConditionalTest>,
        observed_class_distribution: Vec<f64>,
        initial_children_len: Option<usize>,
    ) -> Self {
        let children = match initial_children_len {
            Some(len) => (0..len).map(|_| None).collect(),
            None => Vec::new(),
        };
        Self {
            observed_class_distribution,
            split_test,
            children,
        }
    }

    pub fn set_child(&mut self, index: usize, child: Box<dyn Node>) {
        if index >= self.children.len() {
            self.children.resize_with(index + 1, || None);
        }
        self.children[index] = Some(child);
    }

    pub fn get_child(&self, index: usize) -> Option<&dyn Node> {
        self.children.get(index).and_then(|opt| opt.as_deref())
    }
}

impl Node for SplitNode {
    fn get_observed_class_distribution(&self) -> &[f64] {
        &self.observed_class_distribution
    }

    fn filter_instance_to_leaf<'a>(&'a self, instance: &dyn Instance) -> FoundNode<'a> {
        let child = self
            .split_test
            .branch_for_instance(instance)
            .and_then(|branch| self.get_child(branch));
        match child {
            Some(child) => child.filter_instance_to_leaf(instance),
            None => FoundNode::new(self),
        }
    }

    fn subtree_depth(&self) -> usize {
        1 + self
            .children
            .iter()
            .flatten()
            .map(|child| child.subtree_depth())
            .max()
            .unwrap_or(0)
    }

    fn number_of_leaves(&self) -> usize {
        self.children
            .iter()
            .flatten()
            .map(|child| child.number_of_leaves())
            .sum()
    }
}
