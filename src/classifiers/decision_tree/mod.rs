mod decision_tree;
pub mod nodes;

pub use decision_tree::{DecisionTree, TreeParameters};
