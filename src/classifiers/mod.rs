pub mod classifier;
pub mod conditional_tests;
pub mod decision_tree;
mod errors;
pub mod random_forest;
pub mod split_criteria;

pub use classifier::Classifier;
pub use decision_tree::{DecisionTree, TreeParameters};
pub use errors::ClassifierError;
pub use random_forest::{ForestShape, RandomForest};
