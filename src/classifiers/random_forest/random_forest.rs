use crate::classifiers::split_criteria::{GiniSplitCriterion, SplitCriterion};
use crate::classifiers::{Classifier, ClassifierError, DecisionTree, TreeParameters};
use crate::core::instance_header::InstanceHeader;
use crate::core::instances::{DenseInstance, Instance};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rayon::prelude::*;
use serde::Serialize;
use std::sync::Arc;

/// Bagged ensemble of CART trees.
///
/// Every tree gets its own seed, drawn up front from the forest seed, which
/// drives both its bootstrap sample and its feature order at each split.
/// Trees are then grown in parallel; the result does not depend on thread
/// scheduling.
pub struct RandomForest {
    n_estimators: usize,
    max_depth: Option<usize>,
    min_samples_split: usize,
    max_features: Option<usize>,
    bootstrap: bool,
    seed: u64,
    split_criterion: Box<dyn SplitCriterion>,
    header: Option<Arc<InstanceHeader>>,
    trees: Vec<DecisionTree>,
    number_of_classes: usize,
}

/// Shape of a fitted forest, reported by the model-info endpoint.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ForestShape {
    pub n_estimators: usize,
    pub max_features: usize,
    pub deepest_tree: usize,
    pub mean_leaves: f64,
}

impl RandomForest {
    pub fn new(
        n_estimators: usize,
        max_depth: Option<usize>,
        min_samples_split: usize,
        max_features: Option<usize>,
        bootstrap: bool,
        seed: u64,
        split_criterion: Box<dyn SplitCriterion>,
    ) -> Self {
        Self {
            n_estimators,
            max_depth,
            min_samples_split,
            max_features,
            bootstrap,
            seed,
            split_criterion,
            header: None,
            trees: Vec::new(),
            number_of_classes: 0,
        }
    }

    pub fn trees(&self) -> &[DecisionTree] {
        &self.trees
    }

    /// `max_features` when set, else `floor(sqrt(n_features))`, kept in `1..=n_features`.
    pub fn resolved_max_features(&self, number_of_features: usize) -> usize {
        let upper = number_of_features.max(1);
        self.max_features
            .unwrap_or_else(|| (number_of_features as f64).sqrt().floor() as usize)
            .clamp(1, upper)
    }

    pub fn shape(&self) -> ForestShape {
        let number_of_features = self
            .header
            .as_ref()
            .map_or(0, |h| h.number_of_features());
        let total_leaves: usize = self.trees.iter().map(DecisionTree::number_of_leaves).sum();
        ForestShape {
            n_estimators: self.trees.len(),
            max_features: self.resolved_max_features(number_of_features),
            deepest_tree: self.trees.iter().map(DecisionTree::depth).max().unwrap_or(0),
            mean_leaves: if self.trees.is_empty() {
                0.0
            } else {
                total_leaves as f64 / self.trees.len() as f64
            },
        }
    }

    fn tree_parameters(&self, number_of_features: usize) -> TreeParameters {
        TreeParameters {
            max_depth: self.max_depth,
            min_samples_split: self.min_samples_split,
            max_features: self.resolved_max_features(number_of_features),
        }
    }
}

impl Default for RandomForest {
    fn default() -> Self {
        Self::new(
            100,
            Some(10),
            2,
            None,
            true,
            0,
            Box::new(GiniSplitCriterion::new()),
        )
    }
}

impl Classifier for RandomForest {
    fn set_model_context(&mut self, header: Arc<InstanceHeader>) {
        self.number_of_classes = header.number_of_classes();
        self.header = Some(header);
        self.trees.clear();
    }

    fn train_on_instances(&mut self, instances: &[DenseInstance]) -> Result<(), ClassifierError> {
        let header = self
            .header
            .as_ref()
            .ok_or(ClassifierError::MissingModelContext)?;
        if instances.is_empty() {
            return Err(ClassifierError::EmptyTrainingSet);
        }
        if self.number_of_classes == 0 {
            return Err(ClassifierError::NoClasses);
        }
        if self.n_estimators == 0 {
            return Err(ClassifierError::InvalidParameter(
                "n_estimators must be > 0".into(),
            ));
        }

        let params = self.tree_parameters(header.number_of_features());
        let n = instances.len();
        let mut forest_rng = StdRng::seed_from_u64(self.seed);
        let tree_seeds: Vec<u64> = (0..self.n_estimators)
            .map(|_| forest_rng.random::<u64>())
            .collect();

        let criterion = self.split_criterion.as_ref();
        let number_of_classes = self.number_of_classes;
        let bootstrap = self.bootstrap;
        let trees = tree_seeds
            .par_iter()
            .map(|&tree_seed| {
                let mut rng = StdRng::seed_from_u64(tree_seed);
                let sample: Vec<usize> = if bootstrap {
                    (0..n).map(|_| rng.random_range(0..n)).collect()
                } else {
                    (0..n).collect()
                };
                DecisionTree::fit(
                    instances,
                    &sample,
                    number_of_classes,
                    &params,
                    criterion,
                    &mut rng,
                )
            })
            .collect::<Result<Vec<_>, _>>()?;

        self.trees = trees;
        Ok(())
    }

    fn get_votes_for_instance(&self, instance: &dyn Instance) -> Option<Vec<f64>> {
        if self.trees.is_empty() {
            return None;
        }
        let mut votes = vec![0.0; self.number_of_classes];
        for tree in &self.trees {
            for (total, v) in votes.iter_mut().zip(tree.get_votes_for_instance(instance)) {
                *total += v;
            }
        }
        let n_trees = self.trees.len() as f64;
        votes.iter_mut().for_each(|v| *v /= n_trees);
        Some(votes)
    }
}
