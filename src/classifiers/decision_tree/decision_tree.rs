use crate::classifiers::ClassifierError;
use crate::classifiers::conditional_tests::{
    AttributeSplitSuggestion, InstanceConditionalTest, NumericAttributeBinaryTest,
};
use crate::classifiers::decision_tree::nodes::{LeafNode, Node, SplitNode};
use crate::classifiers::split_criteria::SplitCriterion;
use crate::core::instances::{DenseInstance, Instance};
use crate::utils::math::normalize;
use rand::Rng;
use rand::seq::SliceRandom;

#[derive(Debug, Clone, PartialEq)]
pub struct TreeParameters {
    /// `None` grows until leaves are pure or too small to split.
    pub max_depth: Option<usize>,
    pub min_samples_split: usize,
    /// Non-constant features examined per split.
    pub max_features: usize,
}

/// CART classification tree over numeric features.
pub struct DecisionTree {
    root: Box<dyn Node>,
    number_of_classes: usize,
}

impl DecisionTree {
    /// Grows a tree over `instances[sample[..]]`.
    ///
    /// `sample` may repeat indices (bootstrap); every occurrence counts as
    /// one row. All randomness (feature order at each split) comes from `rng`.
    pub fn fit<R: Rng + ?Sized>(
        instances: &[DenseInstance],
        sample: &[usize],
        number_of_classes: usize,
        params: &TreeParameters,
        split_criterion: &dyn SplitCriterion,
        rng: &mut R,
    ) -> Result<Self, ClassifierError> {
        if sample.is_empty() {
            return Err(ClassifierError::EmptyTrainingSet);
        }
        if number_of_classes == 0 {
            return Err(ClassifierError::NoClasses);
        }
        if params.max_features == 0 {
            return Err(ClassifierError::InvalidParameter(
                "max_features must be > 0".into(),
            ));
        }

        let labels = class_labels(instances, number_of_classes)?;
        let number_of_features = instances
            .first()
            .map_or(0, |inst| inst.number_of_features());

        let mut grower = TreeGrower {
            instances,
            labels: &labels,
            number_of_classes,
            number_of_features,
            params,
            split_criterion,
            rng,
        };
        let root = grower.grow(sample.to_vec(), 0);

        Ok(Self {
            root,
            number_of_classes,
        })
    }

    /// Class probabilities at the leaf `instance` falls into.
    pub fn get_votes_for_instance(&self, instance: &dyn Instance) -> Vec<f64> {
        let found = self.root.filter_instance_to_leaf(instance);
        let mut votes = found.get_node().get_class_votes();
        votes.resize(self.number_of_classes, 0.0);
        normalize(&mut votes);
        votes
    }

    pub fn depth(&self) -> usize {
        self.root.subtree_depth()
    }

    pub fn number_of_leaves(&self) -> usize {
        self.root.number_of_leaves()
    }
}

fn class_labels(
    instances: &[DenseInstance],
    number_of_classes: usize,
) -> Result<Vec<usize>, ClassifierError> {
    instances
        .iter()
        .enumerate()
        .map(|(index, inst)| match inst.class_value() {
            Some(c) if c.is_finite() && c >= 0.0 && (c as usize) < number_of_classes => {
                Ok(c as usize)
            }
            _ => Err(ClassifierError::MissingClass { index }),
        })
        .collect()
}

struct TreeGrower<'a, R: Rng + ?Sized> {
    instances: &'a [DenseInstance],
    labels: &'a [usize],
    number_of_classes: usize,
    number_of_features: usize,
    params: &'a TreeParameters,
    split_criterion: &'a dyn SplitCriterion,
    rng: &'a mut R,
}

impl<R: Rng + ?Sized> TreeGrower<'_, R> {
    fn grow(&mut self, rows: Vec<usize>, depth: usize) -> Box<dyn Node> {
        let distribution = self.class_distribution(&rows);

        let stop = rows.len() < self.params.min_samples_split
            || self.params.max_depth.is_some_and(|max| depth >= max)
            || distribution.iter().filter(|&&c| c > 0.0).count() < 2;
        if stop {
            return Box::new(LeafNode::new(distribution));
        }

        let Some(suggestion) = self.best_split_suggestion(&rows, &distribution) else {
            return Box::new(LeafNode::new(distribution));
        };
        let split_test = suggestion.into_split_test();

        let mut branches: Vec<Vec<usize>> = vec![Vec::new(); split_test.max_branches()];
        for row in rows {
            if let Some(branch) = split_test.branch_for_instance(&self.instances[row]) {
                branches[branch].push(row);
            }
        }

        let mut node = SplitNode::new(split_test, distribution, Some(branches.len()));
        for (branch, branch_rows) in branches.into_iter().enumerate() {
            if !branch_rows.is_empty() {
                node.set_child(branch, self.grow(branch_rows, depth + 1));
            }
        }
        Box::new(node)
    }

    fn class_distribution(&self, rows: &[usize]) -> Vec<f64> {
        let mut distribution = vec![0.0; self.number_of_classes];
        for &row in rows {
            distribution[self.labels[row]] += self.instances[row].weight();
        }
        distribution
    }

    /// Visits features in random order until `max_features` non-constant ones
    /// have been scored, and keeps the best split among them.
    fn best_split_suggestion(
        &mut self,
        rows: &[usize],
        pre_split_distribution: &[f64],
    ) -> Option<AttributeSplitSuggestion> {
        let mut features: Vec<usize> = (0..self.number_of_features).collect();
        features.shuffle(&mut *self.rng);

        let mut best: Option<AttributeSplitSuggestion> = None;
        let mut visited = 0;
        for feature in features {
            if visited >= self.params.max_features {
                break;
            }
            let Some(candidate) = self.suggest_numeric_split(feature, rows, pre_split_distribution)
            else {
                continue;
            };
            visited += 1;
            if best.as_ref().is_none_or(|b| candidate > *b) {
                best = Some(candidate);
            }
        }
        best
    }

    /// Best `value <= threshold` split on one feature, or `None` when the
    /// feature is constant over `rows`.
    fn suggest_numeric_split(
        &self,
        feature: usize,
        rows: &[usize],
        pre_split_distribution: &[f64],
    ) -> Option<AttributeSplitSuggestion> {
        let mut points: Vec<(f64, usize, f64)> = rows
            .iter()
            .filter_map(|&row| {
                let inst = &self.instances[row];
                let value = inst.value_at_index(feature).filter(|v| !v.is_nan())?;
                Some((value, self.labels[row], inst.weight()))
            })
            .collect();
        points.sort_by(|a, b| a.0.total_cmp(&b.0));

        let (lowest, highest) = (points.first()?.0, points.last()?.0);
        if lowest >= highest {
            return None;
        }

        let mut left = vec![0.0; self.number_of_classes];
        let mut right = vec![0.0; self.number_of_classes];
        for &(_, label, weight) in &points {
            right[label] += weight;
        }

        let mut best: Option<(f64, f64)> = None;
        for pair in points.windows(2) {
            let (value, label, weight) = pair[0];
            let next = pair[1].0;
            left[label] += weight;
            right[label] -= weight;
            if next <= value {
                continue;
            }

            let merit = self
                .split_criterion
                .get_merit_of_split(pre_split_distribution, &[left.as_slice(), right.as_slice()]);
            if best.is_none_or(|(m, _)| merit > m) {
                let mut threshold = value / 2.0 + next / 2.0;
                if threshold >= next || threshold < value {
                    threshold = value;
                }
                best = Some((merit, threshold));
            }
        }

        let (merit, threshold) = best?;
        Some(AttributeSplitSuggestion::new(
            Box::new(NumericAttributeBinaryTest::new(feature, threshold)),
            merit,
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::classifiers::split_criteria::GiniSplitCriterion;
    use crate::core::instances::FeatureVector;
    use crate::testing::dummies::{labelled, purchase_header};
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn params(max_depth: Option<usize>) -> TreeParameters {
        TreeParameters {
            max_depth,
            min_samples_split: 2,
            max_features: 7,
        }
    }

    /// Purchase iff price > 500, everything else is noise-free filler.
    fn price_rule_instances() -> Vec<DenseInstance> {
        let header = purchase_header();
        (0..40)
            .map(|i| {
                let price = 100.0 + 25.0 * i as f64;
                let class = usize::from(price > 500.0);
                labelled(
                    &header,
                    [(i % 2) as f64, 0.0, price, 30.0, 1.0, 5.0, 3.0],
                    class,
                )
            })
            .collect()
    }

    fn fit(instances: &[DenseInstance], p: &TreeParameters, seed: u64) -> DecisionTree {
        let sample: Vec<usize> = (0..instances.len()).collect();
        let mut rng = StdRng::seed_from_u64(seed);
        DecisionTree::fit(instances, &sample, 2, p, &GiniSplitCriterion::new(), &mut rng).unwrap()
    }

    fn vector(price: f64) -> FeatureVector {
        FeatureVector::new([0.0, 0.0, price, 30.0, 1.0, 5.0, 3.0])
    }

    #[test]
    fn learns_a_single_threshold() {
        let tree = fit(&price_rule_instances(), &params(Some(10)), 1);
        assert_eq!(tree.depth(), 1);
        assert_eq!(tree.number_of_leaves(), 2);
        assert_eq!(tree.get_votes_for_instance(&vector(200.0)), vec![1.0, 0.0]);
        assert_eq!(tree.get_votes_for_instance(&vector(900.0)), vec![0.0, 1.0]);
    }

    #[test]
    fn split_threshold_is_the_midpoint() {
        // neighbouring training prices are 500 and 525
        let tree = fit(&price_rule_instances(), &params(Some(10)), 1);
        assert_eq!(tree.get_votes_for_instance(&vector(512.5)), vec![1.0, 0.0]);
        assert_eq!(tree.get_votes_for_instance(&vector(512.6)), vec![0.0, 1.0]);
    }

    #[test]
    fn depth_zero_is_a_single_majority_leaf() {
        let tree = fit(&price_rule_instances(), &params(Some(0)), 1);
        assert_eq!(tree.depth(), 0);
        assert_eq!(tree.number_of_leaves(), 1);
        let votes = tree.get_votes_for_instance(&vector(900.0));
        assert!((votes[0] - 17.0 / 40.0).abs() < 1e-12);
        assert!((votes[1] - 23.0 / 40.0).abs() < 1e-12);
    }

    #[test]
    fn depth_cap_is_respected() {
        let header = purchase_header();
        let instances: Vec<DenseInstance> = (0..64)
            .map(|i| {
                labelled(
                    &header,
                    [0.0, 0.0, i as f64, 30.0, 1.0, 5.0, 3.0],
                    (i % 2) as usize,
                )
            })
            .collect();
        for cap in [1, 2, 3] {
            let tree = fit(&instances, &params(Some(cap)), 9);
            assert!(tree.depth() <= cap, "cap={cap} depth={}", tree.depth());
        }
    }

    #[test]
    fn constant_features_produce_a_leaf() {
        let header = purchase_header();
        let instances: Vec<DenseInstance> = (0..10)
            .map(|i| labelled(&header, [0.0, 0.0, 1.0, 1.0, 1.0, 1.0, 1.0], i % 2))
            .collect();
        let tree = fit(&instances, &params(None), 3);
        assert_eq!(tree.number_of_leaves(), 1);
        assert_eq!(tree.get_votes_for_instance(&vector(1.0)), vec![0.5, 0.5]);
    }

    #[test]
    fn same_seed_same_tree() {
        let instances = price_rule_instances();
        let narrow = TreeParameters {
            max_features: 2,
            ..params(Some(10))
        };
        let a = fit(&instances, &narrow, 77);
        let b = fit(&instances, &narrow, 77);
        for price in [50.0, 300.0, 512.0, 513.0, 1000.0] {
            assert_eq!(
                a.get_votes_for_instance(&vector(price)),
                b.get_votes_for_instance(&vector(price))
            );
        }
        assert_eq!(a.depth(), b.depth());
        assert_eq!(a.number_of_leaves(), b.number_of_leaves());
    }

    #[test]
    fn rejects_bad_inputs() {
        let instances = price_rule_instances();
        let mut rng = StdRng::seed_from_u64(0);
        let criterion = GiniSplitCriterion::new();

        let err = DecisionTree::fit(&instances, &[], 2, &params(None), &criterion, &mut rng)
            .err()
            .unwrap();
        assert!(matches!(err, ClassifierError::EmptyTrainingSet));

        let err = DecisionTree::fit(&instances, &[0, 1], 0, &params(None), &criterion, &mut rng)
            .err()
            .unwrap();
        assert!(matches!(err, ClassifierError::NoClasses));

        // class value 1 does not exist when there is only one class
        let err = DecisionTree::fit(&instances, &[0, 1], 1, &params(None), &criterion, &mut rng)
            .err()
            .unwrap();
        assert!(matches!(err, ClassifierError::MissingClass { .. }));
    }
}
