use crate::core::instance_header::FEATURE_COUNT;
use crate::core::instances::Instance;

/// Ordered numeric encoding of one observation, ready for the classifier.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FeatureVector {
    values: [f64; FEATURE_COUNT],
}

impl FeatureVector {
    pub fn new(values: [f64; FEATURE_COUNT]) -> Self {
        Self { values }
    }

    pub fn as_slice(&self) -> &[f64] {
        &self.values
    }

    pub fn len(&self) -> usize {
        FEATURE_COUNT
    }

    pub fn is_empty(&self) -> bool {
        false
    }
}

impl Instance for FeatureVector {
    fn weight(&self) -> f64 {
        1.0
    }

    fn value_at_index(&self, index: usize) -> Option<f64> {
        self.values.get(index).copied()
    }

    fn number_of_features(&self) -> usize {
        FEATURE_COUNT
    }

    fn class_value(&self) -> Option<f64> {
        None
    }
}
