use crate::core::instance_header::InstanceHeader;
use crate::core::instances::feature_vector::FeatureVector;
use crate::core::instances::instance::Instance;
use std::sync::Arc;

/// A labelled training row: the feature values followed by the class value,
/// laid out exactly like the attributes of its header.
#[derive(Clone)]
pub struct DenseInstance {
    pub header: Arc<InstanceHeader>,
    pub values: Vec<f64>,
    pub weight: f64,
}

impl DenseInstance {
    pub fn new(header: Arc<InstanceHeader>, values: Vec<f64>, weight: f64) -> DenseInstance {
        DenseInstance {
            header,
            values,
            weight,
        }
    }

    pub fn labelled(
        header: Arc<InstanceHeader>,
        features: &FeatureVector,
        class_index: usize,
    ) -> DenseInstance {
        let mut values = Vec::with_capacity(header.number_of_attributes());
        values.extend_from_slice(features.as_slice());
        values.insert(header.class_index().min(values.len()), class_index as f64);
        DenseInstance::new(header, values, 1.0)
    }

    fn value_index(&self, feature_index: usize) -> usize {
        if feature_index < self.header.class_index() {
            feature_index
        } else {
            feature_index + 1
        }
    }
}

impl Instance for DenseInstance {
    fn weight(&self) -> f64 {
        self.weight
    }

    fn value_at_index(&self, index: usize) -> Option<f64> {
        if index >= self.number_of_features() {
            return None;
        }
        self.values.get(self.value_index(index)).copied()
    }

    fn number_of_features(&self) -> usize {
        self.values.len().saturating_sub(1)
    }

    fn class_value(&self) -> Option<f64> {
        self.values.get(self.header.class_index()).copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::dummies::purchase_header;

    fn features() -> FeatureVector {
        FeatureVector::new([1.0, 0.0, 980.39, 35.0, 1.0, 7.0, 2.0])
    }

    #[test]
    fn labelled_appends_class_after_features() {
        let inst = DenseInstance::labelled(purchase_header(), &features(), 1);
        assert_eq!(inst.values, vec![1.0, 0.0, 980.39, 35.0, 1.0, 7.0, 2.0, 1.0]);
        assert_eq!(inst.class_value(), Some(1.0));
        assert_eq!(inst.weight(), 1.0);
    }

    #[test]
    fn feature_indices_skip_the_class_slot() {
        let inst = DenseInstance::labelled(purchase_header(), &features(), 0);
        assert_eq!(inst.number_of_features(), 7);
        assert_eq!(inst.value_at_index(2), Some(980.39));
        assert_eq!(inst.value_at_index(6), Some(2.0));
        assert_eq!(inst.value_at_index(7), None);
        assert!(inst.is_missing_at_index(7));
        assert!(!inst.is_missing_at_index(0));
    }

    #[test]
    fn feature_vector_reads_like_an_unlabelled_instance() {
        let fv = features();
        assert_eq!(fv.len(), 7);
        assert_eq!(fv.value_at_index(3), Some(35.0));
        assert_eq!(fv.class_value(), None);
        assert_eq!(fv.number_of_features(), 7);
    }
}
