use crate::classifiers::conditional_tests::InstanceConditionalTest;
use crate::core::instances::Instance;

/// `value <= threshold` goes to branch 0, everything else to branch 1.
#[derive(Debug, Clone, PartialEq)]
pub struct NumericAttributeBinaryTest {
    attribute_index: usize,
    threshold: f64,
}

impl NumericAttributeBinaryTest {
    pub fn new(attribute_index: usize, threshold: f64) -> Self {
        Self {
            attribute_index,
            threshold,
        }
    }
}

impl InstanceConditionalTest for NumericAttributeBinaryTest {
    fn branch_for_instance(&self, instance: &dyn Instance) -> Option<usize> {
        if instance.is_missing_at_index(self.attribute_index) {
            return None;
        }
        let value = instance.value_at_index(self.attribute_index)?;
        Some(if value <= self.threshold { 0 } else { 1 })
    }

    fn max_branches(&self) -> usize {
        2
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::instances::FeatureVector;

    fn vector(price: f64) -> FeatureVector {
        FeatureVector::new([0.0, 0.0, price, 30.0, 0.0, 5.0, 3.0])
    }

    #[test]
    fn threshold_is_inclusive_on_the_left() {
        let test = NumericAttributeBinaryTest::new(2, 500.0);
        assert_eq!(test.branch_for_instance(&vector(499.9)), Some(0));
        assert_eq!(test.branch_for_instance(&vector(500.0)), Some(0));
        assert_eq!(test.branch_for_instance(&vector(500.1)), Some(1));
    }

    #[test]
    fn missing_value_has_no_branch() {
        let test = NumericAttributeBinaryTest::new(2, 500.0);
        assert_eq!(test.branch_for_instance(&vector(f64::NAN)), None);

        let out_of_range = NumericAttributeBinaryTest::new(9, 1.0);
        assert_eq!(out_of_range.branch_for_instance(&vector(1.0)), None);
    }

    #[test]
    fn reads_only_its_own_attribute() {
        let test = NumericAttributeBinaryTest::new(3, 40.5);
        let mut values = [0.0, 0.0, 9999.0, 40.5, 0.0, 5.0, 3.0];
        assert_eq!(test.branch_for_instance(&FeatureVector::new(values)), Some(0));
        values[3] = 41.0;
        assert_eq!(test.branch_for_instance(&FeatureVector::new(values)), Some(1));
        assert_eq!(test.max_branches(), 2);
    }
}
