use crate::classifiers::conditional_tests::InstanceConditionalTest;
use std::cmp::Ordering;

/// A candidate split and its merit under the split criterion.
pub struct AttributeSplitSuggestion {
    split_test: Box<dyn InstanceConditionalTest>,
    merit: f64,
}

impl AttributeSplitSuggestion {
    pub fn new(split_test: Box<dyn InstanceConditionalTest>, merit: f64) -> Self {
        Self { split_test, merit }
    }

    pub fn into_split_test(self) -> Box<dyn InstanceConditionalTest> {
        self.split_test
    }
}

impl PartialEq for AttributeSplitSuggestion {
    fn eq(&self, other: &Self) -> bool {
        self.merit == other.merit
    }
}

impl Eq for AttributeSplitSuggestion {}

impl PartialOrd for AttributeSplitSuggestion {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for AttributeSplitSuggestion {
    fn cmp(&self, other: &Self) -> Ordering {
        self.merit.total_cmp(&other.merit)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::classifiers::conditional_tests::NumericAttributeBinaryTest;
    use crate::core::instances::FeatureVector;

    fn suggestion(merit: f64) -> AttributeSplitSuggestion {
        AttributeSplitSuggestion::new(Box::new(NumericAttributeBinaryTest::new(0, 1.0)), merit)
    }

    #[test]
    fn ordered_by_merit() {
        assert!(suggestion(0.9) > suggestion(0.4));
        let best = [suggestion(0.1), suggestion(0.7), suggestion(0.3)]
            .into_iter()
            .max()
            .unwrap();
        assert!(best == suggestion(0.7));
    }

    #[test]
    fn hands_over_its_split_test() {
        let test = suggestion(0.5).into_split_test();
        let low = FeatureVector::new([1.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0]);
        let high = FeatureVector::new([2.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0]);
        assert_eq!(test.branch_for_instance(&low), Some(0));
        assert_eq!(test.branch_for_instance(&high), Some(1));
    }
}
