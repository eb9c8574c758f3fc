use crate::core::FeatureError;
use crate::core::instance_header::{FEATURE_COUNT, FeatureColumn, InstanceHeader};
use crate::core::instances::FeatureVector;
use crate::inference::FeatureSource;
use std::sync::Arc;
use strum::IntoEnumIterator;

/// Turns raw records into feature vectors using the fitted header.
///
/// The training pipeline and the inference service both build vectors through
/// this type, walking the header in [`FeatureColumn`] order.
#[derive(Clone)]
pub struct FeatureVectorBuilder {
    header: Arc<InstanceHeader>,
}

impl FeatureVectorBuilder {
    pub fn new(header: Arc<InstanceHeader>) -> Self {
        Self { header }
    }

    /// Encodes every column of `source`; fails on the first column that
    /// cannot be encoded.
    pub fn build(&self, source: &dyn FeatureSource) -> Result<FeatureVector, FeatureError> {
        let mut values = [0.0; FEATURE_COUNT];
        let columns = self.header.feature_attributes().zip(FeatureColumn::iter());
        for ((_, attribute), column) in columns {
            values[column.index()] = attribute.encode_value(source.field(column))?;
        }
        Ok(FeatureVector::new(values))
    }
}
