use crate::core::attributes::FieldValue;
use crate::core::instance_header::FeatureColumn;

/// Anything that can hand over raw column values: a dataset row or a request.
pub trait FeatureSource {
    /// Raw value for `column`, `None` when absent.
    fn field(&self, column: FeatureColumn) -> Option<FieldValue<'_>>;
}
