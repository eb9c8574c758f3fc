use crate::core::errors::FeatureError;
use std::any::Any;
use std::sync::Arc;

/// Raw value of one column, as handed over by a record or a request.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FieldValue<'a> {
    Text(&'a str),
    Number(f64),
}

/// One column of the [`InstanceHeader`](crate::core::instance_header::InstanceHeader).
///
/// Every attribute knows how to turn a raw [`FieldValue`] into the `f64`
/// the classifier consumes. Training and serving both go through
/// [`encode_value`](Attribute::encode_value), so the two paths cannot drift.
pub trait Attribute: Any + Send + Sync {
    fn name(&self) -> &str;

    fn as_any(&self) -> &dyn Any;

    /// Encodes a raw value; `None` means the source had no value for the column.
    fn encode_value(&self, value: Option<FieldValue<'_>>) -> Result<f64, FeatureError>;
}

pub type AttributeRef = Arc<dyn Attribute>;
