pub mod attributes;
mod errors;
pub mod instance_header;
pub mod instances;

pub use errors::{CoercionError, EncodingError, FeatureError};
