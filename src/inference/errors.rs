use crate::core::FeatureError;
use thiserror::Error;

/// Per-request failure; never affects the shared model.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum PredictionError {
    #[error(transparent)]
    Feature(#[from] FeatureError),

    #[error("model produced no votes")]
    NoVotes,

    #[error("model predicted unknown class {0}")]
    UnknownClass(usize),
}
