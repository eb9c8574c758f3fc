use thiserror::Error;

#[derive(Debug, Error)]
pub enum ClassifierError {
    #[error("model context was not set before training")]
    MissingModelContext,

    #[error("cannot train on an empty set of instances")]
    EmptyTrainingSet,

    #[error("class attribute has no values")]
    NoClasses,

    #[error("instance {index} has no valid class value")]
    MissingClass { index: usize },

    #[error("invalid parameter: {0}")]
    InvalidParameter(String),
}
