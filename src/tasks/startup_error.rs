use crate::classifiers::ClassifierError;
use crate::core::FeatureError;
use std::path::PathBuf;
use thiserror::Error;

/// Anything that keeps the service from reaching the ready state.
#[derive(Debug, Error)]
pub enum StartupError {
    #[error("cannot read dataset {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed dataset: {0}")]
    Csv(#[from] csv::Error),

    #[error("dataset has no records")]
    EmptyDataset,

    #[error("dataset has no labelled records")]
    NoLabels,

    #[error("column {column} yields no categories")]
    EmptyCategorySet { column: String },

    #[error("training partition is empty")]
    EmptyTrainingPartition,

    #[error("record {row} cannot be encoded: {source}")]
    InvalidRecord {
        row: usize,
        #[source]
        source: FeatureError,
    },

    #[error("invalid parameter: {0}")]
    InvalidParameter(String),

    #[error("model fit failed: {0}")]
    Classifier(#[from] ClassifierError),

    #[error("training task did not complete: {0}")]
    TrainingTask(#[from] tokio::task::JoinError),
}
