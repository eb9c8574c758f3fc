use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EncodingError {
    #[error("unknown category '{label}' for {attribute}")]
    UnknownCategory { attribute: String, label: String },

    #[error("invalid code {code} for {attribute}")]
    InvalidCode { attribute: String, code: usize },
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CoercionError {
    #[error("missing value for {field}")]
    Missing { field: String },

    #[error("{field} must be a number, got '{value}'")]
    NotANumber { field: String, value: String },

    #[error("{field} must be an integer, got '{value}'")]
    NotAnInteger { field: String, value: String },
}

/// Failure to turn one record into a feature vector.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FeatureError {
    #[error(transparent)]
    Encoding(#[from] EncodingError),

    #[error(transparent)]
    Coercion(#[from] CoercionError),
}
