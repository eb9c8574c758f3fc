mod dense_instance;
mod feature_vector;
mod instance;

pub use dense_instance::DenseInstance;
pub use feature_vector::FeatureVector;
pub use instance::Instance;
