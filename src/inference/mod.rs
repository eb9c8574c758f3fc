mod errors;
mod feature_source;
mod feature_vector_builder;
mod inference_service;
mod model_bundle;
mod purchase_intent;
mod raw_request;

pub use errors::PredictionError;
pub use feature_source::FeatureSource;
pub use feature_vector_builder::FeatureVectorBuilder;
pub use inference_service::{InferenceService, PredictionResult};
pub use model_bundle::{ModelBundle, TrainingReport};
pub use purchase_intent::PurchaseIntent;
pub use raw_request::RawRequest;
