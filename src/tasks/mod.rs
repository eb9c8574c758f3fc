mod startup_error;
mod training_pipeline;

pub use startup_error::StartupError;
pub use training_pipeline::TrainingPipeline;
