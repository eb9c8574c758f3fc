use crate::classifiers::ClassifierError;
use crate::core::instance_header::InstanceHeader;
use crate::core::instances::{DenseInstance, Instance};
use std::sync::Arc;

pub trait Classifier: Send + Sync {
    fn set_model_context(&mut self, header: Arc<InstanceHeader>);

    /// Fits the model over the whole batch, replacing any previous fit.
    fn train_on_instances(&mut self, instances: &[DenseInstance]) -> Result<(), ClassifierError>;

    /// One score per class, or `None` when the model has not been trained.
    fn get_votes_for_instance(&self, instance: &dyn Instance) -> Option<Vec<f64>>;
}
