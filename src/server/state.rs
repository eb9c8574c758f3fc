use crate::inference::{InferenceService, ModelBundle};
use std::sync::Arc;

/// Shared, read-only state of the HTTP layer.
pub struct AppState {
    pub service: InferenceService,
}

impl AppState {
    pub fn new(bundle: Arc<ModelBundle>) -> Self {
        Self {
            service: InferenceService::new(bundle),
        }
    }
}
