use crate::core::instances::Instance;
use crate::inference::{
    FeatureSource, FeatureVectorBuilder, ModelBundle, PredictionError, PurchaseIntent,
};
use crate::utils::math::argmax;
use serde::Serialize;
use std::sync::Arc;

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PredictionResult {
    pub intent: PurchaseIntent,
    /// Share of the ensemble vote for [`PurchaseIntent::Purchase`].
    pub purchase_probability: f64,
}

/// Per-request prediction over a shared, read-only [`ModelBundle`].
#[derive(Clone)]
pub struct InferenceService {
    bundle: Arc<ModelBundle>,
    builder: FeatureVectorBuilder,
}

impl InferenceService {
    pub fn new(bundle: Arc<ModelBundle>) -> Self {
        let builder = FeatureVectorBuilder::new(Arc::clone(&bundle.header));
        Self { bundle, builder }
    }

    pub fn bundle(&self) -> &ModelBundle {
        &self.bundle
    }

    pub fn predict(&self, source: &dyn FeatureSource) -> Result<PredictionResult, PredictionError> {
        let vector = self.builder.build(source)?;
        self.predict_instance(&vector)
    }

    pub fn predict_instance(
        &self,
        instance: &dyn Instance,
    ) -> Result<PredictionResult, PredictionError> {
        let votes = self
            .bundle
            .classifier
            .get_votes_for_instance(instance)
            .ok_or(PredictionError::NoVotes)?;
        let class = argmax(&votes).ok_or(PredictionError::NoVotes)?;
        let intent =
            PurchaseIntent::from_class_index(class).ok_or(PredictionError::UnknownClass(class))?;
        let purchase_probability = votes
            .get(PurchaseIntent::Purchase.class_index())
            .copied()
            .unwrap_or(0.0);

        tracing::debug!(%intent, purchase_probability, "prediction");
        Ok(PredictionResult {
            intent,
            purchase_probability,
        })
    }
}
