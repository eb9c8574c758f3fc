use crate::classifiers::{Classifier, ForestShape};
use crate::core::instance_header::InstanceHeader;
use crate::evaluation::Measurement;
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::sync::Arc;

/// Summary of a training run, served by the model-info endpoint.
#[derive(Debug, Clone, Serialize)]
pub struct TrainingReport {
    pub trained_at: DateTime<Utc>,
    pub dataset_rows: usize,
    pub unlabelled_rows: usize,
    pub train_rows: usize,
    pub test_rows: usize,
    pub class_labels: Vec<String>,
    pub categories: Vec<String>,
    pub brands: Vec<String>,
    pub forest: ForestShape,
    /// Empty when the test partition is empty.
    pub holdout: Vec<Measurement>,
}

/// Everything needed to answer predictions, fitted once and never mutated.
pub struct ModelBundle {
    pub header: Arc<InstanceHeader>,
    pub classifier: Box<dyn Classifier>,
    pub report: TrainingReport,
}

impl ModelBundle {
    pub fn new(
        header: Arc<InstanceHeader>,
        classifier: Box<dyn Classifier>,
        report: TrainingReport,
    ) -> Self {
        Self {
            header,
            classifier,
            report,
        }
    }
}
