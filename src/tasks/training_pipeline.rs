use crate::classifiers::{Classifier, RandomForest};
use crate::config::TrainingParameters;
use crate::core::attributes::NominalAttribute;
use crate::core::instance_header::{FeatureColumn, InstanceHeader};
use crate::core::instances::DenseInstance;
use crate::data::{PurchaseRecord, load_records, train_test_split};
use crate::evaluation::{
    BasicClassificationEvaluator, PerformanceEvaluator, PerformanceEvaluatorExt,
};
use crate::inference::{FeatureVectorBuilder, ModelBundle, PurchaseIntent, TrainingReport};
use crate::tasks::StartupError;
use chrono::Utc;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Instant;

struct LabelledRow {
    row: usize,
    record: PurchaseRecord,
    label: bool,
}

enum Dataset {
    Path(PathBuf),
    Records(Vec<PurchaseRecord>),
}

/// Load, encode, split, fit, evaluate. Runs once before the server starts.
pub struct TrainingPipeline {
    dataset: Dataset,
    params: TrainingParameters,
}

impl TrainingPipeline {
    pub fn new(dataset_path: impl Into<PathBuf>, params: TrainingParameters) -> Self {
        Self {
            dataset: Dataset::Path(dataset_path.into()),
            params,
        }
    }

    pub fn from_records(records: Vec<PurchaseRecord>, params: TrainingParameters) -> Self {
        Self {
            dataset: Dataset::Records(records),
            params,
        }
    }

    /// Runs [`run`](Self::run) on the tokio blocking pool so the forest fit
    /// never stalls the async workers.
    pub async fn run_blocking(self) -> Result<ModelBundle, StartupError> {
        tokio::task::spawn_blocking(move || self.run()).await?
    }

    pub fn run(self) -> Result<ModelBundle, StartupError> {
        let start = Instant::now();
        let test_fraction = self.params.test_fraction;
        if !(test_fraction > 0.0 && test_fraction < 1.0) {
            return Err(StartupError::InvalidParameter(format!(
                "test_fraction must be in (0, 1), got {test_fraction}"
            )));
        }

        let records = match self.dataset {
            Dataset::Path(path) => {
                let records = load_records(&path)?;
                tracing::info!(path = %path.display(), rows = records.len(), "dataset loaded");
                records
            }
            Dataset::Records(records) => records,
        };
        if records.is_empty() {
            return Err(StartupError::EmptyDataset);
        }
        let dataset_rows = records.len();

        // rows are numbered from 1, as in the data section of the file
        let labelled: Vec<LabelledRow> = records
            .into_iter()
            .enumerate()
            .filter_map(|(i, record)| {
                let label = record.purchase_intent?;
                Some(LabelledRow {
                    row: i + 1,
                    record,
                    label,
                })
            })
            .collect();
        let unlabelled_rows = dataset_rows - labelled.len();
        if unlabelled_rows > 0 {
            tracing::warn!(rows = unlabelled_rows, "skipping records without a label");
        }
        if labelled.is_empty() {
            return Err(StartupError::NoLabels);
        }

        let category = fit_encoder(FeatureColumn::ProductCategory, &labelled, |r| {
            &r.product_category
        })?;
        let brand = fit_encoder(FeatureColumn::ProductBrand, &labelled, |r| &r.product_brand)?;
        let categories = category.values().to_vec();
        let brands = brand.values().to_vec();
        tracing::info!(?categories, ?brands, "encoders fitted");

        let header = Arc::new(InstanceHeader::purchase_intent(
            category,
            brand,
            PurchaseIntent::class_labels(),
        ));
        let builder = FeatureVectorBuilder::new(Arc::clone(&header));

        let mut instances = Vec::with_capacity(labelled.len());
        for LabelledRow { row, record, label } in &labelled {
            let vector = builder
                .build(record)
                .map_err(|source| StartupError::InvalidRecord { row: *row, source })?;
            let intent = PurchaseIntent::from_label(*label);
            instances.push(DenseInstance::labelled(
                Arc::clone(&header),
                &vector,
                intent.class_index(),
            ));
        }

        let (train, test): (Vec<DenseInstance>, Vec<DenseInstance>) =
            train_test_split(instances, test_fraction, self.params.split_seed);
        if train.is_empty() {
            return Err(StartupError::EmptyTrainingPartition);
        }
        tracing::info!(
            train = train.len(),
            test = test.len(),
            seed = self.params.split_seed,
            "dataset split"
        );

        let mut forest = RandomForest::from(&self.params.forest);
        forest.set_model_context(Arc::clone(&header));
        forest.train_on_instances(&train)?;
        let shape = forest.shape();
        tracing::info!(
            trees = shape.n_estimators,
            deepest = shape.deepest_tree,
            mean_leaves = shape.mean_leaves,
            elapsed_ms = start.elapsed().as_millis() as u64,
            "forest fitted"
        );

        let holdout = evaluate_holdout(&forest, &test, header.number_of_classes());
        if let Some(evaluator) = &holdout {
            tracing::info!(
                accuracy = evaluator.metric("accuracy"),
                kappa = evaluator.metric("kappa"),
                "holdout evaluated"
            );
        }

        let report = TrainingReport {
            trained_at: Utc::now(),
            dataset_rows,
            unlabelled_rows,
            train_rows: train.len(),
            test_rows: test.len(),
            class_labels: PurchaseIntent::class_labels(),
            categories,
            brands,
            forest: shape,
            holdout: holdout.map(|e| e.performance()).unwrap_or_default(),
        };
        Ok(ModelBundle::new(header, Box::new(forest), report))
    }
}

/// Blank cells are not categories.
fn fit_encoder(
    column: FeatureColumn,
    rows: &[LabelledRow],
    field: impl Fn(&PurchaseRecord) -> &String,
) -> Result<NominalAttribute, StartupError> {
    let labels = rows
        .iter()
        .map(|row| field(&row.record).as_str())
        .filter(|label| !label.is_empty());
    NominalAttribute::fit(column.name(), labels).ok_or_else(|| StartupError::EmptyCategorySet {
        column: column.name().to_string(),
    })
}

fn evaluate_holdout(
    classifier: &dyn Classifier,
    test: &[DenseInstance],
    number_of_classes: usize,
) -> Option<BasicClassificationEvaluator> {
    if test.is_empty() {
        return None;
    }
    let mut evaluator = BasicClassificationEvaluator::new(number_of_classes);
    for instance in test {
        if let Some(votes) = classifier.get_votes_for_instance(instance) {
            evaluator.add_result(instance, &votes);
        }
    }
    Some(evaluator)
}
