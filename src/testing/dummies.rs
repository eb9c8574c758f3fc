use crate::config::{ForestParameters, TrainingParameters};
use crate::core::attributes::NominalAttribute;
use crate::core::instance_header::{FEATURE_COUNT, FeatureColumn, InstanceHeader};
use crate::core::instances::{DenseInstance, FeatureVector};
use crate::data::PurchaseRecord;
use crate::inference::{ModelBundle, PurchaseIntent, RawRequest};
use crate::tasks::TrainingPipeline;
use crate::testing::PurchaseRecordGenerator;
use std::sync::{Arc, OnceLock};

/// Header with categories {Laptops, Smart Watches} and brands {Apple, Samsung}.
pub fn purchase_header() -> Arc<InstanceHeader> {
    let category = NominalAttribute::fit(
        FeatureColumn::ProductCategory.name(),
        ["Smart Watches", "Laptops"],
    )
    .unwrap();
    let brand =
        NominalAttribute::fit(FeatureColumn::ProductBrand.name(), ["Samsung", "Apple"]).unwrap();
    Arc::new(InstanceHeader::purchase_intent(
        category,
        brand,
        PurchaseIntent::class_labels(),
    ))
}

pub fn labelled(
    header: &Arc<InstanceHeader>,
    values: [f64; FEATURE_COUNT],
    class_index: usize,
) -> DenseInstance {
    DenseInstance::labelled(Arc::clone(header), &FeatureVector::new(values), class_index)
}

pub fn purchase_record(category: &str, brand: &str, price: f64, label: bool) -> PurchaseRecord {
    PurchaseRecord {
        product_id: None,
        product_category: category.to_string(),
        product_brand: brand.to_string(),
        product_price: price,
        customer_age: 35,
        customer_gender: 1,
        purchase_frequency: 7,
        customer_satisfaction: 2,
        purchase_intent: Some(label),
    }
}

/// `Smart Watches / Samsung / 980.39 / 35 / 1 / 7 / 2`.
pub fn scenario_request() -> RawRequest {
    RawRequest {
        category: Some("Smart Watches".into()),
        brand: Some("Samsung".into()),
        price: Some("980.39".into()),
        age: Some("35".into()),
        gender: Some("1".into()),
        frequency: Some("7".into()),
        satisfaction: Some("2".into()),
    }
}

pub fn small_training_parameters() -> TrainingParameters {
    TrainingParameters {
        forest: ForestParameters {
            n_estimators: 20,
            ..ForestParameters::default()
        },
        ..TrainingParameters::default()
    }
}

/// Bundle fitted once on 400 noise-free synthetic records.
pub fn trained_bundle() -> Arc<ModelBundle> {
    static BUNDLE: OnceLock<Arc<ModelBundle>> = OnceLock::new();
    let bundle = BUNDLE.get_or_init(|| {
        let records: Vec<PurchaseRecord> = PurchaseRecordGenerator::new(0, 400, 7).collect();
        let bundle = TrainingPipeline::from_records(records, small_training_parameters())
            .run()
            .unwrap();
        Arc::new(bundle)
    });
    Arc::clone(bundle)
}
