use crate::core::attributes::FieldValue;
use crate::core::instance_header::FeatureColumn;
use crate::inference::FeatureSource;
use serde::Deserialize;

/// Untyped prediction request, as received in the query string.
///
/// Every field stays text until the header coerces it. The short aliases are
/// the parameter names of the legacy `/PurchaseIntent` route.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct RawRequest {
    #[serde(default, alias = "PrCa")]
    pub category: Option<String>,
    #[serde(default, alias = "PrBr")]
    pub brand: Option<String>,
    #[serde(default, alias = "PrPr")]
    pub price: Option<String>,
    #[serde(default, alias = "CuAge")]
    pub age: Option<String>,
    #[serde(default, alias = "CuGe")]
    pub gender: Option<String>,
    #[serde(default, alias = "PuFr")]
    pub frequency: Option<String>,
    #[serde(default, alias = "CuSa")]
    pub satisfaction: Option<String>,
}

impl FeatureSource for RawRequest {
    fn field(&self, column: FeatureColumn) -> Option<FieldValue<'_>> {
        let raw = match column {
            FeatureColumn::ProductCategory => &self.category,
            FeatureColumn::ProductBrand => &self.brand,
            FeatureColumn::ProductPrice => &self.price,
            FeatureColumn::CustomerAge => &self.age,
            FeatureColumn::CustomerGender => &self.gender,
            FeatureColumn::PurchaseFrequency => &self.frequency,
            FeatureColumn::CustomerSatisfaction => &self.satisfaction,
        };
        raw.as_deref().map(FieldValue::Text)
    }
}
