use crate::core::attributes::FieldValue;
use crate::core::instance_header::FeatureColumn;
use crate::inference::FeatureSource;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// One row of the purchase dataset.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PurchaseRecord {
    /// Identifier only, never a feature.
    #[serde(rename = "ProductID", default)]
    pub product_id: Option<String>,

    #[serde(rename = "ProductCategory")]
    pub product_category: String,

    #[serde(rename = "ProductBrand")]
    pub product_brand: String,

    #[serde(rename = "ProductPrice")]
    pub product_price: f64,

    #[serde(rename = "CustomerAge")]
    pub customer_age: i64,

    #[serde(rename = "CustomerGender")]
    pub customer_gender: i64,

    #[serde(rename = "PurchaseFrequency")]
    pub purchase_frequency: i64,

    #[serde(rename = "CustomerSatisfaction")]
    pub customer_satisfaction: i64,

    /// `None` when the label cell is blank.
    #[serde(
        rename = "PurchaseIntent",
        default,
        deserialize_with = "deserialize_label",
        serialize_with = "serialize_label"
    )]
    pub purchase_intent: Option<bool>,
}

/// Accepts `0`/`1` and `true`/`false` (any case); blank means unlabelled.
fn deserialize_label<'de, D>(deserializer: D) -> Result<Option<bool>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<String>::deserialize(deserializer)?;
    let Some(raw) = raw else {
        return Ok(None);
    };
    match raw.trim().to_ascii_lowercase().as_str() {
        "" => Ok(None),
        "1" | "true" => Ok(Some(true)),
        "0" | "false" => Ok(Some(false)),
        other => Err(serde::de::Error::custom(format!(
            "PurchaseIntent must be 0/1 or true/false, got '{other}'"
        ))),
    }
}

fn serialize_label<S>(label: &Option<bool>, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    match label {
        Some(value) => serializer.serialize_u8(u8::from(*value)),
        None => serializer.serialize_str(""),
    }
}

impl FeatureSource for PurchaseRecord {
    fn field(&self, column: FeatureColumn) -> Option<FieldValue<'_>> {
        Some(match column {
            FeatureColumn::ProductCategory => FieldValue::Text(&self.product_category),
            FeatureColumn::ProductBrand => FieldValue::Text(&self.product_brand),
            FeatureColumn::ProductPrice => FieldValue::Number(self.product_price),
            FeatureColumn::CustomerAge => FieldValue::Number(self.customer_age as f64),
            FeatureColumn::CustomerGender => FieldValue::Number(self.customer_gender as f64),
            FeatureColumn::PurchaseFrequency => FieldValue::Number(self.purchase_frequency as f64),
            FeatureColumn::CustomerSatisfaction => {
                FieldValue::Number(self.customer_satisfaction as f64)
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::dummies::purchase_record;

    #[test]
    fn fields_follow_column_order() {
        let record = purchase_record("Smart Watches", "Samsung", 980.39, true);
        assert_eq!(
            record.field(FeatureColumn::ProductCategory),
            Some(FieldValue::Text("Smart Watches"))
        );
        assert_eq!(
            record.field(FeatureColumn::ProductPrice),
            Some(FieldValue::Number(980.39))
        );
        assert_eq!(
            record.field(FeatureColumn::CustomerAge),
            Some(FieldValue::Number(35.0))
        );
    }

    #[test]
    fn label_parses_numeric_and_boolean_forms() {
        let data = "\
ProductID,ProductCategory,ProductBrand,ProductPrice,CustomerAge,CustomerGender,PurchaseFrequency,CustomerSatisfaction,PurchaseIntent
1,Laptops,Apple,10.5,30,1,2,3,1
2,Laptops,Apple,10.5,30,1,2,3,0
3,Laptops,Apple,10.5,30,1,2,3,TRUE
4,Laptops,Apple,10.5,30,1,2,3,false
5,Laptops,Apple,10.5,30,1,2,3,
";
        let mut reader = csv::Reader::from_reader(data.as_bytes());
        let labels: Vec<Option<bool>> = reader
            .deserialize::<PurchaseRecord>()
            .map(|r| r.unwrap().purchase_intent)
            .collect();
        assert_eq!(
            labels,
            vec![Some(true), Some(false), Some(true), Some(false), None]
        );
    }

    #[test]
    fn bad_label_is_rejected() {
        let data = "\
ProductID,ProductCategory,ProductBrand,ProductPrice,CustomerAge,CustomerGender,PurchaseFrequency,CustomerSatisfaction,PurchaseIntent
1,Laptops,Apple,10.5,30,1,2,3,maybe
";
        let mut reader = csv::Reader::from_reader(data.as_bytes());
        let first = reader.deserialize::<PurchaseRecord>().next().unwrap();
        assert!(first.is_err());
    }
}
