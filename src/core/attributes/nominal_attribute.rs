use crate::core::attributes::attribute::{Attribute, FieldValue};
use crate::core::errors::{CoercionError, EncodingError, FeatureError};
use std::any::Any;
use std::collections::{BTreeSet, HashMap};

/// Categorical encoder for a single column.
///
/// Codes are assigned to the distinct labels in sorted (byte-wise) order, so
/// fitting the same column twice always yields the same mapping regardless of
/// row order. The mapping never grows after [`fit`](NominalAttribute::fit).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NominalAttribute {
    name: String,
    values: Vec<String>,
    label_to_index: HashMap<String, usize>,
}

impl NominalAttribute {
    pub fn with_values(name: String, values: Vec<String>) -> NominalAttribute {
        let label_to_index = values
            .iter()
            .enumerate()
            .map(|(i, v)| (v.clone(), i))
            .collect();
        NominalAttribute {
            name,
            values,
            label_to_index,
        }
    }

    /// Scans `column` and builds the label to code mapping.
    ///
    /// Returns `None` when the column yields no labels at all.
    pub fn fit<'a, I>(name: impl Into<String>, column: I) -> Option<NominalAttribute>
    where
        I: IntoIterator<Item = &'a str>,
    {
        let distinct: BTreeSet<&str> = column.into_iter().collect();
        if distinct.is_empty() {
            return None;
        }
        let values = distinct.into_iter().map(str::to_string).collect();
        Some(Self::with_values(name.into(), values))
    }

    pub fn encode(&self, label: &str) -> Result<usize, EncodingError> {
        self.label_to_index
            .get(label)
            .copied()
            .ok_or_else(|| EncodingError::UnknownCategory {
                attribute: self.name.clone(),
                label: label.to_string(),
            })
    }

    pub fn decode(&self, code: usize) -> Result<&str, EncodingError> {
        self.values
            .get(code)
            .map(String::as_str)
            .ok_or_else(|| EncodingError::InvalidCode {
                attribute: self.name.clone(),
                code,
            })
    }

    pub fn number_of_values(&self) -> usize {
        self.values.len()
    }

    /// Fitted labels, indexed by code.
    pub fn values(&self) -> &[String] {
        &self.values
    }
}

impl Attribute for NominalAttribute {
    fn name(&self) -> &str {
        &self.name
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn encode_value(&self, value: Option<FieldValue<'_>>) -> Result<f64, FeatureError> {
        match value {
            Some(FieldValue::Text(label)) => Ok(self.encode(label)? as f64),
            Some(FieldValue::Number(n)) => Ok(self.encode(&n.to_string())? as f64),
            None => Err(CoercionError::Missing {
                field: self.name.clone(),
            }
            .into()),
        }
    }
}
