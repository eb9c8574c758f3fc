use crate::core::attributes::attribute::{Attribute, FieldValue};
use crate::core::errors::{CoercionError, FeatureError};
use std::any::Any;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NumericKind {
    Real,
    Integer,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NumericAttribute {
    pub name: String,
    pub kind: NumericKind,
}

impl NumericAttribute {
    pub fn new(name: impl Into<String>, kind: NumericKind) -> NumericAttribute {
        NumericAttribute {
            name: name.into(),
            kind,
        }
    }

    pub fn real(name: impl Into<String>) -> NumericAttribute {
        Self::new(name, NumericKind::Real)
    }

    pub fn integer(name: impl Into<String>) -> NumericAttribute {
        Self::new(name, NumericKind::Integer)
    }

    /// Coerces a raw value into the numeric domain of this column.
    pub fn coerce(&self, value: Option<FieldValue<'_>>) -> Result<f64, CoercionError> {
        let Some(value) = value else {
            return Err(CoercionError::Missing {
                field: self.name.clone(),
            });
        };

        match (self.kind, value) {
            (NumericKind::Real, FieldValue::Text(raw)) => raw
                .trim()
                .parse::<f64>()
                .ok()
                .filter(|x| x.is_finite())
                .ok_or_else(|| self.not_a_number(raw)),
            (NumericKind::Integer, FieldValue::Text(raw)) => raw
                .trim()
                .parse::<i64>()
                .map(|n| n as f64)
                .map_err(|_| self.not_an_integer(raw)),
            (NumericKind::Real, FieldValue::Number(x)) if x.is_finite() => Ok(x),
            (NumericKind::Integer, FieldValue::Number(x)) if x.is_finite() && x.fract() == 0.0 => {
                Ok(x)
            }
            (NumericKind::Real, FieldValue::Number(x)) => Err(self.not_a_number(&x.to_string())),
            (NumericKind::Integer, FieldValue::Number(x)) => {
                Err(self.not_an_integer(&x.to_string()))
            }
        }
    }

    fn not_a_number(&self, raw: &str) -> CoercionError {
        CoercionError::NotANumber {
            field: self.name.clone(),
            value: raw.to_string(),
        }
    }

    fn not_an_integer(&self, raw: &str) -> CoercionError {
        CoercionError::NotAnInteger {
            field: self.name.clone(),
            value: raw.to_string(),
        }
    }
}

impl Attribute for NumericAttribute {
    fn name(&self) -> &str {
        &self.name
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn encode_value(&self, value: Option<FieldValue<'_>>) -> Result<f64, FeatureError> {
        Ok(self.coerce(value)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn real_parses_text_and_trims() {
        let price = NumericAttribute::real("ProductPrice");
        assert_eq!(price.coerce(Some(FieldValue::Text(" 980.39 "))).unwrap(), 980.39);
        assert_eq!(price.coerce(Some(FieldValue::Text("12"))).unwrap(), 12.0);
    }

    #[test]
    fn real_rejects_garbage_and_non_finite() {
        let price = NumericAttribute::real("ProductPrice");
        for raw in ["abc", "", "NaN", "inf"] {
            let err = price.coerce(Some(FieldValue::Text(raw))).unwrap_err();
            assert!(
                matches!(err, CoercionError::NotANumber { .. }),
                "raw={raw:?} err={err:?}"
            );
        }
    }

    #[test]
    fn integer_rejects_fractional_text() {
        let age = NumericAttribute::integer("CustomerAge");
        assert_eq!(age.coerce(Some(FieldValue::Text("35"))).unwrap(), 35.0);
        let err = age.coerce(Some(FieldValue::Text("35.5"))).unwrap_err();
        assert_eq!(
            err,
            CoercionError::NotAnInteger {
                field: "CustomerAge".into(),
                value: "35.5".into()
            }
        );
    }

    #[test]
    fn typed_numbers_pass_through() {
        let age = NumericAttribute::integer("CustomerAge");
        assert_eq!(age.coerce(Some(FieldValue::Number(41.0))).unwrap(), 41.0);
        assert!(age.coerce(Some(FieldValue::Number(41.2))).is_err());

        let price = NumericAttribute::real("ProductPrice");
        assert_eq!(price.coerce(Some(FieldValue::Number(3.25))).unwrap(), 3.25);
    }

    #[test]
    fn missing_value_is_reported_with_field_name() {
        let err = NumericAttribute::integer("CustomerGender")
            .coerce(None)
            .unwrap_err();
        assert_eq!(
            err,
            CoercionError::Missing {
                field: "CustomerGender".into()
            }
        );
    }
}
