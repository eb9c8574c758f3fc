use crate::core::attributes::{AttributeRef, NominalAttribute, NumericAttribute};
use std::sync::Arc;
use strum::IntoEnumIterator;
use strum_macros::{Display, EnumCount, EnumIter, IntoStaticStr};

/// The feature columns, in the order the classifier sees them.
///
/// Declaration order is the canonical column order: every feature vector,
/// at training time and at request time, is laid out by iterating this enum.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumIter, EnumCount, IntoStaticStr)]
pub enum FeatureColumn {
    ProductCategory,
    ProductBrand,
    ProductPrice,
    CustomerAge,
    CustomerGender,
    PurchaseFrequency,
    CustomerSatisfaction,
}

pub const FEATURE_COUNT: usize = <FeatureColumn as strum::EnumCount>::COUNT;

pub const CLASS_ATTRIBUTE_NAME: &str = "PurchaseIntent";

impl FeatureColumn {
    pub fn index(self) -> usize {
        self as usize
    }

    pub fn name(self) -> &'static str {
        self.into()
    }
}

pub struct InstanceHeader {
    pub attributes: Vec<AttributeRef>,
    pub class_index: usize,
}

impl InstanceHeader {
    pub fn new(attributes: Vec<AttributeRef>, class_index: usize) -> InstanceHeader {
        InstanceHeader {
            attributes,
            class_index,
        }
    }

    /// Builds the purchase-intent schema around the two fitted encoders.
    ///
    /// Attributes `0..FEATURE_COUNT` follow [`FeatureColumn`] order and the
    /// class attribute comes last.
    pub fn purchase_intent(
        category: NominalAttribute,
        brand: NominalAttribute,
        class_labels: Vec<String>,
    ) -> InstanceHeader {
        let category: AttributeRef = Arc::new(category);
        let brand: AttributeRef = Arc::new(brand);

        let mut attributes: Vec<AttributeRef> = FeatureColumn::iter()
            .map(|column| -> AttributeRef {
                match column {
                    FeatureColumn::ProductCategory => Arc::clone(&category),
                    FeatureColumn::ProductBrand => Arc::clone(&brand),
                    FeatureColumn::ProductPrice => Arc::new(NumericAttribute::real(column.name())),
                    FeatureColumn::CustomerAge
                    | FeatureColumn::CustomerGender
                    | FeatureColumn::PurchaseFrequency
                    | FeatureColumn::CustomerSatisfaction => {
                        Arc::new(NumericAttribute::integer(column.name()))
                    }
                }
            })
            .collect();

        attributes.push(Arc::new(NominalAttribute::with_values(
            CLASS_ATTRIBUTE_NAME.to_string(),
            class_labels,
        )));

        InstanceHeader::new(attributes, FEATURE_COUNT)
    }

    pub fn number_of_attributes(&self) -> usize {
        self.attributes.len()
    }

    /// Number of non-class attributes.
    pub fn number_of_features(&self) -> usize {
        self.attributes.len().saturating_sub(1)
    }

    pub fn class_index(&self) -> usize {
        self.class_index
    }

    pub fn attribute_at_index(&self, index: usize) -> Option<&AttributeRef> {
        self.attributes.get(index)
    }

    /// Feature attributes in schema order, class attribute excluded.
    pub fn feature_attributes(&self) -> impl Iterator<Item = (usize, &AttributeRef)> {
        self.attributes
            .iter()
            .enumerate()
            .filter(move |(i, _)| *i != self.class_index)
    }

    pub fn nominal_attribute(&self, index: usize) -> Option<&NominalAttribute> {
        self.attributes
            .get(index)?
            .as_any()
            .downcast_ref::<NominalAttribute>()
    }

    pub fn class_attribute(&self) -> Option<&NominalAttribute> {
        self.nominal_attribute(self.class_index)
    }

    pub fn number_of_classes(&self) -> usize {
        self.class_attribute()
            .map_or(0, NominalAttribute::number_of_values)
    }
}
