use serde::Serialize;
use strum::IntoEnumIterator;
use strum_macros::{Display, EnumIter, IntoStaticStr};

/// Semantic label of the two classes; declaration order is the class index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumIter, IntoStaticStr, Serialize)]
pub enum PurchaseIntent {
    #[strum(serialize = "No Purchase")]
    #[serde(rename = "No Purchase")]
    NoPurchase,
    #[strum(serialize = "Purchase")]
    Purchase,
}

impl PurchaseIntent {
    pub fn from_class_index(index: usize) -> Option<Self> {
        Self::iter().nth(index)
    }

    pub fn from_label(label: bool) -> Self {
        if label { Self::Purchase } else { Self::NoPurchase }
    }

    pub fn class_index(self) -> usize {
        self as usize
    }

    pub fn label(self) -> &'static str {
        self.into()
    }

    /// Class attribute values, in class-index order.
    pub fn class_labels() -> Vec<String> {
        Self::iter().map(|intent| intent.label().to_string()).collect()
    }
}
