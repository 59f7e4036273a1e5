//! Product domain entity

use serde::{Deserialize, Serialize};

/// Store-assigned identifier for a product
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProductId(pub i64);

impl From<i64> for ProductId {
    fn from(id: i64) -> Self {
        Self(id)
    }
}

impl std::fmt::Display for ProductId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A product as persisted by the store
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Product {
    pub id: ProductId,
    #[serde(rename = "nombre")]
    pub name: String,
    #[serde(rename = "precio")]
    pub price: f64,
}

impl Product {
    /// Overwrite the mutable fields, keeping the id
    pub fn apply(&mut self, changes: NewProduct) {
        self.name = changes.name;
        self.price = changes.price;
    }
}

/// Product fields supplied by clients on create and update.
///
/// Any `id` in the payload is ignored; the store owns identifiers.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct NewProduct {
    #[serde(rename = "nombre")]
    pub name: String,
    #[serde(rename = "precio")]
    pub price: f64,
}
