//! Test fixtures
//!
//! Factory functions for creating test data with sensible defaults.

use crate::domain::entities::{NewProduct, Product, ProductId};

/// Create a test product with default values
pub fn test_product() -> Product {
    Product {
        id: ProductId(1),
        name: "Mouse".to_string(),
        price: 10.0,
    }
}

/// Create a test product with a specific ID and name
pub fn test_product_with_id(id: i64, name: &str) -> Product {
    Product {
        id: ProductId(id),
        name: name.to_string(),
        price: 10.0 * id as f64,
    }
}

/// Create a create/update payload
pub fn new_product(name: &str, price: f64) -> NewProduct {
    NewProduct {
        name: name.to_string(),
        price,
    }
}
