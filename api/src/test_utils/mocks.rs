//! Mock implementations of port traits
//!
//! These are in-memory implementations that can be configured for testing.
//! They store data in memory and allow tests to verify behavior.

use async_trait::async_trait;
use std::collections::BTreeMap;
use std::sync::{Arc, RwLock};

use crate::domain::entities::{NewProduct, Product, ProductId};
use crate::domain::ports::ProductRepository;
use crate::error::DomainError;

// ============================================================================
// In-Memory Product Repository
// ============================================================================

/// Keyed by ID so `find_all` returns products in insertion order.
/// IDs are assigned sequentially starting at 1, like a serial column.
#[derive(Default)]
pub struct InMemoryProductRepository {
    products: Arc<RwLock<BTreeMap<ProductId, Product>>>,
    last_id: Arc<RwLock<i64>>,
    should_fail: bool,
}

impl InMemoryProductRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Every call fails with a database error
    pub fn failing() -> Self {
        Self {
            should_fail: true,
            ..Self::default()
        }
    }

    /// Pre-populate with a product for testing
    pub fn with_product(self, product: Product) -> Self {
        {
            let mut products = self.products.write().unwrap();
            let mut last_id = self.last_id.write().unwrap();
            *last_id = (*last_id).max(product.id.0);
            products.insert(product.id, product);
        }
        self
    }

    /// Number of stored products
    pub fn len(&self) -> usize {
        self.products.read().unwrap().len()
    }

    fn check_available(&self) -> Result<(), DomainError> {
        if self.should_fail {
            Err(DomainError::Database("connection refused".to_string()))
        } else {
            Ok(())
        }
    }
}

#[async_trait]
impl ProductRepository for InMemoryProductRepository {
    async fn find_all(&self) -> Result<Vec<Product>, DomainError> {
        self.check_available()?;
        let products = self.products.read().unwrap();
        Ok(products.values().cloned().collect())
    }

    async fn find_by_id(&self, id: &ProductId) -> Result<Option<Product>, DomainError> {
        self.check_available()?;
        let products = self.products.read().unwrap();
        Ok(products.get(id).cloned())
    }

    async fn create(&self, new_product: &NewProduct) -> Result<Product, DomainError> {
        self.check_available()?;
        let mut products = self.products.write().unwrap();
        let mut last_id = self.last_id.write().unwrap();

        *last_id += 1;
        let product = Product {
            id: ProductId(*last_id),
            name: new_product.name.clone(),
            price: new_product.price,
        };
        products.insert(product.id, product.clone());

        Ok(product)
    }

    async fn save(&self, product: &Product) -> Result<Product, DomainError> {
        self.check_available()?;
        let mut products = self.products.write().unwrap();
        match products.get_mut(&product.id) {
            Some(stored) => {
                *stored = product.clone();
                Ok(product.clone())
            }
            None => Err(DomainError::product_not_found(&product.id)),
        }
    }

    async fn delete(&self, product: &Product) -> Result<(), DomainError> {
        self.check_available()?;
        let mut products = self.products.write().unwrap();
        products
            .remove(&product.id)
            .map(|_| ())
            .ok_or_else(|| DomainError::product_not_found(&product.id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{new_product, test_product_with_id};

    #[tokio::test]
    async fn assigns_ids_after_seeded_products() {
        let repo = InMemoryProductRepository::new().with_product(test_product_with_id(7, "Seed"));

        let created = repo.create(&new_product("Nuevo", 1.0)).await.unwrap();

        assert_eq!(created.id, ProductId(8));
        assert_eq!(repo.len(), 2);
    }

    #[tokio::test]
    async fn save_unknown_product_is_not_found() {
        let repo = InMemoryProductRepository::new();

        let result = repo.save(&test_product_with_id(3, "Ghost")).await;

        assert!(matches!(result, Err(DomainError::NotFound(_))));
    }
}
