//! Product service
//!
//! The five product use cases: list, create, get, update and delete.

use std::sync::Arc;

use crate::domain::entities::{NewProduct, Product, ProductId};
use crate::domain::ports::ProductRepository;
use crate::error::{AppError, DomainError};

/// Service for managing products
pub struct ProductService<PR>
where
    PR: ProductRepository,
{
    products: Arc<PR>,
}

impl<PR> ProductService<PR>
where
    PR: ProductRepository,
{
    pub fn new(products: Arc<PR>) -> Self {
        Self { products }
    }

    /// List every product in store order
    pub async fn list(&self) -> Result<Vec<Product>, AppError> {
        Ok(self.products.find_all().await?)
    }

    /// Persist a new product; the store assigns its ID
    pub async fn create(&self, input: NewProduct) -> Result<Product, AppError> {
        let product = self.products.create(&input).await?;
        tracing::info!(product_id = %product.id, "Created product");
        Ok(product)
    }

    /// Get a product by ID, failing with NotFound if it is absent
    pub async fn get_by_id(&self, id: ProductId) -> Result<Product, AppError> {
        Ok(self.find_existing(&id).await?)
    }

    /// Overwrite name and price of an existing product
    ///
    /// Read-then-write with no concurrency control: the last writer wins.
    pub async fn update(&self, id: ProductId, changes: NewProduct) -> Result<Product, AppError> {
        let mut product = self.find_existing(&id).await?;
        product.apply(changes);

        let product = self.products.save(&product).await?;
        tracing::info!(product_id = %product.id, "Updated product");
        Ok(product)
    }

    /// Delete a product and return a confirmation message
    pub async fn delete(&self, id: ProductId) -> Result<String, AppError> {
        let product = self.find_existing(&id).await?;
        self.products.delete(&product).await?;

        tracing::info!(product_id = %id, "Deleted product");
        Ok(format!("Producto con el ID {} eliminado correctamente.", id))
    }

    async fn find_existing(&self, id: &ProductId) -> Result<Product, DomainError> {
        self.products
            .find_by_id(id)
            .await?
            .ok_or_else(|| DomainError::product_not_found(id))
    }
}
