//! Repository port traits
//!
//! These traits define the interface for data persistence.
//! Implementations are provided by adapters (e.g., PostgreSQL).

use async_trait::async_trait;

use crate::domain::entities::{NewProduct, Product, ProductId};
use crate::error::DomainError;

/// Repository for Product entities
#[async_trait]
pub trait ProductRepository: Send + Sync {
    /// All products, in the order the store returns them
    async fn find_all(&self) -> Result<Vec<Product>, DomainError>;

    /// Find a product by ID
    async fn find_by_id(&self, id: &ProductId) -> Result<Option<Product>, DomainError>;

    /// Insert a new product; the store assigns its ID
    async fn create(&self, product: &NewProduct) -> Result<Product, DomainError>;

    /// Persist every field of an existing product
    async fn save(&self, product: &Product) -> Result<Product, DomainError>;

    /// Remove a product
    async fn delete(&self, product: &Product) -> Result<(), DomainError>;
}
