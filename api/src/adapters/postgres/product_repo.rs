//! PostgreSQL adapter for ProductRepository

use async_trait::async_trait;
use sea_orm::{
    ActiveModelTrait,
    ActiveValue::{NotSet, Set, Unchanged},
    DatabaseConnection, DbErr, EntityTrait, QueryOrder,
};

use crate::domain::entities::{NewProduct, Product, ProductId};
use crate::domain::ports::ProductRepository;
use crate::entity::productos;
use crate::error::DomainError;

/// PostgreSQL implementation of ProductRepository
pub struct PostgresProductRepository {
    db: DatabaseConnection,
}

impl PostgresProductRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl ProductRepository for PostgresProductRepository {
    async fn find_all(&self) -> Result<Vec<Product>, DomainError> {
        let results = productos::Entity::find()
            .order_by_asc(productos::Column::Id)
            .all(&self.db)
            .await
            .map_err(|e| DomainError::Database(e.to_string()))?;

        Ok(results.into_iter().map(|m| m.into()).collect())
    }

    async fn find_by_id(&self, id: &ProductId) -> Result<Option<Product>, DomainError> {
        let result = productos::Entity::find_by_id(id.0)
            .one(&self.db)
            .await
            .map_err(|e| DomainError::Database(e.to_string()))?;

        Ok(result.map(|m| m.into()))
    }

    async fn create(&self, product: &NewProduct) -> Result<Product, DomainError> {
        let model = productos::ActiveModel {
            id: NotSet,
            nombre: Set(product.name.clone()),
            precio: Set(product.price),
        };

        let result = model
            .insert(&self.db)
            .await
            .map_err(|e| DomainError::Database(e.to_string()))?;

        Ok(result.into())
    }

    async fn save(&self, product: &Product) -> Result<Product, DomainError> {
        let model = productos::ActiveModel {
            id: Unchanged(product.id.0),
            nombre: Set(product.name.clone()),
            precio: Set(product.price),
        };

        // The row may have been deleted between the caller's read and this write.
        let result = model.update(&self.db).await.map_err(|e| match e {
            DbErr::RecordNotUpdated => DomainError::product_not_found(&product.id),
            e => DomainError::Database(e.to_string()),
        })?;

        Ok(result.into())
    }

    async fn delete(&self, product: &Product) -> Result<(), DomainError> {
        let result = productos::Entity::delete_by_id(product.id.0)
            .exec(&self.db)
            .await
            .map_err(|e| DomainError::Database(e.to_string()))?;

        if result.rows_affected == 0 {
            return Err(DomainError::product_not_found(&product.id));
        }

        Ok(())
    }
}

/// Convert SeaORM model to domain entity
impl From<productos::Model> for Product {
    fn from(model: productos::Model) -> Self {
        Product {
            id: ProductId(model.id),
            name: model.nombre,
            price: model.precio,
        }
    }
}
