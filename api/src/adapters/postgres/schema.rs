//! Table bootstrap
//!
//! Creates the tables backing the SeaORM entities when they are missing.
//! Existing tables are left untouched; there is no migration history.

use sea_orm::{ConnectionTrait, DatabaseConnection, DbErr, Schema};

use crate::entity::productos;

/// Create the `productos` table if it does not exist yet
pub async fn ensure_schema(db: &DatabaseConnection) -> Result<(), DbErr> {
    let backend = db.get_database_backend();
    let schema = Schema::new(backend);

    let mut table = schema.create_table_from_entity(productos::Entity);
    table.if_not_exists();

    db.execute(backend.build(&table)).await?;
    tracing::debug!("Ensured table productos exists");

    Ok(())
}
