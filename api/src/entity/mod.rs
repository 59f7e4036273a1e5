//! SeaORM entities
//!
//! Database row models. Domain types live in `domain::entities`.

pub mod productos;
