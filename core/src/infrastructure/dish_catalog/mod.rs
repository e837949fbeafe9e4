pub mod postgres_repository;
pub mod static_catalog;

use crate::domain::{
    common::entities::app_errors::CoreError,
    dish::{entities::DishCatalogEntry, ports::DishCatalogRepository, value_objects::CatalogSource},
};

pub use postgres_repository::PostgresDishCatalogRepository;
pub use static_catalog::StaticDishCatalog;

/// Catalog backend selected at startup.
#[derive(Debug, Clone)]
pub enum DishCatalog {
    Postgres(PostgresDishCatalogRepository),
    Static(StaticDishCatalog),
}

impl DishCatalogRepository for DishCatalog {
    async fn fetch_entries(&self) -> Result<Vec<DishCatalogEntry>, CoreError> {
        match self {
            DishCatalog::Postgres(repository) => repository.fetch_entries().await,
            DishCatalog::Static(catalog) => catalog.fetch_entries().await,
        }
    }

    fn source(&self) -> CatalogSource {
        match self {
            DishCatalog::Postgres(repository) => repository.source(),
            DishCatalog::Static(catalog) => catalog.source(),
        }
    }
}
