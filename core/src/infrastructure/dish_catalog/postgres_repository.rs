use sea_orm::{DatabaseConnection, DbBackend, FromQueryResult, Statement};
use tracing::error;

use crate::domain::{
    common::entities::app_errors::CoreError,
    dish::{entities::DishCatalogEntry, ports::DishCatalogRepository, value_objects::CatalogSource},
};

const SELECT_ENTRIES: &str = "SELECT name, cuisine, keywords FROM dish_catalog ORDER BY name";

#[derive(Debug, FromQueryResult)]
struct DishCatalogRow {
    name: String,
    cuisine: Option<String>,
    keywords: Option<serde_json::Value>,
}

impl From<DishCatalogRow> for DishCatalogEntry {
    fn from(row: DishCatalogRow) -> Self {
        let keywords = row
            .keywords
            .and_then(|value| serde_json::from_value::<Vec<String>>(value).ok())
            .unwrap_or_default();

        Self {
            name: row.name,
            cuisine: row.cuisine.unwrap_or_else(|| "International".to_string()),
            keywords,
        }
    }
}

#[derive(Debug, Clone)]
pub struct PostgresDishCatalogRepository {
    pub db: DatabaseConnection,
}

impl PostgresDishCatalogRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

impl DishCatalogRepository for PostgresDishCatalogRepository {
    async fn fetch_entries(&self) -> Result<Vec<DishCatalogEntry>, CoreError> {
        let rows = DishCatalogRow::find_by_statement(Statement::from_string(
            DbBackend::Postgres,
            SELECT_ENTRIES,
        ))
        .all(&self.db)
        .await
        .map_err(|e| {
            error!("Failed to fetch dish catalog: {}", e);
            CoreError::DatabaseError(e.to_string())
        })?;

        Ok(rows.into_iter().map(DishCatalogEntry::from).collect())
    }

    fn source(&self) -> CatalogSource {
        CatalogSource::Postgres
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_row_keywords_are_decoded() {
        let entry = DishCatalogEntry::from(DishCatalogRow {
            name: "Paella".to_string(),
            cuisine: Some("Spanish".to_string()),
            keywords: Some(serde_json::json!(["saffron", "rice"])),
        });

        assert_eq!(entry.keywords, vec!["saffron", "rice"]);
    }

    #[test]
    fn test_malformed_keywords_are_dropped() {
        let entry = DishCatalogEntry::from(DishCatalogRow {
            name: "Paella".to_string(),
            cuisine: None,
            keywords: Some(serde_json::json!({"not": "a list"})),
        });

        assert!(entry.keywords.is_empty());
        assert_eq!(entry.cuisine, "International");
    }
}
