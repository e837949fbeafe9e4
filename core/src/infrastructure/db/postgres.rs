use std::time::Duration;

use sea_orm::{ConnectOptions, Database, DatabaseConnection};
use tracing::info;

use crate::domain::common::entities::app_errors::CoreError;

#[derive(Debug, Clone)]
pub struct PostgresConfig {
    pub database_url: String,
}

#[derive(Debug, Clone)]
pub struct Postgres {
    db: DatabaseConnection,
}

impl Postgres {
    pub async fn new(config: PostgresConfig) -> Result<Self, CoreError> {
        let mut options = ConnectOptions::new(config.database_url);
        options
            .max_connections(5)
            .connect_timeout(Duration::from_secs(5))
            .sqlx_logging(false);

        let db = Database::connect(options).await.map_err(|e| {
            tracing::error!("Failed to connect to database: {}", e);
            CoreError::DatabaseError(e.to_string())
        })?;

        info!("Connected to dish catalog database");
        Ok(Self { db })
    }

    /// Applies the SQL files under `core/migrations` that have not run yet.
    pub async fn migrate(&self) -> Result<(), CoreError> {
        sqlx::migrate!("./migrations")
            .run(self.db.get_postgres_connection_pool())
            .await
            .map_err(|e| {
                tracing::error!("Failed to run database migrations: {}", e);
                CoreError::DatabaseError(e.to_string())
            })?;

        info!("Database migrations applied");
        Ok(())
    }

    pub fn get_db(&self) -> DatabaseConnection {
        self.db.clone()
    }
}

#[cfg(test)]
mod tests {
    #[test]
    fn test_dish_catalog_migration_is_embedded() {
        let migrator = sqlx::migrate!("./migrations");

        assert!(
            migrator
                .iter()
                .any(|migration| migration.description == "create dish catalog")
        );
    }
}
