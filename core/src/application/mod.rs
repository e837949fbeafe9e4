use tracing::{info, warn};

use crate::{
    domain::{
        common::{DishcoveryConfig, entities::app_errors::CoreError, services::Service},
        dish::ports::DishCatalogRepository,
        health::value_objects::ConfiguredSecrets,
    },
    infrastructure::{
        db::postgres::{Postgres, PostgresConfig},
        dish_catalog::{DishCatalog, PostgresDishCatalogRepository, StaticDishCatalog},
        recipe_api::spoonacular_client::SpoonacularClient,
        video::synthesia_client::SynthesiaClient,
        vision::google_vision_client::GoogleVisionClient,
    },
};

pub type DishcoveryService =
    Service<GoogleVisionClient, SpoonacularClient, SynthesiaClient, DishCatalog>;

fn is_set(value: &Option<String>) -> bool {
    value.as_deref().is_some_and(|v| !v.trim().is_empty())
}

impl From<&DishcoveryConfig> for ConfiguredSecrets {
    fn from(config: &DishcoveryConfig) -> Self {
        Self {
            vision: is_set(&config.vision.api_key),
            recipe_api: is_set(&config.recipe_api.api_key),
            video: is_set(&config.video.api_key),
            database: config
                .database
                .as_ref()
                .is_some_and(|db| !db.url.trim().is_empty()),
        }
    }
}

async fn connect_catalog(database_url: &str) -> Result<PostgresDishCatalogRepository, CoreError> {
    let postgres = Postgres::new(PostgresConfig {
        database_url: database_url.to_string(),
    })
    .await?;
    postgres.migrate().await?;

    Ok(PostgresDishCatalogRepository::new(postgres.get_db()))
}

async fn dish_catalog(config: &DishcoveryConfig) -> DishCatalog {
    let Some(database) = config.database.as_ref().filter(|db| !db.url.trim().is_empty()) else {
        info!("No database configured, using the built-in dish catalog");
        return DishCatalog::Static(StaticDishCatalog::default());
    };

    match connect_catalog(&database.url).await {
        Ok(repository) => DishCatalog::Postgres(repository),
        Err(e) => {
            warn!(error = %e, "Database unavailable, using the built-in dish catalog");
            DishCatalog::Static(StaticDishCatalog::default())
        }
    }
}

pub async fn create_service(config: DishcoveryConfig) -> Result<DishcoveryService, anyhow::Error> {
    let secrets = ConfiguredSecrets::from(&config);
    let dish_catalog = dish_catalog(&config).await;

    info!(
        vision = secrets.vision,
        recipe_api = secrets.recipe_api,
        video = secrets.video,
        catalog = dish_catalog.source().as_str(),
        "Dishcovery service initialized"
    );

    Ok(Service::new(
        GoogleVisionClient::new(config.vision),
        SpoonacularClient::new(config.recipe_api),
        SynthesiaClient::new(config.video),
        dish_catalog,
        secrets,
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{
        common::DatabaseConfig,
        health::ports::HealthCheckService,
    };

    #[tokio::test]
    async fn test_create_service_without_database_uses_static_catalog() {
        let mut config = DishcoveryConfig::default();
        config.recipe_api.api_key = Some("key".to_string());
        config.video.api_key = Some("   ".to_string());
        config.database = Some(DatabaseConfig { url: String::new() });

        let service = create_service(config).await.unwrap();

        assert!(matches!(service.dish_catalog, DishCatalog::Static(_)));
        assert!(service.check_secret("RECIPE_GENERATION_API_KEY").unwrap().exists);
        assert!(!service.check_secret("VIDEO_GENERATION_API_KEY").unwrap().exists);
        assert!(!service.check_secret("DATABASE_URL").unwrap().exists);
    }
}
