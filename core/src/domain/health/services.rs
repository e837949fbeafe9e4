use tracing::warn;

use crate::domain::{
    common::{entities::app_errors::CoreError, services::Service},
    dish::ports::{DishCatalogRepository, VisionClient},
    health::{
        entities::{CatalogStatus, ReadinessStatus, SecretStatus},
        ports::HealthCheckService,
    },
    recipe::ports::RecipeApiClient,
    video::ports::VideoAvatarClient,
};

impl<V, RA, VA, DC> HealthCheckService for Service<V, RA, VA, DC>
where
    V: VisionClient,
    RA: RecipeApiClient,
    VA: VideoAvatarClient,
    DC: DishCatalogRepository,
{
    fn check_secret(&self, name: &str) -> Result<SecretStatus, CoreError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(CoreError::Invalid("No secret name provided".to_string()));
        }

        let exists = self.secrets.lookup(name).unwrap_or(false);
        let message = if exists {
            format!("{name} is configured")
        } else {
            format!("{name} is not configured")
        };

        Ok(SecretStatus { exists, message })
    }

    async fn readiness(&self) -> Result<ReadinessStatus, CoreError> {
        let dish_catalog = match self.dish_catalog.fetch_entries().await {
            Ok(entries) => CatalogStatus {
                source: self.dish_catalog.source().as_str().to_string(),
                reachable: true,
                entries: entries.len(),
            },
            Err(e) => {
                warn!(error = %e, "Dish catalog is not reachable");
                CatalogStatus {
                    source: self.dish_catalog.source().as_str().to_string(),
                    reachable: false,
                    entries: 0,
                }
            }
        };

        Ok(ReadinessStatus {
            vision_configured: self.secrets.vision,
            recipe_api_configured: self.secrets.recipe_api,
            video_configured: self.secrets.video,
            dish_catalog,
        })
    }
}
