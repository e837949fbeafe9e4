use tracing::{debug, info, warn};

use crate::domain::{
    common::{entities::app_errors::CoreError, services::Service},
    dish::{
        entities::DishAnalysis,
        fallback::mock_dish_analysis,
        heuristics::{apply_catalog_match, best_catalog_match, identify},
        ports::{DishAnalysisService, DishCatalogRepository, VisionClient},
        value_objects::IdentifyDishInput,
    },
    recipe::ports::RecipeApiClient,
    video::ports::VideoAvatarClient,
};

impl<V, RA, VA, DC> DishAnalysisService for Service<V, RA, VA, DC>
where
    V: VisionClient,
    RA: RecipeApiClient,
    VA: VideoAvatarClient,
    DC: DishCatalogRepository,
{
    async fn identify_dish(&self, input: IdentifyDishInput) -> Result<DishAnalysis, CoreError> {
        if input.image_data.is_empty() {
            return Err(CoreError::Invalid("No image file provided".to_string()));
        }

        info!(
            size_kb = %format!("{:.2}", input.image_data.len() as f64 / 1024.0),
            mime_type = input.mime_type.as_deref().unwrap_or("unknown"),
            "Identifying dish from image"
        );

        let annotations = match self.vision_client.annotate(input.image_data).await {
            Ok(annotations) => annotations,
            Err(e) => {
                warn!(error = %e, "Vision analysis failed, using mock dish data");
                return Ok(mock_dish_analysis());
            }
        };

        debug!(
            labels = ?annotations.labels.iter().take(3).map(|l| &l.description).collect::<Vec<_>>(),
            web_entities = ?annotations.web_entities.iter().take(3).map(|e| &e.description).collect::<Vec<_>>(),
            best_guess = ?annotations.best_guess_labels,
            "Vision annotations received"
        );

        let mut analysis = identify(&annotations);

        match self.dish_catalog.fetch_entries().await {
            Ok(entries) => match best_catalog_match(&annotations, &entries) {
                Some(catalog_match) => {
                    debug!(
                        entry = %catalog_match.entry.name,
                        score = catalog_match.score,
                        "Dish catalog match"
                    );
                    apply_catalog_match(&mut analysis, &catalog_match);
                }
                None => analysis.database_match = Some(false),
            },
            Err(e) => {
                warn!(
                    error = %e,
                    source = self.dish_catalog.source().as_str(),
                    "Dish catalog unavailable, keeping vision guess"
                );
            }
        }

        info!(
            dish_name = %analysis.dish_name,
            cuisine = %analysis.cuisine,
            confidence = analysis.confidence,
            alternatives = ?analysis.alternatives,
            "Dish identified"
        );

        Ok(analysis)
    }
}
