use crate::domain::{
    dish::ports::{DishCatalogRepository, VisionClient},
    health::value_objects::ConfiguredSecrets,
    recipe::ports::RecipeApiClient,
    video::ports::VideoAvatarClient,
};

/// Aggregates the outbound adapters every domain service is implemented on.
#[derive(Clone)]
pub struct Service<V, RA, VA, DC>
where
    V: VisionClient,
    RA: RecipeApiClient,
    VA: VideoAvatarClient,
    DC: DishCatalogRepository,
{
    pub(crate) vision_client: V,
    pub(crate) recipe_api_client: RA,
    pub(crate) video_client: VA,
    pub(crate) dish_catalog: DC,
    pub(crate) secrets: ConfiguredSecrets,
}

impl<V, RA, VA, DC> Service<V, RA, VA, DC>
where
    V: VisionClient,
    RA: RecipeApiClient,
    VA: VideoAvatarClient,
    DC: DishCatalogRepository,
{
    pub fn new(
        vision_client: V,
        recipe_api_client: RA,
        video_client: VA,
        dish_catalog: DC,
        secrets: ConfiguredSecrets,
    ) -> Self {
        Self {
            vision_client,
            recipe_api_client,
            video_client,
            dish_catalog,
            secrets,
        }
    }
}
