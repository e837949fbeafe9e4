//! Service wiring over the generated port mocks.

use std::{future::Future, pin::Pin};

use crate::domain::{
    common::services::Service,
    dish::ports::{MockDishCatalogRepository, MockVisionClient},
    health::value_objects::ConfiguredSecrets,
    recipe::ports::MockRecipeApiClient,
    video::ports::MockVideoAvatarClient,
};

pub type MockService = Service<
    MockVisionClient,
    MockRecipeApiClient,
    MockVideoAvatarClient,
    MockDishCatalogRepository,
>;

/// Boxed future in the shape the mocked `impl Future` ports expect.
pub fn ready<T: Send + 'static>(value: T) -> Pin<Box<dyn Future<Output = T> + Send>> {
    Box::pin(async move { value })
}

/// Collaborators without expectations panic when called.
pub fn mock_service(
    vision_client: MockVisionClient,
    recipe_api_client: MockRecipeApiClient,
    video_client: MockVideoAvatarClient,
    dish_catalog: MockDishCatalogRepository,
) -> MockService {
    Service::new(
        vision_client,
        recipe_api_client,
        video_client,
        dish_catalog,
        ConfiguredSecrets::default(),
    )
}

pub fn recipe_service(recipe_api_client: MockRecipeApiClient) -> MockService {
    mock_service(
        MockVisionClient::new(),
        recipe_api_client,
        MockVideoAvatarClient::new(),
        MockDishCatalogRepository::new(),
    )
}

pub fn dish_service(
    vision_client: MockVisionClient,
    dish_catalog: MockDishCatalogRepository,
) -> MockService {
    mock_service(
        vision_client,
        MockRecipeApiClient::new(),
        MockVideoAvatarClient::new(),
        dish_catalog,
    )
}

pub fn video_service(video_client: MockVideoAvatarClient) -> MockService {
    mock_service(
        MockVisionClient::new(),
        MockRecipeApiClient::new(),
        video_client,
        MockDishCatalogRepository::new(),
    )
}
