use utoipa::OpenApi;

use crate::application::http::{
    dish::router::DishApiDoc, health::router::HealthApiDoc, recipe::router::RecipeApiDoc,
    secrets::router::SecretsApiDoc, video::router::VideoApiDoc,
};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Dishcovery API"
    ),
    nest(
        (path = "/dishes", api = DishApiDoc),
        (path = "/recipes", api = RecipeApiDoc),
        (path = "/videos", api = VideoApiDoc),
        (path = "/secrets", api = SecretsApiDoc),
        (path = "/health", api = HealthApiDoc),
    )
)]
pub struct ApiDoc;
