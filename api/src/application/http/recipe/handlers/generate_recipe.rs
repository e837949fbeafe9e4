use axum::extract::State;
use dishcovery_core::domain::recipe::{
    entities::Recipe, ports::RecipeService, value_objects::GenerateRecipeInput,
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::application::http::{
    recipe::validators::GenerateRecipeValidator,
    server::{
        api_entities::{
            api_error::{ApiError, ValidateJson},
            response::Response,
        },
        app_state::AppState,
    },
};

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct GenerateRecipeResponse {
    pub success: bool,
    pub recipe: Recipe,
    /// Present when the recipe is a fallback.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}

#[utoipa::path(
    post,
    path = "/generate",
    tag = "recipe",
    summary = "Generate a recipe from a dish name",
    description = "Looks the dish up in the recipe database and reshapes the best match. Falls back to a generic recipe when the lookup fails.",
    request_body = GenerateRecipeValidator,
    responses(
        (status = 200, body = GenerateRecipeResponse),
        (status = 400, description = "Empty dish name")
    ),
)]
pub async fn generate_recipe(
    State(state): State<AppState>,
    ValidateJson(payload): ValidateJson<GenerateRecipeValidator>,
) -> Result<Response<GenerateRecipeResponse>, ApiError> {
    let generated = state
        .service
        .generate_recipe(GenerateRecipeInput {
            dish_name: payload.dish_name,
            cuisine: payload.cuisine,
        })
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(GenerateRecipeResponse {
        success: true,
        recipe: generated.recipe,
        note: generated.note,
    }))
}
