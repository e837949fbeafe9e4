use axum::extract::State;
use dishcovery_core::domain::recipe::{
    ports::RecipeService,
    value_objects::{FindRecipesByIngredientsInput, IngredientSearch},
};

use crate::application::http::{
    recipe::validators::SearchByIngredientsValidator,
    server::{
        api_entities::{
            api_error::{ApiError, ValidateJson},
            response::Response,
        },
        app_state::AppState,
    },
};

#[utoipa::path(
    post,
    path = "/search-by-ingredients",
    tag = "recipe",
    summary = "Find recipes from ingredients",
    description = "Returns up to three recipes that use the given ingredients. `success` is false with an empty list when nothing could be found.",
    request_body = SearchByIngredientsValidator,
    responses(
        (status = 200, body = IngredientSearch),
        (status = 400, description = "Empty ingredient list")
    ),
)]
pub async fn search_by_ingredients(
    State(state): State<AppState>,
    ValidateJson(payload): ValidateJson<SearchByIngredientsValidator>,
) -> Result<Response<IngredientSearch>, ApiError> {
    let search = state
        .service
        .find_recipes_by_ingredients(FindRecipesByIngredientsInput {
            ingredients: payload.ingredients,
        })
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(search))
}
