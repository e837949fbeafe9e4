use std::future::Future;

use crate::domain::{
    common::entities::app_errors::CoreError,
    recipe::value_objects::{
        FindRecipesByIngredientsInput, GenerateRecipeInput, GeneratedRecipe, IngredientSearch,
        RecipeInformation, RecipeSearchQuery,
    },
};

/// Client trait for the third-party recipe database
#[cfg_attr(test, mockall::automock)]
pub trait RecipeApiClient: Send + Sync {
    /// Returns the id of the best match, if any.
    fn search_recipe(
        &self,
        query: RecipeSearchQuery,
    ) -> impl Future<Output = Result<Option<u64>, CoreError>> + Send;

    fn find_by_ingredients(
        &self,
        ingredients: Vec<String>,
        number: u32,
    ) -> impl Future<Output = Result<Vec<u64>, CoreError>> + Send;

    fn get_recipe_information(
        &self,
        recipe_id: u64,
    ) -> impl Future<Output = Result<RecipeInformation, CoreError>> + Send;
}

/// Service trait for recipe lookup business logic
#[cfg_attr(test, mockall::automock)]
pub trait RecipeService: Send + Sync {
    fn generate_recipe(
        &self,
        input: GenerateRecipeInput,
    ) -> impl Future<Output = Result<GeneratedRecipe, CoreError>> + Send;

    fn find_recipes_by_ingredients(
        &self,
        input: FindRecipesByIngredientsInput,
    ) -> impl Future<Output = Result<IngredientSearch, CoreError>> + Send;
}
