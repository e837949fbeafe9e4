use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::recipe::entities::Recipe;

#[derive(Debug, Clone)]
pub struct GenerateRecipeInput {
    pub dish_name: String,
    pub cuisine: Option<String>,
}

#[derive(Debug, Clone)]
pub struct FindRecipesByIngredientsInput {
    pub ingredients: Vec<String>,
}

/// Outcome of a recipe generation. `note` is set when the recipe is a fallback.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct GeneratedRecipe {
    pub recipe: Recipe,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct IngredientSearch {
    pub success: bool,
    pub recipes: Vec<Recipe>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// Recipe detail record as returned by the recipe database, before reshaping.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RecipeInformation {
    pub id: u64,
    pub title: String,
    pub summary: Option<String>,
    pub cuisines: Vec<String>,
    pub very_popular: bool,
    pub very_healthy: bool,
    pub ready_in_minutes: Option<u32>,
    pub servings: Option<u32>,
    pub ingredients: Vec<ExtendedIngredient>,
    pub steps: Vec<String>,
    pub image: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ExtendedIngredient {
    pub name: String,
    pub amount: f64,
    pub unit: String,
    pub original: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecipeSearchQuery {
    pub query: String,
    pub cuisine: Option<String>,
}
