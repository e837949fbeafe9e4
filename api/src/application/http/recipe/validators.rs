use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

#[derive(Debug, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct GenerateRecipeValidator {
    #[validate(length(min = 1, message = "No dish name provided"))]
    #[serde(default)]
    pub dish_name: String,

    #[serde(default)]
    pub cuisine: Option<String>,
}

#[derive(Debug, Serialize, Deserialize, Validate, ToSchema)]
pub struct SearchByIngredientsValidator {
    #[validate(length(min = 1, message = "No ingredients provided"))]
    #[serde(default)]
    pub ingredients: Vec<String>,
}
