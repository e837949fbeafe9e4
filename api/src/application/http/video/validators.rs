use dishcovery_core::domain::recipe::entities::Recipe;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::{Validate, ValidationError};

fn validate_recipe(recipe: &Recipe) -> Result<(), ValidationError> {
    if recipe.name.trim().is_empty() {
        return Err(ValidationError::new("recipe").with_message("No recipe provided".into()));
    }
    Ok(())
}

#[derive(Debug, Serialize, Deserialize, Validate, ToSchema)]
pub struct GenerateVideoValidator {
    #[validate(custom(function = "validate_recipe"))]
    pub recipe: Recipe,
}
