use futures::future::join_all;
use tracing::{info, warn};

use crate::domain::{
    common::{entities::app_errors::CoreError, services::Service},
    dish::ports::{DishCatalogRepository, VisionClient},
    recipe::{
        entities::Recipe,
        fallback::{FALLBACK_NOTE, fallback_recipe},
        helpers::{RecipeOrigin, recipe_from_information},
        ports::{RecipeApiClient, RecipeService},
        value_objects::{
            FindRecipesByIngredientsInput, GenerateRecipeInput, GeneratedRecipe,
            IngredientSearch, RecipeSearchQuery,
        },
    },
    video::ports::VideoAvatarClient,
};

/// Candidates requested from the ingredient search.
const INGREDIENT_SEARCH_CANDIDATES: u32 = 5;
/// Candidates whose details are fetched and returned.
const INGREDIENT_SEARCH_RESULTS: usize = 3;

impl<V, RA, VA, DC> Service<V, RA, VA, DC>
where
    V: VisionClient,
    RA: RecipeApiClient,
    VA: VideoAvatarClient,
    DC: DishCatalogRepository,
{
    async fn lookup_recipe(&self, dish_name: &str, cuisine: Option<&str>) -> Result<Recipe, CoreError> {
        let recipe_id = self
            .recipe_api_client
            .search_recipe(RecipeSearchQuery {
                query: dish_name.to_string(),
                cuisine: cuisine.map(str::to_string),
            })
            .await?
            .ok_or_else(|| {
                CoreError::ExternalServiceError("No recipes found for this dish".to_string())
            })?;

        let information = self
            .recipe_api_client
            .get_recipe_information(recipe_id)
            .await?;

        Ok(recipe_from_information(
            information,
            RecipeOrigin::DishName { cuisine },
        ))
    }

    async fn search_by_ingredients(&self, ingredients: &[String]) -> Result<Vec<Recipe>, CoreError> {
        let ids = self
            .recipe_api_client
            .find_by_ingredients(ingredients.to_vec(), INGREDIENT_SEARCH_CANDIDATES)
            .await?;

        if ids.is_empty() {
            return Err(CoreError::NotFound);
        }

        let lookups = ids
            .into_iter()
            .take(INGREDIENT_SEARCH_RESULTS)
            .map(|id| async move { (id, self.recipe_api_client.get_recipe_information(id).await) });

        let first_ingredient = ingredients.first().map(String::as_str).unwrap_or_default();

        let recipes: Vec<Recipe> = join_all(lookups)
            .await
            .into_iter()
            .filter_map(|(id, result)| match result {
                Ok(information) => Some(recipe_from_information(
                    information,
                    RecipeOrigin::Ingredients { first_ingredient },
                )),
                Err(e) => {
                    warn!(recipe_id = id, error = %e, "Failed to get recipe details");
                    None
                }
            })
            .collect();

        if recipes.is_empty() {
            return Err(CoreError::ExternalServiceError(
                "Failed to retrieve recipe details".to_string(),
            ));
        }

        Ok(recipes)
    }
}

impl<V, RA, VA, DC> RecipeService for Service<V, RA, VA, DC>
where
    V: VisionClient,
    RA: RecipeApiClient,
    VA: VideoAvatarClient,
    DC: DishCatalogRepository,
{
    async fn generate_recipe(&self, input: GenerateRecipeInput) -> Result<GeneratedRecipe, CoreError> {
        let dish_name = input.dish_name.trim();
        if dish_name.is_empty() {
            return Err(CoreError::Invalid("No dish name provided".to_string()));
        }

        let cuisine = input
            .cuisine
            .as_deref()
            .map(str::trim)
            .filter(|c| !c.is_empty());

        info!(
            dish_name,
            cuisine = cuisine.unwrap_or("International"),
            "Generating recipe"
        );

        match self.lookup_recipe(dish_name, cuisine).await {
            Ok(recipe) => Ok(GeneratedRecipe { recipe, note: None }),
            Err(e) => {
                warn!(error = %e, dish_name, "Recipe lookup failed, using fallback recipe");
                Ok(GeneratedRecipe {
                    recipe: fallback_recipe(dish_name, cuisine),
                    note: Some(FALLBACK_NOTE.to_string()),
                })
            }
        }
    }

    async fn find_recipes_by_ingredients(
        &self,
        input: FindRecipesByIngredientsInput,
    ) -> Result<IngredientSearch, CoreError> {
        let ingredients: Vec<String> = input
            .ingredients
            .iter()
            .map(|i| i.trim().to_string())
            .filter(|i| !i.is_empty())
            .collect();

        if ingredients.is_empty() {
            return Err(CoreError::Invalid(
                "No ingredients provided or invalid format".to_string(),
            ));
        }

        info!(ingredients = %ingredients.join(", "), "Searching recipes by ingredients");

        match self.search_by_ingredients(&ingredients).await {
            Ok(recipes) => Ok(IngredientSearch {
                success: true,
                recipes,
                error: None,
            }),
            Err(e) => {
                let message = match e {
                    CoreError::NotFound => "No recipes found for these ingredients".to_string(),
                    other => other.to_string(),
                };
                warn!(error = %message, "Ingredient search failed");
                Ok(IngredientSearch {
                    success: false,
                    recipes: vec![],
                    error: Some(message),
                })
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{
        common::mocks::{ready, recipe_service},
        recipe::{entities::Difficulty, ports::MockRecipeApiClient, value_objects::RecipeInformation},
    };

    fn information(id: u64, title: &str) -> RecipeInformation {
        RecipeInformation {
            id,
            title: title.to_string(),
            summary: Some(format!("<b>{title}</b> is great. Really.")),
            cuisines: vec!["Italian".to_string()],
            very_popular: true,
            ready_in_minutes: Some(20),
            servings: Some(2),
            steps: vec!["Cook it.".to_string()],
            ..Default::default()
        }
    }

    #[tokio::test]
    async fn test_generate_recipe_reshapes_api_result() {
        let mut api = MockRecipeApiClient::new();
        api.expect_search_recipe()
            .withf(|query| query.query == "lasagna" && query.cuisine.is_none())
            .times(1)
            .returning(|_| ready(Ok(Some(7))));
        api.expect_get_recipe_information()
            .withf(|id| *id == 7)
            .times(1)
            .returning(|id| ready(Ok(information(id, "Lasagna"))));
        let service = recipe_service(api);

        let generated = service
            .generate_recipe(GenerateRecipeInput {
                dish_name: "lasagna".to_string(),
                cuisine: None,
            })
            .await
            .unwrap();

        assert_eq!(generated.note, None);
        assert_eq!(generated.recipe.name, "Lasagna");
        assert_eq!(generated.recipe.description, "Lasagna is great.");
        assert_eq!(generated.recipe.difficulty, Difficulty::Easy);
    }

    #[tokio::test]
    async fn test_generate_recipe_falls_back_when_nothing_found() {
        let mut api = MockRecipeApiClient::new();
        api.expect_search_recipe()
            .withf(|query| query.cuisine.as_deref() == Some("Greek"))
            .returning(|_| ready(Ok(None)));
        api.expect_get_recipe_information().never();
        let service = recipe_service(api);

        let generated = service
            .generate_recipe(GenerateRecipeInput {
                dish_name: "Moussaka".to_string(),
                cuisine: Some("Greek".to_string()),
            })
            .await
            .unwrap();

        assert_eq!(generated.note.as_deref(), Some(FALLBACK_NOTE));
        assert_eq!(generated.recipe.name, "Moussaka");
        assert_eq!(generated.recipe.cuisine, "Greek");
        assert!(!generated.recipe.steps.is_empty());
    }

    #[tokio::test]
    async fn test_generate_recipe_falls_back_on_transport_error() {
        let mut api = MockRecipeApiClient::new();
        api.expect_search_recipe().returning(|_| {
            ready(Err(CoreError::ExternalServiceError(
                "connection refused".to_string(),
            )))
        });
        let service = recipe_service(api);

        let generated = service
            .generate_recipe(GenerateRecipeInput {
                dish_name: "Ramen".to_string(),
                cuisine: None,
            })
            .await
            .unwrap();

        assert_eq!(generated.note.as_deref(), Some(FALLBACK_NOTE));
        assert_eq!(generated.recipe.cuisine, "International");
    }

    #[tokio::test]
    async fn test_generate_recipe_rejects_blank_name() {
        let mut api = MockRecipeApiClient::new();
        api.expect_search_recipe().never();
        let service = recipe_service(api);

        let result = service
            .generate_recipe(GenerateRecipeInput {
                dish_name: "   ".to_string(),
                cuisine: None,
            })
            .await;

        assert!(matches!(result, Err(CoreError::Invalid(_))));
    }

    #[tokio::test]
    async fn test_find_recipes_keeps_successful_lookups_only() {
        let mut api = MockRecipeApiClient::new();
        api.expect_find_by_ingredients()
            .withf(|ingredients, number| {
                ingredients == &["tomato".to_string(), "bread".to_string()] && *number == 5
            })
            .times(1)
            .returning(|_, _| ready(Ok(vec![1, 2, 3, 4])));
        api.expect_get_recipe_information()
            .times(3)
            .returning(|id| match id {
                1 => ready(Ok(information(1, "Tomato Soup"))),
                3 => ready(Ok(information(3, "Bruschetta"))),
                _ => ready(Err(CoreError::ExternalServiceError("boom".to_string()))),
            });
        let service = recipe_service(api);

        let search = service
            .find_recipes_by_ingredients(FindRecipesByIngredientsInput {
                ingredients: vec!["tomato".to_string(), " ".to_string(), "bread".to_string()],
            })
            .await
            .unwrap();

        assert!(search.success);
        let names: Vec<_> = search.recipes.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, vec!["Tomato Soup", "Bruschetta"]);
    }

    #[tokio::test]
    async fn test_find_recipes_accepts_long_ingredient_lists() {
        let ingredients: Vec<String> = (0..25).map(|i| format!("ingredient {i}")).collect();
        let expected = ingredients.clone();

        let mut api = MockRecipeApiClient::new();
        api.expect_find_by_ingredients()
            .withf(move |ingredients, _| ingredients == &expected)
            .returning(|_, _| ready(Ok(vec![9])));
        api.expect_get_recipe_information()
            .returning(|id| ready(Ok(information(id, "Everything Stew"))));
        let service = recipe_service(api);

        let search = service
            .find_recipes_by_ingredients(FindRecipesByIngredientsInput { ingredients })
            .await
            .unwrap();

        assert!(search.success);
        assert_eq!(search.recipes.len(), 1);
    }

    #[tokio::test]
    async fn test_find_recipes_reports_empty_search() {
        let mut api = MockRecipeApiClient::new();
        api.expect_find_by_ingredients()
            .returning(|_, _| ready(Ok(vec![])));
        api.expect_get_recipe_information().never();
        let service = recipe_service(api);

        let search = service
            .find_recipes_by_ingredients(FindRecipesByIngredientsInput {
                ingredients: vec!["durian".to_string()],
            })
            .await
            .unwrap();

        assert!(!search.success);
        assert!(search.recipes.is_empty());
        assert_eq!(
            search.error.as_deref(),
            Some("No recipes found for these ingredients")
        );
    }

    #[tokio::test]
    async fn test_find_recipes_rejects_empty_list() {
        let mut api = MockRecipeApiClient::new();
        api.expect_find_by_ingredients().never();
        let service = recipe_service(api);

        let result = service
            .find_recipes_by_ingredients(FindRecipesByIngredientsInput {
                ingredients: vec!["".to_string()],
            })
            .await;

        assert!(matches!(result, Err(CoreError::Invalid(_))));
    }
}
