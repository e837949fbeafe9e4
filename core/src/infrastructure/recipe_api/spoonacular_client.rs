use reqwest::{Client, RequestBuilder};
use serde::{Deserialize, de::DeserializeOwned};

use crate::domain::{
    common::{RecipeApiConfig, entities::app_errors::CoreError},
    recipe::{
        ports::RecipeApiClient,
        value_objects::{ExtendedIngredient, RecipeInformation, RecipeSearchQuery},
    },
};

/// Ranking mode that maximizes used ingredients.
const RANKING_MAXIMIZE_USED: &str = "1";

#[derive(Debug, Clone)]
pub struct SpoonacularClient {
    api_key: Option<String>,
    base_url: String,
    client: Client,
}

#[derive(Debug, Deserialize)]
struct ComplexSearchResponse {
    #[serde(default)]
    results: Vec<RecipeSummary>,
}

#[derive(Debug, Deserialize)]
struct RecipeSummary {
    id: u64,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct InformationResponse {
    id: u64,
    #[serde(default)]
    title: String,
    #[serde(default)]
    summary: Option<String>,
    #[serde(default)]
    cuisines: Vec<String>,
    #[serde(default)]
    very_popular: bool,
    #[serde(default)]
    very_healthy: bool,
    #[serde(default)]
    ready_in_minutes: Option<u32>,
    #[serde(default)]
    servings: Option<u32>,
    #[serde(default)]
    extended_ingredients: Vec<ExtendedIngredientResponse>,
    #[serde(default)]
    analyzed_instructions: Vec<InstructionBlock>,
    #[serde(default)]
    image: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ExtendedIngredientResponse {
    #[serde(default)]
    name: String,
    #[serde(default)]
    amount: f64,
    #[serde(default)]
    unit: String,
    #[serde(default)]
    original: Option<String>,
}

#[derive(Debug, Deserialize)]
struct InstructionBlock {
    #[serde(default)]
    steps: Vec<InstructionStep>,
}

#[derive(Debug, Deserialize)]
struct InstructionStep {
    step: String,
}

impl From<InformationResponse> for RecipeInformation {
    fn from(response: InformationResponse) -> Self {
        let steps = response
            .analyzed_instructions
            .into_iter()
            .next()
            .map(|block| block.steps.into_iter().map(|s| s.step).collect())
            .unwrap_or_default();

        Self {
            id: response.id,
            title: response.title,
            summary: response.summary,
            cuisines: response.cuisines,
            very_popular: response.very_popular,
            very_healthy: response.very_healthy,
            ready_in_minutes: response.ready_in_minutes,
            servings: response.servings,
            ingredients: response
                .extended_ingredients
                .into_iter()
                .map(|i| ExtendedIngredient {
                    name: i.name,
                    amount: i.amount,
                    unit: i.unit,
                    original: i.original,
                })
                .collect(),
            steps,
            image: response.image,
        }
    }
}

impl SpoonacularClient {
    pub fn new(config: RecipeApiConfig) -> Self {
        Self {
            api_key: config.api_key.filter(|k| !k.trim().is_empty()),
            base_url: config.base_url.trim_end_matches('/').to_string(),
            client: Client::new(),
        }
    }

    fn get(&self, path: &str) -> Result<RequestBuilder, CoreError> {
        let api_key = self
            .api_key
            .as_deref()
            .ok_or_else(|| CoreError::MissingCredentials("recipe API".to_string()))?;

        Ok(self
            .client
            .get(format!("{}{}", self.base_url, path))
            .query(&[("apiKey", api_key)]))
    }

    async fn send<T: DeserializeOwned>(&self, request: RequestBuilder) -> Result<T, CoreError> {
        let response = request.send().await.map_err(|e| {
            tracing::error!("Recipe API request failed: {}", e);
            CoreError::ExternalServiceError(format!("Recipe API error: {}", e))
        })?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response.text().await.unwrap_or_default();
            tracing::error!("Recipe API error: {} - {}", status, error_text);
            return Err(CoreError::ExternalServiceError(format!(
                "Recipe API returned error: {} - {}",
                status, error_text
            )));
        }

        response.json().await.map_err(|e| {
            tracing::error!("Failed to parse recipe API response: {}", e);
            CoreError::ExternalServiceError(format!("Failed to parse recipe API response: {}", e))
        })
    }
}

impl RecipeApiClient for SpoonacularClient {
    async fn search_recipe(&self, query: RecipeSearchQuery) -> Result<Option<u64>, CoreError> {
        let request = self.get("/recipes/complexSearch")?.query(&[
            ("query", query.query.as_str()),
            ("cuisine", query.cuisine.as_deref().unwrap_or_default()),
            ("instructionsRequired", "true"),
            ("fillIngredients", "true"),
            ("addRecipeInformation", "true"),
            ("number", "1"),
        ]);

        let response: ComplexSearchResponse = self.send(request).await?;
        Ok(response.results.first().map(|r| r.id))
    }

    async fn find_by_ingredients(
        &self,
        ingredients: Vec<String>,
        number: u32,
    ) -> Result<Vec<u64>, CoreError> {
        tracing::info!(ingredients = %ingredients.join(","), "Calling recipe API ingredient search");

        let request = self.get("/recipes/findByIngredients")?.query(&[
            ("ingredients", ingredients.join(",")),
            ("number", number.to_string()),
            ("ranking", RANKING_MAXIMIZE_USED.to_string()),
        ]);

        let response: Vec<RecipeSummary> = self.send(request).await?;
        Ok(response.into_iter().map(|r| r.id).collect())
    }

    async fn get_recipe_information(&self, recipe_id: u64) -> Result<RecipeInformation, CoreError> {
        tracing::debug!(recipe_id, "Fetching recipe details");

        let request = self
            .get(&format!("/recipes/{recipe_id}/information"))?
            .query(&[("includeNutrition", "false")]);

        let response: InformationResponse = self.send(request).await?;
        Ok(RecipeInformation::from(response))
    }
}
