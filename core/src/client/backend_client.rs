use reqwest::{
    Client, Response,
    multipart::{Form, Part},
};
use serde::{Deserialize, Serialize, de::DeserializeOwned};
use tracing::{info, warn};
use url::Url;

use crate::{
    client::{error::ClientError, retry::RetryPolicy},
    domain::{
        dish::{entities::DishAnalysis, fallback::mock_dish_analysis},
        recipe::{entities::Recipe, fallback::mock_recipe, value_objects::IngredientSearch},
        video::entities::{SAMPLE_VIDEO_URL, VideoStatus},
    },
};

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerateRecipeBody<'a> {
    dish_name: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    cuisine: Option<&'a str>,
}

#[derive(Debug, Serialize)]
struct FindRecipesBody<'a> {
    ingredients: &'a [String],
}

#[derive(Debug, Serialize)]
struct GenerateVideoBody<'a> {
    recipe: &'a Recipe,
}

#[derive(Debug, Deserialize)]
struct GenerateRecipeResponse {
    recipe: Recipe,
}

/// Tutorial video as reported by the backend.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VideoOutcome {
    pub success: bool,
    pub video_url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub video_id: Option<String>,
    pub status: VideoStatus,
    #[serde(default)]
    pub fallback: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl VideoOutcome {
    fn fallback(error: String) -> Self {
        Self {
            success: true,
            video_url: SAMPLE_VIDEO_URL.to_string(),
            video_id: None,
            status: VideoStatus::Failed,
            fallback: true,
            error: Some(error),
        }
    }
}

#[derive(Debug, Clone)]
pub struct BackendClient {
    base_url: Url,
    client: Client,
    retry: RetryPolicy,
}

impl BackendClient {
    pub fn new(base_url: &str) -> Result<Self, ClientError> {
        let mut base_url = Url::parse(base_url)?;
        if !base_url.path().ends_with('/') {
            let path = format!("{}/", base_url.path());
            base_url.set_path(&path);
        }

        Ok(Self {
            base_url,
            client: Client::new(),
            retry: RetryPolicy::default(),
        })
    }

    pub fn with_retry_policy(mut self, retry: RetryPolicy) -> Self {
        self.retry = retry;
        self
    }

    fn endpoint(&self, path: &str) -> Result<Url, ClientError> {
        Ok(self.base_url.join(path)?)
    }

    async fn decode<T: DeserializeOwned>(response: Response) -> Result<T, ClientError> {
        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(ClientError::Status {
                status: status.as_u16(),
                body,
            });
        }

        response
            .json::<T>()
            .await
            .map_err(|e| ClientError::Decode(e.to_string()))
    }

    async fn post_json<B, T>(&self, operation: &str, path: &str, body: &B) -> Result<T, ClientError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let url = self.endpoint(path)?;
        self.retry
            .run(operation, || async {
                let response = self.client.post(url.clone()).json(body).send().await?;
                Self::decode(response).await
            })
            .await
    }

    /// Uploads a photo for identification. Falls back to random mock dish data.
    pub async fn analyze_image(&self, image_data: Vec<u8>, mime_type: &str) -> DishAnalysis {
        let result = async {
            let url = self.endpoint("dishes/identify")?;
            self.retry
                .run("analyze_image", || async {
                    let part = Part::bytes(image_data.clone())
                        .file_name("upload")
                        .mime_str(mime_type)
                        .map_err(|e| ClientError::InvalidRequest(e.to_string()))?;
                    let form = Form::new().part("image", part);
                    let response = self.client.post(url.clone()).multipart(form).send().await?;
                    Self::decode::<DishAnalysis>(response).await
                })
                .await
        }
        .await;

        match result {
            Ok(analysis) => {
                info!(dish_name = %analysis.dish_name, "Dish identified");
                analysis
            }
            Err(e) => {
                warn!(error = %e, "Dish identification failed, using mock data");
                mock_dish_analysis()
            }
        }
    }

    pub async fn generate_recipe(&self, dish_name: &str, cuisine: Option<&str>) -> Recipe {
        let body = GenerateRecipeBody { dish_name, cuisine };

        match self
            .post_json::<_, GenerateRecipeResponse>("generate_recipe", "recipes/generate", &body)
            .await
        {
            Ok(response) => response.recipe,
            Err(e) => {
                warn!(dish_name, error = %e, "Recipe generation failed, using mock recipe");
                mock_recipe(dish_name, cuisine)
            }
        }
    }

    /// Recipes matching the ingredients. Empty when the backend cannot be reached.
    pub async fn find_recipes(&self, ingredients: &[String]) -> Vec<Recipe> {
        let body = FindRecipesBody { ingredients };

        match self
            .post_json::<_, IngredientSearch>("find_recipes", "recipes/search-by-ingredients", &body)
            .await
        {
            Ok(search) => search.recipes,
            Err(e) => {
                warn!(error = %e, "Ingredient search failed");
                Vec::new()
            }
        }
    }

    pub async fn generate_video(&self, recipe: &Recipe) -> VideoOutcome {
        let body = GenerateVideoBody { recipe };

        match self
            .post_json::<_, VideoOutcome>("generate_video", "videos", &body)
            .await
        {
            Ok(outcome) => outcome,
            Err(e) => {
                warn!(recipe = %recipe.name, error = %e, "Video generation failed, using sample video");
                VideoOutcome::fallback(e.to_string())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const CLOSED_PORT: &str = "http://127.0.0.1:1/api";

    fn client() -> BackendClient {
        BackendClient::new(CLOSED_PORT).unwrap()
    }

    #[test]
    fn test_endpoints_keep_base_path() {
        let client = client();

        assert_eq!(
            client.endpoint("recipes/generate").unwrap().as_str(),
            "http://127.0.0.1:1/api/recipes/generate"
        );
    }

    #[test]
    fn test_invalid_base_url() {
        assert!(matches!(
            BackendClient::new("not a url"),
            Err(ClientError::InvalidUrl(_))
        ));
    }

    #[tokio::test(start_paused = true)]
    async fn test_generate_recipe_falls_back_to_mock() {
        let recipe = client().generate_recipe("Pasta Carbonara", None).await;

        assert_eq!(recipe, mock_recipe("Pasta Carbonara", None));
        assert!(!recipe.steps.is_empty());
    }

    #[tokio::test(start_paused = true)]
    async fn test_analyze_image_falls_back_to_mock() {
        let analysis = client().analyze_image(vec![0xFF, 0xD8], "image/jpeg").await;

        assert!(analysis.fallback);
        assert!((0.0..=1.0).contains(&analysis.confidence));
        assert!(!analysis.dish_name.is_empty());
    }

    #[tokio::test(start_paused = true)]
    async fn test_find_recipes_falls_back_to_empty() {
        let recipes = client()
            .find_recipes(&["chicken".to_string(), "rice".to_string()])
            .await;

        assert!(recipes.is_empty());
    }

    #[tokio::test(start_paused = true)]
    async fn test_generate_video_falls_back_to_sample() {
        let recipe = mock_recipe("Chocolate Cake", None);

        let outcome = client().generate_video(&recipe).await;

        assert!(outcome.fallback);
        assert_eq!(outcome.video_url, SAMPLE_VIDEO_URL);
        assert!(outcome.error.is_some());
    }
}
