use chrono::{DateTime, Utc};
use uuid::{NoContext, Timestamp};

pub mod entities;
pub mod services;

pub const GOOGLE_VISION_DEFAULT_URL: &str = "https://vision.googleapis.com";
pub const SPOONACULAR_DEFAULT_URL: &str = "https://api.spoonacular.com";
pub const SYNTHESIA_DEFAULT_URL: &str = "https://api.synthesia.io";

#[derive(Clone, Debug)]
pub struct DishcoveryConfig {
    pub vision: VisionConfig,
    pub recipe_api: RecipeApiConfig,
    pub video: VideoConfig,
    pub database: Option<DatabaseConfig>,
}

#[derive(Clone, Debug)]
pub struct VisionConfig {
    pub api_key: Option<String>,
    pub base_url: String,
}

#[derive(Clone, Debug)]
pub struct RecipeApiConfig {
    pub api_key: Option<String>,
    pub base_url: String,
}

#[derive(Clone, Debug)]
pub struct VideoConfig {
    /// `user:password` pair sent as basic auth.
    pub api_key: Option<String>,
    pub base_url: String,
}

#[derive(Clone, Debug)]
pub struct DatabaseConfig {
    pub url: String,
}

impl Default for DishcoveryConfig {
    fn default() -> Self {
        Self {
            vision: VisionConfig {
                api_key: None,
                base_url: GOOGLE_VISION_DEFAULT_URL.to_string(),
            },
            recipe_api: RecipeApiConfig {
                api_key: None,
                base_url: SPOONACULAR_DEFAULT_URL.to_string(),
            },
            video: VideoConfig {
                api_key: None,
                base_url: SYNTHESIA_DEFAULT_URL.to_string(),
            },
            database: None,
        }
    }
}

pub fn generate_timestamp() -> (DateTime<Utc>, Timestamp) {
    let now = Utc::now();
    let seconds = now.timestamp().try_into().unwrap_or(0);
    let timestamp = Timestamp::from_unix(NoContext, seconds, 0);

    (now, timestamp)
}

#[cfg(test)]
pub(crate) mod mocks;
