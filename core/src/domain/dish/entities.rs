use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Best guess of what dish a photo shows.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct DishAnalysis {
    pub dish_name: String,
    pub cuisine: String,
    /// Always within `0.0..=1.0`.
    pub confidence: f64,
    pub alternatives: Vec<String>,
    /// `None` when the dish catalog could not be consulted.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub database_match: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub match_score: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub vision_details: Option<VisionDetails>,
    /// Set when the analysis is mock data rather than a vision result.
    #[serde(default)]
    pub fallback: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct VisionDetails {
    pub top_labels: Vec<String>,
    pub top_web_entities: Vec<String>,
}

/// Known dish from the reference catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DishCatalogEntry {
    pub name: String,
    pub cuisine: String,
    pub keywords: Vec<String>,
}

impl DishCatalogEntry {
    pub fn new(name: &str, cuisine: &str, keywords: &[&str]) -> Self {
        Self {
            name: name.to_string(),
            cuisine: cuisine.to_string(),
            keywords: keywords.iter().map(|k| k.to_string()).collect(),
        }
    }
}
