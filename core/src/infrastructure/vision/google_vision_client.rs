use base64::{Engine as _, engine::general_purpose};
use reqwest::Client;
use serde::{Deserialize, Serialize};

use crate::domain::{
    common::{VisionConfig, entities::app_errors::CoreError},
    dish::{
        ports::VisionClient,
        value_objects::{Annotation, VisionAnnotations},
    },
};

const MAX_RESULTS: u32 = 10;

#[derive(Debug, Clone)]
pub struct GoogleVisionClient {
    api_key: Option<String>,
    base_url: String,
    client: Client,
}

#[derive(Debug, Serialize)]
struct AnnotateRequest {
    requests: Vec<ImageRequest>,
}

#[derive(Debug, Serialize)]
struct ImageRequest {
    features: Vec<Feature>,
    image: Image,
}

#[derive(Debug, Serialize)]
struct Feature {
    #[serde(rename = "type")]
    kind: &'static str,
    #[serde(rename = "maxResults")]
    max_results: u32,
}

#[derive(Debug, Serialize)]
struct Image {
    content: String,
}

#[derive(Debug, Deserialize)]
struct AnnotateResponse {
    #[serde(default)]
    responses: Vec<ImageResponse>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ImageResponse {
    #[serde(default)]
    label_annotations: Vec<EntityAnnotation>,
    #[serde(default)]
    web_detection: Option<WebDetection>,
    #[serde(default)]
    error: Option<Status>,
}

#[derive(Debug, Deserialize)]
struct EntityAnnotation {
    #[serde(default)]
    description: String,
    #[serde(default)]
    score: f64,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
struct WebDetection {
    #[serde(default)]
    web_entities: Vec<WebEntity>,
    #[serde(default)]
    best_guess_labels: Vec<BestGuessLabel>,
}

#[derive(Debug, Deserialize)]
struct WebEntity {
    #[serde(default)]
    description: Option<String>,
    #[serde(default)]
    score: f64,
}

#[derive(Debug, Deserialize)]
struct BestGuessLabel {
    label: String,
}

#[derive(Debug, Deserialize)]
struct Status {
    #[serde(default)]
    message: String,
}

impl From<ImageResponse> for VisionAnnotations {
    fn from(response: ImageResponse) -> Self {
        let web_detection = response.web_detection.unwrap_or_default();

        Self {
            labels: response
                .label_annotations
                .into_iter()
                .map(|l| Annotation::new(l.description, l.score))
                .collect(),
            web_entities: web_detection
                .web_entities
                .into_iter()
                .map(|e| Annotation::new(e.description.unwrap_or_default(), e.score))
                .collect(),
            best_guess_labels: web_detection
                .best_guess_labels
                .into_iter()
                .map(|l| l.label)
                .collect(),
        }
    }
}

impl GoogleVisionClient {
    pub fn new(config: VisionConfig) -> Self {
        Self {
            api_key: config.api_key.filter(|k| !k.trim().is_empty()),
            base_url: config.base_url.trim_end_matches('/').to_string(),
            client: Client::new(),
        }
    }

    async fn call_vision_api(&self, request: AnnotateRequest) -> Result<ImageResponse, CoreError> {
        let api_key = self
            .api_key
            .as_deref()
            .ok_or_else(|| CoreError::MissingCredentials("vision API".to_string()))?;

        let url = format!("{}/v1/images:annotate", self.base_url);

        tracing::info!("Calling Google Cloud Vision API");

        let response = self
            .client
            .post(&url)
            .query(&[("key", api_key)])
            .json(&request)
            .send()
            .await
            .map_err(|e| {
                tracing::error!("Vision API request failed: {}", e);
                CoreError::ExternalServiceError(format!("Vision API error: {}", e))
            })?;

        let status = response.status();
        tracing::info!(status = %status, "Google Cloud Vision API response");

        if !status.is_success() {
            let error_text = response.text().await.unwrap_or_default();
            tracing::error!("Vision API error: {} - {}", status, error_text);
            return Err(CoreError::ExternalServiceError(format!(
                "Vision API returned error: {} - {}",
                status, error_text
            )));
        }

        let annotate_response: AnnotateResponse = response.json().await.map_err(|e| {
            tracing::error!("Failed to parse Vision response: {}", e);
            CoreError::ExternalServiceError(format!("Failed to parse vision response: {}", e))
        })?;

        let image_response = annotate_response.responses.into_iter().next().ok_or_else(|| {
            CoreError::ExternalServiceError(
                "Failed to analyze image with Google Cloud Vision API".to_string(),
            )
        })?;

        if let Some(error) = &image_response.error {
            return Err(CoreError::ExternalServiceError(format!(
                "Vision API rejected image: {}",
                error.message
            )));
        }

        Ok(image_response)
    }
}

impl VisionClient for GoogleVisionClient {
    async fn annotate(&self, image_data: Vec<u8>) -> Result<VisionAnnotations, CoreError> {
        let base64_image = general_purpose::STANDARD.encode(&image_data);
        tracing::debug!(length = base64_image.len(), "Image converted to base64");

        let request = AnnotateRequest {
            requests: vec![ImageRequest {
                features: vec![
                    Feature {
                        kind: "LABEL_DETECTION",
                        max_results: MAX_RESULTS,
                    },
                    Feature {
                        kind: "WEB_DETECTION",
                        max_results: MAX_RESULTS,
                    },
                ],
                image: Image {
                    content: base64_image,
                },
            }],
        };

        let response = self.call_vision_api(request).await?;
        Ok(VisionAnnotations::from(response))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_response_maps_to_annotations() {
        let body = r#"{
            "responses": [{
                "labelAnnotations": [
                    {"mid": "/m/02wbm", "description": "Food", "score": 0.98},
                    {"description": "Pizza", "score": 0.95}
                ],
                "webDetection": {
                    "webEntities": [
                        {"entityId": "/m/0663v", "score": 1.2, "description": "Pizza"},
                        {"entityId": "/g/11b"}
                    ],
                    "bestGuessLabels": [{"label": "margherita pizza", "languageCode": "en"}]
                }
            }]
        }"#;

        let parsed: AnnotateResponse = serde_json::from_str(body).unwrap();
        let annotations =
            VisionAnnotations::from(parsed.responses.into_iter().next().unwrap());

        assert_eq!(annotations.labels.len(), 2);
        assert_eq!(annotations.labels[1], Annotation::new("Pizza", 0.95));
        assert_eq!(annotations.web_entities[1], Annotation::new("", 0.0));
        assert_eq!(annotations.best_guess_labels, vec!["margherita pizza"]);
    }

    #[tokio::test]
    async fn test_annotate_without_key_fails() {
        let client = GoogleVisionClient::new(VisionConfig {
            api_key: None,
            base_url: "http://127.0.0.1:1".to_string(),
        });

        let result = client.annotate(vec![1, 2, 3]).await;

        assert!(matches!(result, Err(CoreError::MissingCredentials(_))));
    }

    #[tokio::test]
    async fn test_blank_key_counts_as_missing() {
        let client = GoogleVisionClient::new(VisionConfig {
            api_key: Some("   ".to_string()),
            base_url: "http://127.0.0.1:1".to_string(),
        });

        let result = client.annotate(vec![1, 2, 3]).await;

        assert!(matches!(result, Err(CoreError::MissingCredentials(_))));
    }
}
