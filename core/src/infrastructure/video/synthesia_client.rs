use base64::{Engine as _, engine::general_purpose};
use reqwest::{Client, header::AUTHORIZATION};
use serde::{Deserialize, Serialize};

use crate::domain::{
    common::{VideoConfig, entities::app_errors::CoreError},
    video::{
        ports::VideoAvatarClient,
        value_objects::{VideoJob, VideoRequest},
    },
};

#[derive(Debug, Clone)]
pub struct SynthesiaClient {
    api_key: Option<String>,
    base_url: String,
    client: Client,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct CreateVideoRequest {
    test: bool,
    title: String,
    description: String,
    visibility: &'static str,
    template_id: String,
    input: VideoInput,
}

#[derive(Debug, Serialize)]
struct VideoInput {
    script: String,
    avatar: String,
    background: String,
}

#[derive(Debug, Deserialize)]
struct CreateVideoResponse {
    #[serde(default)]
    id: Option<String>,
    #[serde(default)]
    download: Option<String>,
    #[serde(default)]
    status: Option<String>,
}

impl From<VideoRequest> for CreateVideoRequest {
    fn from(request: VideoRequest) -> Self {
        Self {
            test: false,
            title: request.title,
            description: request.description,
            visibility: "public",
            template_id: request.template_id,
            input: VideoInput {
                script: request.script,
                avatar: request.avatar,
                background: request.background,
            },
        }
    }
}

impl SynthesiaClient {
    pub fn new(config: VideoConfig) -> Self {
        Self {
            api_key: config.api_key.filter(|k| !k.trim().is_empty()),
            base_url: config.base_url.trim_end_matches('/').to_string(),
            client: Client::new(),
        }
    }

    fn authorization(&self) -> Result<String, CoreError> {
        let api_key = self
            .api_key
            .as_deref()
            .ok_or_else(|| CoreError::MissingCredentials("video API".to_string()))?;

        Ok(format!("Basic {}", general_purpose::STANDARD.encode(api_key)))
    }
}

impl VideoAvatarClient for SynthesiaClient {
    async fn create_video(&self, request: VideoRequest) -> Result<VideoJob, CoreError> {
        let authorization = self.authorization()?;
        let url = format!("{}/v2/videos", self.base_url);

        tracing::info!("Calling video generation API");

        let response = self
            .client
            .post(&url)
            .header(AUTHORIZATION, authorization)
            .json(&CreateVideoRequest::from(request))
            .send()
            .await
            .map_err(|e| {
                tracing::error!("Video API request failed: {}", e);
                CoreError::ExternalServiceError(format!("Video API error: {}", e))
            })?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response.text().await.unwrap_or_default();
            tracing::error!("Video API error: {} - {}", status, error_text);
            return Err(CoreError::ExternalServiceError(format!(
                "Video API returned error: {} - {}",
                status, error_text
            )));
        }

        let body: CreateVideoResponse = response.json().await.map_err(|e| {
            tracing::error!("Failed to parse video API response: {}", e);
            CoreError::ExternalServiceError(format!("Failed to parse video API response: {}", e))
        })?;

        tracing::debug!(id = ?body.id, status = ?body.status, "Video generation API response");

        Ok(VideoJob {
            id: body.id,
            download: body.download,
            status: body.status,
        })
    }

    fn is_configured(&self) -> bool {
        self.api_key.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_body_shape() {
        let body = serde_json::to_value(CreateVideoRequest::from(VideoRequest {
            title: "Cooking Tutorial: Soup".to_string(),
            description: "AI Chef explains how to make Soup".to_string(),
            script: "Recipe: Soup".to_string(),
            avatar: "chef1".to_string(),
            background: "kitchen".to_string(),
            template_id: "reuse_chef".to_string(),
        }))
        .unwrap();

        assert_eq!(body["templateId"], "reuse_chef");
        assert_eq!(body["visibility"], "public");
        assert_eq!(body["test"], false);
        assert_eq!(body["input"]["avatar"], "chef1");
    }

    #[test]
    fn test_authorization_encodes_key_pair() {
        let client = SynthesiaClient::new(VideoConfig {
            api_key: Some("user:secret".to_string()),
            base_url: "http://127.0.0.1:1".to_string(),
        });

        assert!(client.is_configured());
        assert_eq!(client.authorization().unwrap(), "Basic dXNlcjpzZWNyZXQ=");
    }

    #[test]
    fn test_empty_key_is_not_configured() {
        let client = SynthesiaClient::new(VideoConfig {
            api_key: Some(String::new()),
            base_url: "http://127.0.0.1:1".to_string(),
        });

        assert!(!client.is_configured());
    }
}
