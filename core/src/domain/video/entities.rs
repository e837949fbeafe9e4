use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::domain::common::generate_timestamp;

pub const SAMPLE_VIDEO_URL: &str =
    "https://storage.googleapis.com/gtv-videos-bucket/sample/BigBuckBunny.mp4";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum VideoStatus {
    Pending,
    Processing,
    Completed,
    Failed,
}

impl From<&str> for VideoStatus {
    fn from(value: &str) -> Self {
        match value.to_ascii_lowercase().as_str() {
            "complete" | "completed" => VideoStatus::Completed,
            "in_progress" | "processing" => VideoStatus::Processing,
            "failed" | "rejected" => VideoStatus::Failed,
            _ => VideoStatus::Pending,
        }
    }
}

/// Tutorial video request as seen by the application.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct VideoGeneration {
    pub id: Uuid,
    /// Job id assigned by the video provider.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub video_id: Option<String>,
    pub recipe_name: String,
    pub status: VideoStatus,
    pub video_url: String,
    pub fallback: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl VideoGeneration {
    pub fn new(recipe_name: String, video_id: String, status: VideoStatus, video_url: String) -> Self {
        let (now, timestamp) = generate_timestamp();

        Self {
            id: Uuid::new_v7(timestamp),
            video_id: Some(video_id),
            recipe_name,
            status,
            video_url,
            fallback: false,
            error: None,
            created_at: now,
        }
    }

    /// Sample video served when the provider cannot produce one.
    pub fn fallback(recipe_name: String, error: Option<String>) -> Self {
        let (now, timestamp) = generate_timestamp();

        Self {
            id: Uuid::new_v7(timestamp),
            video_id: None,
            recipe_name,
            status: VideoStatus::Failed,
            video_url: SAMPLE_VIDEO_URL.to_string(),
            fallback: true,
            error,
            created_at: now,
        }
    }
}
