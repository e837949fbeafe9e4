use axum::extract::State;
use dishcovery_core::domain::video::{
    entities::{VideoGeneration, VideoStatus},
    ports::VideoService,
    value_objects::GenerateVideoInput,
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::application::http::{
    server::{
        api_entities::{
            api_error::{ApiError, ValidateJson},
            response::Response,
        },
        app_state::AppState,
    },
    video::validators::GenerateVideoValidator,
};

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct GenerateVideoResponse {
    pub success: bool,
    pub video_url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub video_id: Option<String>,
    pub status: VideoStatus,
    pub fallback: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl From<VideoGeneration> for GenerateVideoResponse {
    fn from(video: VideoGeneration) -> Self {
        Self {
            success: true,
            video_url: video.video_url,
            video_id: video.video_id,
            status: video.status,
            fallback: video.fallback,
            error: video.error,
        }
    }
}

#[utoipa::path(
    post,
    path = "",
    tag = "video",
    summary = "Generate a chef tutorial video",
    description = "Submits a chef script built from the recipe to the video API. Returns a sample video flagged `fallback` when the video cannot be generated.",
    request_body = GenerateVideoValidator,
    responses(
        (status = 200, body = GenerateVideoResponse),
        (status = 400, description = "Missing recipe")
    ),
)]
pub async fn generate_video(
    State(state): State<AppState>,
    ValidateJson(payload): ValidateJson<GenerateVideoValidator>,
) -> Result<Response<GenerateVideoResponse>, ApiError> {
    let video = state
        .service
        .generate_video(GenerateVideoInput {
            recipe: payload.recipe,
        })
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(GenerateVideoResponse::from(video)))
}
