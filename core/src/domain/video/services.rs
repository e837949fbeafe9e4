use tracing::{debug, error, info, warn};

use crate::domain::{
    common::{entities::app_errors::CoreError, services::Service},
    dish::ports::{DishCatalogRepository, VisionClient},
    recipe::ports::RecipeApiClient,
    video::{
        entities::{SAMPLE_VIDEO_URL, VideoGeneration, VideoStatus},
        ports::{VideoAvatarClient, VideoService},
        script::video_request,
        value_objects::GenerateVideoInput,
    },
};

const SCRIPT_PREVIEW_LEN: usize = 200;

impl<V, RA, VA, DC> VideoService for Service<V, RA, VA, DC>
where
    V: VisionClient,
    RA: RecipeApiClient,
    VA: VideoAvatarClient,
    DC: DishCatalogRepository,
{
    async fn generate_video(&self, input: GenerateVideoInput) -> Result<VideoGeneration, CoreError> {
        let recipe = input.recipe;
        if recipe.name.trim().is_empty() {
            return Err(CoreError::Invalid("No recipe provided".to_string()));
        }

        info!(recipe = %recipe.name, "Generating video");

        let request = video_request(&recipe);
        debug!(
            script = %request.script.chars().take(SCRIPT_PREVIEW_LEN).collect::<String>(),
            "Prepared video script"
        );

        if !self.video_client.is_configured() {
            error!("Video generation API key is not set");
            return Ok(VideoGeneration::fallback(
                recipe.name,
                Some("Missing API key for video generation".to_string()),
            ));
        }

        let job = match self.video_client.create_video(request).await {
            Ok(job) => job,
            Err(e) => {
                warn!(error = %e, "Video generation failed, using sample video");
                return Ok(VideoGeneration::fallback(recipe.name, Some(e.to_string())));
            }
        };

        match job.id {
            Some(video_id) => {
                let status = match (&job.download, job.status.as_deref()) {
                    (Some(_), _) => VideoStatus::Completed,
                    (None, Some(status)) => VideoStatus::from(status),
                    (None, None) => VideoStatus::Pending,
                };
                let video_url = job
                    .download
                    .unwrap_or_else(|| SAMPLE_VIDEO_URL.to_string());

                info!(video_id = %video_id, status = ?status, "Video job created");
                Ok(VideoGeneration::new(recipe.name, video_id, status, video_url))
            }
            None => {
                warn!(status = ?job.status, "Video provider returned no job id");
                Ok(VideoGeneration::fallback(
                    recipe.name,
                    Some("Failed to generate video: no job id returned".to_string()),
                ))
            }
        }
    }
}
