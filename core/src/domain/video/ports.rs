use std::future::Future;

use crate::domain::{
    common::entities::app_errors::CoreError,
    video::{
        entities::VideoGeneration,
        value_objects::{GenerateVideoInput, VideoJob, VideoRequest},
    },
};

/// Client trait for the text-to-video avatar API
#[cfg_attr(test, mockall::automock)]
pub trait VideoAvatarClient: Send + Sync {
    fn create_video(
        &self,
        request: VideoRequest,
    ) -> impl Future<Output = Result<VideoJob, CoreError>> + Send;

    fn is_configured(&self) -> bool;
}

#[cfg_attr(test, mockall::automock)]
pub trait VideoService: Send + Sync {
    fn generate_video(
        &self,
        input: GenerateVideoInput,
    ) -> impl Future<Output = Result<VideoGeneration, CoreError>> + Send;
}
