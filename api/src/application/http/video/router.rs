use axum::{Router, routing::post};
use utoipa::OpenApi;

use super::handlers::generate_video::{__path_generate_video, generate_video};
use crate::application::http::server::app_state::AppState;

#[derive(OpenApi)]
#[openapi(paths(generate_video))]
pub struct VideoApiDoc;

pub fn video_routes(state: AppState) -> Router<AppState> {
    Router::new().route(
        &format!("{}/videos", state.args.server.root_path),
        post(generate_video),
    )
}
