use axum::{Router, extract::DefaultBodyLimit, routing::post};
use utoipa::OpenApi;

use super::handlers::identify_dish::{__path_identify_dish, MAX_IMAGE_SIZE, identify_dish};
use crate::application::http::server::app_state::AppState;

#[derive(OpenApi)]
#[openapi(paths(identify_dish))]
pub struct DishApiDoc;

pub fn dish_routes(state: AppState) -> Router<AppState> {
    Router::new()
        .route(
            &format!("{}/dishes/identify", state.args.server.root_path),
            post(identify_dish),
        )
        // multipart framing on top of the image itself
        .layer(DefaultBodyLimit::max(MAX_IMAGE_SIZE + 64 * 1024))
}
