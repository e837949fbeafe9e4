use axum::{Router, routing::post};
use utoipa::OpenApi;

use super::handlers::check_secret::{__path_check_secret, check_secret};
use crate::application::http::server::app_state::AppState;

#[derive(OpenApi)]
#[openapi(paths(check_secret))]
pub struct SecretsApiDoc;

pub fn secrets_routes(state: AppState) -> Router<AppState> {
    Router::new().route(
        &format!("{}/secrets/check", state.args.server.root_path),
        post(check_secret),
    )
}
