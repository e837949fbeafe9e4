use axum::extract::State;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::application::http::server::{api_entities::response::Response, app_state::AppState};

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ConfigResponse {
    pub app_version: String,
    pub root_path: String,
    pub allowed_origins: Vec<String>,
}

pub async fn get_config(State(state): State<AppState>) -> Response<ConfigResponse> {
    Response::OK(ConfigResponse {
        app_version: env!("CARGO_PKG_VERSION").to_string(),
        root_path: state.args.server.root_path.clone(),
        allowed_origins: state.args.server.allowed_origins.clone(),
    })
}
