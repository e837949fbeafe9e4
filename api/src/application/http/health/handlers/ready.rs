use axum::extract::State;
use dishcovery_core::domain::health::{entities::ReadinessStatus, ports::HealthCheckService};

use crate::application::http::server::{
    api_entities::{api_error::ApiError, response::Response},
    app_state::AppState,
};

#[utoipa::path(
    get,
    path = "/ready",
    tag = "health",
    summary = "Readiness check",
    description = "Reports which integrations are configured and whether the dish catalog can be read.",
    responses(
        (status = 200, body = ReadinessStatus)
    ),
)]
pub async fn ready(State(state): State<AppState>) -> Result<Response<ReadinessStatus>, ApiError> {
    let status = state.service.readiness().await.map_err(ApiError::from)?;

    Ok(Response::OK(status))
}
