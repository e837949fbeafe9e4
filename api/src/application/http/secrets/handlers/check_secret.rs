use axum::extract::State;
use dishcovery_core::domain::health::{entities::SecretStatus, ports::HealthCheckService};

use crate::application::http::{
    secrets::validators::CheckSecretValidator,
    server::{
        api_entities::{
            api_error::{ApiError, ValidateJson},
            response::Response,
        },
        app_state::AppState,
    },
};

#[utoipa::path(
    post,
    path = "/check",
    tag = "secrets",
    summary = "Check whether an integration secret is configured",
    description = "Only the known integration secrets are reported. Secret values are never returned.",
    request_body = CheckSecretValidator,
    responses(
        (status = 200, body = SecretStatus),
        (status = 400, description = "Empty secret name")
    ),
)]
pub async fn check_secret(
    State(state): State<AppState>,
    ValidateJson(payload): ValidateJson<CheckSecretValidator>,
) -> Result<Response<SecretStatus>, ApiError> {
    let status = state
        .service
        .check_secret(&payload.secret_name)
        .map_err(ApiError::from)?;

    Ok(Response::OK(status))
}
