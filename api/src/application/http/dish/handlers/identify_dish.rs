use axum::extract::{Multipart, State};
use dishcovery_core::domain::dish::{
    entities::DishAnalysis, ports::DishAnalysisService, value_objects::IdentifyDishInput,
};
use tracing::info;

use crate::application::http::server::{
    api_entities::{api_error::ApiError, response::Response},
    app_state::AppState,
};

pub const MAX_IMAGE_SIZE: usize = 10 * 1024 * 1024; // 10MB

#[utoipa::path(
    post,
    path = "/identify",
    tag = "dish",
    summary = "Identify a dish from a photo",
    description = "Labels the uploaded image with the vision API and derives the dish name, cuisine and confidence. Returns randomized mock data flagged `fallback` when the vision API is unavailable.",
    request_body(content_type = "multipart/form-data", description = "Form with an `image` file field"),
    responses(
        (status = 200, body = DishAnalysis),
        (status = 400, description = "Missing or oversized image")
    ),
)]
pub async fn identify_dish(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Response<DishAnalysis>, ApiError> {
    let mut image: Option<(Vec<u8>, Option<String>)> = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| ApiError::BadRequest(format!("Failed to read multipart field: {}", e)))?
    {
        if field.name() != Some("image") {
            continue;
        }

        let mime_type = field.content_type().map(str::to_string);
        let data = field
            .bytes()
            .await
            .map_err(|e| ApiError::BadRequest(format!("Failed to read image: {}", e)))?;

        if data.len() > MAX_IMAGE_SIZE {
            return Err(ApiError::BadRequest(format!(
                "Image too large. Max size is {} bytes",
                MAX_IMAGE_SIZE
            )));
        }

        image = Some((data.to_vec(), mime_type));
    }

    let (image_data, mime_type) =
        image.ok_or_else(|| ApiError::BadRequest("No image provided".to_string()))?;

    info!(size = image_data.len(), "Identifying dish from upload");

    let analysis = state
        .service
        .identify_dish(IdentifyDishInput {
            image_data,
            mime_type,
        })
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(analysis))
}
