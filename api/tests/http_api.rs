use std::sync::Arc;

use axum::http::{HeaderValue, StatusCode, header::ORIGIN};
use axum_test::{
    TestServer,
    multipart::{MultipartForm, Part},
};
use dishcovery_api::{
    application::http::server::http_server::{router, state},
    args::Args,
};
use dishcovery_core::domain::{
    dish::entities::DishAnalysis,
    recipe::{fallback::mock_recipe, value_objects::IngredientSearch},
    video::entities::SAMPLE_VIDEO_URL,
};
use serde_json::{Value, json};

/// Nothing listens here, so every upstream call fails at the transport level.
const CLOSED_PORT: &str = "http://127.0.0.1:1";

fn args() -> Args {
    let mut args = Args::default();
    args.vision.vision_api_key = Some("vision-key".to_string());
    args.vision.vision_base_url = CLOSED_PORT.to_string();
    args.recipe_api.recipe_api_key = Some("recipe-key".to_string());
    args.recipe_api.recipe_api_base_url = CLOSED_PORT.to_string();
    args.video.video_api_key = Some("user:secret".to_string());
    args.video.video_base_url = CLOSED_PORT.to_string();
    args
}

async fn server_with(args: Args) -> TestServer {
    let app_state = state(Arc::new(args)).await.unwrap();
    TestServer::new(router(app_state).unwrap()).unwrap()
}

async fn server() -> TestServer {
    server_with(args()).await
}

#[tokio::test]
async fn test_generate_recipe_falls_back_when_upstream_is_down() {
    let server = server().await;

    let response = server
        .post("/recipes/generate")
        .json(&json!({ "dishName": "Shakshuka", "cuisine": "Middle Eastern" }))
        .await;

    response.assert_status_ok();
    let body: Value = response.json();
    assert_eq!(body["success"], true);
    assert_eq!(body["note"], "Using fallback recipe due to API error");
    assert_eq!(body["recipe"]["name"], "Shakshuka");
    assert_eq!(body["recipe"]["cuisine"], "Middle Eastern");
    assert!(body["recipe"]["cookingTime"].as_u64().is_some());
    assert!(!body["recipe"]["steps"].as_array().unwrap().is_empty());
}

#[tokio::test]
async fn test_generate_recipe_rejects_empty_dish_name() {
    let server = server().await;

    let response = server
        .post("/recipes/generate")
        .json(&json!({ "dishName": "" }))
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);
    let body: Value = response.json();
    assert_eq!(body["code"], "E_BAD_REQUEST");
    assert_eq!(body["message"], "No dish name provided");
    assert_eq!(body["status"], 400);
}

#[tokio::test]
async fn test_generate_recipe_rejects_blank_dish_name() {
    let server = server().await;

    let response = server
        .post("/recipes/generate")
        .json(&json!({ "dishName": "   " }))
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_generate_recipe_accepts_long_dish_name() {
    let server = server().await;
    let dish_name = "Slow Roasted Lamb Shoulder ".repeat(12);

    let response = server
        .post("/recipes/generate")
        .json(&json!({ "dishName": dish_name }))
        .await;

    response.assert_status_ok();
    let body: Value = response.json();
    assert_eq!(body["success"], true);
}

#[tokio::test]
async fn test_search_by_ingredients_reports_failure() {
    let server = server().await;

    let response = server
        .post("/recipes/search-by-ingredients")
        .json(&json!({ "ingredients": ["chicken", "rice"] }))
        .await;

    response.assert_status_ok();
    let search: IngredientSearch = response.json();
    assert!(!search.success);
    assert!(search.recipes.is_empty());
    assert!(search.error.is_some());
}

#[tokio::test]
async fn test_search_by_ingredients_rejects_empty_list() {
    let server = server().await;

    let response = server
        .post("/recipes/search-by-ingredients")
        .json(&json!({ "ingredients": [] }))
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_search_by_ingredients_accepts_long_lists() {
    let server = server().await;
    let ingredients: Vec<String> = (1..=21).map(|i| format!("ingredient {i}")).collect();

    let response = server
        .post("/recipes/search-by-ingredients")
        .json(&json!({ "ingredients": ingredients }))
        .await;

    response.assert_status_ok();
    let search: IngredientSearch = response.json();
    assert!(!search.success);
}

#[tokio::test]
async fn test_identify_dish_returns_mock_analysis_when_vision_is_down() {
    let server = server().await;

    let form = MultipartForm::new().add_part(
        "image",
        Part::bytes(vec![0xFF, 0xD8, 0xFF, 0xE0])
            .file_name("dish.jpg")
            .mime_type("image/jpeg"),
    );
    let response = server.post("/dishes/identify").multipart(form).await;

    response.assert_status_ok();
    let analysis: DishAnalysis = response.json();
    assert!(analysis.fallback);
    assert!(!analysis.dish_name.is_empty());
    assert!((0.0..=1.0).contains(&analysis.confidence));
    assert!(!analysis.alternatives.contains(&analysis.dish_name));
}

#[tokio::test]
async fn test_identify_dish_requires_image() {
    let server = server().await;

    let form = MultipartForm::new().add_text("caption", "no image here");
    let response = server.post("/dishes/identify").multipart(form).await;

    response.assert_status(StatusCode::BAD_REQUEST);
    let body: Value = response.json();
    assert_eq!(body["message"], "No image provided");
}

#[tokio::test]
async fn test_generate_video_falls_back_to_sample() {
    let server = server().await;

    let response = server
        .post("/videos")
        .json(&json!({ "recipe": mock_recipe("Chocolate Cake", None) }))
        .await;

    response.assert_status_ok();
    let body: Value = response.json();
    assert_eq!(body["success"], true);
    assert_eq!(body["fallback"], true);
    assert_eq!(body["videoUrl"], SAMPLE_VIDEO_URL);
    assert!(body.get("videoId").is_none());
}

#[tokio::test]
async fn test_generate_video_without_credentials_reports_missing_key() {
    let mut args = args();
    args.video.video_api_key = None;
    let server = server_with(args).await;

    let response = server
        .post("/videos")
        .json(&json!({ "recipe": mock_recipe("Pasta Carbonara", None) }))
        .await;

    response.assert_status_ok();
    let body: Value = response.json();
    assert_eq!(body["fallback"], true);
    assert_eq!(body["error"], "Missing API key for video generation");
}

#[tokio::test]
async fn test_generate_video_requires_recipe() {
    let server = server().await;

    let response = server.post("/videos").json(&json!({})).await;

    response.assert_status(StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_check_secret_never_exposes_values() {
    let server = server().await;

    let response = server
        .post("/secrets/check")
        .json(&json!({ "secretName": "RECIPE_GENERATION_API_KEY" }))
        .await;

    response.assert_status_ok();
    let body: Value = response.json();
    assert_eq!(body["exists"], true);
    assert!(!response.text().contains("recipe-key"));

    let response = server
        .post("/secrets/check")
        .json(&json!({ "secretName": "DATABASE_URL" }))
        .await;
    let body: Value = response.json();
    assert_eq!(body["exists"], false);

    let response = server
        .post("/secrets/check")
        .json(&json!({ "secretName": "HOME" }))
        .await;
    let body: Value = response.json();
    assert_eq!(body["exists"], false);
}

#[tokio::test]
async fn test_check_secret_accepts_long_names() {
    let server = server().await;

    let response = server
        .post("/secrets/check")
        .json(&json!({ "secretName": "X".repeat(300) }))
        .await;

    response.assert_status_ok();
    let body: Value = response.json();
    assert_eq!(body["exists"], false);
}

#[tokio::test]
async fn test_check_secret_rejects_empty_name() {
    let server = server().await;

    let response = server
        .post("/secrets/check")
        .json(&json!({ "secretName": "" }))
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_health_endpoints() {
    let server = server().await;

    server.get("/health/live").await.assert_status_ok();

    let response = server.get("/health/ready").await;
    response.assert_status_ok();
    let body: Value = response.json();
    assert_eq!(body["visionConfigured"], true);
    assert_eq!(body["dishCatalog"]["source"], "static");
    assert_eq!(body["dishCatalog"]["reachable"], true);
}

#[tokio::test]
async fn test_routes_are_mounted_under_root_path() {
    let mut args = args();
    args.server.root_path = "/api".to_string();
    let server = server_with(args).await;

    server.get("/api/health/live").await.assert_status_ok();
    server.get("/api/config").await.assert_status_ok();
    server
        .get("/health/live")
        .await
        .assert_status(StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_wildcard_origin_allows_any_origin() {
    let mut args = args();
    args.server.allowed_origins = vec!["*".to_string()];
    let server = server_with(args).await;

    let response = server
        .get("/health/live")
        .add_header(ORIGIN, HeaderValue::from_static("https://anywhere.example"))
        .await;

    response.assert_status_ok();
    assert_eq!(response.header("access-control-allow-origin"), "*");
}

#[tokio::test]
async fn test_metrics_and_docs_are_served() {
    let server = server().await;

    server.get("/metrics").await.assert_status_ok();
    server
        .get("/api-docs/openapi.json")
        .await
        .assert_status_ok();
}
