use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

#[derive(Debug, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CheckSecretValidator {
    #[validate(length(min = 1, message = "No secret name provided"))]
    #[serde(default)]
    pub secret_name: String,
}
