use crate::domain::recipe::entities::Recipe;

pub const CHEF_AVATAR: &str = "chef1";
pub const KITCHEN_BACKGROUND: &str = "kitchen";
pub const CHEF_TEMPLATE: &str = "reuse_chef";

#[derive(Debug, Clone)]
pub struct GenerateVideoInput {
    pub recipe: Recipe,
}

/// Avatar video submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VideoRequest {
    pub title: String,
    pub description: String,
    pub script: String,
    pub avatar: String,
    pub background: String,
    pub template_id: String,
}

/// Provider answer to a submission.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct VideoJob {
    pub id: Option<String>,
    pub download: Option<String>,
    pub status: Option<String>,
}
