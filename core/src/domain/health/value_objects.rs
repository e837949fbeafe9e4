pub const VISION_SECRET: &str = "GOOGLE_CLOUD_VISION_API_KEY";
pub const RECIPE_API_SECRET: &str = "RECIPE_GENERATION_API_KEY";
pub const VIDEO_SECRET: &str = "VIDEO_GENERATION_API_KEY";
pub const DATABASE_SECRET: &str = "DATABASE_URL";

/// Which integration secrets were supplied at startup. Values are never kept.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ConfiguredSecrets {
    pub vision: bool,
    pub recipe_api: bool,
    pub video: bool,
    pub database: bool,
}

impl ConfiguredSecrets {
    /// `None` for names that are not integration secrets.
    pub fn lookup(&self, name: &str) -> Option<bool> {
        match name {
            VISION_SECRET => Some(self.vision),
            RECIPE_API_SECRET => Some(self.recipe_api),
            VIDEO_SECRET => Some(self.video),
            DATABASE_SECRET => Some(self.database),
            _ => None,
        }
    }
}
