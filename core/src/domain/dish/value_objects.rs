#[derive(Debug, Clone)]
pub struct IdentifyDishInput {
    pub image_data: Vec<u8>,
    pub mime_type: Option<String>,
}

/// One label or web entity reported by the vision API.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Annotation {
    pub description: String,
    pub score: f64,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct VisionAnnotations {
    pub labels: Vec<Annotation>,
    pub web_entities: Vec<Annotation>,
    pub best_guess_labels: Vec<String>,
}

impl Annotation {
    pub fn new(description: impl Into<String>, score: f64) -> Self {
        Self {
            description: description.into(),
            score,
        }
    }
}

/// Where the dish catalog is read from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CatalogSource {
    Postgres,
    Static,
}

impl CatalogSource {
    pub fn as_str(&self) -> &'static str {
        match self {
            CatalogSource::Postgres => "postgres",
            CatalogSource::Static => "static",
        }
    }
}
