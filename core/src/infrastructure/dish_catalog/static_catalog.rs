use std::sync::Arc;

use crate::domain::{
    common::entities::app_errors::CoreError,
    dish::{entities::DishCatalogEntry, ports::DishCatalogRepository, value_objects::CatalogSource},
};

/// Built-in catalog used when no database is configured.
#[derive(Debug, Clone)]
pub struct StaticDishCatalog {
    entries: Arc<Vec<DishCatalogEntry>>,
}

impl StaticDishCatalog {
    pub fn new(entries: Vec<DishCatalogEntry>) -> Self {
        Self {
            entries: Arc::new(entries),
        }
    }
}

impl Default for StaticDishCatalog {
    fn default() -> Self {
        Self::new(vec![
            DishCatalogEntry::new("Pasta Carbonara", "Italian", &["carbonara", "guanciale", "pancetta"]),
            DishCatalogEntry::new("Margherita Pizza", "Italian", &["margherita", "mozzarella", "pizza"]),
            DishCatalogEntry::new("Mushroom Risotto", "Italian", &["risotto", "arborio"]),
            DishCatalogEntry::new("Chicken Tikka Masala", "Indian", &["tikka", "masala"]),
            DishCatalogEntry::new("Pad Thai", "Thai", &["pad thai", "rice noodles", "tamarind"]),
            DishCatalogEntry::new("Ramen", "Japanese", &["ramen", "tonkotsu", "noodle soup"]),
            DishCatalogEntry::new("Sushi Roll", "Japanese", &["sushi", "maki", "nori"]),
            DishCatalogEntry::new("Tacos", "Mexican", &["taco", "tortilla", "al pastor"]),
            DishCatalogEntry::new("Paella", "Spanish", &["paella", "saffron"]),
            DishCatalogEntry::new("Pho", "Vietnamese", &["pho", "beef noodle soup"]),
            DishCatalogEntry::new("Bibimbap", "Korean", &["bibimbap", "gochujang"]),
            DishCatalogEntry::new("Moussaka", "Greek", &["moussaka", "eggplant"]),
            DishCatalogEntry::new("Beef Burger", "American", &["burger", "hamburger", "cheeseburger"]),
            DishCatalogEntry::new("Caesar Salad", "American", &["caesar", "romaine", "croutons"]),
            DishCatalogEntry::new("Chocolate Cake", "Dessert", &["chocolate cake", "ganache"]),
        ])
    }
}

impl DishCatalogRepository for StaticDishCatalog {
    async fn fetch_entries(&self) -> Result<Vec<DishCatalogEntry>, CoreError> {
        Ok(self.entries.as_ref().clone())
    }

    fn source(&self) -> CatalogSource {
        CatalogSource::Static
    }
}
