pub mod db;
pub mod dish_catalog;
pub mod recipe_api;
pub mod video;
pub mod vision;
