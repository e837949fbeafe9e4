pub mod generate_recipe;
pub mod search_by_ingredients;
