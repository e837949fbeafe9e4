use rand::{Rng, seq::SliceRandom};

use crate::domain::{
    dish::{entities::DishAnalysis, heuristics::MAX_ALTERNATIVES},
    recipe::helpers::DEFAULT_CUISINE,
};

pub const MOCK_DISHES: [&str; 8] = [
    "Chocolate Cake",
    "Pasta Carbonara",
    "Chicken Tikka Masala",
    "Vegetable Stir Fry",
    "Beef Burger",
    "Caesar Salad",
    "Mushroom Risotto",
    "Sushi Roll",
];

/// Randomized dish analysis used when no vision result is available.
///
/// The dish and its three alternatives are distinct, confidence lies in
/// `0.7..0.95`.
pub fn mock_dish_analysis() -> DishAnalysis {
    let mut rng = rand::thread_rng();
    let mut picks: Vec<&str> = MOCK_DISHES
        .choose_multiple(&mut rng, MAX_ALTERNATIVES + 1)
        .copied()
        .collect();
    let dish_name = picks.remove(0).to_string();

    DishAnalysis {
        dish_name,
        cuisine: DEFAULT_CUISINE.to_string(),
        confidence: rng.gen_range(0.7..0.95),
        alternatives: picks.into_iter().map(str::to_string).collect(),
        database_match: None,
        match_score: None,
        vision_details: None,
        fallback: true,
    }
}
