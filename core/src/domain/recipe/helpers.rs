use std::sync::LazyLock;

use regex::Regex;

use crate::domain::recipe::{
    entities::{Difficulty, Ingredient, Recipe, Step},
    value_objects::RecipeInformation,
};

pub const DEFAULT_CUISINE: &str = "International";
pub const DEFAULT_COOKING_TIME: u32 = 30;
pub const DEFAULT_SERVINGS: u32 = 4;
pub const LONG_STEP_TIP: &str = "Take your time with this step for best results.";
const LONG_STEP_THRESHOLD: usize = 100;

static HTML_TAG: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"<[^>]*>").expect("valid regex"));

/// Which search produced the record; decides the defaults for missing fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecipeOrigin<'a> {
    DishName { cuisine: Option<&'a str> },
    Ingredients { first_ingredient: &'a str },
}

/// First sentence of an HTML summary, tags removed.
pub fn summarize(summary: &str) -> String {
    let plain = HTML_TAG.replace_all(summary, "");
    let first = plain.split('.').next().unwrap_or_default();
    format!("{first}.")
}

pub fn difficulty_from_flags(very_popular: bool, very_healthy: bool) -> Difficulty {
    if very_popular {
        Difficulty::Easy
    } else if very_healthy {
        Difficulty::Medium
    } else {
        Difficulty::Hard
    }
}

/// Renders an amount the way a person would write it: `2 cups`, `0.5 tsp`.
pub fn format_amount(amount: f64, unit: &str) -> String {
    format!("{} {}", amount, unit)
}

fn placeholder_steps(origin: RecipeOrigin<'_>) -> Vec<Step> {
    match origin {
        RecipeOrigin::DishName { .. } => {
            vec![Step::new("No detailed steps available for this recipe.")]
        }
        RecipeOrigin::Ingredients { .. } => vec![
            Step::new("Combine all ingredients according to your preference."),
            Step::new("Cook until done to your liking."),
            Step::new("Serve and enjoy your meal!"),
        ],
    }
}

/// Reshapes a recipe database record into a [`Recipe`].
pub fn recipe_from_information(info: RecipeInformation, origin: RecipeOrigin<'_>) -> Recipe {
    let description = match (&info.summary, origin) {
        (Some(summary), _) => summarize(summary),
        (None, RecipeOrigin::Ingredients { first_ingredient }) => {
            format!("A delicious recipe using {first_ingredient}.")
        }
        (None, RecipeOrigin::DishName { .. }) => format!("A delicious {}.", info.title),
    };

    let cuisine = info
        .cuisines
        .first()
        .cloned()
        .or_else(|| match origin {
            RecipeOrigin::DishName { cuisine } => cuisine
                .filter(|c| !c.trim().is_empty())
                .map(str::to_string),
            RecipeOrigin::Ingredients { .. } => None,
        })
        .unwrap_or_else(|| DEFAULT_CUISINE.to_string());

    let ingredients = info
        .ingredients
        .into_iter()
        .map(|ingredient| Ingredient {
            amount: format_amount(ingredient.amount, &ingredient.unit),
            name: ingredient.name,
            notes: ingredient.original,
        })
        .collect();

    let steps: Vec<Step> = info
        .steps
        .into_iter()
        .map(|text| {
            let step = Step::new(text.clone());
            if text.chars().count() > LONG_STEP_THRESHOLD {
                step.with_tip(LONG_STEP_TIP)
            } else {
                step
            }
        })
        .collect();

    Recipe {
        name: info.title,
        description,
        cuisine,
        difficulty: difficulty_from_flags(info.very_popular, info.very_healthy),
        cooking_time: info
            .ready_in_minutes
            .filter(|m| *m > 0)
            .unwrap_or(DEFAULT_COOKING_TIME),
        servings: info.servings.filter(|s| *s > 0).unwrap_or(DEFAULT_SERVINGS),
        ingredients,
        steps: if steps.is_empty() {
            placeholder_steps(origin)
        } else {
            steps
        },
        image_url: info.image,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::recipe::value_objects::ExtendedIngredient;

    fn information() -> RecipeInformation {
        RecipeInformation {
            id: 716429,
            title: "Pasta with Garlic".to_string(),
            summary: Some(
                "<b>Pasta with Garlic</b> is a <a href=\"x\">main course</a>. It serves 2."
                    .to_string(),
            ),
            cuisines: vec![],
            very_popular: false,
            very_healthy: true,
            ready_in_minutes: Some(45),
            servings: Some(2),
            ingredients: vec![ExtendedIngredient {
                name: "butter".to_string(),
                amount: 1.0,
                unit: "tbsp".to_string(),
                original: Some("1 tbsp butter".to_string()),
            }],
            steps: vec!["Boil water.".to_string(), "x".repeat(101)],
            image: Some("https://img.example/716429.jpg".to_string()),
        }
    }

    #[test]
    fn test_summarize_strips_tags_and_keeps_first_sentence() {
        assert_eq!(
            summarize("<b>Tasty</b> soup. Second sentence."),
            "Tasty soup."
        );
        assert_eq!(summarize("no period"), "no period.");
    }

    #[test]
    fn test_difficulty_prefers_popularity() {
        assert_eq!(difficulty_from_flags(true, true), Difficulty::Easy);
        assert_eq!(difficulty_from_flags(false, true), Difficulty::Medium);
        assert_eq!(difficulty_from_flags(false, false), Difficulty::Hard);
    }

    #[test]
    fn test_format_amount_drops_trailing_zero() {
        assert_eq!(format_amount(2.0, "cups"), "2 cups");
        assert_eq!(format_amount(0.5, "tsp"), "0.5 tsp");
    }

    #[test]
    fn test_recipe_from_information_maps_fields() {
        let recipe = recipe_from_information(
            information(),
            RecipeOrigin::DishName {
                cuisine: Some("Italian"),
            },
        );

        assert_eq!(recipe.name, "Pasta with Garlic");
        assert_eq!(recipe.description, "Pasta with Garlic is a main course.");
        assert_eq!(recipe.cuisine, "Italian");
        assert_eq!(recipe.difficulty, Difficulty::Medium);
        assert_eq!(recipe.cooking_time, 45);
        assert_eq!(recipe.servings, 2);
        assert_eq!(recipe.ingredients[0].amount, "1 tbsp");
        assert_eq!(recipe.ingredients[0].notes.as_deref(), Some("1 tbsp butter"));
        assert_eq!(recipe.steps[0].tip, None);
        assert_eq!(recipe.steps[1].tip.as_deref(), Some(LONG_STEP_TIP));
        assert_eq!(
            recipe.image_url.as_deref(),
            Some("https://img.example/716429.jpg")
        );
    }

    #[test]
    fn test_recipe_from_information_uses_defaults_for_ingredient_search() {
        let info = RecipeInformation {
            summary: None,
            ready_in_minutes: None,
            servings: Some(0),
            steps: vec![],
            ..information()
        };

        let recipe = recipe_from_information(
            info,
            RecipeOrigin::Ingredients {
                first_ingredient: "tomato",
            },
        );

        assert_eq!(recipe.description, "A delicious recipe using tomato.");
        assert_eq!(recipe.cuisine, DEFAULT_CUISINE);
        assert_eq!(recipe.cooking_time, DEFAULT_COOKING_TIME);
        assert_eq!(recipe.servings, DEFAULT_SERVINGS);
        assert_eq!(recipe.steps.len(), 3);
    }

    #[test]
    fn test_listed_cuisine_wins_over_requested() {
        let info = RecipeInformation {
            cuisines: vec!["Mediterranean".to_string()],
            steps: vec![],
            ..information()
        };

        let recipe = recipe_from_information(
            info,
            RecipeOrigin::DishName {
                cuisine: Some("Italian"),
            },
        );

        assert_eq!(recipe.cuisine, "Mediterranean");
        assert_eq!(
            recipe.steps,
            vec![Step::new("No detailed steps available for this recipe.")]
        );
    }
}
