use crate::domain::{
    recipe::entities::Recipe,
    video::value_objects::{CHEF_AVATAR, CHEF_TEMPLATE, KITCHEN_BACKGROUND, VideoRequest},
};

/// Narration read by the AI chef.
pub fn build_script(recipe: &Recipe) -> String {
    let ingredients = recipe
        .ingredients
        .iter()
        .map(|ingredient| match &ingredient.notes {
            Some(notes) => format!("{} {} ({})", ingredient.amount, ingredient.name, notes),
            None => format!("{} {}", ingredient.amount, ingredient.name),
        })
        .collect::<Vec<String>>()
        .join(", ");

    let steps = recipe
        .steps
        .iter()
        .enumerate()
        .map(|(index, step)| match &step.tip {
            Some(tip) => format!("Step {}: {} (Tip: {})", index + 1, step.instruction, tip),
            None => format!("Step {}: {}", index + 1, step.instruction),
        })
        .collect::<Vec<String>>()
        .join("\n");

    format!(
        "Recipe: {}\nDescription: {}\nCuisine: {}\nDifficulty: {}\nCooking Time: {} minutes\nServings: {}\n\nIngredients:\n{}\n\nInstructions:\n{}\n",
        recipe.name,
        recipe.description,
        recipe.cuisine,
        recipe.difficulty,
        recipe.cooking_time,
        recipe.servings,
        ingredients,
        steps
    )
}

pub fn video_request(recipe: &Recipe) -> VideoRequest {
    VideoRequest {
        title: format!("Cooking Tutorial: {}", recipe.name),
        description: format!("AI Chef explains how to make {}", recipe.name),
        script: build_script(recipe),
        avatar: CHEF_AVATAR.to_string(),
        background: KITCHEN_BACKGROUND.to_string(),
        template_id: CHEF_TEMPLATE.to_string(),
    }
}
