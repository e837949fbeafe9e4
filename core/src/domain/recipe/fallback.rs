//! Statically defined recipes served when the recipe database cannot answer.

use crate::domain::recipe::{
    entities::{Difficulty, Ingredient, Recipe, Step},
    helpers::DEFAULT_CUISINE,
};

pub const FALLBACK_NOTE: &str = "Using fallback recipe due to API error";

/// Generic recipe built around the requested dish name.
pub fn fallback_recipe(dish_name: &str, cuisine: Option<&str>) -> Recipe {
    let name = match dish_name.trim() {
        "" => "Delicious Meal",
        trimmed => trimmed,
    };

    Recipe {
        name: name.to_string(),
        description: format!("A delicious {name} recipe prepared with fresh ingredients."),
        cuisine: cuisine
            .filter(|c| !c.trim().is_empty())
            .unwrap_or(DEFAULT_CUISINE)
            .to_string(),
        difficulty: Difficulty::Medium,
        cooking_time: 30,
        servings: 4,
        ingredients: basic_ingredients(),
        steps: vec![
            Step::new("Prepare all ingredients."),
            Step::new("Heat olive oil in a pan over medium heat. Add onions and cook until translucent."),
            Step::new("Add garlic and cook for another minute until fragrant."),
            Step::new("Add the main ingredient and cook according to its type.")
                .with_tip("Cooking times vary depending on the ingredient."),
            Step::new("Season with salt and pepper to taste."),
            Step::new("Serve hot and enjoy your meal!"),
        ],
        image_url: None,
    }
}

/// Last resort when not even a dish name is known.
pub fn simple_dish() -> Recipe {
    Recipe {
        name: "Simple Dish".to_string(),
        description: "A simple and delicious meal.".to_string(),
        cuisine: DEFAULT_CUISINE.to_string(),
        difficulty: Difficulty::Easy,
        cooking_time: 20,
        servings: 2,
        ingredients: vec![
            Ingredient::new("ingredient 1", "as needed"),
            Ingredient::new("ingredient 2", "as needed"),
        ],
        steps: vec![Step::new("Combine all ingredients and cook until done.")],
        image_url: None,
    }
}

fn basic_ingredients() -> Vec<Ingredient> {
    vec![
        Ingredient::new("main ingredient", "500g"),
        Ingredient::new("olive oil", "2 tbsp"),
        Ingredient::new("garlic", "2 cloves").with_notes("Minced"),
        Ingredient::new("onion", "1 medium").with_notes("Diced"),
        Ingredient::new("salt and pepper", "to taste"),
    ]
}

/// Offline recipe used by the client when the backend is unreachable.
///
/// A few well known dishes get a full hand written recipe, anything else gets
/// the generic template.
pub fn mock_recipe(dish_name: &str, cuisine: Option<&str>) -> Recipe {
    if dish_name.trim().is_empty() {
        return simple_dish();
    }

    if dish_name.contains("Pasta") || dish_name.contains("Carbonara") {
        carbonara(cuisine)
    } else if dish_name.contains("Cake") || dish_name.contains("Chocolate") {
        chocolate_cake()
    } else if dish_name.contains("Chicken") || dish_name.contains("Tikka") {
        tikka_masala()
    } else {
        let mut recipe = fallback_recipe(dish_name, cuisine);
        recipe.description = format!(
            "A delicious {} prepared with fresh ingredients.",
            dish_name.to_lowercase()
        );
        recipe.steps[0] = Step::new("Prepare all ingredients as specified in the ingredients list.");
        recipe.steps[3] = Step::new("Add the main ingredient and cook according to its type.")
            .with_tip(
                "Cooking times vary depending on the ingredient. Make sure it's cooked through properly.",
            );
        recipe
    }
}

fn carbonara(cuisine: Option<&str>) -> Recipe {
    Recipe {
        name: "Creamy Pasta Carbonara".to_string(),
        description:
            "A rich and creamy Italian pasta dish with pancetta, eggs, and Parmesan cheese."
                .to_string(),
        cuisine: cuisine.unwrap_or("Italian").to_string(),
        difficulty: Difficulty::Medium,
        cooking_time: 25,
        servings: 4,
        ingredients: vec![
            Ingredient::new("spaghetti", "400g"),
            Ingredient::new("pancetta or guanciale", "150g").with_notes("Diced into small cubes"),
            Ingredient::new("egg yolks", "6"),
            Ingredient::new("Parmesan cheese", "50g")
                .with_notes("Freshly grated, plus extra for serving"),
            Ingredient::new("black pepper", "1 tsp").with_notes("Freshly ground"),
            Ingredient::new("salt", "to taste"),
            Ingredient::new("garlic", "2 cloves").with_notes("Minced (optional)"),
        ],
        steps: vec![
            Step::new("Bring a large pot of salted water to a boil and cook the spaghetti according to package instructions until al dente."),
            Step::new("While the pasta is cooking, heat a large skillet over medium heat. Add the pancetta and cook until crispy, about 5-7 minutes.")
                .with_tip("The fat rendered from the pancetta will be used to coat the pasta, so don't drain it."),
            Step::new("If using garlic, add it to the pancetta and cook for about 30 seconds until fragrant. Remove from heat."),
            Step::new("In a bowl, whisk together the egg yolks, grated Parmesan, and a generous amount of black pepper."),
            Step::new("When the pasta is done, reserve about 1/2 cup of the pasta water, then drain the pasta."),
            Step::new("Working quickly, add the hot pasta to the skillet with the pancetta. Toss to coat the pasta in the rendered fat.")
                .with_tip("The pasta needs to be hot to partially cook the egg mixture without scrambling it."),
            Step::new("Remove the skillet from the heat completely and pour in the egg and cheese mixture, tossing constantly to create a creamy sauce. Add a splash of the reserved pasta water if needed to loosen the sauce."),
            Step::new("Serve immediately with extra grated Parmesan and freshly ground black pepper."),
        ],
        image_url: None,
    }
}

fn chocolate_cake() -> Recipe {
    Recipe {
        name: "Decadent Chocolate Cake".to_string(),
        description: "A rich, moist chocolate cake with a silky ganache frosting.".to_string(),
        cuisine: "Dessert".to_string(),
        difficulty: Difficulty::Medium,
        cooking_time: 60,
        servings: 8,
        ingredients: vec![
            Ingredient::new("all-purpose flour", "2 cups"),
            Ingredient::new("granulated sugar", "2 cups"),
            Ingredient::new("unsweetened cocoa powder", "3/4 cup"),
            Ingredient::new("baking powder", "2 tsp"),
            Ingredient::new("baking soda", "1 1/2 tsp"),
            Ingredient::new("salt", "1 tsp"),
            Ingredient::new("eggs", "2 large"),
            Ingredient::new("milk", "1 cup"),
            Ingredient::new("vegetable oil", "1/2 cup"),
            Ingredient::new("vanilla extract", "2 tsp"),
            Ingredient::new("boiling water", "1 cup"),
            Ingredient::new("heavy cream", "1 cup").with_notes("For ganache"),
            Ingredient::new("semi-sweet chocolate chips", "1 1/2 cups").with_notes("For ganache"),
        ],
        steps: vec![
            Step::new("Preheat oven to 350°F (175°C). Grease and flour two 9-inch round cake pans."),
            Step::new("In a large bowl, whisk together flour, sugar, cocoa powder, baking powder, baking soda, and salt."),
            Step::new("Add eggs, milk, oil, and vanilla to the dry ingredients and mix with an electric mixer on medium speed for about 2 minutes.")
                .with_tip("The batter will be quite thick at this stage."),
            Step::new("Stir in boiling water. The batter will become thin, which is normal."),
            Step::new("Pour batter evenly into the prepared pans and bake for 30-35 minutes, or until a toothpick inserted in the center comes out clean."),
            Step::new("Allow cakes to cool in the pans for 10 minutes, then remove from pans and cool completely on wire racks."),
            Step::new("For the ganache, heat heavy cream until it just begins to simmer (don't let it boil). Pour over chocolate chips in a bowl and let sit for 5 minutes, then stir until smooth."),
            Step::new("Once the cakes are completely cool, spread ganache over one layer, stack the second layer on top, and cover the entire cake with the remaining ganache."),
        ],
        image_url: None,
    }
}

fn tikka_masala() -> Recipe {
    Recipe {
        name: "Authentic Chicken Tikka Masala".to_string(),
        description: "Tender pieces of chicken in a rich, spiced tomato cream sauce.".to_string(),
        cuisine: "Indian".to_string(),
        difficulty: Difficulty::Medium,
        cooking_time: 45,
        servings: 4,
        ingredients: vec![
            Ingredient::new("boneless chicken breasts", "800g").with_notes("Cut into bite-sized pieces"),
            Ingredient::new("plain yogurt", "1 cup").with_notes("For marinade"),
            Ingredient::new("lemon juice", "2 tbsp").with_notes("For marinade"),
            Ingredient::new("ginger", "1 tbsp").with_notes("Grated, for marinade"),
            Ingredient::new("garlic", "3 cloves").with_notes("Minced, for marinade"),
            Ingredient::new("garam masala", "2 tsp").with_notes("For marinade"),
            Ingredient::new("ground cumin", "1 tsp").with_notes("For marinade"),
            Ingredient::new("ground turmeric", "1/2 tsp").with_notes("For marinade"),
            Ingredient::new("vegetable oil", "2 tbsp"),
            Ingredient::new("onion", "1 large").with_notes("Finely diced"),
            Ingredient::new("garlic", "3 cloves").with_notes("Minced, for sauce"),
            Ingredient::new("ginger", "1 tbsp").with_notes("Grated, for sauce"),
            Ingredient::new("ground coriander", "1 tsp"),
            Ingredient::new("ground cumin", "1 tsp"),
            Ingredient::new("paprika", "1 tsp"),
            Ingredient::new("garam masala", "1 tsp"),
            Ingredient::new("crushed tomatoes", "400g can"),
            Ingredient::new("tomato paste", "2 tbsp"),
            Ingredient::new("heavy cream", "1 cup"),
            Ingredient::new("salt", "to taste"),
            Ingredient::new("fresh cilantro", "handful").with_notes("Chopped, for garnish"),
        ],
        steps: vec![
            Step::new("In a bowl, mix yogurt, lemon juice, ginger, garlic, garam masala, cumin, and turmeric. Add chicken and marinate for at least 1 hour, preferably overnight in the refrigerator.")
                .with_tip("The longer you marinate, the more flavorful the chicken will be."),
            Step::new("Preheat oven to 450°F (230°C). Thread chicken onto skewers and place on a baking sheet. Bake for 15 minutes, or until the chicken is cooked through."),
            Step::new("Meanwhile, heat oil in a large pan over medium heat. Add onion and cook until softened, about 5 minutes."),
            Step::new("Add garlic and ginger to the pan and cook for 1 minute. Add ground coriander, cumin, paprika, and garam masala. Cook for another minute to toast the spices."),
            Step::new("Add crushed tomatoes and tomato paste. Simmer for 15 minutes, stirring occasionally."),
            Step::new("Stir in heavy cream and simmer until the sauce thickens, about 5 minutes."),
            Step::new("Add the baked chicken pieces to the sauce and simmer for 5 more minutes.")
                .with_tip("If the sauce is too thick, add a little water or chicken stock to reach your desired consistency."),
            Step::new("Season with salt to taste. Garnish with fresh chopped cilantro and serve with naan bread or rice."),
        ],
        image_url: None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fallback_recipe_keeps_dish_name_and_cuisine() {
        let recipe = fallback_recipe("Pad Thai", Some("Thai"));
        assert_eq!(recipe.name, "Pad Thai");
        assert_eq!(recipe.cuisine, "Thai");
        assert_eq!(recipe.steps.len(), 6);
        assert!(recipe.description.contains("Pad Thai"));
    }

    #[test]
    fn test_fallback_recipe_without_name() {
        let recipe = fallback_recipe("  ", None);
        assert_eq!(recipe.name, "Delicious Meal");
        assert_eq!(recipe.cuisine, DEFAULT_CUISINE);
    }

    #[test]
    fn test_mock_recipe_picks_known_dishes() {
        assert_eq!(mock_recipe("Pasta Carbonara", None).name, "Creamy Pasta Carbonara");
        assert_eq!(mock_recipe("Chocolate Cake", None).cuisine, "Dessert");
        assert_eq!(
            mock_recipe("Chicken Tikka Masala", None).name,
            "Authentic Chicken Tikka Masala"
        );
        assert_eq!(mock_recipe("", None), simple_dish());
    }

    #[test]
    fn test_mock_recipe_default_template() {
        let recipe = mock_recipe("Mushroom Risotto", Some("Italian"));
        assert_eq!(recipe.name, "Mushroom Risotto");
        assert_eq!(recipe.cuisine, "Italian");
        assert_eq!(
            recipe.description,
            "A delicious mushroom risotto prepared with fresh ingredients."
        );
        assert!(recipe.steps[3].tip.is_some());
    }
}
