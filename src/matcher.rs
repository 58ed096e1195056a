//! The ingredient matcher: all-required substring containment.
//!
//! A recipe matches a pantry iff **every** pantry ingredient is a
//! case-insensitive substring of **at least one** of the recipe's ingredient
//! slots. This is containment, not exact-token matching: a pantry entry
//! "egg" matches a recipe slot "Egg Yolks".

use crate::{pantry::Pantry, types::Recipe};

/// Decides whether `recipe` satisfies every ingredient in `pantry`.
///
/// An empty pantry vacuously matches everything; callers that consider an
/// empty pantry invalid must reject it before reaching the matcher, which is
/// what [`RecipeFinder::search_by_ingredients`](crate::RecipeFinder::search_by_ingredients)
/// does.
///
/// # Examples
///
/// ```rust
/// use ryori::{matcher, IngredientSlot, Pantry, Recipe};
///
/// let recipe = Recipe {
///     id: "1".to_string(),
///     name: "Omelette".to_string(),
///     thumbnail: None,
///     area: None,
///     category: None,
///     tags: vec![],
///     video_url: None,
///     instructions: None,
///     ingredients: vec![IngredientSlot {
///         ingredient: "Egg Yolks".to_string(),
///         measure: None,
///     }],
/// };
///
/// let mut pantry = Pantry::new();
/// pantry.add("egg");
/// assert!(matcher::matches(&recipe, &pantry));
///
/// pantry.add("flour");
/// assert!(!matcher::matches(&recipe, &pantry));
/// ```
pub fn matches(recipe: &Recipe, pantry: &Pantry) -> bool {
    let slots: Vec<String> = recipe
        .ingredients
        .iter()
        .map(|slot| slot.ingredient.to_lowercase())
        .collect();

    pantry
        .iter()
        .all(|wanted| slots.iter().any(|have| have.contains(wanted)))
}
