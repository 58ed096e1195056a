//! Common test utilities and fixtures
//!
//! Shared functionality used across all test modules.
// Each test binary compiles this module independently - keep everything public

use ryori::{IngredientSlot, Recipe};

/// Initialize test logging once per binary; safe to call repeatedly.
#[allow(dead_code)]
pub fn init_logs() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// Builds a recipe with the given populated ingredient slots, in order.
///
/// All other optional fields stay empty; tests that care about them set the
/// public fields directly.
#[allow(dead_code)]
pub fn recipe(id: &str, name: &str, ingredients: &[(&str, Option<&str>)]) -> Recipe {
    Recipe {
        id: id.to_string(),
        name: name.to_string(),
        thumbnail: None,
        area: None,
        category: None,
        tags: Vec::new(),
        video_url: None,
        instructions: None,
        ingredients: ingredients
            .iter()
            .map(|(ingredient, measure)| IngredientSlot {
                ingredient: ingredient.to_string(),
                measure: measure.map(str::to_string),
            })
            .collect(),
    }
}

/// Builds the partial record a filter query would return: id, name,
/// thumbnail, nothing else.
#[allow(dead_code)]
pub fn candidate(id: &str, name: &str) -> Recipe {
    let mut recipe = recipe(id, name, &[]);
    recipe.thumbnail = Some(format!("https://example.com/{}.jpg", id));
    recipe
}
