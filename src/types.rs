//! Core data types for recipes, ingredient slots, and categories.
//!
//! This module defines the fundamental data structures used throughout ryori:
//!
//! - [`Recipe`] - A recipe record, fully decoded from the wire format
//! - [`IngredientSlot`] - One populated (ingredient, measure) pair
//! - [`Category`] - A browsable recipe category
//!
//! The remote database transmits a recipe's ingredient list as twenty
//! positional `strIngredient1..20` / `strMeasure1..20` fields, any of which
//! may be absent or blank. That scan happens exactly once, at the API
//! boundary: by the time a [`Recipe`] exists, its `ingredients` vector holds
//! only the populated slots, in slot order. The matcher and the renderer both
//! consume that vector and never look at the raw fields.
//!
//! # Examples
//!
//! ```rust
//! use ryori::types::{IngredientSlot, Recipe};
//!
//! let recipe = Recipe {
//!     id: "52771".to_string(),
//!     name: "Spicy Arrabiata Penne".to_string(),
//!     thumbnail: Some("https://example.com/arrabiata.jpg".to_string()),
//!     area: Some("Italian".to_string()),
//!     category: Some("Vegetarian".to_string()),
//!     tags: vec!["Pasta".to_string()],
//!     video_url: None,
//!     instructions: Some("Boil the penne.\nMake the sauce.".to_string()),
//!     ingredients: vec![IngredientSlot {
//!         ingredient: "penne rigate".to_string(),
//!         measure: Some("1 pound".to_string()),
//!     }],
//! };
//!
//! assert_eq!(recipe.ingredients.len(), 1);
//! ```

use serde::{Deserialize, Serialize};

/// Number of positional ingredient slots in the wire format.
pub const MAX_INGREDIENT_SLOTS: usize = 20;

/// A recipe record.
///
/// Filter queries return partial records (id, name, thumbnail only); the
/// remaining fields stay `None`/empty until a detail lookup fills them in.
/// Recipes are fetched fresh on every request and never cached or mutated
/// locally.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Recipe {
    /// Unique identifier within the remote database
    pub id: String,

    /// Display name
    pub name: String,

    /// Thumbnail image URL
    pub thumbnail: Option<String>,

    /// Cuisine area, e.g. "Italian"
    pub area: Option<String>,

    /// Category, e.g. "Seafood"
    pub category: Option<String>,

    /// Free-form tags, already split from the wire's comma-separated string
    #[serde(default)]
    pub tags: Vec<String>,

    /// Link to a cooking video
    pub video_url: Option<String>,

    /// Free-text instructions with line-break-separated steps
    pub instructions: Option<String>,

    /// Populated ingredient slots, in slot order
    #[serde(default)]
    pub ingredients: Vec<IngredientSlot>,
}

/// One populated ingredient slot of a recipe.
///
/// The measure is optional; the wire format happily pairs a named ingredient
/// with a blank measure.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IngredientSlot {
    /// Ingredient name as the database spells it, e.g. "Egg Yolks"
    pub ingredient: String,

    /// Quantity text, e.g. "1/2 cup"
    pub measure: Option<String>,
}

/// A browsable recipe category.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Category {
    /// Unique identifier within the remote database
    pub id: String,

    /// Display name, e.g. "Seafood"
    pub name: String,

    /// Thumbnail image URL
    pub thumbnail: Option<String>,

    /// Longer description text
    pub description: Option<String>,
}
