//! # Ryori - Recipe discovery and ingredient matching library
//!
//! Ryori is an async recipe discovery library that searches a remote recipe
//! database by name, by available ingredients, or by category/area, and
//! renders the results as ready-to-mount HTML fragments. It features an
//! ingredient pantry with normalized membership, an all-required ingredient
//! matcher, concurrent detail lookups, deterministic suppression of stale
//! search results, and a command dispatch that keeps the input surface
//! decoupled from the business logic.
//!
//! ## Features
//!
//! - **Four Search Modes**: by name, by pantry ingredients, by category, by
//!   area — all through one orchestrator
//! - **Ingredient Matching**: all-required, case-insensitive substring
//!   containment against a recipe's decoded ingredient slots
//! - **Async/Await Support**: built on tokio; the detail fan-out of an
//!   ingredient search runs its lookups concurrently
//! - **Last-Write-Wins Searches**: generation tokens discard the results of
//!   superseded searches instead of racing on the result pane
//! - **Busy Gauge**: a reference-counted loading indicator that composes
//!   across overlapping fetches
//! - **Pure Rendering**: summary cards, detail cards and browse grids as
//!   escaped HTML fragments, free of network and state
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use ryori::prelude::*;
//!
//! #[tokio::main]
//! async fn main() -> ryori::Result<()> {
//!     let mut finder = RecipeFinder::new();
//!
//!     finder.dispatch(Command::AddIngredient("Chicken".into())).await;
//!     finder.dispatch(Command::AddIngredient("rice".into())).await;
//!
//!     match finder.dispatch(Command::SearchByIngredients).await {
//!         Outcome::Results(fragment) => println!("{}", fragment),
//!         Outcome::Notice(message) => eprintln!("{}", message),
//!         Outcome::Failed { notice, .. } => eprintln!("{}", notice),
//!         _ => {}
//!     }
//!     Ok(())
//! }
//! ```
//!
//! ## Talking to the database directly
//!
//! The orchestrator is convenience, not a requirement; the source layer is
//! public:
//!
//! ```rust,no_run
//! use ryori::prelude::*;
//!
//! # async fn example() -> ryori::Result<()> {
//! let source = MealDb::new();
//!
//! let candidates = source.filter_ingredient("chicken").await?;
//! for candidate in candidates.iter().take(3) {
//!     if let Some(recipe) = source.lookup(&candidate.id).await? {
//!         println!("{}: {} ingredients", recipe.name, recipe.ingredients.len());
//!     }
//! }
//! # Ok(())
//! # }
//! ```
//!
//! ## Architecture
//!
//! The library is organized into several key modules:
//!
//! - [`finder`]: the search orchestrator and session state
//! - [`command`]: the user-action enum and dispatch
//! - [`source`]: the async seam over the remote database
//! - [`mealdb`]: TheMealDB implementation of that seam
//! - [`pantry`]: the normalized ingredient set
//! - [`matcher`]: the all-required substring matcher
//! - [`render`]: pure HTML-fragment rendering
//! - [`net`]: HTTP client and busy gauge
//! - [`error`]: the error taxonomy
//! - [`voice`]: optional speech-capture seam

pub mod command;
pub mod error;
pub mod finder;
pub mod matcher;
pub mod mealdb;
pub mod net;
pub mod pantry;
pub mod render;
pub mod source;
pub mod types;
pub mod voice;

/// Prelude module for convenient imports.
///
/// Re-exports the most commonly used types and traits, allowing a single
/// `use ryori::prelude::*;` to pull in everything a typical embedder needs.
///
/// # Example
///
/// ```rust
/// use ryori::prelude::*;
///
/// // Now you have access to:
/// // - RecipeFinder, Search, Command, Outcome
/// // - RecipeSource, MealDb
/// // - Recipe, IngredientSlot, Category, Pantry
/// // - SpeechCapture
/// ```
pub mod prelude {
    pub use crate::{
        command::{Command, Outcome},
        finder::{MAX_DETAIL_LOOKUPS, RecipeFinder, Search},
        mealdb::MealDb,
        pantry::Pantry,
        source::RecipeSource,
        types::{Category, IngredientSlot, Recipe},
        voice::SpeechCapture,
    };
}

// Re-export main types at crate root for direct access
pub use command::{Command, Outcome};
pub use error::{Error, Result};
pub use finder::{RecipeFinder, Search};
pub use mealdb::MealDb;
pub use pantry::Pantry;
pub use source::RecipeSource;
pub use types::{Category, IngredientSlot, Recipe};
