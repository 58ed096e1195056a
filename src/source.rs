//! The async seam over a remote recipe database.
//!
//! This module defines the [`RecipeSource`] trait that the search
//! orchestrator talks to. The crate ships one implementation,
//! [`MealDb`](crate::MealDb); tests and embedders can provide their own
//! (fixtures, mirrors, caching fronts) without touching the orchestrator.
//!
//! # Examples
//!
//! ```rust
//! use ryori::prelude::*;
//!
//! # async fn example() -> ryori::Result<()> {
//! let source = MealDb::new();
//! let recipes = source.search_name("Arrabiata").await?;
//! println!("found {} recipes", recipes.len());
//! # Ok(())
//! # }
//! ```

use async_trait::async_trait;

use crate::{
    error::Result,
    types::{Category, Recipe},
};

/// Interface to a remote recipe database.
///
/// Every method issues at most one logical query and returns fully decoded
/// [`Recipe`]/[`Category`] records. Implementations map "well-formed response
/// but nothing matched" to an empty vector or `None`, never to an error.
///
/// # Implementation Guidelines
///
/// - Use [`net::HttpClient`](crate::net::HttpClient) for HTTP requests
/// - Decode the wire format's positional ingredient slots once, at this
///   boundary, so consumers only ever see [`Recipe::ingredients`]
/// - Return detailed errors using the [`Error`](crate::Error) taxonomy
#[async_trait]
pub trait RecipeSource: Send + Sync {
    /// Full-text search by recipe name.
    async fn search_name(&self, term: &str) -> Result<Vec<Recipe>>;

    /// Filters by a single ingredient.
    ///
    /// The returned records are partial: the remote service answers filter
    /// queries with id, name and thumbnail only. A
    /// [`lookup`](RecipeSource::lookup) is required before the ingredient
    /// list is available.
    async fn filter_ingredient(&self, ingredient: &str) -> Result<Vec<Recipe>>;

    /// Filters by category. Partial records, as with
    /// [`filter_ingredient`](RecipeSource::filter_ingredient).
    async fn filter_category(&self, category: &str) -> Result<Vec<Recipe>>;

    /// Filters by cuisine area. Partial records, as with
    /// [`filter_ingredient`](RecipeSource::filter_ingredient).
    async fn filter_area(&self, area: &str) -> Result<Vec<Recipe>>;

    /// Fetches the full record for a recipe id.
    ///
    /// Returns `Ok(None)` when the id matches nothing; that is the normal
    /// empty path, not an error.
    async fn lookup(&self, id: &str) -> Result<Option<Recipe>>;

    /// Fetches one random full record.
    async fn random(&self) -> Result<Option<Recipe>>;

    /// Lists all browsable categories.
    async fn list_categories(&self) -> Result<Vec<Category>>;

    /// Lists all cuisine area names.
    async fn list_areas(&self) -> Result<Vec<String>>;
}
