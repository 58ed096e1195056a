//! The user's pantry: an order-preserving set of normalized ingredients.
//!
//! Every ingredient passes through [`Pantry::normalize`] (trim + lowercase)
//! before it is stored or compared, so equality inside the set and inside the
//! matcher is plain string equality. The container itself never re-checks the
//! invariant; [`Pantry::add`] is the only way in.
//!
//! # Examples
//!
//! ```rust
//! use ryori::Pantry;
//!
//! let mut pantry = Pantry::new();
//! assert!(pantry.add("  Chicken "));
//! assert!(pantry.add("rice"));
//!
//! // Duplicates and blanks are rejected at the boundary.
//! assert!(!pantry.add("CHICKEN"));
//! assert!(!pantry.add("   "));
//!
//! assert_eq!(pantry.len(), 2);
//! assert_eq!(pantry.first(), Some("chicken"));
//! ```

use serde::{Deserialize, Serialize};

/// Order-preserving, duplicate-free collection of normalized ingredients.
///
/// Owned by the session and mutated only through [`add`](Pantry::add) and
/// [`remove`](Pantry::remove). Iteration order is insertion order, which is
/// also the order the ingredient search uses to pick its primary filter term.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Pantry {
    items: Vec<String>,
}

impl Pantry {
    /// Creates an empty pantry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Normalizes a raw ingredient string: trim, then lowercase.
    pub fn normalize(raw: &str) -> String {
        raw.trim().to_lowercase()
    }

    /// Adds an ingredient after normalization.
    ///
    /// Returns `true` if the ingredient was inserted at the end of the
    /// iteration order, `false` if the normalized form is empty or already
    /// present (the pantry is left untouched in both cases).
    pub fn add(&mut self, raw: &str) -> bool {
        let ingredient = Self::normalize(raw);
        if ingredient.is_empty() || self.items.contains(&ingredient) {
            return false;
        }
        self.items.push(ingredient);
        true
    }

    /// Removes an ingredient if present. Returns `true` when removed.
    pub fn remove(&mut self, ingredient: &str) -> bool {
        let ingredient = Self::normalize(ingredient);
        let before = self.items.len();
        self.items.retain(|item| *item != ingredient);
        self.items.len() != before
    }

    /// Returns `true` if the normalized form of `ingredient` is present.
    pub fn contains(&self, ingredient: &str) -> bool {
        self.items.contains(&Self::normalize(ingredient))
    }

    /// The first ingredient in insertion order, if any.
    ///
    /// The ingredient search uses this as its primary filter term, because
    /// the remote service filters by a single ingredient at a time.
    pub fn first(&self) -> Option<&str> {
        self.items.first().map(String::as_str)
    }

    /// Iterates over the ingredients in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.items.iter().map(String::as_str)
    }

    /// Returns the number of ingredients.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns `true` if the pantry holds no ingredients.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
