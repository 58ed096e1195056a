//! The search orchestrator.
//!
//! [`RecipeFinder`] composes the [`RecipeSource`] seam with the pantry, the
//! matcher and the busy gauge to implement the four search modes:
//!
//! - by name
//! - by available ingredients (filter, then concurrent detail lookups, then
//!   the all-required matcher)
//! - by category
//! - by area
//!
//! Each search invocation takes a generation token at entry and re-checks it
//! after its awaits. A search that is no longer the latest finishes as
//! [`Search::Superseded`] and nothing of it is rendered, so overlapping
//! searches resolve last-write-wins deterministically instead of racing on
//! the result pane.
//!
//! # Examples
//!
//! ```rust,no_run
//! use ryori::prelude::*;
//!
//! # async fn example() -> ryori::Result<()> {
//! let mut finder = RecipeFinder::new();
//!
//! finder.pantry_mut().add("chicken");
//! finder.pantry_mut().add("rice");
//!
//! match finder.search_by_ingredients().await? {
//!     Search::Done(recipes) => println!("{} survivors", recipes.len()),
//!     Search::Skipped => {}
//!     Search::Superseded => {}
//! }
//! # Ok(())
//! # }
//! ```

use std::sync::atomic::{AtomicU64, Ordering};

use futures::future;
use log::{debug, warn};

use crate::{
    error::{Error, Result},
    matcher,
    mealdb::MealDb,
    net::BusyGauge,
    pantry::Pantry,
    source::RecipeSource,
    types::{Category, Recipe},
    voice::SpeechCapture,
};

/// Upper bound on concurrent detail lookups per ingredient search.
///
/// A filter query can return hundreds of candidates; only the first ten get
/// a detail lookup, bounding the worst-case request fan-out.
pub const MAX_DETAIL_LOOKUPS: usize = 10;

/// Outcome of one orchestrated search.
#[derive(Debug, Clone)]
pub enum Search {
    /// The search completed; holds the recipes that qualified (possibly
    /// none).
    Done(Vec<Recipe>),
    /// The input was empty after trimming; no request was issued and no
    /// state changed.
    Skipped,
    /// A newer search started while this one was in flight; its result must
    /// not be rendered.
    Superseded,
}

/// Orchestrates searches against a [`RecipeSource`].
///
/// The finder owns the session state: the pantry, the busy gauge, the
/// generation counter and an optional speech-capture collaborator. Search
/// methods take `&self` and may overlap; pantry mutation goes through
/// [`pantry_mut`](RecipeFinder::pantry_mut) or
/// [`dispatch`](RecipeFinder::dispatch).
pub struct RecipeFinder {
    source: Box<dyn RecipeSource>,
    pantry: Pantry,
    busy: BusyGauge,
    generation: AtomicU64,
    speech: Option<Box<dyn SpeechCapture>>,
}

impl RecipeFinder {
    /// Creates a finder backed by the public TheMealDB API.
    pub fn new() -> Self {
        Self::with_source(Box::new(MealDb::new()))
    }

    /// Creates a finder backed by the given source.
    pub fn with_source(source: Box<dyn RecipeSource>) -> Self {
        Self {
            source,
            pantry: Pantry::new(),
            busy: BusyGauge::new(),
            generation: AtomicU64::new(0),
            speech: None,
        }
    }

    /// Attaches a speech-capture collaborator for voice input.
    pub fn with_speech(mut self, speech: Box<dyn SpeechCapture>) -> Self {
        self.speech = Some(speech);
        self
    }

    /// The session pantry.
    pub fn pantry(&self) -> &Pantry {
        &self.pantry
    }

    /// Mutable access to the session pantry.
    pub fn pantry_mut(&mut self) -> &mut Pantry {
        &mut self.pantry
    }

    /// `true` while at least one fetch is in flight.
    pub fn is_busy(&self) -> bool {
        self.busy.is_busy()
    }

    /// Runs the configured speech capture, if any.
    ///
    /// Returns `None` when no collaborator is attached, which callers report
    /// as "voice input is not supported".
    pub async fn capture_speech(&self) -> Option<Result<String>> {
        match &self.speech {
            Some(speech) => Some(speech.capture().await),
            None => None,
        }
    }

    fn begin_search(&self) -> u64 {
        self.generation.fetch_add(1, Ordering::SeqCst) + 1
    }

    fn is_current(&self, token: u64) -> bool {
        self.generation.load(Ordering::SeqCst) == token
    }

    /// Searches recipes by name.
    ///
    /// An empty term (after trimming) is a no-op: no request is issued, no
    /// generation is consumed, and [`Search::Skipped`] comes back.
    pub async fn search_by_name(&self, term: &str) -> Result<Search> {
        let term = term.trim();
        if term.is_empty() {
            return Ok(Search::Skipped);
        }

        let token = self.begin_search();
        let recipes = {
            let _busy = self.busy.begin();
            self.source.search_name(term).await?
        };

        if !self.is_current(token) {
            return Ok(Search::Superseded);
        }
        Ok(Search::Done(recipes))
    }

    /// Searches recipes matching every ingredient in the pantry.
    ///
    /// The remote service filters by one ingredient at a time, so the first
    /// pantry ingredient (insertion order) is the primary filter term. At
    /// most [`MAX_DETAIL_LOOKUPS`] candidates are looked up concurrently;
    /// lookups that fail or come back empty are discarded, and the matcher
    /// then requires the **full** pantry. Survivor order is candidate order.
    ///
    /// # Errors
    ///
    /// [`Error::Validation`] when the pantry is empty; no request is issued.
    pub async fn search_by_ingredients(&self) -> Result<Search> {
        let Some(primary) = self.pantry.first() else {
            return Err(Error::validation("Please add at least one ingredient."));
        };

        let token = self.begin_search();
        let candidates = {
            let _busy = self.busy.begin();
            self.source.filter_ingredient(primary).await?
        };
        debug!(
            "ingredient filter '{}' returned {} candidates",
            primary,
            candidates.len()
        );

        if !self.is_current(token) {
            return Ok(Search::Superseded);
        }

        let lookups = candidates.iter().take(MAX_DETAIL_LOOKUPS).map(|candidate| {
            let gauge = self.busy.clone();
            async move {
                let _busy = gauge.begin();
                (candidate.id.as_str(), self.source.lookup(&candidate.id).await)
            }
        });
        let detailed = future::join_all(lookups).await;

        if !self.is_current(token) {
            return Ok(Search::Superseded);
        }

        let mut survivors = Vec::new();
        for (id, looked_up) in detailed {
            match looked_up {
                Ok(Some(recipe)) => {
                    if matcher::matches(&recipe, &self.pantry) {
                        survivors.push(recipe);
                    }
                }
                Ok(None) => debug!("candidate {} has no detail record", id),
                Err(e) => warn!("detail lookup for candidate {} failed: {}", id, e),
            }
        }
        debug!("{} survivors after matching", survivors.len());
        Ok(Search::Done(survivors))
    }

    /// Lists recipes in a category.
    pub async fn filter_by_category(&self, category: &str) -> Result<Search> {
        let category = category.trim();
        if category.is_empty() {
            return Ok(Search::Skipped);
        }

        let token = self.begin_search();
        let recipes = {
            let _busy = self.busy.begin();
            self.source.filter_category(category).await?
        };

        if !self.is_current(token) {
            return Ok(Search::Superseded);
        }
        Ok(Search::Done(recipes))
    }

    /// Lists recipes from a cuisine area.
    pub async fn filter_by_area(&self, area: &str) -> Result<Search> {
        let area = area.trim();
        if area.is_empty() {
            return Ok(Search::Skipped);
        }

        let token = self.begin_search();
        let recipes = {
            let _busy = self.busy.begin();
            self.source.filter_area(area).await?
        };

        if !self.is_current(token) {
            return Ok(Search::Superseded);
        }
        Ok(Search::Done(recipes))
    }

    /// Fetches the full record for a recipe id.
    pub async fn lookup(&self, id: &str) -> Result<Option<Recipe>> {
        let _busy = self.busy.begin();
        self.source.lookup(id).await
    }

    /// Fetches one random full record.
    pub async fn random(&self) -> Result<Option<Recipe>> {
        let _busy = self.busy.begin();
        self.source.random().await
    }

    /// Lists all browsable categories.
    pub async fn categories(&self) -> Result<Vec<Category>> {
        let _busy = self.busy.begin();
        self.source.list_categories().await
    }

    /// Lists all cuisine area names.
    pub async fn areas(&self) -> Result<Vec<String>> {
        let _busy = self.busy.begin();
        self.source.list_areas().await
    }
}

impl Default for RecipeFinder {
    fn default() -> Self {
        Self::new()
    }
}
