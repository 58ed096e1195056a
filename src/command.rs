//! Command dispatch: user actions mapped onto orchestrator calls.
//!
//! The original input surface for a finder like this is a pile of UI event
//! callbacks. Here that surface is an explicit enum: every user action is a
//! [`Command`], every command resolves to an [`Outcome`], and the input
//! source (web view, TUI, test harness) stays fully decoupled from the
//! business logic.
//!
//! [`RecipeFinder::dispatch`] never returns an error. Fetch failures are
//! caught at this boundary, logged, and translated into
//! [`Outcome::Failed`] — a user-visible notice plus the empty-state fragment
//! so stale results never linger on screen.
//!
//! # Examples
//!
//! ```rust,no_run
//! use ryori::prelude::*;
//!
//! # async fn example() {
//! let mut finder = RecipeFinder::new();
//!
//! finder.dispatch(Command::AddIngredient("Chicken".into())).await;
//!
//! match finder.dispatch(Command::SearchByIngredients).await {
//!     Outcome::Results(fragment) => println!("{}", fragment),
//!     Outcome::Notice(message) => eprintln!("{}", message),
//!     Outcome::Failed { notice, .. } => eprintln!("{}", notice),
//!     _ => {}
//! }
//! # }
//! ```

use log::warn;

use crate::{
    error::{Error, Result},
    finder::{RecipeFinder, Search},
    render,
    types::Recipe,
};

/// Notice shown when a fetch fails; the user re-triggers the action, there
/// is no automatic retry.
const FETCH_FAILED_NOTICE: &str = "Failed to fetch data. Please try again.";
/// Notice shown when no speech collaborator is attached.
const VOICE_UNSUPPORTED_NOTICE: &str = "Voice input is not supported.";
/// Notice shown when the attached speech collaborator errors.
const VOICE_FAILED_NOTICE: &str = "Voice input failed. Please try again.";

/// A user action.
#[derive(Debug, Clone)]
pub enum Command {
    /// Search recipes by name.
    SearchByName(String),
    /// Add an ingredient to the pantry.
    AddIngredient(String),
    /// Remove an ingredient from the pantry.
    RemoveIngredient(String),
    /// Search recipes matching every pantry ingredient.
    SearchByIngredients,
    /// List recipes in a category.
    SelectCategory(String),
    /// List recipes from a cuisine area.
    SelectArea(String),
    /// Open the detail view for a recipe id.
    ShowDetail(String),
    /// Close the detail view.
    CloseDetail,
    /// Fetch and show one random recipe.
    RandomRecipe,
    /// Capture one spoken phrase and add it to the pantry.
    VoiceInput,
    /// Load the category browse grid.
    BrowseCategories,
    /// Load the area browse list.
    BrowseAreas,
}

/// What a dispatched command produced.
#[derive(Debug, Clone)]
pub enum Outcome {
    /// Fragment for the results pane (cards, browse grid, or the empty
    /// placeholder).
    Results(String),
    /// Fragment for the detail overlay.
    Detail(String),
    /// Re-rendered pantry tag list.
    Pantry(String),
    /// User-visible message; existing results stay on screen.
    Notice(String),
    /// A fetch failed: user-visible notice plus the empty-state fragment to
    /// replace whatever the pane showed before.
    Failed { notice: String, fragment: String },
    /// The detail overlay was dismissed.
    Dismissed,
    /// The command's search finished after a newer one; render nothing.
    Superseded,
    /// The command changed nothing.
    None,
}

impl RecipeFinder {
    /// Executes one user action and funnels the result through the renderer.
    pub async fn dispatch(&mut self, command: Command) -> Outcome {
        match command {
            Command::SearchByName(term) => listing_outcome(self.search_by_name(&term).await),
            Command::SearchByIngredients => listing_outcome(self.search_by_ingredients().await),
            Command::SelectCategory(category) => {
                listing_outcome(self.filter_by_category(&category).await)
            }
            Command::SelectArea(area) => listing_outcome(self.filter_by_area(&area).await),

            Command::AddIngredient(raw) => {
                if self.pantry_mut().add(&raw) {
                    Outcome::Pantry(render::pantry_tags(self.pantry()))
                } else {
                    Outcome::None
                }
            }
            Command::RemoveIngredient(ingredient) => {
                self.pantry_mut().remove(&ingredient);
                Outcome::Pantry(render::pantry_tags(self.pantry()))
            }

            Command::ShowDetail(id) => detail_outcome(self.lookup(&id).await),
            Command::CloseDetail => Outcome::Dismissed,
            Command::RandomRecipe => detail_outcome(self.random().await),

            Command::VoiceInput => match self.capture_speech().await {
                Some(Ok(phrase)) => {
                    if self.pantry_mut().add(&phrase) {
                        Outcome::Pantry(render::pantry_tags(self.pantry()))
                    } else {
                        Outcome::None
                    }
                }
                Some(Err(e)) => {
                    warn!("speech capture failed: {}", e);
                    Outcome::Notice(VOICE_FAILED_NOTICE.to_string())
                }
                None => Outcome::Notice(VOICE_UNSUPPORTED_NOTICE.to_string()),
            },

            Command::BrowseCategories => match self.categories().await {
                Ok(categories) => Outcome::Results(render::category_cards(&categories)),
                Err(e) => failed(e),
            },
            Command::BrowseAreas => match self.areas().await {
                Ok(areas) => Outcome::Results(render::area_chips(&areas)),
                Err(e) => failed(e),
            },
        }
    }
}

fn listing_outcome(result: Result<Search>) -> Outcome {
    match result {
        Ok(Search::Done(recipes)) => Outcome::Results(render::results(&recipes)),
        Ok(Search::Skipped) => Outcome::None,
        Ok(Search::Superseded) => Outcome::Superseded,
        Err(Error::Validation(message)) => Outcome::Notice(message),
        Err(e) => failed(e),
    }
}

fn detail_outcome(result: Result<Option<Recipe>>) -> Outcome {
    match result {
        Ok(Some(recipe)) => Outcome::Detail(render::detail_card(&recipe)),
        Ok(None) => Outcome::Detail(render::empty_results()),
        Err(e) => failed(e),
    }
}

fn failed(error: Error) -> Outcome {
    warn!("fetch failed: {}", error);
    Outcome::Failed {
        notice: FETCH_FAILED_NOTICE.to_string(),
        fragment: render::empty_results(),
    }
}
