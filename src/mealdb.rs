//! TheMealDB implementation of [`RecipeSource`].

use std::collections::HashMap;

use async_trait::async_trait;
use log::debug;
use serde::Deserialize;
use serde_json::Value;

use crate::{
    error::Result,
    net::HttpClient,
    source::RecipeSource,
    types::{Category, IngredientSlot, MAX_INGREDIENT_SLOTS, Recipe},
};

/// Base address of the public TheMealDB JSON API.
pub const DEFAULT_BASE_URL: &str = "https://www.themealdb.com/api/json/v1/1";

/// List envelope; `meals` is null or absent when nothing matched
#[derive(Debug, Deserialize)]
struct MealsEnvelope {
    #[serde(default)]
    meals: Option<Vec<MealRecord>>,
}

/// Category listing envelope
#[derive(Debug, Deserialize)]
struct CategoriesEnvelope {
    #[serde(default)]
    categories: Option<Vec<CategoryRecord>>,
}

/// Area listing rows arrive through the `meals` field as `{"strArea": ...}`
#[derive(Debug, Deserialize)]
struct AreasEnvelope {
    #[serde(default)]
    meals: Option<Vec<AreaRecord>>,
}

#[derive(Debug, Deserialize)]
struct AreaRecord {
    #[serde(rename = "strArea")]
    area: String,
}

#[derive(Debug, Deserialize)]
struct CategoryRecord {
    #[serde(rename = "idCategory")]
    id: String,
    #[serde(rename = "strCategory")]
    name: String,
    #[serde(rename = "strCategoryThumb")]
    thumbnail: Option<String>,
    #[serde(rename = "strCategoryDescription")]
    description: Option<String>,
}

/// Raw meal record as the wire sends it.
///
/// The twenty positional `strIngredient*`/`strMeasure*` fields land in
/// `slots` via the flatten and are scanned exactly once, in
/// [`MealRecord::into_recipe`].
#[derive(Debug, Deserialize)]
struct MealRecord {
    #[serde(rename = "idMeal")]
    id: String,
    #[serde(rename = "strMeal")]
    name: String,
    #[serde(rename = "strMealThumb")]
    thumbnail: Option<String>,
    #[serde(rename = "strArea")]
    area: Option<String>,
    #[serde(rename = "strCategory")]
    category: Option<String>,
    #[serde(rename = "strTags")]
    tags: Option<String>,
    #[serde(rename = "strYoutube")]
    youtube: Option<String>,
    #[serde(rename = "strInstructions")]
    instructions: Option<String>,
    #[serde(flatten)]
    slots: HashMap<String, Value>,
}

impl MealRecord {
    fn into_recipe(self) -> Recipe {
        let mut ingredients = Vec::new();
        for i in 1..=MAX_INGREDIENT_SLOTS {
            let ingredient = self
                .slots
                .get(&format!("strIngredient{}", i))
                .and_then(Value::as_str)
                .map(str::trim)
                .filter(|s| !s.is_empty());

            let Some(ingredient) = ingredient else {
                continue;
            };

            let measure = self
                .slots
                .get(&format!("strMeasure{}", i))
                .and_then(Value::as_str)
                .map(str::trim)
                .filter(|m| !m.is_empty())
                .map(str::to_string);

            ingredients.push(IngredientSlot {
                ingredient: ingredient.to_string(),
                measure,
            });
        }

        let tags = self
            .tags
            .as_deref()
            .unwrap_or("")
            .split(',')
            .map(str::trim)
            .filter(|t| !t.is_empty())
            .map(str::to_string)
            .collect();

        Recipe {
            id: self.id,
            name: self.name,
            thumbnail: non_blank(self.thumbnail),
            area: non_blank(self.area),
            category: non_blank(self.category),
            tags,
            video_url: non_blank(self.youtube),
            instructions: non_blank(self.instructions),
            ingredients,
        }
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

/// Client for a TheMealDB-compatible recipe database.
///
/// Each call maps to exactly one GET against the fixed base address and
/// decodes the JSON envelope into typed records. There is no caching, no
/// pagination and no retry; an empty `meals` field is the normal no-match
/// answer and decodes to an empty vector.
///
/// # Examples
///
/// ```rust
/// use ryori::prelude::*;
///
/// # async fn example() -> ryori::Result<()> {
/// let source = MealDb::new();
///
/// let candidates = source.filter_ingredient("chicken").await?;
/// if let Some(first) = candidates.first() {
///     let detail = source.lookup(&first.id).await?;
///     println!("{:?}", detail.map(|recipe| recipe.ingredients.len()));
/// }
/// # Ok(())
/// # }
/// ```
pub struct MealDb {
    client: HttpClient,
    base_url: String,
}

impl MealDb {
    /// Creates a client against the public TheMealDB API.
    pub fn new() -> Self {
        Self::with_base_url(DEFAULT_BASE_URL)
    }

    /// Creates a client against a different base address.
    ///
    /// Intended for tests and mirrors; the wire format must match.
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            client: HttpClient::new(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    async fn fetch_meals(&self, endpoint: &str) -> Result<Vec<Recipe>> {
        let url = format!("{}{}", self.base_url, endpoint);
        let envelope: MealsEnvelope = self.client.get_json(&url).await?;
        let records = envelope.meals.unwrap_or_default();
        debug!("GET {} -> {} meals", endpoint, records.len());
        Ok(records.into_iter().map(MealRecord::into_recipe).collect())
    }
}

impl Default for MealDb {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl RecipeSource for MealDb {
    async fn search_name(&self, term: &str) -> Result<Vec<Recipe>> {
        self.fetch_meals(&format!("/search.php?s={}", urlencoding::encode(term)))
            .await
    }

    async fn filter_ingredient(&self, ingredient: &str) -> Result<Vec<Recipe>> {
        self.fetch_meals(&format!(
            "/filter.php?i={}",
            urlencoding::encode(ingredient)
        ))
        .await
    }

    async fn filter_category(&self, category: &str) -> Result<Vec<Recipe>> {
        self.fetch_meals(&format!("/filter.php?c={}", urlencoding::encode(category)))
            .await
    }

    async fn filter_area(&self, area: &str) -> Result<Vec<Recipe>> {
        self.fetch_meals(&format!("/filter.php?a={}", urlencoding::encode(area)))
            .await
    }

    async fn lookup(&self, id: &str) -> Result<Option<Recipe>> {
        Ok(self
            .fetch_meals(&format!("/lookup.php?i={}", urlencoding::encode(id)))
            .await?
            .into_iter()
            .next())
    }

    async fn random(&self) -> Result<Option<Recipe>> {
        Ok(self.fetch_meals("/random.php").await?.into_iter().next())
    }

    async fn list_categories(&self) -> Result<Vec<Category>> {
        let url = format!("{}/categories.php", self.base_url);
        let envelope: CategoriesEnvelope = self.client.get_json(&url).await?;
        Ok(envelope
            .categories
            .unwrap_or_default()
            .into_iter()
            .map(|record| Category {
                id: record.id,
                name: record.name,
                thumbnail: non_blank(record.thumbnail),
                description: non_blank(record.description),
            })
            .collect())
    }

    async fn list_areas(&self) -> Result<Vec<String>> {
        let url = format!("{}/list.php?a=list", self.base_url);
        let envelope: AreasEnvelope = self.client.get_json(&url).await?;
        Ok(envelope
            .meals
            .unwrap_or_default()
            .into_iter()
            .map(|record| record.area)
            .collect())
    }
}
