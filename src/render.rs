//! HTML-fragment rendering.
//!
//! Every function here is a pure function of its input records: no network,
//! no session state, just a `String` of markup. All interpolated text is
//! escaped, names and URLs included — recipe data is remote data.
//!
//! The fragments mirror the shapes a result pane needs: summary cards for
//! listings, a detail card for the overlay, a fixed placeholder for empty
//! results, tag chips for the pantry, and browse grids for categories and
//! areas.

use html_escape::{encode_double_quoted_attribute, encode_text};

use crate::{
    pantry::Pantry,
    types::{Category, Recipe},
};

/// Area shown when a recipe carries none.
const DEFAULT_AREA: &str = "Various";
/// Category shown when a recipe carries none.
const DEFAULT_CATEGORY: &str = "General";

/// Renders one clickable summary card.
///
/// The card carries the recipe id in `data-recipe-id` so the embedding UI
/// can issue the follow-up detail fetch.
pub fn summary_card(recipe: &Recipe) -> String {
    let mut card = format!(
        "<div class=\"recipe-card\" data-recipe-id=\"{}\">",
        encode_double_quoted_attribute(&recipe.id)
    );

    if let Some(thumbnail) = &recipe.thumbnail {
        card.push_str(&format!(
            "<img src=\"{}\" alt=\"{}\">",
            encode_double_quoted_attribute(thumbnail),
            encode_double_quoted_attribute(&recipe.name)
        ));
    }

    card.push_str(&format!(
        "<div class=\"recipe-card-content\"><h3>{}</h3>\
         <div class=\"recipe-meta\"><span class=\"recipe-area\">{}</span>\
         <span class=\"recipe-category\">{}</span></div></div></div>",
        encode_text(&recipe.name),
        encode_text(recipe.area.as_deref().unwrap_or(DEFAULT_AREA)),
        encode_text(recipe.category.as_deref().unwrap_or(DEFAULT_CATEGORY)),
    ));
    card
}

/// Renders a listing: summary cards in order, or the empty placeholder.
pub fn results(recipes: &[Recipe]) -> String {
    if recipes.is_empty() {
        return empty_results();
    }
    recipes
        .iter()
        .map(summary_card)
        .collect::<Vec<_>>()
        .join("\n")
}

/// The fixed "no recipes found" placeholder.
pub fn empty_results() -> String {
    "<div class=\"no-results\">\
     <p>No recipes found. Try different search terms or filters.</p>\
     </div>"
        .to_string()
}

/// Renders the full detail card for one recipe.
///
/// The ingredient list comes straight from the decoded slots: measure plus
/// ingredient per line, blank slots already omitted, slot order preserved.
/// Instructions are split into paragraphs on line breaks.
pub fn detail_card(recipe: &Recipe) -> String {
    let mut card = format!("<h2>{}</h2>", encode_text(&recipe.name));

    if let Some(thumbnail) = &recipe.thumbnail {
        card.push_str(&format!(
            "<img src=\"{}\" alt=\"{}\">",
            encode_double_quoted_attribute(thumbnail),
            encode_double_quoted_attribute(&recipe.name)
        ));
    }

    card.push_str("<div class=\"recipe-info\">");
    card.push_str(&format!(
        "<p>Cuisine: {}</p>",
        encode_text(recipe.area.as_deref().unwrap_or(DEFAULT_AREA))
    ));
    card.push_str(&format!(
        "<p>Category: {}</p>",
        encode_text(recipe.category.as_deref().unwrap_or(DEFAULT_CATEGORY))
    ));
    if !recipe.tags.is_empty() {
        card.push_str(&format!(
            "<p>Tags: {}</p>",
            encode_text(&recipe.tags.join(", "))
        ));
    }
    if let Some(video) = &recipe.video_url {
        card.push_str(&format!(
            "<p><a href=\"{}\" target=\"_blank\">Watch Video</a></p>",
            encode_double_quoted_attribute(video)
        ));
    }
    card.push_str("</div>");

    card.push_str("<h3>Ingredients:</h3><ul class=\"ingredients-list\">");
    for slot in &recipe.ingredients {
        match &slot.measure {
            Some(measure) => card.push_str(&format!(
                "<li>{} {}</li>",
                encode_text(measure),
                encode_text(&slot.ingredient)
            )),
            None => card.push_str(&format!("<li>{}</li>", encode_text(&slot.ingredient))),
        }
    }
    card.push_str("</ul>");

    card.push_str("<h3>Instructions:</h3><div class=\"instructions\">");
    if let Some(instructions) = &recipe.instructions {
        for step in instructions.lines().map(str::trim).filter(|s| !s.is_empty()) {
            card.push_str(&format!("<p>{}</p>", encode_text(step)));
        }
    }
    card.push_str("</div>");
    card
}

/// Renders the pantry as removable ingredient tags.
///
/// Each tag's button carries the ingredient in `data-ingredient` for the
/// remove action.
pub fn pantry_tags(pantry: &Pantry) -> String {
    pantry
        .iter()
        .map(|ingredient| {
            format!(
                "<div class=\"ingredient-tag\">{}\
                 <button data-ingredient=\"{}\">&times;</button></div>",
                encode_text(ingredient),
                encode_double_quoted_attribute(ingredient),
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Renders the category browse grid.
pub fn category_cards(categories: &[Category]) -> String {
    if categories.is_empty() {
        return empty_results();
    }
    categories
        .iter()
        .map(|category| {
            let mut card = format!(
                "<div class=\"category-card\" data-category=\"{}\">",
                encode_double_quoted_attribute(&category.name)
            );
            if let Some(thumbnail) = &category.thumbnail {
                card.push_str(&format!(
                    "<img src=\"{}\" alt=\"{}\">",
                    encode_double_quoted_attribute(thumbnail),
                    encode_double_quoted_attribute(&category.name)
                ));
            }
            card.push_str(&format!("<h3>{}</h3>", encode_text(&category.name)));
            if let Some(description) = &category.description {
                card.push_str(&format!("<p>{}</p>", encode_text(description)));
            }
            card.push_str("</div>");
            card
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Renders the area browse list as clickable chips.
pub fn area_chips(areas: &[String]) -> String {
    if areas.is_empty() {
        return empty_results();
    }
    areas
        .iter()
        .map(|area| {
            format!(
                "<button class=\"area-chip\" data-area=\"{}\">{}</button>",
                encode_double_quoted_attribute(area),
                encode_text(area),
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}
