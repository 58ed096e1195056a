//! Wire-level tests for the MealDb client against a local mock server.
//!
//! Everything here goes through real HTTP: mockito serves canned TheMealDB
//! envelopes and the client decodes them through the same path production
//! uses.

use mockito::Matcher;
use ryori::prelude::*;
use ryori::{Error, render};
use serde_json::json;

mod common;

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_search_by_name_decodes_and_renders() {
        common::init_logs();
        let mut server = mockito::Server::new_async().await;

        let body = json!({
            "meals": [{
                "idMeal": "52771",
                "strMeal": "Spicy Arrabiata Penne",
                "strMealThumb": "https://example.com/arrabiata.jpg",
                "strArea": "Italian",
                "strCategory": "Vegetarian",
                "strTags": "Pasta,Curry",
                "strYoutube": "",
                "strInstructions": "Boil the penne.\nMake the sauce.",
                "strIngredient1": "penne rigate",
                "strMeasure1": "1 pound",
                "strIngredient2": "olive oil",
                "strMeasure2": "1/4 cup"
            }]
        })
        .to_string();

        let mock = server
            .mock("GET", "/search.php")
            .match_query(Matcher::UrlEncoded("s".into(), "Arrabiata".into()))
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(body)
            .create_async()
            .await;

        let source = MealDb::with_base_url(server.url());
        let recipes = source.search_name("Arrabiata").await.unwrap();
        mock.assert_async().await;

        assert_eq!(recipes.len(), 1);
        let recipe = &recipes[0];
        assert_eq!(recipe.id, "52771");
        assert_eq!(recipe.name, "Spicy Arrabiata Penne");
        assert_eq!(recipe.area.as_deref(), Some("Italian"));
        assert_eq!(recipe.tags, vec!["Pasta", "Curry"]);
        // Blank wire fields decode to None
        assert!(recipe.video_url.is_none());
        assert_eq!(recipe.ingredients.len(), 2);

        // One card, showing the cuisine
        let fragment = render::results(&recipes);
        assert_eq!(fragment.matches("data-recipe-id").count(), 1);
        assert!(fragment.contains("Italian"));
    }

    #[tokio::test]
    async fn test_slot_scan_keeps_order_and_skips_blanks() {
        let mut server = mockito::Server::new_async().await;

        // Slots 1 and 5 populated; 2 is blank, 3 is null, the rest absent
        let body = json!({
            "meals": [{
                "idMeal": "1",
                "strMeal": "Two Slot Wonder",
                "strIngredient1": "Penne Rigate",
                "strMeasure1": " 1 pound ",
                "strIngredient2": "",
                "strMeasure2": " ",
                "strIngredient3": null,
                "strIngredient5": "Garlic",
                "strMeasure5": "3 cloves"
            }]
        })
        .to_string();

        let _mock = server
            .mock("GET", "/lookup.php")
            .match_query(Matcher::UrlEncoded("i".into(), "1".into()))
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(body)
            .create_async()
            .await;

        let source = MealDb::with_base_url(server.url());
        let recipe = source.lookup("1").await.unwrap().expect("meal decoded");

        assert_eq!(recipe.ingredients.len(), 2);
        assert_eq!(recipe.ingredients[0].ingredient, "Penne Rigate");
        assert_eq!(recipe.ingredients[0].measure.as_deref(), Some("1 pound"));
        assert_eq!(recipe.ingredients[1].ingredient, "Garlic");

        // The detail card lists exactly the two populated slots, in order
        let card = render::detail_card(&recipe);
        assert_eq!(card.matches("<li>").count(), 2);
        assert!(card.find("Penne Rigate").unwrap() < card.find("Garlic").unwrap());
    }

    #[tokio::test]
    async fn test_null_meals_renders_empty_placeholder() {
        let mut server = mockito::Server::new_async().await;

        let _mock = server
            .mock("GET", "/filter.php")
            .match_query(Matcher::UrlEncoded("c".into(), "Seafood".into()))
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(r#"{"meals": null}"#)
            .create_async()
            .await;

        let source = MealDb::with_base_url(server.url());
        let mut finder = RecipeFinder::with_source(Box::new(source));

        let outcome = finder
            .dispatch(Command::SelectCategory("Seafood".to_string()))
            .await;
        let Outcome::Results(fragment) = outcome else {
            panic!("a null meals field is the empty path, not an error");
        };
        assert!(fragment.contains("no-results"));
    }

    #[tokio::test]
    async fn test_http_error_is_single_attempt() {
        let mut server = mockito::Server::new_async().await;

        let mock = server
            .mock("GET", "/search.php")
            .match_query(Matcher::Any)
            .with_status(500)
            .expect(1)
            .create_async()
            .await;

        let source = MealDb::with_base_url(server.url());
        let result = source.search_name("anything").await;

        assert!(matches!(result, Err(Error::Status(status)) if status.as_u16() == 500));
        // No retry: exactly one request reached the server
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_malformed_body_is_decode_error() {
        let mut server = mockito::Server::new_async().await;

        let _mock = server
            .mock("GET", "/search.php")
            .match_query(Matcher::Any)
            .with_status(200)
            .with_body("this is not json")
            .create_async()
            .await;

        let source = MealDb::with_base_url(server.url());
        let result = source.search_name("anything").await;
        assert!(matches!(result, Err(Error::Decode(_))));
    }

    #[tokio::test]
    async fn test_lookup_missing_id_is_none() {
        let mut server = mockito::Server::new_async().await;

        let _mock = server
            .mock("GET", "/lookup.php")
            .match_query(Matcher::Any)
            .with_status(200)
            .with_body(r#"{"meals": null}"#)
            .create_async()
            .await;

        let source = MealDb::with_base_url(server.url());
        let looked_up = source.lookup("99999").await.unwrap();
        assert!(looked_up.is_none());
    }

    #[tokio::test]
    async fn test_empty_name_search_issues_no_request() {
        let mut server = mockito::Server::new_async().await;

        let mock = server
            .mock("GET", Matcher::Any)
            .expect(0)
            .create_async()
            .await;

        let source = MealDb::with_base_url(server.url());
        let finder = RecipeFinder::with_source(Box::new(source));

        let search = finder.search_by_name("   ").await.unwrap();
        assert!(matches!(search, Search::Skipped));
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_list_areas_decodes_meals_rows() {
        let mut server = mockito::Server::new_async().await;

        let _mock = server
            .mock("GET", "/list.php")
            .match_query(Matcher::UrlEncoded("a".into(), "list".into()))
            .with_status(200)
            .with_body(r#"{"meals": [{"strArea": "Italian"}, {"strArea": "Japanese"}]}"#)
            .create_async()
            .await;

        let source = MealDb::with_base_url(server.url());
        let areas = source.list_areas().await.unwrap();
        assert_eq!(areas, vec!["Italian", "Japanese"]);
    }

    #[tokio::test]
    async fn test_list_categories_decodes() {
        let mut server = mockito::Server::new_async().await;

        let body = json!({
            "categories": [{
                "idCategory": "8",
                "strCategory": "Seafood",
                "strCategoryThumb": "https://example.com/seafood.png",
                "strCategoryDescription": "Fish and shellfish dishes."
            }]
        })
        .to_string();

        let _mock = server
            .mock("GET", "/categories.php")
            .with_status(200)
            .with_body(body)
            .create_async()
            .await;

        let source = MealDb::with_base_url(server.url());
        let categories = source.list_categories().await.unwrap();

        assert_eq!(categories.len(), 1);
        assert_eq!(categories[0].name, "Seafood");
        assert!(categories[0].description.as_deref().unwrap().contains("shellfish"));

        let fragment = render::category_cards(&categories);
        assert!(fragment.contains("data-category=\"Seafood\""));
    }

    #[tokio::test]
    async fn test_query_terms_are_url_encoded() {
        let mut server = mockito::Server::new_async().await;

        let mock = server
            .mock("GET", "/filter.php")
            .match_query(Matcher::UrlEncoded("i".into(), "soy sauce".into()))
            .with_status(200)
            .with_body(r#"{"meals": null}"#)
            .create_async()
            .await;

        let source = MealDb::with_base_url(server.url());
        let candidates = source.filter_ingredient("soy sauce").await.unwrap();
        assert!(candidates.is_empty());
        mock.assert_async().await;
    }
}
