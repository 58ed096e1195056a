use ryori::{Error, Pantry, matcher, render};

mod common;
use common::recipe;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pantry_normalizes_on_add() {
        let mut pantry = Pantry::new();
        assert!(pantry.add("  Chicken Breast "));

        assert_eq!(pantry.first(), Some("chicken breast"));
        assert!(pantry.contains("CHICKEN BREAST"));
    }

    #[test]
    fn test_pantry_normalization_idempotence() {
        let samples = ["chicken", "  Rice ", "EGG", "soy sauce"];

        let mut pantry = Pantry::new();
        for sample in samples {
            pantry.add(sample);
        }
        let size = pantry.len();

        // Re-adding any trim/uppercase variant leaves the set unchanged
        for sample in samples {
            pantry.add(&sample.trim().to_uppercase());
        }
        assert_eq!(pantry.len(), size);
    }

    #[test]
    fn test_pantry_rejects_blank_input() {
        let mut pantry = Pantry::new();
        assert!(!pantry.add(""));
        assert!(!pantry.add("   "));
        assert!(pantry.is_empty());
    }

    #[test]
    fn test_pantry_preserves_insertion_order() {
        let mut pantry = Pantry::new();
        pantry.add("chicken");
        pantry.add("rice");
        pantry.add("garlic");

        let items: Vec<&str> = pantry.iter().collect();
        assert_eq!(items, vec!["chicken", "rice", "garlic"]);
        assert_eq!(pantry.first(), Some("chicken"));
    }

    #[test]
    fn test_pantry_remove() {
        let mut pantry = Pantry::new();
        pantry.add("chicken");
        pantry.add("rice");

        assert!(pantry.remove("Chicken "));
        assert!(!pantry.contains("chicken"));
        assert_eq!(pantry.len(), 1);

        // Removing something absent is a no-op
        assert!(!pantry.remove("basil"));
        assert_eq!(pantry.len(), 1);
    }

    #[test]
    fn test_matcher_requires_every_ingredient() {
        let r = recipe(
            "1",
            "Chicken Fried Rice",
            &[
                ("Chicken Breast", Some("1 lb")),
                ("Basmati Rice", Some("2 cups")),
                ("Soy Sauce", None),
            ],
        );

        let mut pantry = Pantry::new();
        pantry.add("chicken");
        pantry.add("rice");
        assert!(matcher::matches(&r, &pantry));

        pantry.add("saffron");
        assert!(!matcher::matches(&r, &pantry));
    }

    #[test]
    fn test_matcher_uses_substring_containment() {
        // "egg" matches the slot "Egg Yolks" - containment, not exact tokens
        let r = recipe("1", "Carbonara", &[("Egg Yolks", Some("3"))]);

        let mut pantry = Pantry::new();
        pantry.add("egg");
        assert!(matcher::matches(&r, &pantry));
    }

    #[test]
    fn test_matcher_empty_pantry_is_vacuous() {
        let r = recipe("1", "Toast", &[("Bread", None)]);
        assert!(matcher::matches(&r, &Pantry::new()));
    }

    #[test]
    fn test_matcher_ignores_case() {
        let r = recipe("1", "Stir Fry", &[("CHICKEN", None)]);

        let mut pantry = Pantry::new();
        pantry.add("Chicken");
        assert!(matcher::matches(&r, &pantry));
    }

    #[test]
    fn test_summary_card_defaults_and_id() {
        let r = recipe("52771", "Mystery Stew", &[]);
        let card = render::summary_card(&r);

        assert!(card.contains("data-recipe-id=\"52771\""));
        assert!(card.contains("Various"));
        assert!(card.contains("General"));
    }

    #[test]
    fn test_summary_card_uses_present_metadata() {
        let mut r = recipe("1", "Pasta Arrabiata", &[]);
        r.area = Some("Italian".to_string());
        r.category = Some("Vegetarian".to_string());

        let card = render::summary_card(&r);
        assert!(card.contains("Italian"));
        assert!(card.contains("Vegetarian"));
        assert!(!card.contains("Various"));
    }

    #[test]
    fn test_results_render_empty_placeholder() {
        let fragment = render::results(&[]);
        assert!(fragment.contains("no-results"));
        assert!(fragment.contains("No recipes found"));
    }

    #[test]
    fn test_results_render_in_order() {
        let recipes = vec![recipe("1", "First", &[]), recipe("2", "Second", &[])];
        let fragment = render::results(&recipes);

        let first = fragment.find("First").unwrap();
        let second = fragment.find("Second").unwrap();
        assert!(first < second);
        assert_eq!(fragment.matches("data-recipe-id").count(), 2);
    }

    #[test]
    fn test_detail_card_lists_populated_slots_in_order() {
        let r = recipe(
            "1",
            "Two Slot Wonder",
            &[("Penne", Some("1 pound")), ("Garlic", None)],
        );
        let card = render::detail_card(&r);

        assert_eq!(card.matches("<li>").count(), 2);
        assert!(card.contains("<li>1 pound Penne</li>"));
        assert!(card.contains("<li>Garlic</li>"));
        assert!(card.find("Penne").unwrap() < card.find("Garlic").unwrap());
    }

    #[test]
    fn test_detail_card_splits_instructions_into_paragraphs() {
        let mut r = recipe("1", "Steps", &[]);
        r.instructions = Some("Boil the penne.\n\nMake the sauce.\nCombine.".to_string());

        let card = render::detail_card(&r);
        assert!(card.contains("<p>Boil the penne.</p>"));
        assert!(card.contains("<p>Make the sauce.</p>"));
        assert!(card.contains("<p>Combine.</p>"));
    }

    #[test]
    fn test_detail_card_optional_lines() {
        let mut r = recipe("1", "Plain", &[]);
        let card = render::detail_card(&r);
        assert!(!card.contains("Tags:"));
        assert!(!card.contains("Watch Video"));

        r.tags = vec!["Pasta".to_string(), "Spicy".to_string()];
        r.video_url = Some("https://example.com/watch".to_string());
        let card = render::detail_card(&r);
        assert!(card.contains("Tags: Pasta, Spicy"));
        assert!(card.contains("Watch Video"));
    }

    #[test]
    fn test_render_escapes_remote_text() {
        let r = recipe("1", "<script>alert('hi')</script>", &[]);
        let card = render::summary_card(&r);

        assert!(!card.contains("<script>"));
        assert!(card.contains("&lt;script&gt;"));
    }

    #[test]
    fn test_pantry_tags_render() {
        let mut pantry = Pantry::new();
        pantry.add("Chicken");
        pantry.add("rice");

        let fragment = render::pantry_tags(&pantry);
        assert_eq!(fragment.matches("ingredient-tag").count(), 2);
        assert!(fragment.contains("data-ingredient=\"chicken\""));
        assert!(fragment.contains("data-ingredient=\"rice\""));
    }

    #[test]
    fn test_error_display() {
        let error = Error::validation("Please add at least one ingredient.");
        assert!(format!("{}", error).contains("Please add at least one ingredient."));

        let error = Error::not_found("recipe 52771");
        assert!(format!("{}", error).contains("recipe 52771"));
    }
}
