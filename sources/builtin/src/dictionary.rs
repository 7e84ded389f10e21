use async_trait::async_trait;
use guard_lookup::{IngredientLookup, LookupError, ProviderMetadata};

/// Sentinel ingredient list for dishes no keyword recognizes
pub const UNKNOWN_INGREDIENTS: &str = "unknown ingredients";

/// Dish keyword to typical ingredients, scanned in this order
pub const INGREDIENT_MAP: &[(&str, &[&str])] = &[
    ("pasta", &["wheat", "flour", "eggs", "cheese"]),
    ("pizza", &["wheat", "flour", "cheese", "tomato"]),
    ("salad", &["oil", "vinegar", "nuts"]),
    ("soup", &["cream", "milk", "celery", "onion"]),
    ("chicken", &["chicken", "herbs", "spices"]),
    ("beef", &["beef", "herbs", "spices"]),
    ("fish", &["fish", "oil", "herbs"]),
    ("seafood", &["shellfish", "fish"]),
    ("bread", &["wheat", "flour", "eggs", "milk"]),
    ("cake", &["wheat", "flour", "eggs", "milk", "butter"]),
    ("ice cream", &["milk", "cream", "eggs"]),
    ("asian", &["soy sauce", "sesame", "peanuts"]),
    ("sandwich", &["wheat", "bread", "cheese"]),
    ("spaghetti", &["wheat", "flour", "eggs", "cheese"]),
    ("noodle", &["wheat", "flour", "eggs"]),
    ("burger", &["beef", "bread", "cheese"]),
    ("pancake", &["wheat", "flour", "eggs", "milk", "butter"]),
    ("shrimp", &["shrimp", "shellfish"]),
    ("tofu", &["tofu", "soybean"]),
];

/// Compiled-in ingredient source keyed on dish-name substrings
#[derive(Debug, Clone, Copy, Default)]
pub struct BuiltinIngredients;

impl BuiltinIngredients {
    pub fn new() -> Self {
        Self
    }

    /// Ingredients of every keyword found in the dish name, in table order.
    /// Overlapping keywords may repeat an ingredient.
    pub fn common_ingredients(&self, dish_name: &str) -> Vec<String> {
        let lowered = dish_name.to_lowercase();

        let ingredients: Vec<String> = INGREDIENT_MAP
            .iter()
            .filter(|(keyword, _)| lowered.contains(keyword))
            .flat_map(|(_, items)| items.iter().map(|i| i.to_string()))
            .collect();

        if ingredients.is_empty() {
            vec![UNKNOWN_INGREDIENTS.to_string()]
        } else {
            ingredients
        }
    }
}

#[async_trait]
impl IngredientLookup for BuiltinIngredients {
    async fn lookup_ingredients(&self, dish_name: &str) -> Result<Vec<String>, LookupError> {
        Ok(self.common_ingredients(dish_name))
    }

    fn metadata(&self) -> ProviderMetadata {
        ProviderMetadata {
            name: "builtin dictionary".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_keyword() {
        let found = BuiltinIngredients.common_ingredients("Margherita Pizza");
        assert_eq!(found, vec!["wheat", "flour", "cheese", "tomato"]);
    }

    #[test]
    fn test_keywords_concatenate_without_dedup() {
        let found = BuiltinIngredients.common_ingredients("Chicken Sandwich");
        assert_eq!(
            found,
            vec!["chicken", "herbs", "spices", "wheat", "bread", "cheese"]
        );

        // "fish" sits before "seafood" in the table
        let found = BuiltinIngredients.common_ingredients("Seafood and Fish Stew");
        assert_eq!(found, vec!["fish", "oil", "herbs", "shellfish", "fish"]);
    }

    #[test]
    fn test_keyword_match_ignores_case() {
        let found = BuiltinIngredients.common_ingredients("VANILLA ICE CREAM");
        assert_eq!(found, vec!["milk", "cream", "eggs"]);
    }

    #[test]
    fn test_unknown_dish() {
        let found = BuiltinIngredients.common_ingredients("Chef's Surprise");
        assert_eq!(found, vec![UNKNOWN_INGREDIENTS]);
    }

    #[tokio::test]
    async fn test_lookup_never_fails() {
        let found = BuiltinIngredients.lookup_ingredients("").await.unwrap();
        assert_eq!(found, vec![UNKNOWN_INGREDIENTS]);
    }
}
