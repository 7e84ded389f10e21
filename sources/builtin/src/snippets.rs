use std::collections::BTreeMap;
use std::sync::LazyLock;

use async_trait::async_trait;
use guard_lookup::{IngredientLookup, LookupError, ProviderMetadata};
use regex::Regex;

/// Ingredient terms recognized inside snippet text
const KNOWN_INGREDIENTS: &[&str] = &[
    "flour", "butter", "milk", "eggs", "cheese", "cream", "oil", "onion", "garlic", "salt",
    "pepper", "sugar", "tomato", "chicken", "beef", "pork", "fish", "nuts", "peanuts", "almonds",
    "walnuts", "sesame", "soy sauce", "wheat", "bread", "pasta", "rice", "beans", "lentils",
    "shellfish", "shrimp", "crab", "lobster", "mustard", "celery", "herbs", "spices",
];

const MAX_INGREDIENTS: usize = 20;

// Segments that usually introduce an ingredient list, up to the end of the sentence
static LIST_INTROS: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    [
        r"ingredients?[:\s]*[^.!?]*",
        r"you['\s]*ll need[:\s]*[^.!?]*",
        r"recipe[:\s]*[^.!?]*",
    ]
    .iter()
    .map(|p| Regex::new(p).expect("valid ingredient list pattern"))
    .collect()
});

/// Known ingredient terms mentioned in a piece of text, in table order
pub fn parse_ingredients(text: &str) -> Vec<&'static str> {
    let lowered = text.to_lowercase();
    KNOWN_INGREDIENTS
        .iter()
        .copied()
        .filter(|ingredient| lowered.contains(ingredient))
        .collect()
}

/// Ingredients named in the list-like segments of recipe snippets.
/// First-seen order, no repeats, at most 20.
pub fn extract_from_snippets<'a>(snippets: impl IntoIterator<Item = &'a str>) -> Vec<String> {
    let mut found: Vec<String> = Vec::new();

    for snippet in snippets {
        let text = snippet.to_lowercase();

        for intro in LIST_INTROS.iter() {
            for segment in intro.find_iter(&text) {
                for ingredient in parse_ingredients(segment.as_str()) {
                    if !found.iter().any(|f| f == ingredient) {
                        found.push(ingredient.to_string());
                    }
                }
            }
        }
    }

    found.truncate(MAX_INGREDIENTS);
    found
}

/// Ingredient source backed by recipe snippets keyed on dish keywords
#[derive(Debug, Clone, Default)]
pub struct SnippetIngredients {
    snippets: BTreeMap<String, Vec<String>>,
}

impl SnippetIngredients {
    pub fn new(snippets: BTreeMap<String, Vec<String>>) -> Self {
        let snippets = snippets
            .into_iter()
            .map(|(key, texts)| (key.to_lowercase(), texts))
            .collect();
        Self { snippets }
    }

    pub fn keyword_count(&self) -> usize {
        self.snippets.len()
    }

    fn snippets_for(&self, dish_name: &str) -> Vec<&str> {
        let lowered = dish_name.to_lowercase();
        self.snippets
            .iter()
            .filter(|(key, _)| lowered.contains(key.as_str()))
            .flat_map(|(_, texts)| texts.iter().map(String::as_str))
            .collect()
    }
}

#[async_trait]
impl IngredientLookup for SnippetIngredients {
    async fn lookup_ingredients(&self, dish_name: &str) -> Result<Vec<String>, LookupError> {
        let snippets = self.snippets_for(dish_name);
        if snippets.is_empty() {
            return Err(LookupError::NotFound(dish_name.to_string()));
        }

        let ingredients = extract_from_snippets(snippets);
        tracing::debug!("Snippets for '{}' named {:?}", dish_name, ingredients);

        if ingredients.is_empty() {
            Err(LookupError::NoIngredients(dish_name.to_string()))
        } else {
            Ok(ingredients)
        }
    }

    fn metadata(&self) -> ProviderMetadata {
        ProviderMetadata {
            name: "recipe snippets".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn source(pairs: &[(&str, &[&str])]) -> SnippetIngredients {
        SnippetIngredients::new(
            pairs
                .iter()
                .map(|(k, v)| (k.to_string(), v.iter().map(|s| s.to_string()).collect()))
                .collect(),
        )
    }

    #[test]
    fn test_only_list_segments_count() {
        let found = extract_from_snippets([
            "A classic from Rome served with bread. Ingredients: spaghetti, eggs, cheese and black pepper. Pairs well with fish.",
        ]);
        assert_eq!(found, vec!["eggs", "cheese", "pepper"]);
    }

    #[test]
    fn test_youll_need_and_recipe_intros() {
        let found = extract_from_snippets([
            "You'll need: rice, shrimp and garlic!",
            "Our recipe uses butter",
        ]);
        assert_eq!(found, vec!["garlic", "rice", "shrimp", "butter"]);
    }

    #[test]
    fn test_repeats_are_dropped_and_capped() {
        let long = format!("Ingredients: {}", KNOWN_INGREDIENTS.join(", "));
        let found = extract_from_snippets([long.as_str(), long.as_str()]);
        assert_eq!(found.len(), MAX_INGREDIENTS);
        assert_eq!(found[0], "flour");
    }

    #[test]
    fn test_parse_ingredients_overlaps() {
        assert_eq!(parse_ingredients("Roasted PEANUTS"), vec!["nuts", "peanuts"]);
    }

    #[tokio::test]
    async fn test_lookup_by_keyword() {
        let source = source(&[(
            "Carbonara",
            &["Ingredients: pasta, eggs, cheese, pepper."],
        )]);

        let found = source
            .lookup_ingredients("Spaghetti Carbonara")
            .await
            .unwrap();
        assert_eq!(found, vec!["eggs", "cheese", "pepper", "pasta"]);
    }

    #[tokio::test]
    async fn test_lookup_misses() {
        let source = source(&[("curry", &["A warming dish from the south."])]);

        assert!(matches!(
            source.lookup_ingredients("Fish Tacos").await,
            Err(LookupError::NotFound(_))
        ));
        assert!(matches!(
            source.lookup_ingredients("Green Curry").await,
            Err(LookupError::NoIngredients(_))
        ));
    }
}
