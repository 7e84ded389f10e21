use std::sync::Arc;

use async_trait::async_trait;
use guard_lookup::{IngredientLookup, LookupError, ProviderMetadata};

/// Ask `primary` first and fall back when it has nothing on the dish.
/// Real provider failures are passed through untouched.
pub struct FallbackLookup {
    primary: Arc<dyn IngredientLookup>,
    fallback: Arc<dyn IngredientLookup>,
}

impl FallbackLookup {
    pub fn new(primary: Arc<dyn IngredientLookup>, fallback: Arc<dyn IngredientLookup>) -> Self {
        Self { primary, fallback }
    }
}

#[async_trait]
impl IngredientLookup for FallbackLookup {
    async fn lookup_ingredients(&self, dish_name: &str) -> Result<Vec<String>, LookupError> {
        match self.primary.lookup_ingredients(dish_name).await {
            Err(e) if e.is_miss() => {
                tracing::debug!("{}: {e}, trying fallback", self.primary.metadata().name);
                self.fallback.lookup_ingredients(dish_name).await
            }
            other => other,
        }
    }

    fn metadata(&self) -> ProviderMetadata {
        let primary = self.primary.metadata();
        let fallback = self.fallback.metadata();
        ProviderMetadata {
            name: format!("{} then {}", primary.name, fallback.name),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dictionary::BuiltinIngredients;
    use crate::loader::SnippetLoader;

    struct Broken;

    #[async_trait]
    impl IngredientLookup for Broken {
        async fn lookup_ingredients(&self, _dish_name: &str) -> Result<Vec<String>, LookupError> {
            Err(LookupError::RateLimitExceeded)
        }

        fn metadata(&self) -> ProviderMetadata {
            ProviderMetadata {
                name: "broken".to_string(),
            }
        }
    }

    fn chain() -> FallbackLookup {
        let snippets = SnippetLoader::from_json(
            r#"{ "carbonara": ["You'll need: pasta, eggs and pork."] }"#,
        )
        .unwrap();
        FallbackLookup::new(Arc::new(snippets), Arc::new(BuiltinIngredients::new()))
    }

    #[tokio::test]
    async fn test_primary_hit() {
        let found = chain().lookup_ingredients("Carbonara").await.unwrap();
        assert_eq!(found, vec!["eggs", "pork", "pasta"]);
    }

    #[tokio::test]
    async fn test_miss_falls_back() {
        let found = chain().lookup_ingredients("Beef Burger").await.unwrap();
        assert_eq!(found, vec!["beef", "herbs", "spices", "beef", "bread", "cheese"]);
    }

    #[tokio::test]
    async fn test_failure_is_not_masked() {
        let lookup = FallbackLookup::new(Arc::new(Broken), Arc::new(BuiltinIngredients::new()));
        let result = lookup.lookup_ingredients("Beef Burger").await;
        assert!(matches!(result, Err(LookupError::RateLimitExceeded)));
        assert_eq!(lookup.metadata().name, "broken then builtin dictionary");
    }
}
