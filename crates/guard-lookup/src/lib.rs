/// Ingredient provider interface
#[async_trait::async_trait]
pub trait IngredientLookup: Send + Sync {
    /// Look up the ingredients of a dish by its cleaned name
    async fn lookup_ingredients(&self, dish_name: &str) -> Result<Vec<String>, LookupError>;

    /// Provider metadata
    fn metadata(&self) -> ProviderMetadata;
}

#[derive(Debug, Clone)]
pub struct ProviderMetadata {
    pub name: String,
}

#[derive(Debug, thiserror::Error)]
pub enum LookupError {
    #[error("No data for dish: {0}")]
    NotFound(String),

    #[error("No recognizable ingredients for dish: {0}")]
    NoIngredients(String),

    #[error("Provider error: {0}")]
    Provider(String),

    #[error("Rate limit exceeded")]
    RateLimitExceeded,
}

impl LookupError {
    /// Errors that mean "this provider knows nothing", as opposed to "this provider broke"
    pub fn is_miss(&self) -> bool {
        matches!(self, LookupError::NotFound(_) | LookupError::NoIngredients(_))
    }
}
