pub mod dictionary;
pub mod fallback;
pub mod loader;
pub mod snippets;

pub use dictionary::{BuiltinIngredients, INGREDIENT_MAP, UNKNOWN_INGREDIENTS};
pub use fallback::FallbackLookup;
pub use loader::{SnippetLoadError, SnippetLoader};
pub use snippets::SnippetIngredients;
