use std::fs::File;
use std::io::BufReader;
use std::path::Path;
use std::sync::Arc;

use guard_config::Config;
use guard_lookup::IngredientLookup;
use guard_source_builtin::{BuiltinIngredients, FallbackLookup, SnippetLoader};

/// Config from a JSON file when given, otherwise from the environment
pub fn load_config(path: Option<&Path>) -> anyhow::Result<Config> {
    match path {
        Some(path) => {
            tracing::info!("Loading config from {}", path.display());
            let file = File::open(path)?;
            let reader = BufReader::new(file);
            let config = serde_json::from_reader(reader)?;
            Ok(config)
        }
        None => Ok(Config::new()),
    }
}

/// Ingredient source for the configured lookup chain.
/// Snippets, when configured and loadable, are asked before the built-in dictionary.
pub fn build_lookup(config: &Config) -> Arc<dyn IngredientLookup> {
    let builtin: Arc<dyn IngredientLookup> = Arc::new(BuiltinIngredients::new());

    let Some(path) = config.lookup.snippets_path.as_deref() else {
        return builtin;
    };

    match SnippetLoader::load_from_file(Path::new(path)) {
        Ok(snippets) => Arc::new(FallbackLookup::new(Arc::new(snippets), builtin)),
        Err(e) => {
            tracing::warn!("Failed to load recipe snippets from {}: {}", path, e);
            tracing::warn!("Using built-in dictionary only");
            builtin
        }
    }
}
