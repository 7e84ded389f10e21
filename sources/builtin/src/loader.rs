use std::collections::BTreeMap;
use std::path::Path;

use crate::snippets::SnippetIngredients;

#[derive(Debug, thiserror::Error)]
pub enum SnippetLoadError {
    #[error("File not found: {0}")]
    FileNotFound(String),

    #[error("Parse error: {0}")]
    ParseError(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

pub struct SnippetLoader;

impl SnippetLoader {
    /// Parse `{ "keyword": ["snippet", ...], ... }`
    pub fn from_json(json: &str) -> Result<SnippetIngredients, SnippetLoadError> {
        let snippets: BTreeMap<String, Vec<String>> = serde_json::from_str(json)?;
        Ok(SnippetIngredients::new(snippets))
    }

    /// Load recipe snippets from file path
    pub fn load_from_file(path: &Path) -> Result<SnippetIngredients, SnippetLoadError> {
        if !path.exists() {
            return Err(SnippetLoadError::FileNotFound(path.display().to_string()));
        }

        tracing::info!("Loading recipe snippets from file: {}", path.display());
        let json = std::fs::read_to_string(path)?;
        let source = Self::from_json(&json)?;
        tracing::info!("Loaded snippets for {} keywords", source.keyword_count());
        Ok(source)
    }
}
