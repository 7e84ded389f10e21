use serde::{Deserialize, Serialize};

fn default_mode() -> LookupMode {
    LookupMode::Sequential
}

fn default_max_in_flight() -> usize {
    4
}

#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum LookupMode {
    Sequential,
    Concurrent,
}

impl LookupMode {
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "sequential" => Some(Self::Sequential),
            "concurrent" => Some(Self::Concurrent),
            _ => None,
        }
    }
}

#[derive(Serialize, Deserialize, Clone, Debug)]
#[serde(default)]
pub struct LookupConfig {
    #[serde(default = "default_mode")]
    pub mode: LookupMode,
    /// Upper bound of lookups running at once in concurrent mode
    #[serde(default = "default_max_in_flight")]
    pub max_in_flight: usize,
    /// JSON file of recipe snippets consulted before the built-in dictionary
    #[serde(default)]
    pub snippets_path: Option<String>,
}

impl Default for LookupConfig {
    fn default() -> Self {
        Self {
            mode: default_mode(),
            max_in_flight: default_max_in_flight(),
            snippets_path: None,
        }
    }
}
