use serde::{Deserialize, Serialize};

fn default_max_ingredients() -> usize {
    8
}

#[derive(Serialize, Deserialize, Clone, Debug)]
#[serde(default)]
pub struct ReportConfig {
    /// Ingredients listed per dish before collapsing into "+N more"
    #[serde(default = "default_max_ingredients")]
    pub max_ingredients: usize,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            max_ingredients: default_max_ingredients(),
        }
    }
}
