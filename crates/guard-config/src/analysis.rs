use serde::{Deserialize, Serialize};

fn default_pacing_ms() -> u64 {
    1000
}

#[derive(Serialize, Deserialize, Clone, Debug)]
#[serde(default)]
pub struct AnalysisConfig {
    /// Delay between sequential ingredient lookups, 0 disables pacing
    #[serde(default = "default_pacing_ms")]
    pub pacing_ms: u64,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            pacing_ms: default_pacing_ms(),
        }
    }
}
