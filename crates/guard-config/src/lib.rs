use std::env;

use serde::{Deserialize, Serialize};

use self::analysis::AnalysisConfig;
use self::lookup::{LookupConfig, LookupMode};
use self::report::ReportConfig;

pub mod analysis;
pub mod lookup;
pub mod report;

#[derive(Serialize, Deserialize, Clone, Debug, Default)]
#[serde(default)]
pub struct Config {
    pub analysis: AnalysisConfig,
    pub lookup: LookupConfig,
    pub report: ReportConfig,
}

impl Config {
    pub fn new() -> Self {
        Self::from_vars(|key| env::var(key).ok())
    }

    /// Build config from a variable source, falling back to defaults for
    /// anything missing or unparsable
    pub fn from_vars(var: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Config::default();

        if let Some(ms) = var("ANALYSIS_PACING_MS").and_then(|v| v.parse().ok()) {
            config.analysis.pacing_ms = ms;
        }

        if let Some(mode) = var("LOOKUP_MODE").and_then(|v| LookupMode::parse(&v)) {
            config.lookup.mode = mode;
        }

        if let Some(n) = var("LOOKUP_MAX_IN_FLIGHT").and_then(|v| v.parse().ok()) {
            config.lookup.max_in_flight = n;
        }

        if let Some(path) = var("SNIPPETS_PATH").filter(|v| !v.trim().is_empty()) {
            config.lookup.snippets_path = Some(path);
        }

        if let Some(n) = var("REPORT_MAX_INGREDIENTS").and_then(|v| v.parse().ok()) {
            config.report.max_ingredients = n;
        }

        config
    }
}
