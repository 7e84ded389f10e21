use std::sync::Arc;

use guard_config::Config;
use guard_core::{AllergyList, MenuAnalyzer};
use guard_types::MenuSource;
use tokio::sync::RwLock;

/// Menu text waiting to be analyzed
#[derive(Debug, Clone)]
pub struct MenuText {
    pub text: String,
    pub source: MenuSource,
}

pub struct AppState {
    pub config: Arc<RwLock<Config>>,
    pub allergies: RwLock<AllergyList>,
    pub menu: RwLock<Option<MenuText>>,
    pub analyzer: MenuAnalyzer,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        let lookup = crate::profile::build_lookup(&config);
        let analyzer = MenuAnalyzer::from_config(&config, lookup);
        Self::with_analyzer(config, analyzer)
    }

    pub fn with_analyzer(config: Config, analyzer: MenuAnalyzer) -> Self {
        Self {
            config: Arc::new(RwLock::new(config)),
            allergies: RwLock::new(AllergyList::new()),
            menu: RwLock::new(None),
            analyzer,
        }
    }
}
