use std::fmt;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Match label given to a dish whose ingredients could not be looked up
pub const UNVERIFIED_MATCH: &str = "Unable to verify ingredients";

/// A user-declared food sensitivity
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Allergy {
    pub id: String,
    pub name: String,
}

impl Allergy {
    /// New allergy with a fresh opaque id
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            name: name.into(),
        }
    }
}

/// One menu item with the ingredients and allergy matches behind its verdict.
///
/// `is_recommended` is derived from the matches at construction time and the
/// record cannot be changed afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Dish {
    name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    description: Option<String>,
    is_recommended: bool,
    allergy_matches: Vec<String>,
    ingredients: Vec<String>,
}

impl Dish {
    /// Build a dish from looked-up ingredients and the allergies they matched.
    /// Repeated matches are dropped, keeping first-seen order.
    pub fn assessed(
        name: impl Into<String>,
        description: Option<String>,
        ingredients: Vec<String>,
        allergy_matches: Vec<String>,
    ) -> Self {
        let mut unique: Vec<String> = Vec::with_capacity(allergy_matches.len());
        for m in allergy_matches {
            if !unique.contains(&m) {
                unique.push(m);
            }
        }

        Self {
            name: name.into(),
            description,
            is_recommended: unique.is_empty(),
            allergy_matches: unique,
            ingredients,
        }
    }

    /// Dish whose ingredient lookup failed
    pub fn unverified(name: impl Into<String>, description: Option<String>) -> Self {
        Self {
            name: name.into(),
            description,
            is_recommended: false,
            allergy_matches: vec![UNVERIFIED_MATCH.to_string()],
            ingredients: vec![],
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub fn is_recommended(&self) -> bool {
        self.is_recommended
    }

    pub fn allergy_matches(&self) -> &[String] {
        &self.allergy_matches
    }

    pub fn ingredients(&self) -> &[String] {
        &self.ingredients
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NoticeLevel {
    Info,
    Error,
}

/// User-facing message produced by the app in response to an event
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notice {
    pub level: NoticeLevel,
    pub title: String,
    pub description: String,
}

impl Notice {
    pub fn info(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Info,
            title: title.into(),
            description: description.into(),
        }
    }

    pub fn error(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Error,
            title: title.into(),
            description: description.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MenuSource {
    Typed,
    File(PathBuf),
    Stdin,
}

impl fmt::Display for MenuSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MenuSource::Typed => write!(f, "typed text"),
            MenuSource::File(path) => write!(f, "{}", path.display()),
            MenuSource::Stdin => write!(f, "stdin"),
        }
    }
}

#[derive(Debug, Clone)]
pub enum AppEvent {
    // UI -> app
    AddAllergy(String),
    QuickPick(String),
    /// Remove by id, or by name when no id matches
    RemoveAllergy(String),
    ListAllergies,
    SetMenuText {
        text: String,
        source: MenuSource,
    },
    LoadMenuFile(PathBuf),
    AnalyzeMenu,
    Shutdown,

    // App -> UI
    AllergiesChanged {
        allergies: Vec<Allergy>,
        /// Common allergies the user can still quick-add
        quick_picks: Vec<String>,
    },
    MenuLoaded {
        lines: usize,
        source: MenuSource,
    },
    AnalysisStarted,
    ShowResults(Vec<Dish>),
    Notice(Notice),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_assessed_dish_dedups_matches() {
        let dish = Dish::assessed(
            "Cheese Pizza",
            None,
            vec!["cheese".into(), "wheat".into()],
            vec!["Dairy".into(), "Gluten".into(), "Dairy".into()],
        );

        assert_eq!(dish.allergy_matches(), &["Dairy".to_string(), "Gluten".to_string()]);
        assert!(!dish.is_recommended());
    }

    #[test]
    fn test_assessed_dish_without_matches_is_recommended() {
        let dish = Dish::assessed("Green Salad", None, vec!["oil".into()], vec![]);
        assert!(dish.is_recommended());
        assert!(dish.allergy_matches().is_empty());
    }

    #[test]
    fn test_unverified_dish() {
        let dish = Dish::unverified("Mystery Stew", None);
        assert!(!dish.is_recommended());
        assert_eq!(dish.allergy_matches(), &[UNVERIFIED_MATCH.to_string()]);
        assert!(dish.ingredients().is_empty());
    }

    #[test]
    fn test_dish_serializes_camel_case() {
        let dish = Dish::assessed("Soup", None, vec!["milk".into()], vec!["Dairy".into()]);
        let json = serde_json::to_value(&dish).unwrap();

        assert_eq!(json["isRecommended"], false);
        assert_eq!(json["allergyMatches"][0], "Dairy");
        assert!(json.get("description").is_none());
    }

    #[test]
    fn test_menu_source_labels() {
        assert_eq!(MenuSource::Typed.to_string(), "typed text");
        assert_eq!(MenuSource::Stdin.to_string(), "stdin");
        let file = MenuSource::File(PathBuf::from("menus/lunch.txt"));
        assert_eq!(file.to_string(), "menus/lunch.txt");
    }

    #[test]
    fn test_allergy_ids_are_unique() {
        let a = Allergy::new("Soy");
        let b = Allergy::new("Soy");
        assert_ne!(a.id, b.id);
    }
}
