// Dish-name extraction from free-form menu text.
// Line heuristics are regex based and compiled once.

use std::sync::LazyLock;

use regex::Regex;

use crate::preprocess::{DefaultPreprocessor, MenuPreprocessor};

static CATEGORY_HEADER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^(appetizers|entrees|desserts|beverages|drinks|starters|mains|sides)")
        .expect("valid category header pattern")
});

static VENUE_HEADER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^(menu|restaurant|cuisine|welcome)").expect("valid venue header pattern")
});

static PRICE_ONLY: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\$[\d.]+$").expect("valid price pattern"));

static NUMBER_ONLY: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[\d.]+$").expect("valid number pattern"));

static LOWERCASE_ONLY: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[a-z\s]*$").expect("valid lowercase pattern"));

static PRICE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\$[\d.]+").expect("valid price pattern"));

static PAREN_DIGITS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\(\d+\)").expect("valid parenthesized digits pattern"));

static WHITESPACE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s+").expect("valid whitespace pattern"));

static MENU_NUMBERING: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[\d.-]+\s*").expect("valid numbering pattern"));

const MIN_NAME_LEN: usize = 3;
const MAX_NAME_LEN: usize = 100;

/// A dish name found in the menu, with the description lines that followed it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DishLine {
    pub name: String,
    pub description: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum LineKind {
    Header,
    Dish,
    Description,
    Other,
}

fn classify(line: &str) -> LineKind {
    if CATEGORY_HEADER.is_match(line) || VENUE_HEADER.is_match(line) {
        return LineKind::Header;
    }

    if PRICE_ONLY.is_match(line) || NUMBER_ONLY.is_match(line) {
        return LineKind::Other;
    }

    let has_alpha = line.chars().any(|c| c.is_ascii_alphabetic());

    if LOWERCASE_ONLY.is_match(line) {
        return if has_alpha {
            LineKind::Description
        } else {
            LineKind::Other
        };
    }

    let len = line.chars().count();
    if has_alpha && (MIN_NAME_LEN..=MAX_NAME_LEN).contains(&len) {
        LineKind::Dish
    } else {
        LineKind::Other
    }
}

/// Whether a trimmed menu line reads like a dish title
pub fn is_likely_dish_name(line: &str) -> bool {
    classify(line) == LineKind::Dish
}

/// Strip prices, parenthesized counts and menu numbering from a dish line
pub fn clean_dish_name(line: &str) -> String {
    let cleaned = PRICE.replace_all(line, "");
    let cleaned = PAREN_DIGITS.replace_all(&cleaned, "");
    let cleaned = WHITESPACE.replace_all(&cleaned, " ");
    let cleaned = cleaned.trim();

    MENU_NUMBERING.replace(cleaned, "").into_owned()
}

/// Extract dish names in the order they appear.
///
/// The text is normalized first, so fullwidth input reads like ASCII.
/// All-lowercase lines directly under a dish are kept as its description.
/// A category header closes the current dish.
pub fn extract_dishes(menu_text: &str) -> Vec<DishLine> {
    extract_lines(&DefaultPreprocessor.process(menu_text))
}

fn extract_lines(menu_text: &str) -> Vec<DishLine> {
    let mut dishes: Vec<DishLine> = Vec::new();
    let mut open: Option<usize> = None;

    for line in menu_text.split('\n').map(str::trim).filter(|l| !l.is_empty()) {
        match classify(line) {
            LineKind::Dish => {
                let name = clean_dish_name(line);
                if name.is_empty() {
                    open = None;
                    continue;
                }
                dishes.push(DishLine {
                    name,
                    description: None,
                });
                open = Some(dishes.len() - 1);
            }
            LineKind::Description => {
                if let Some(dish) = open.and_then(|i| dishes.get_mut(i)) {
                    let text = WHITESPACE.replace_all(line, " ");
                    match &mut dish.description {
                        Some(existing) => {
                            existing.push(' ');
                            existing.push_str(&text);
                        }
                        None => dish.description = Some(text.into_owned()),
                    }
                }
            }
            LineKind::Header => open = None,
            LineKind::Other => {}
        }
    }

    tracing::debug!("Extracted {} dish names", dishes.len());
    dishes
}
