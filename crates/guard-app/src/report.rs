use std::fmt::Write;

use clap::ValueEnum;
use guard_types::Dish;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ReportFormat {
    Text,
    Json,
}

pub fn render(
    dishes: &[Dish],
    format: ReportFormat,
    max_ingredients: usize,
) -> anyhow::Result<String> {
    match format {
        ReportFormat::Text => Ok(render_text(dishes, max_ingredients)),
        ReportFormat::Json => Ok(serde_json::to_string_pretty(dishes)?),
    }
}

/// Human readable report, dishes to avoid first
pub fn render_text(dishes: &[Dish], max_ingredients: usize) -> String {
    let (safe, avoid): (Vec<&Dish>, Vec<&Dish>) =
        dishes.iter().partition(|d| d.is_recommended());
    let mut out = String::new();

    let _ = match safe.len() {
        1 => writeln!(out, "1 dish appears safe for you"),
        n => writeln!(out, "{n} dishes appear safe for you"),
    };
    let _ = writeln!(out, "{} may contain allergens", count_dishes(avoid.len()));

    if !avoid.is_empty() {
        let _ = writeln!(out, "\nDishes to Avoid");
        for dish in avoid {
            write_dish(&mut out, dish, max_ingredients);
        }
    }

    if !safe.is_empty() {
        let _ = writeln!(out, "\nRecommended Dishes");
        for dish in safe {
            write_dish(&mut out, dish, max_ingredients);
        }
    }

    out
}

fn count_dishes(n: usize) -> String {
    match n {
        1 => "1 dish".to_string(),
        n => format!("{n} dishes"),
    }
}

fn write_dish(out: &mut String, dish: &Dish, max_ingredients: usize) {
    let _ = writeln!(out, "  {}", dish.name());

    if let Some(description) = dish.description() {
        let _ = writeln!(out, "    {description}");
    }

    if !dish.allergy_matches().is_empty() {
        let _ = writeln!(out, "    Contains: {}", dish.allergy_matches().join(", "));
    }

    let ingredients = dish.ingredients();
    if !ingredients.is_empty() {
        let shown = ingredients.len().min(max_ingredients);
        let mut line = ingredients[..shown].join(", ");
        if ingredients.len() > shown {
            let _ = write!(line, " +{} more", ingredients.len() - shown);
        }
        let _ = writeln!(out, "    Common ingredients: {line}");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dish(name: &str, ingredients: &[&str], matches: &[&str]) -> Dish {
        Dish::assessed(
            name,
            None,
            ingredients.iter().map(|s| s.to_string()).collect(),
            matches.iter().map(|s| s.to_string()).collect(),
        )
    }

    #[test]
    fn test_partition_and_counts() {
        let dishes = vec![
            dish("Green Salad", &["oil", "vinegar"], &[]),
            dish("Cheese Pizza", &["wheat", "cheese"], &["Dairy"]),
        ];
        let text = render_text(&dishes, 8);

        assert!(text.starts_with("1 dish appears safe for you\n1 dish may contain allergens\n"));
        let avoid = text.find("Dishes to Avoid").unwrap();
        let recommended = text.find("Recommended Dishes").unwrap();
        assert!(avoid < recommended);
        assert!(text.contains("    Contains: Dairy\n"));
    }

    #[test]
    fn test_counts_are_pluralized() {
        let dishes = vec![
            dish("Green Salad", &["oil"], &[]),
            dish("Beef Taco", &["beef"], &[]),
        ];
        let text = render_text(&dishes, 8);
        assert!(text.starts_with("2 dishes appear safe for you\n0 dishes may contain allergens\n"));
    }

    #[test]
    fn test_ingredients_are_truncated() {
        let many = ["a", "b", "c", "d", "e", "f", "g", "h", "i", "j"];
        let text = render_text(&[dish("Big Plate", &many, &[])], 8);
        assert!(text.contains("Common ingredients: a, b, c, d, e, f, g, h +2 more\n"));
    }

    #[test]
    fn test_empty_groups_are_omitted() {
        let text = render_text(&[Dish::unverified("Mystery Stew", None)], 8);
        assert!(!text.contains("Recommended Dishes"));
        assert!(text.contains("Unable to verify ingredients"));
        assert!(!text.contains("Common ingredients"));
    }

    #[test]
    fn test_json_report() {
        let dishes = vec![dish("Soup", &["milk"], &["Dairy"])];
        let json = render(&dishes, ReportFormat::Json, 8).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();

        assert_eq!(value[0]["name"], "Soup");
        assert_eq!(value[0]["isRecommended"], false);
    }
}
