use guard_types::Allergy;

/// Broad allergy categories and the ingredient terms that trigger them
pub const ALLERGEN_SYNONYMS: &[(&str, &[&str])] = &[
    ("dairy", &["milk", "cheese", "butter", "cream", "yogurt"]),
    ("nuts", &["almonds", "walnuts", "pecans", "cashews", "hazelnuts"]),
    ("shellfish", &["shrimp", "crab", "lobster", "crayfish"]),
    ("gluten", &["wheat", "flour", "bread", "pasta"]),
    ("soy", &["soy sauce", "tofu", "soybean"]),
];

/// Synonyms registered for a lowercased allergy name
pub fn synonyms_for(allergen: &str) -> Option<&'static [&'static str]> {
    ALLERGEN_SYNONYMS
        .iter()
        .find(|(key, _)| *key == allergen)
        .map(|(_, synonyms)| *synonyms)
}

/// Synonym-table match. Both arguments are expected lowercased.
pub fn is_allergen_match(allergen: &str, ingredient: &str) -> bool {
    synonyms_for(allergen)
        .is_some_and(|synonyms| synonyms.iter().any(|s| ingredient.contains(s)))
}

fn matches_ingredient(allergen: &str, ingredient: &str) -> bool {
    ingredient.contains(allergen)
        || allergen.contains(ingredient)
        || is_allergen_match(allergen, ingredient)
}

/// Names of the allergies hit by any of the ingredients, first-seen order, no repeats
pub fn find_allergy_matches(ingredients: &[String], allergies: &[Allergy]) -> Vec<String> {
    let ingredients: Vec<String> = ingredients.iter().map(|i| i.to_lowercase()).collect();
    let mut matches: Vec<String> = Vec::new();

    for allergy in allergies {
        let allergen = allergy.name.to_lowercase();

        if ingredients.iter().any(|i| matches_ingredient(&allergen, i))
            && !matches.contains(&allergy.name)
        {
            matches.push(allergy.name.clone());
        }
    }

    matches
}
