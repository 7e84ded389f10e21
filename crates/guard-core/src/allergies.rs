use guard_types::Allergy;

use crate::error::AllergyError;

/// Quick-pick labels offered next to the free-text input
pub const COMMON_ALLERGIES: &[&str] = &[
    "Nuts", "Peanuts", "Dairy", "Eggs", "Soy", "Wheat", "Gluten", "Shellfish", "Fish", "Sesame",
    "Mustard", "Celery",
];

/// User allergy list, insertion ordered, names unique ignoring case
#[derive(Debug, Clone, Default)]
pub struct AllergyList {
    items: Vec<Allergy>,
}

impl AllergyList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a free-text allergy
    pub fn add(&mut self, name: &str) -> Result<Allergy, AllergyError> {
        let trimmed = name.trim();
        if trimmed.is_empty() {
            return Err(AllergyError::Empty);
        }

        if self.contains_name(trimmed) {
            return Err(AllergyError::Duplicate(trimmed.to_string()));
        }

        let allergy = Allergy::new(trimmed);
        tracing::debug!("Added allergy {} ({})", allergy.name, allergy.id);
        self.items.push(allergy.clone());
        Ok(allergy)
    }

    /// Add one of the common allergies under its canonical spelling
    pub fn quick_pick(&mut self, label: &str) -> Result<Allergy, AllergyError> {
        let label = label.trim();
        let canonical = COMMON_ALLERGIES
            .iter()
            .find(|c| c.eq_ignore_ascii_case(label))
            .ok_or_else(|| AllergyError::NotCommon(label.to_string()))?;

        self.add(canonical)
    }

    pub fn remove(&mut self, id: &str) -> Result<Allergy, AllergyError> {
        let index = self
            .items
            .iter()
            .position(|a| a.id == id)
            .ok_or_else(|| AllergyError::NotFound(id.to_string()))?;

        Ok(self.items.remove(index))
    }

    /// Remove by id, falling back to a case-insensitive name match
    pub fn remove_by_id_or_name(&mut self, key: &str) -> Result<Allergy, AllergyError> {
        let key = key.trim();
        if self.items.iter().any(|a| a.id == key) {
            return self.remove(key);
        }

        let lowered = key.to_lowercase();
        let index = self
            .items
            .iter()
            .position(|a| a.name.to_lowercase() == lowered)
            .ok_or_else(|| AllergyError::NotFound(key.to_string()))?;

        Ok(self.items.remove(index))
    }

    pub fn contains_name(&self, name: &str) -> bool {
        let lowered = name.trim().to_lowercase();
        self.items.iter().any(|a| a.name.to_lowercase() == lowered)
    }

    /// Common allergies not yet in the list
    pub fn available_quick_picks(&self) -> Vec<&'static str> {
        COMMON_ALLERGIES
            .iter()
            .copied()
            .filter(|c| !self.contains_name(c))
            .collect()
    }

    pub fn as_slice(&self) -> &[Allergy] {
        &self.items
    }

    pub fn to_vec(&self) -> Vec<Allergy> {
        self.items.clone()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
