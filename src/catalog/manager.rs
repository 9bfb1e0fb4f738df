use std::collections::HashMap;

use strsim::jaro_winkler;

use crate::costing::{index_by_id, IngredientLookup};
use crate::models::IngredientMaster;

/// Minimum similarity for an id to be offered as a suggestion.
const SUGGESTION_THRESHOLD: f64 = 0.8;

/// Ingredient master data keyed by id.
pub struct IngredientCatalog {
    ingredients: HashMap<String, IngredientMaster>,
}

impl IngredientCatalog {
    /// Create a catalog from a list of ingredients (last duplicate id wins).
    pub fn new(ingredients: Vec<IngredientMaster>) -> Self {
        Self {
            ingredients: index_by_id(ingredients),
        }
    }

    pub fn get(&self, id: &str) -> Option<&IngredientMaster> {
        self.ingredients.get(id)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.ingredients.contains_key(id)
    }

    /// All ingredients sorted by name.
    pub fn all_ingredients(&self) -> Vec<&IngredientMaster> {
        let mut all: Vec<&IngredientMaster> = self.ingredients.values().collect();
        all.sort_by(|a, b| a.name.cmp(&b.name).then_with(|| a.id.cmp(&b.id)));
        all
    }

    /// Ids of ingredients that cannot be costed because of their yield.
    pub fn invalid_yield_ids(&self) -> Vec<&str> {
        let mut ids: Vec<&str> = self
            .ingredients
            .values()
            .filter(|i| !i.has_valid_yield())
            .map(|i| i.id.as_str())
            .collect();
        ids.sort_unstable();
        ids
    }

    /// Closest known id for an unknown one, matching on id or name.
    pub fn suggest(&self, unknown_id: &str) -> Option<&str> {
        let needle = unknown_id.to_lowercase();

        self.ingredients
            .values()
            .map(|i| {
                let by_id = jaro_winkler(&i.id.to_lowercase(), &needle);
                let by_name = jaro_winkler(&i.name.to_lowercase(), &needle);
                (i.id.as_str(), by_id.max(by_name))
            })
            .filter(|(_, score)| *score >= SUGGESTION_THRESHOLD)
            .max_by(|a, b| {
                a.1.partial_cmp(&b.1)
                    .unwrap_or(std::cmp::Ordering::Equal)
                    // Stable choice between equal scores
                    .then_with(|| b.0.cmp(a.0))
            })
            .map(|(id, _)| id)
    }

    /// Convert to a list for JSON serialization, sorted by id.
    pub fn to_ingredients(&self) -> Vec<IngredientMaster> {
        let mut all: Vec<IngredientMaster> = self.ingredients.values().cloned().collect();
        all.sort_by(|a, b| a.id.cmp(&b.id));
        all
    }

    pub fn len(&self) -> usize {
        self.ingredients.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ingredients.is_empty()
    }
}

impl IngredientLookup for IngredientCatalog {
    fn ingredient(&self, id: &str) -> Option<&IngredientMaster> {
        self.get(id)
    }
}
