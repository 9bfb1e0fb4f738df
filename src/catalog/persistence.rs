use std::collections::HashMap;
use std::fs;
use std::path::Path;

use tracing::debug;

use crate::error::Result;
use crate::models::{IngredientMaster, PlannedRecipe, Recipe};

/// Load ingredient master data from a JSON file.
///
/// Deduplicates by id (last occurrence wins) and returns entries sorted by id.
pub fn load_catalog<P: AsRef<Path>>(path: P) -> Result<Vec<IngredientMaster>> {
    let path = path.as_ref();
    let content = fs::read_to_string(path)?;
    let ingredients: Vec<IngredientMaster> = serde_json::from_str(&content)?;
    let raw_count = ingredients.len();

    let mut seen: HashMap<String, IngredientMaster> = HashMap::new();
    for ingredient in ingredients {
        seen.insert(ingredient.id.clone(), ingredient);
    }

    debug!(
        path = %path.display(),
        raw_count,
        unique = seen.len(),
        "loaded ingredient catalog"
    );

    let mut unique: Vec<IngredientMaster> = seen.into_values().collect();
    unique.sort_by(|a, b| a.id.cmp(&b.id));
    Ok(unique)
}

/// Save ingredient master data to a JSON file, sorted by id.
pub fn save_catalog<P: AsRef<Path>>(path: P, ingredients: &[IngredientMaster]) -> Result<()> {
    let mut seen: HashMap<&str, &IngredientMaster> = HashMap::new();
    for ingredient in ingredients {
        seen.insert(ingredient.id.as_str(), ingredient);
    }

    let mut deduped: Vec<&IngredientMaster> = seen.into_values().collect();
    deduped.sort_by(|a, b| a.id.cmp(&b.id));

    let json = serde_json::to_string_pretty(&deduped)?;
    fs::write(path, json)?;
    Ok(())
}

pub fn load_recipe<P: AsRef<Path>>(path: P) -> Result<Recipe> {
    let content = fs::read_to_string(path)?;
    Ok(serde_json::from_str(&content)?)
}

pub fn save_recipe<P: AsRef<Path>>(path: P, recipe: &Recipe) -> Result<()> {
    let json = serde_json::to_string_pretty(recipe)?;
    fs::write(path, json)?;
    Ok(())
}

/// Load a production plan: a JSON list of `{ "recipe": {...}, "portions": n }`.
pub fn load_plan<P: AsRef<Path>>(path: P) -> Result<Vec<PlannedRecipe>> {
    let content = fs::read_to_string(path)?;
    Ok(serde_json::from_str(&content)?)
}
