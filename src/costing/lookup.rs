use std::collections::HashMap;

use crate::models::IngredientMaster;

/// Resolves ingredient ids to master data.
///
/// Anything that can answer "which ingredient has this id" can feed the
/// aggregator: a plain map, the catalog, or a caller's own cache.
pub trait IngredientLookup {
    fn ingredient(&self, id: &str) -> Option<&IngredientMaster>;
}

impl IngredientLookup for HashMap<String, IngredientMaster> {
    fn ingredient(&self, id: &str) -> Option<&IngredientMaster> {
        self.get(id)
    }
}

/// Build an id-keyed map from a list of ingredients (last duplicate wins).
pub fn index_by_id(
    ingredients: impl IntoIterator<Item = IngredientMaster>,
) -> HashMap<String, IngredientMaster> {
    ingredients
        .into_iter()
        .map(|ingredient| (ingredient.id.clone(), ingredient))
        .collect()
}
