use serde::{Deserialize, Serialize};

/// One ingredient usage inside a recipe.
///
/// `quantity` is in the ingredient's base unit (kg or l) for the recipe's
/// current portion count.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecipeIngredientLine {
    pub ingredient_id: String,
    pub quantity: f64,
}

impl RecipeIngredientLine {
    pub fn new(ingredient_id: impl Into<String>, quantity: f64) -> Self {
        Self {
            ingredient_id: ingredient_id.into(),
            quantity,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Recipe {
    #[serde(default)]
    pub id: String,

    #[serde(default)]
    pub name: String,

    /// Number of servings the ingredient list yields.
    pub portions: f64,

    #[serde(default)]
    pub ingredients: Vec<RecipeIngredientLine>,
}

impl Recipe {
    pub fn new(portions: f64, ingredients: Vec<RecipeIngredientLine>) -> Self {
        Self {
            id: String::new(),
            name: String::new(),
            portions,
            ingredients,
        }
    }

    pub fn with_name(mut self, id: impl Into<String>, name: impl Into<String>) -> Self {
        self.id = id.into();
        self.name = name.into();
        self
    }

    /// Name for display, falling back to the id.
    pub fn display_name(&self) -> &str {
        if self.name.is_empty() {
            &self.id
        } else {
            &self.name
        }
    }

    /// Ids of lines with a negative quantity, in recipe order.
    ///
    /// Such lines are still costed as given and produce negative amounts.
    pub fn negative_quantity_ids(&self) -> Vec<&str> {
        self.ingredients
            .iter()
            .filter(|line| line.quantity < 0.0)
            .map(|line| line.ingredient_id.as_str())
            .collect()
    }
}

/// A recipe scheduled for production at a given portion count.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlannedRecipe {
    pub recipe: Recipe,
    pub portions: f64,
}
