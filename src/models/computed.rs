use serde::{Deserialize, Serialize};

use crate::error::{KitchenError, Result};

/// Derived costing for a single recipe line. Never persisted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComputedLine {
    pub ingredient_id: String,

    pub name: String,

    pub unit: String,

    /// Raw recipe quantity.
    pub quantity: f64,

    /// Purchase quantity needed to net `quantity` after yield loss.
    pub adjusted_quantity: f64,

    pub cost: f64,

    pub kcal: f64,
}

/// Recipe-level sums and per-portion values.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ComputedTotals {
    pub total_cost: f64,
    pub total_kcal: f64,
    pub cost_per_portion: f64,
    pub kcal_per_portion: f64,
}

/// Result of costing a whole recipe.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecipeCosting {
    /// Resolved lines, in recipe order.
    pub lines: Vec<ComputedLine>,

    pub totals: ComputedTotals,

    /// Ingredient ids that could not be resolved, in recipe order.
    pub skipped_ids: Vec<String>,
}

impl RecipeCosting {
    pub fn is_complete(&self) -> bool {
        self.skipped_ids.is_empty()
    }

    /// Fail with the unresolved ids, in recipe order, if any line was skipped.
    pub fn require_complete(&self) -> Result<()> {
        if self.is_complete() {
            Ok(())
        } else {
            Err(KitchenError::UnresolvedIngredients(self.skipped_ids.clone()))
        }
    }
}

/// One merged purchase line of a requisition.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RequisitionItem {
    pub ingredient_id: String,
    pub name: String,
    pub unit: String,
    pub quantity: f64,
    pub adjusted_quantity: f64,
    pub cost: f64,
    pub kcal: f64,
}

/// Purchase list for a production plan.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Requisition {
    pub items: Vec<RequisitionItem>,
    pub total_cost: f64,
    pub total_kcal: f64,
    pub skipped_ids: Vec<String>,
}
