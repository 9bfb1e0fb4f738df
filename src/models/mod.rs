mod computed;
mod ingredient;
mod recipe;

pub use computed::{ComputedLine, ComputedTotals, RecipeCosting, Requisition, RequisitionItem};
pub use ingredient::IngredientMaster;
pub use recipe::{PlannedRecipe, Recipe, RecipeIngredientLine};
