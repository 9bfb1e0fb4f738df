pub mod catalog;
pub mod cli;
pub mod costing;
pub mod error;
pub mod export;
pub mod interface;
pub mod models;

pub use costing::{compute_line, compute_totals, scale_recipe, IngredientLookup};
pub use error::{CostingError, KitchenError, Result};
pub use models::{
    ComputedLine, ComputedTotals, IngredientMaster, Recipe, RecipeCosting, RecipeIngredientLine,
};
