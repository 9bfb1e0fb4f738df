pub mod calculations;
pub mod constants;
pub mod lookup;
pub mod requisition;

pub use calculations::{compute_line, compute_totals, scale_recipe};
pub use constants::*;
pub use lookup::{index_by_id, IngredientLookup};
pub use requisition::plan_requisition;
