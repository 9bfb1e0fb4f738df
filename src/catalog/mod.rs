mod manager;
mod persistence;

pub use manager::IngredientCatalog;
pub use persistence::{load_catalog, load_plan, load_recipe, save_catalog, save_recipe};
