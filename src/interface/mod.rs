pub mod prompts;
pub mod render;

pub use prompts::{prompt_target_portions, prompt_yes_no};
pub use render::{
    display_catalog, display_costing, display_requisition, round_to, DisplayPrecision,
};
