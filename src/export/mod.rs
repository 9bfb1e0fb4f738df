pub mod output;

pub use output::{write_costing_csv, write_costing_json, write_requisition_csv};
