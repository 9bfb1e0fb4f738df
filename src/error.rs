use thiserror::Error;

/// Errors signalled by the costing aggregator.
///
/// These are plain values: the aggregator never logs or recovers, the caller
/// decides how each one is shown.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CostingError {
    #[error("Unknown ingredient: {0}")]
    MissingIngredient(String),

    #[error("Ingredient {0} has a yield of zero or less")]
    InvalidYield(String),

    #[error("Invalid portion count: {0}")]
    InvalidPortions(f64),
}

#[derive(Debug, Error)]
pub enum KitchenError {
    #[error(transparent)]
    Costing(#[from] CostingError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Prompt error: {0}")]
    Prompt(#[from] dialoguer::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Unresolved ingredients: {}", .0.join(", "))]
    UnresolvedIngredients(Vec<String>),
}

pub type Result<T> = std::result::Result<T, KitchenError>;
