use dialoguer::{Confirm, Input};

use crate::error::{KitchenError, Result};

/// Prompt for the portion count to scale a recipe to.
pub fn prompt_target_portions(current: f64) -> Result<f64> {
    let input: String = Input::new()
        .with_prompt(format!("Scale to how many portions? (currently {})", current))
        .default(current.to_string())
        .interact_text()?;

    let portions: f64 = input
        .trim()
        .parse()
        .map_err(|_| KitchenError::InvalidInput(format!("Invalid number: {}", input)))?;

    if !portions.is_finite() || portions <= 0.0 {
        return Err(KitchenError::InvalidInput(
            "Portions must be greater than zero".to_string(),
        ));
    }

    Ok(portions)
}

/// Prompt for yes/no confirmation.
pub fn prompt_yes_no(prompt: &str, default: bool) -> Result<bool> {
    Ok(Confirm::new()
        .with_prompt(prompt)
        .default(default)
        .interact()?)
}
