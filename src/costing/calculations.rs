use crate::costing::constants::GRAMS_PER_KCAL_BASE;
use crate::costing::lookup::IngredientLookup;
use crate::error::CostingError;
use crate::models::{
    ComputedLine, ComputedTotals, IngredientMaster, Recipe, RecipeCosting, RecipeIngredientLine,
};

/// Reject portion counts that cannot be divided by or scaled from.
fn checked_portions(portions: f64) -> Result<f64, CostingError> {
    if portions.is_finite() && portions > 0.0 {
        Ok(portions)
    } else {
        Err(CostingError::InvalidPortions(portions))
    }
}

/// Cost and calories for one recipe line.
///
/// Values are left unrounded so that summing them does not accumulate
/// rounding error; formatting is the caller's business.
pub fn compute_line(
    line: &RecipeIngredientLine,
    ingredient: Option<&IngredientMaster>,
) -> Result<ComputedLine, CostingError> {
    let ingredient =
        ingredient.ok_or_else(|| CostingError::MissingIngredient(line.ingredient_id.clone()))?;

    if !ingredient.has_valid_yield() {
        return Err(CostingError::InvalidYield(ingredient.id.clone()));
    }

    let adjusted_quantity = line.quantity / ingredient.yield_fraction();
    let cost = adjusted_quantity * ingredient.price_per_base_unit;
    let kcal = (line.quantity * ingredient.kcal_per_thousand_grams) / GRAMS_PER_KCAL_BASE;

    Ok(ComputedLine {
        ingredient_id: line.ingredient_id.clone(),
        name: ingredient.name.clone(),
        unit: ingredient.unit.clone(),
        quantity: line.quantity,
        adjusted_quantity,
        cost,
        kcal,
    })
}

/// Cost and calorie totals for a recipe.
///
/// Lines whose ingredient is unknown are left out of the totals and reported
/// in `skipped_ids`. An invalid yield or portion count aborts the whole
/// computation.
pub fn compute_totals<L>(recipe: &Recipe, lookup: &L) -> Result<RecipeCosting, CostingError>
where
    L: IngredientLookup + ?Sized,
{
    let portions = checked_portions(recipe.portions)?;

    let mut lines = Vec::with_capacity(recipe.ingredients.len());
    let mut skipped_ids = Vec::new();

    for line in &recipe.ingredients {
        match compute_line(line, lookup.ingredient(&line.ingredient_id)) {
            Ok(computed) => lines.push(computed),
            Err(CostingError::MissingIngredient(id)) => skipped_ids.push(id),
            Err(e) => return Err(e),
        }
    }

    let total_cost: f64 = lines.iter().map(|l| l.cost).sum();
    let total_kcal: f64 = lines.iter().map(|l| l.kcal).sum();

    Ok(RecipeCosting {
        lines,
        totals: ComputedTotals {
            total_cost,
            total_kcal,
            cost_per_portion: total_cost / portions,
            kcal_per_portion: total_kcal / portions,
        },
        skipped_ids,
    })
}

/// Scale every quantity of a recipe to a new portion count.
///
/// Returns a new recipe; the input is left untouched.
pub fn scale_recipe(recipe: &Recipe, target_portions: f64) -> Result<Recipe, CostingError> {
    let target = checked_portions(target_portions)?;
    let current = checked_portions(recipe.portions)?;
    let factor = target / current;

    let ingredients = recipe
        .ingredients
        .iter()
        .map(|line| RecipeIngredientLine {
            ingredient_id: line.ingredient_id.clone(),
            quantity: line.quantity * factor,
        })
        .collect();

    Ok(Recipe {
        id: recipe.id.clone(),
        name: recipe.name.clone(),
        portions: target,
        ingredients,
    })
}
