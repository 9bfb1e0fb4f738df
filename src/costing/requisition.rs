use std::collections::HashMap;

use crate::costing::calculations::{compute_totals, scale_recipe};
use crate::costing::lookup::IngredientLookup;
use crate::error::CostingError;
use crate::models::{PlannedRecipe, Requisition, RequisitionItem};

/// Merge the purchase needs of every planned recipe into one list.
///
/// Each recipe is scaled to its planned portions and costed; lines for the
/// same ingredient are summed. Items keep first-appearance order, as do the
/// de-duplicated skipped ids.
pub fn plan_requisition<L>(
    plan: &[PlannedRecipe],
    lookup: &L,
) -> Result<Requisition, CostingError>
where
    L: IngredientLookup + ?Sized,
{
    let mut items: Vec<RequisitionItem> = Vec::new();
    let mut positions: HashMap<String, usize> = HashMap::new();
    let mut skipped_ids: Vec<String> = Vec::new();

    for entry in plan {
        let scaled = scale_recipe(&entry.recipe, entry.portions)?;
        let costing = compute_totals(&scaled, lookup)?;

        for line in costing.lines {
            match positions.get(&line.ingredient_id) {
                Some(&idx) => {
                    let item = &mut items[idx];
                    item.quantity += line.quantity;
                    item.adjusted_quantity += line.adjusted_quantity;
                    item.cost += line.cost;
                    item.kcal += line.kcal;
                }
                None => {
                    positions.insert(line.ingredient_id.clone(), items.len());
                    items.push(RequisitionItem {
                        ingredient_id: line.ingredient_id,
                        name: line.name,
                        unit: line.unit,
                        quantity: line.quantity,
                        adjusted_quantity: line.adjusted_quantity,
                        cost: line.cost,
                        kcal: line.kcal,
                    });
                }
            }
        }

        for id in costing.skipped_ids {
            if !skipped_ids.contains(&id) {
                skipped_ids.push(id);
            }
        }
    }

    let total_cost = items.iter().map(|i| i.cost).sum();
    let total_kcal = items.iter().map(|i| i.kcal).sum();

    Ok(Requisition {
        items,
        total_cost,
        total_kcal,
        skipped_ids,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::costing::lookup::index_by_id;
    use crate::models::{IngredientMaster, Recipe, RecipeIngredientLine};

    fn lookup() -> HashMap<String, IngredientMaster> {
        index_by_id(vec![
            IngredientMaster::new("flour", "Flour", 1.5, 100.0, 3640.0),
            IngredientMaster::new("butter", "Butter", 8.0, 100.0, 7170.0),
        ])
    }

    fn bread() -> Recipe {
        Recipe::new(
            10.0,
            vec![
                RecipeIngredientLine::new("flour", 1.0),
                RecipeIngredientLine::new("yeast", 0.02),
            ],
        )
    }

    fn shortbread() -> Recipe {
        Recipe::new(
            20.0,
            vec![
                RecipeIngredientLine::new("flour", 0.5),
                RecipeIngredientLine::new("butter", 0.25),
                RecipeIngredientLine::new("yeast", 0.01),
            ],
        )
    }

    #[test]
    fn test_merges_shared_ingredients() {
        let plan = vec![
            PlannedRecipe {
                recipe: bread(),
                portions: 20.0,
            },
            PlannedRecipe {
                recipe: shortbread(),
                portions: 40.0,
            },
        ];
        let requisition = plan_requisition(&plan, &lookup()).unwrap();

        assert_eq!(requisition.items.len(), 2);
        assert_eq!(requisition.items[0].ingredient_id, "flour");
        assert_eq!(requisition.items[1].ingredient_id, "butter");

        // 2.0 kg flour for bread plus 1.0 kg for shortbread
        assert!((requisition.items[0].quantity - 3.0).abs() < 1e-12);
        // 4.5 flour + 4.0 butter
        assert!((requisition.total_cost - 8.5).abs() < 1e-12);
        assert_eq!(requisition.skipped_ids, vec!["yeast".to_string()]);
    }

    #[test]
    fn test_empty_plan() {
        let requisition = plan_requisition(&[], &lookup()).unwrap();
        assert_eq!(requisition, Requisition::default());
    }

    #[test]
    fn test_invalid_planned_portions() {
        let plan = vec![PlannedRecipe {
            recipe: bread(),
            portions: 0.0,
        }];
        assert_eq!(
            plan_requisition(&plan, &lookup()).unwrap_err(),
            CostingError::InvalidPortions(0.0)
        );
    }
}
