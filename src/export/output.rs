use std::fs;
use std::path::Path;

use tracing::info;

use crate::error::Result;
use crate::interface::render::{round_to, DisplayPrecision};
use crate::models::{Recipe, RecipeCosting, Requisition};

const COSTING_HEADER: [&str; 7] = [
    "ingredient_id",
    "name",
    "unit",
    "quantity",
    "adjusted_quantity",
    "cost",
    "kcal",
];

/// Write a recipe costing to CSV, one row per line plus summary rows.
///
/// Unknown ingredients are listed with empty figures so that nothing is
/// silently dropped from the export.
pub fn write_costing_csv(
    costing: &RecipeCosting,
    precision: &DisplayPrecision,
    path: &Path,
) -> Result<()> {
    let mut wtr = csv::Writer::from_path(path)?;

    wtr.write_record(COSTING_HEADER)?;

    for line in &costing.lines {
        wtr.write_record([
            line.ingredient_id.clone(),
            line.name.clone(),
            line.unit.clone(),
            precision.quantity(line.quantity),
            precision.quantity(line.adjusted_quantity),
            precision.currency(line.cost),
            precision.kcal(line.kcal),
        ])?;
    }

    for id in &costing.skipped_ids {
        wtr.write_record([id.as_str(), "Unknown", "", "", "", "", ""])?;
    }

    let totals = &costing.totals;
    wtr.write_record([
        String::new(),
        "TOTAL".to_string(),
        String::new(),
        String::new(),
        String::new(),
        precision.currency(totals.total_cost),
        precision.kcal(totals.total_kcal),
    ])?;
    wtr.write_record([
        String::new(),
        "PER_PORTION".to_string(),
        String::new(),
        String::new(),
        String::new(),
        precision.currency(totals.cost_per_portion),
        precision.kcal(totals.kcal_per_portion),
    ])?;

    wtr.flush()?;
    info!(path = %path.display(), rows = costing.lines.len(), "wrote costing CSV");
    Ok(())
}

/// Write a requisition to CSV with a closing total row.
pub fn write_requisition_csv(
    requisition: &Requisition,
    precision: &DisplayPrecision,
    path: &Path,
) -> Result<()> {
    let mut wtr = csv::Writer::from_path(path)?;

    wtr.write_record(COSTING_HEADER)?;

    for item in &requisition.items {
        wtr.write_record([
            item.ingredient_id.clone(),
            item.name.clone(),
            item.unit.clone(),
            precision.quantity(item.quantity),
            precision.quantity(item.adjusted_quantity),
            precision.currency(item.cost),
            precision.kcal(item.kcal),
        ])?;
    }

    for id in &requisition.skipped_ids {
        wtr.write_record([id.as_str(), "Unknown", "", "", "", "", ""])?;
    }

    wtr.write_record([
        String::new(),
        "TOTAL".to_string(),
        String::new(),
        String::new(),
        String::new(),
        precision.currency(requisition.total_cost),
        precision.kcal(requisition.total_kcal),
    ])?;

    wtr.flush()?;
    info!(path = %path.display(), rows = requisition.items.len(), "wrote requisition CSV");
    Ok(())
}

/// Write a recipe costing to JSON with rounded figures.
pub fn write_costing_json(
    costing: &RecipeCosting,
    recipe: &Recipe,
    precision: &DisplayPrecision,
    path: &Path,
) -> Result<()> {
    let money = |v: f64| round_to(v, precision.currency_decimals);
    let kcal = |v: f64| round_to(v, precision.kcal_decimals);
    let qty = |v: f64| round_to(v, precision.quantity_decimals);

    let json = serde_json::json!({
        "recipe": {
            "id": recipe.id,
            "name": recipe.name,
            "portions": recipe.portions,
        },
        "lines": costing.lines.iter().map(|l| {
            serde_json::json!({
                "ingredientId": l.ingredient_id,
                "name": l.name,
                "unit": l.unit,
                "quantity": qty(l.quantity),
                "adjustedQuantity": qty(l.adjusted_quantity),
                "cost": money(l.cost),
                "kcal": kcal(l.kcal),
            })
        }).collect::<Vec<_>>(),
        "totals": {
            "totalCost": money(costing.totals.total_cost),
            "totalKcal": kcal(costing.totals.total_kcal),
            "costPerPortion": money(costing.totals.cost_per_portion),
            "kcalPerPortion": kcal(costing.totals.kcal_per_portion),
        },
        "skippedIds": costing.skipped_ids,
    });

    fs::write(path, serde_json::to_string_pretty(&json)?)?;
    info!(path = %path.display(), "wrote costing JSON");
    Ok(())
}
