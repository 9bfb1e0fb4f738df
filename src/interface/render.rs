use crate::models::{IngredientMaster, Recipe, RecipeCosting, Requisition};

/// Decimal places used when values are shown or exported.
///
/// Rounding only ever happens at this boundary; totals are computed from the
/// unrounded line values.
#[derive(Debug, Clone)]
pub struct DisplayPrecision {
    pub currency_decimals: u32,
    pub kcal_decimals: u32,
    pub quantity_decimals: u32,
}

impl Default for DisplayPrecision {
    fn default() -> Self {
        Self {
            currency_decimals: 2,
            kcal_decimals: 2,
            quantity_decimals: 3,
        }
    }
}

impl DisplayPrecision {
    pub fn currency(&self, value: f64) -> String {
        format_rounded(value, self.currency_decimals)
    }

    pub fn kcal(&self, value: f64) -> String {
        format_rounded(value, self.kcal_decimals)
    }

    pub fn quantity(&self, value: f64) -> String {
        format_rounded(value, self.quantity_decimals)
    }
}

fn format_rounded(value: f64, decimals: u32) -> String {
    format!("{:.*}", decimals as usize, round_to(value, decimals))
}

/// Round half away from zero to `decimals` places.
pub fn round_to(value: f64, decimals: u32) -> f64 {
    let factor = 10_f64.powi(decimals as i32);
    (value * factor).round() / factor
}

/// Display a recipe costing as a table.
///
/// `suggestion` is asked for a replacement id for every skipped ingredient.
pub fn display_costing<'a>(
    costing: &RecipeCosting,
    recipe: &Recipe,
    precision: &DisplayPrecision,
    suggestion: impl Fn(&str) -> Option<&'a str>,
) {
    println!();
    let title = recipe.display_name();
    if title.is_empty() {
        println!("=== Recipe ({} portions) ===", recipe.portions);
    } else {
        println!("=== {} ({} portions) ===", title, recipe.portions);
    }
    println!();

    let name_width = costing
        .lines
        .iter()
        .map(|l| l.name.len())
        .chain(costing.skipped_ids.iter().map(|id| id.len() + 10))
        .max()
        .unwrap_or(10)
        .max(10);

    println!(
        "{:<width$}  {:>10}  {:>10}  {:>10}  {:>10}",
        "Ingredient",
        "Qty",
        "Purchase",
        "Cost",
        "kcal",
        width = name_width
    );

    for line in &costing.lines {
        println!(
            "{:<width$}  {:>10}  {:>10}  {:>10}  {:>10}",
            line.name,
            format!("{} {}", precision.quantity(line.quantity), line.unit),
            precision.quantity(line.adjusted_quantity),
            precision.currency(line.cost),
            precision.kcal(line.kcal),
            width = name_width
        );
    }

    for id in &costing.skipped_ids {
        let hint = match suggestion(id.as_str()) {
            Some(candidate) => format!("  (did you mean '{}'?)", candidate),
            None => String::new(),
        };
        println!(
            "{:<width$}  {:>10}  {:>10}  {:>10}  {:>10}{}",
            format!("Unknown ({})", id),
            "-",
            "-",
            "-",
            "-",
            hint,
            width = name_width
        );
    }

    let totals = &costing.totals;
    println!();
    println!("--- Summary ---");
    println!("Total cost: {}", precision.currency(totals.total_cost));
    println!("Total kcal: {}", precision.kcal(totals.total_kcal));
    println!("Cost per portion: {}", precision.currency(totals.cost_per_portion));
    println!("kcal per portion: {}", precision.kcal(totals.kcal_per_portion));
    if !costing.is_complete() {
        println!(
            "Excluded {} unknown ingredient(s): {}",
            costing.skipped_ids.len(),
            costing.skipped_ids.join(", ")
        );
    }
    println!();
}

/// Display a production requisition.
pub fn display_requisition(requisition: &Requisition, precision: &DisplayPrecision) {
    if requisition.items.is_empty() && requisition.skipped_ids.is_empty() {
        println!("Requisition is empty (no planned recipes).");
        return;
    }

    println!();
    println!("=== Requisition ({} items) ===", requisition.items.len());
    println!();

    let name_width = requisition
        .items
        .iter()
        .map(|i| i.name.len())
        .max()
        .unwrap_or(10)
        .max(10);

    for item in &requisition.items {
        println!(
            "  {:<width$}  {:>10} {:<4} {:>10}",
            item.name,
            precision.quantity(item.adjusted_quantity),
            item.unit,
            precision.currency(item.cost),
            width = name_width
        );
    }

    println!();
    println!("Total cost: {}", precision.currency(requisition.total_cost));
    println!("Total kcal: {}", precision.kcal(requisition.total_kcal));
    if !requisition.skipped_ids.is_empty() {
        println!("Unknown ingredients: {}", requisition.skipped_ids.join(", "));
    }
    println!();
}

/// Display the ingredient catalog, flagging ingredients that cannot be costed.
pub fn display_catalog(ingredients: &[&IngredientMaster], precision: &DisplayPrecision) {
    if ingredients.is_empty() {
        println!("Catalog: (none)");
        return;
    }

    println!();
    println!("=== Catalog ({} items) ===", ingredients.len());
    println!();

    for ingredient in ingredients {
        let flag = if ingredient.has_valid_yield() {
            ""
        } else {
            "  [invalid yield]"
        };
        println!(
            "  {} ({}) - {}/{}, yield {}%, {} kcal/kg{}",
            ingredient.name,
            ingredient.id,
            precision.currency(ingredient.price_per_base_unit),
            ingredient.unit,
            ingredient.yield_percent,
            ingredient.kcal_per_thousand_grams,
            flag
        );
    }

    println!();
}
