use std::path::Path;

use clap::Parser;
use tracing::{debug, info, warn};
use tracing_subscriber::EnvFilter;

use kitchen_cost_rs::catalog::{
    load_catalog, load_plan, load_recipe, save_catalog, save_recipe, IngredientCatalog,
};
use kitchen_cost_rs::cli::{Cli, Command};
use kitchen_cost_rs::costing::{compute_totals, plan_requisition, scale_recipe};
use kitchen_cost_rs::error::{KitchenError, Result};
use kitchen_cost_rs::export::{write_costing_csv, write_costing_json, write_requisition_csv};
use kitchen_cost_rs::interface::{
    display_catalog, display_costing, display_requisition, prompt_target_portions, prompt_yes_no,
    DisplayPrecision,
};
use kitchen_cost_rs::models::{Recipe, RecipeCosting};

/// Environment variable holding a tracing filter directive.
const LOG_ENV: &str = "KITCHEN_COST_LOG";

fn main() {
    let cli = Cli::parse();
    init_logging(cli.log_level());

    if let Err(e) = run(cli) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn init_logging(default_level: &str) {
    let filter =
        EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn run(cli: Cli) -> Result<()> {
    let precision = cli.precision();

    match &cli.command {
        Command::Cost { recipe, strict } => cmd_cost(&cli.catalog, recipe, *strict, &precision),
        Command::Scale {
            recipe,
            portions,
            output,
        } => cmd_scale(&cli.catalog, recipe, *portions, output.as_deref(), &precision),
        Command::Export {
            recipe,
            csv,
            json,
            strict,
        } => cmd_export(
            &cli.catalog,
            recipe,
            csv.as_deref(),
            json.as_deref(),
            *strict,
            &precision,
        ),
        Command::Requisition { plan, csv } => {
            cmd_requisition(&cli.catalog, plan, csv.as_deref(), &precision)
        }
        Command::Catalog { normalize } => cmd_catalog(&cli.catalog, *normalize, &precision),
    }
}

/// Load the catalog and warn about entries that cannot be costed.
fn open_catalog(path: &Path) -> Result<IngredientCatalog> {
    if !path.exists() {
        return Err(KitchenError::InvalidInput(format!(
            "Ingredient catalog not found: {}",
            path.display()
        )));
    }

    let catalog = IngredientCatalog::new(load_catalog(path)?);
    info!(ingredients = catalog.len(), "catalog loaded");

    for id in catalog.invalid_yield_ids() {
        warn!(ingredient = id, "yield is zero or less, recipes using it cannot be costed");
    }

    Ok(catalog)
}

/// Warn about lines that will be costed with a negative quantity.
fn warn_negative_quantities(recipe: &Recipe) {
    for id in recipe.negative_quantity_ids() {
        warn!(ingredient = id, "negative quantity, line cost will be negative");
    }
}

/// Apply the unknown-ingredient policy to a finished costing.
fn check_skipped(costing: &RecipeCosting, strict: bool) -> Result<()> {
    if strict || costing.is_complete() {
        return costing.require_complete();
    }
    warn!(
        skipped = costing.skipped_ids.len(),
        ids = %costing.skipped_ids.join(", "),
        "unknown ingredients excluded from totals"
    );
    Ok(())
}

/// Cost a recipe and print it.
fn cmd_cost(
    catalog_path: &Path,
    recipe_path: &Path,
    strict: bool,
    precision: &DisplayPrecision,
) -> Result<()> {
    let catalog = open_catalog(catalog_path)?;
    let recipe = load_recipe(recipe_path)?;
    warn_negative_quantities(&recipe);

    let costing = compute_totals(&recipe, &catalog)?;
    check_skipped(&costing, strict)?;

    display_costing(&costing, &recipe, precision, |id| catalog.suggest(id));
    Ok(())
}

/// Scale a recipe, show its new costing if a catalog is available, and save it.
fn cmd_scale(
    catalog_path: &Path,
    recipe_path: &Path,
    portions: Option<f64>,
    output: Option<&Path>,
    precision: &DisplayPrecision,
) -> Result<()> {
    let recipe = load_recipe(recipe_path)?;
    warn_negative_quantities(&recipe);

    let target = match portions {
        Some(p) => p,
        None => prompt_target_portions(recipe.portions)?,
    };

    let scaled = scale_recipe(&recipe, target)?;
    debug!(from = recipe.portions, to = scaled.portions, "scaled recipe");

    if catalog_path.exists() {
        let catalog = open_catalog(catalog_path)?;
        let costing = compute_totals(&scaled, &catalog)?;
        check_skipped(&costing, false)?;
        display_costing(&costing, &scaled, precision, |id| catalog.suggest(id));
    } else {
        println!("No catalog at {}, skipping costing.", catalog_path.display());
    }

    match output {
        Some(path) => {
            save_recipe(path, &scaled)?;
            println!("Scaled recipe saved to {}", path.display());
        }
        None => {
            println!("{}", serde_json::to_string_pretty(&scaled)?);

            let destination = recipe_path.with_extension("scaled.json");
            let prompt = format!("Save scaled recipe to {}?", destination.display());
            if prompt_yes_no(&prompt, false)? {
                save_recipe(&destination, &scaled)?;
                println!("Scaled recipe saved.");
            }
        }
    }

    Ok(())
}

/// Write a recipe costing to the requested export files.
fn cmd_export(
    catalog_path: &Path,
    recipe_path: &Path,
    csv: Option<&Path>,
    json: Option<&Path>,
    strict: bool,
    precision: &DisplayPrecision,
) -> Result<()> {
    if csv.is_none() && json.is_none() {
        println!("Please specify at least one output:");
        println!("  --csv <PATH>   Write the costing as CSV");
        println!("  --json <PATH>  Write the costing as JSON");
        return Ok(());
    }

    let catalog = open_catalog(catalog_path)?;
    let recipe = load_recipe(recipe_path)?;
    warn_negative_quantities(&recipe);

    let costing = compute_totals(&recipe, &catalog)?;
    check_skipped(&costing, strict)?;

    if let Some(path) = csv {
        write_costing_csv(&costing, precision, path)?;
        println!("CSV written to {}", path.display());
    }

    if let Some(path) = json {
        write_costing_json(&costing, &recipe, precision, path)?;
        println!("JSON written to {}", path.display());
    }

    Ok(())
}

/// Build and print the requisition for a production plan.
fn cmd_requisition(
    catalog_path: &Path,
    plan_path: &Path,
    csv: Option<&Path>,
    precision: &DisplayPrecision,
) -> Result<()> {
    let catalog = open_catalog(catalog_path)?;
    let plan = load_plan(plan_path)?;
    info!(recipes = plan.len(), "production plan loaded");

    let requisition = plan_requisition(&plan, &catalog)?;
    if !requisition.skipped_ids.is_empty() {
        warn!(
            ids = %requisition.skipped_ids.join(", "),
            "unknown ingredients excluded from requisition"
        );
    }

    display_requisition(&requisition, precision);

    if let Some(path) = csv {
        write_requisition_csv(&requisition, precision, path)?;
        println!("CSV written to {}", path.display());
    }

    Ok(())
}

/// List the catalog, optionally rewriting it in normalized form.
fn cmd_catalog(catalog_path: &Path, normalize: bool, precision: &DisplayPrecision) -> Result<()> {
    let catalog = open_catalog(catalog_path)?;
    display_catalog(&catalog.all_ingredients(), precision);

    if normalize {
        save_catalog(catalog_path, &catalog.to_ingredients())?;
        println!("Catalog normalized ({} ingredients).", catalog.len());
    }

    Ok(())
}
