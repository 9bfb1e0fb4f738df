use std::fs;
use std::io::Write;

use tempfile::{NamedTempFile, TempDir};

use kitchen_cost_rs::catalog::{load_catalog, load_plan, IngredientCatalog};
use kitchen_cost_rs::costing::{compute_totals, plan_requisition};
use kitchen_cost_rs::export::{write_costing_csv, write_requisition_csv};
use kitchen_cost_rs::interface::DisplayPrecision;
use kitchen_cost_rs::models::{IngredientMaster, PlannedRecipe, Recipe, RecipeIngredientLine};

fn sample_catalog() -> IngredientCatalog {
    IngredientCatalog::new(vec![
        IngredientMaster::new("rice", "Rice", 2.2, 100.0, 3600.0),
        IngredientMaster::new("chicken", "Chicken Thigh", 7.9, 80.0, 1770.0),
        IngredientMaster::new("pepper", "Bell Pepper", 3.4, 82.0, 310.0),
    ])
}

fn paella() -> Recipe {
    Recipe::new(
        8.0,
        vec![
            RecipeIngredientLine::new("rice", 0.8),
            RecipeIngredientLine::new("chicken", 1.0),
            RecipeIngredientLine::new("saffron", 0.0005),
        ],
    )
    .with_name("paella", "Paella")
}

fn pepper_salad() -> Recipe {
    Recipe::new(
        4.0,
        vec![
            RecipeIngredientLine::new("pepper", 0.82),
            RecipeIngredientLine::new("saffron", 0.0002),
        ],
    )
    .with_name("salad", "Pepper Salad")
}

#[test]
fn test_requisition_matches_individual_costings() {
    let catalog = sample_catalog();
    let plan = vec![
        PlannedRecipe {
            recipe: paella(),
            portions: 80.0,
        },
        PlannedRecipe {
            recipe: pepper_salad(),
            portions: 20.0,
        },
    ];

    let requisition = plan_requisition(&plan, &catalog).unwrap();

    // Same answer as scaling each recipe's totals by hand
    let paella_cost = compute_totals(&paella(), &catalog).unwrap().totals.total_cost * 10.0;
    let salad_cost = compute_totals(&pepper_salad(), &catalog).unwrap().totals.total_cost * 5.0;
    assert!((requisition.total_cost - (paella_cost + salad_cost)).abs() < 1e-9);

    assert_eq!(requisition.items.len(), 3);
    assert_eq!(requisition.skipped_ids, vec!["saffron".to_string()]);

    // 0.82 kg pepper at 82% yield is 1.0 kg purchased, times 5 batches
    let pepper = &requisition.items[2];
    assert_eq!(pepper.ingredient_id, "pepper");
    assert!((pepper.adjusted_quantity - 5.0).abs() < 1e-9);
}

#[test]
fn test_plan_file_to_csv() {
    let plan_json = r#"[
        {"recipe": {"name": "Rice Bowl", "portions": 2, "ingredients": [
            {"ingredientId": "rice", "quantity": 0.25},
            {"ingredientId": "chicken", "quantity": 0.4}
        ]}, "portions": 10}
    ]"#;

    let mut plan_file = NamedTempFile::new().unwrap();
    plan_file.write_all(plan_json.as_bytes()).unwrap();

    let plan = load_plan(plan_file.path()).unwrap();
    let requisition = plan_requisition(&plan, &sample_catalog()).unwrap();

    let dir = TempDir::new().unwrap();
    let csv_path = dir.path().join("requisition.csv");
    write_requisition_csv(&requisition, &DisplayPrecision::default(), &csv_path).unwrap();

    let content = fs::read_to_string(&csv_path).unwrap();
    // 1.25 kg rice -> 2.75; 2.0 kg chicken at 80% -> 2.5 kg -> 19.75
    assert!(content.contains("rice,Rice,kg,1.250,1.250,2.75,"));
    assert!(content.contains("chicken,Chicken Thigh,kg,2.000,2.500,19.75,"));
    assert!(content.lines().last().unwrap().starts_with(",TOTAL,,,,22.50,"));
}

#[test]
fn test_catalog_file_feeds_costing_export() {
    let catalog_json = r#"[
        {"id": "rice", "name": "Rice", "pricePerBaseUnit": 2.2, "yieldPercent": 100, "kcalPerThousandGrams": 3600}
    ]"#;

    let mut catalog_file = NamedTempFile::new().unwrap();
    catalog_file.write_all(catalog_json.as_bytes()).unwrap();

    let catalog = IngredientCatalog::new(load_catalog(catalog_file.path()).unwrap());
    let costing = compute_totals(&paella(), &catalog).unwrap();

    // Chicken and saffron are not in this catalog
    assert_eq!(
        costing.skipped_ids,
        vec!["chicken".to_string(), "saffron".to_string()]
    );

    let dir = TempDir::new().unwrap();
    let csv_path = dir.path().join("paella.csv");
    write_costing_csv(&costing, &DisplayPrecision::default(), &csv_path).unwrap();

    let content = fs::read_to_string(&csv_path).unwrap();
    assert!(content.contains("chicken,Unknown,,,,,"));
    assert!(content.contains(",TOTAL,,,,1.76,2.88"));
    assert!(content.contains(",PER_PORTION,,,,0.22,0.36"));
}
