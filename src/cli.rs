use std::path::PathBuf;

use clap::{ArgAction, Parser, Subcommand};

use crate::interface::DisplayPrecision;

/// kitchen_cost — Recipe costing, scaling and requisitions from an ingredient catalog.
#[derive(Parser, Debug)]
#[command(name = "kitchen_cost")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Path to the ingredient catalog JSON file.
    #[arg(short, long, global = true, default_value = "ingredients.json")]
    pub catalog: PathBuf,

    /// Decimal places for money values (0-6).
    #[arg(long, global = true, default_value = "2", value_parser = clap::value_parser!(u32).range(0..=6))]
    pub currency_decimals: u32,

    /// Decimal places for calorie values (0-2).
    #[arg(long, global = true, default_value = "2", value_parser = clap::value_parser!(u32).range(0..=2))]
    pub kcal_decimals: u32,

    /// Increase log verbosity (-v info, -vv debug). KITCHEN_COST_LOG overrides.
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub verbose: u8,
}

impl Cli {
    pub fn precision(&self) -> DisplayPrecision {
        DisplayPrecision {
            currency_decimals: self.currency_decimals,
            kcal_decimals: self.kcal_decimals,
            ..Default::default()
        }
    }

    /// Default log filter for the verbosity flag.
    pub fn log_level(&self) -> &'static str {
        match self.verbose {
            0 => "warn",
            1 => "info",
            _ => "debug",
        }
    }
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Show cost and calories for a recipe.
    Cost {
        /// Recipe JSON file.
        recipe: PathBuf,

        /// Fail if any ingredient is missing from the catalog.
        #[arg(long)]
        strict: bool,
    },

    /// Scale a recipe to a new portion count.
    Scale {
        /// Recipe JSON file.
        recipe: PathBuf,

        /// Target portion count (prompted for when omitted).
        #[arg(short, long)]
        portions: Option<f64>,

        /// Where to write the scaled recipe.
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Export a recipe costing to CSV and/or JSON.
    Export {
        /// Recipe JSON file.
        recipe: PathBuf,

        /// Output CSV file.
        #[arg(long)]
        csv: Option<PathBuf>,

        /// Output JSON file.
        #[arg(long)]
        json: Option<PathBuf>,

        /// Fail if any ingredient is missing from the catalog.
        #[arg(long)]
        strict: bool,
    },

    /// Build a purchase requisition for a production plan.
    Requisition {
        /// Production plan JSON file.
        plan: PathBuf,

        /// Output CSV file.
        #[arg(long)]
        csv: Option<PathBuf>,
    },

    /// List the ingredient catalog.
    Catalog {
        /// Rewrite the catalog file deduplicated and sorted by id.
        #[arg(long)]
        normalize: bool,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_cost_with_globals() {
        let cli = Cli::parse_from([
            "kitchen_cost",
            "cost",
            "soup.json",
            "--strict",
            "--catalog",
            "cat.json",
            "-vv",
        ]);

        assert_eq!(cli.catalog, PathBuf::from("cat.json"));
        assert_eq!(cli.log_level(), "debug");
        match cli.command {
            Command::Cost { recipe, strict } => {
                assert_eq!(recipe, PathBuf::from("soup.json"));
                assert!(strict);
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_precision_from_flags() {
        let cli = Cli::parse_from(["kitchen_cost", "--kcal-decimals", "0", "catalog"]);
        let precision = cli.precision();
        assert_eq!(precision.kcal_decimals, 0);
        assert_eq!(precision.currency_decimals, 2);
    }

    #[test]
    fn test_decimals_out_of_range_rejected() {
        assert!(Cli::try_parse_from(["kitchen_cost", "--kcal-decimals", "3", "catalog"]).is_err());
        assert!(
            Cli::try_parse_from(["kitchen_cost", "--currency-decimals", "400", "catalog"]).is_err()
        );

        let cli =
            Cli::try_parse_from(["kitchen_cost", "--currency-decimals", "6", "catalog"]).unwrap();
        assert_eq!(cli.precision().currency_decimals, 6);
    }

    #[test]
    fn test_scale_portions_optional() {
        let cli = Cli::parse_from(["kitchen_cost", "scale", "stew.json"]);
        assert!(matches!(cli.command, Command::Scale { portions: None, .. }));
    }
}
