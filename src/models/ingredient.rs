use serde::{Deserialize, Serialize};

use crate::costing::constants::PERCENT;

fn default_unit() -> String {
    "kg".to_string()
}

/// Ingredient master data as served by the catalog.
///
/// Price and calorie density are both expressed per base unit (1 kg or 1 l)
/// of the ingredient as purchased.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IngredientMaster {
    pub id: String,

    pub name: String,

    pub price_per_base_unit: f64,

    /// Usable share after preparation loss, in percent.
    pub yield_percent: f64,

    pub kcal_per_thousand_grams: f64,

    /// Display label only.
    #[serde(default = "default_unit")]
    pub unit: String,
}

impl IngredientMaster {
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        price_per_base_unit: f64,
        yield_percent: f64,
        kcal_per_thousand_grams: f64,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            price_per_base_unit,
            yield_percent,
            kcal_per_thousand_grams,
            unit: default_unit(),
        }
    }

    /// Yield as a fraction in (0, 1].
    #[inline]
    pub fn yield_fraction(&self) -> f64 {
        self.yield_percent / PERCENT
    }

    /// Whether the yield can be divided into a quantity.
    #[inline]
    pub fn has_valid_yield(&self) -> bool {
        self.yield_percent > 0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_camel_case() {
        let json = r#"{"id": "flour", "name": "Flour", "pricePerBaseUnit": 1.5,
            "yieldPercent": 100, "kcalPerThousandGrams": 3640}"#;
        let flour: IngredientMaster = serde_json::from_str(json).unwrap();

        assert_eq!(flour.id, "flour");
        assert_eq!(flour.unit, "kg");
        assert!((flour.yield_fraction() - 1.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_has_valid_yield() {
        let mut onion = IngredientMaster::new("onion", "Onion", 0.9, 85.0, 400.0);
        assert!(onion.has_valid_yield());

        onion.yield_percent = 0.0;
        assert!(!onion.has_valid_yield());

        onion.yield_percent = f64::NAN;
        assert!(!onion.has_valid_yield());
    }
}
