/// Divisor turning a yield percentage into a fraction.
pub const PERCENT: f64 = 100.0;

/// Calorie densities are given per 1000 g of raw ingredient.
pub const GRAMS_PER_KCAL_BASE: f64 = 1000.0;
