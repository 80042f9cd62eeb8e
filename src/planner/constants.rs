use std::collections::HashMap;
use std::sync::LazyLock;

use crate::models::{Category, FoodItem};

/// Caloric ceiling used when the user skips the calculator.
pub const DEFAULT_CALORIC_GOAL: f64 = 800.0;

/// Pounds to kilograms.
pub const LB_TO_KG: f64 = 0.453592;

/// Inches to centimeters.
pub const IN_TO_CM: f64 = 2.54;

// ─────────────────────────────────────────────────────────────────────────────
// Harris-Benedict BMR coefficients
// ─────────────────────────────────────────────────────────────────────────────

pub const BMR_FEMALE_BASE: f64 = 655.1;
pub const BMR_FEMALE_WEIGHT: f64 = 9.563;
pub const BMR_FEMALE_HEIGHT: f64 = 1.850;
pub const BMR_FEMALE_AGE: f64 = 4.676;

pub const BMR_MALE_BASE: f64 = 66.47;
pub const BMR_MALE_WEIGHT: f64 = 13.75;
pub const BMR_MALE_HEIGHT: f64 = 5.003;
pub const BMR_MALE_AGE: f64 = 6.755;

/// Calories added for a gain goal and subtracted for a lose goal.
pub const GOAL_ADJUSTMENT: f64 = 500.0;

/// Activity multipliers applied to BMR, keyed by tier.
pub const ACTIVITY_MULT_SEDENTARY: f64 = 1.2;
pub const ACTIVITY_MULT_LIGHT: f64 = 1.375;
pub const ACTIVITY_MULT_MODERATE: f64 = 1.55;
pub const ACTIVITY_MULT_ACTIVE: f64 = 1.725;
pub const ACTIVITY_MULT_EXTREME: f64 = 1.9;

// ─────────────────────────────────────────────────────────────────────────────
// Restriction keyword lists
// ─────────────────────────────────────────────────────────────────────────────

const EGG_KEYWORDS: &[&str] = &["egg"];
const DAIRY_KEYWORDS: &[&str] = &["milk", "cheese", "butter"];
const SOY_KEYWORDS: &[&str] = &["soy"];
const NUT_KEYWORDS: &[&str] = &["nut", "peanut", "almond"];
const GLUTEN_KEYWORDS: &[&str] = &["gluten", "wheat"];

/// Map from restriction token to the name keywords it excludes.
///
/// Tokens absent from this map fall back to verbatim name exclusion;
/// "vegetarian" and "vegan" are inclusion filters and never appear here.
pub static EXCLUSION_KEYWORDS: LazyLock<HashMap<&'static str, &'static [&'static str]>> =
    LazyLock::new(|| {
        let mut m = HashMap::new();
        m.insert("egg", EGG_KEYWORDS);
        m.insert("eggs", EGG_KEYWORDS);
        m.insert("milk", DAIRY_KEYWORDS);
        m.insert("dairy", DAIRY_KEYWORDS);
        m.insert("soy", SOY_KEYWORDS);
        m.insert("nuts", NUT_KEYWORDS);
        m.insert("gluten", GLUTEN_KEYWORDS);
        m
    });

/// Restriction tokens that keep matching items instead of dropping them.
pub const INCLUSION_TOKENS: &[&str] = &["vegetarian", "vegan"];

// ─────────────────────────────────────────────────────────────────────────────
// Fallback items for empty categories
// ─────────────────────────────────────────────────────────────────────────────

pub const DEFAULT_PROTEIN_NAME: &str = "Tofu";
pub const DEFAULT_PROTEIN_CALORIES: f64 = 94.0;

pub const DEFAULT_GRAIN_NAME: &str = "Whole Wheat Bread";
pub const DEFAULT_GRAIN_CALORIES: f64 = 80.0;

pub const DEFAULT_VEGETABLE_NAME: &str = "Simple Salad";
pub const DEFAULT_VEGETABLE_CALORIES: f64 = 50.0;

/// Synthetic fallback item for a category left empty after filtering.
///
/// Dessert has no fallback; an empty dessert partition is a normal outcome.
pub fn default_item(category: Category) -> Option<FoodItem> {
    let (name, calories) = match category {
        Category::Protein => (DEFAULT_PROTEIN_NAME, DEFAULT_PROTEIN_CALORIES),
        Category::Grain => (DEFAULT_GRAIN_NAME, DEFAULT_GRAIN_CALORIES),
        Category::Vegetable => (DEFAULT_VEGETABLE_NAME, DEFAULT_VEGETABLE_CALORIES),
        Category::Dessert => return None,
    };

    Some(FoodItem {
        name: name.to_string(),
        calories,
        category,
        meal_type: String::new(),
        restrictions: String::new(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_items_per_category() {
        let protein = default_item(Category::Protein).unwrap();
        assert_eq!(protein.name, "Tofu");
        assert_eq!(protein.calories, 94.0);

        let grain = default_item(Category::Grain).unwrap();
        assert_eq!(grain.name, "Whole Wheat Bread");
        assert_eq!(grain.calories, 80.0);

        let vegetable = default_item(Category::Vegetable).unwrap();
        assert_eq!(vegetable.name, "Simple Salad");
        assert_eq!(vegetable.calories, 50.0);

        assert!(default_item(Category::Dessert).is_none());
    }

    #[test]
    fn test_exclusion_keyword_aliases() {
        assert_eq!(EXCLUSION_KEYWORDS["egg"], EXCLUSION_KEYWORDS["eggs"]);
        assert_eq!(EXCLUSION_KEYWORDS["milk"], EXCLUSION_KEYWORDS["dairy"]);
        assert!(EXCLUSION_KEYWORDS["nuts"].contains(&"almond"));
        assert!(!EXCLUSION_KEYWORDS.contains_key("vegan"));
    }
}
