use serde::Deserialize;

/// Catalog category a food item belongs to.
///
/// The catalog feed encodes these as single letters (P/G/V/D).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub enum Category {
    #[serde(rename = "P")]
    Protein,

    #[serde(rename = "G")]
    Grain,

    #[serde(rename = "V")]
    Vegetable,

    #[serde(rename = "D")]
    Dessert,
}

/// A food item from the dining-hall catalog feed.
///
/// Immutable once loaded; the restrictions field holds free-text tags
/// (e.g. "vegetarian, vegan") matched case-insensitively.
#[derive(Debug, Clone, Deserialize)]
pub struct FoodItem {
    #[serde(rename = "Food_Item")]
    pub name: String,

    #[serde(rename = "Calories")]
    pub calories: f64,

    #[serde(rename = "Category")]
    pub category: Category,

    #[serde(rename = "Meal_Type", default)]
    pub meal_type: String,

    #[serde(rename = "Restrictions", default)]
    pub restrictions: String,
}

impl FoodItem {
    /// Case-insensitive substring check against the item name.
    pub fn name_contains(&self, needle: &str) -> bool {
        self.name.to_lowercase().contains(&needle.to_lowercase())
    }

    /// Case-insensitive substring check against the restriction tags.
    pub fn has_restriction_tag(&self, tag: &str) -> bool {
        self.restrictions
            .to_lowercase()
            .contains(&tag.to_lowercase())
    }

    /// Basic validation: non-negative calories.
    pub fn is_valid(&self) -> bool {
        self.calories >= 0.0
    }
}

impl PartialEq for FoodItem {
    fn eq(&self, other: &Self) -> bool {
        self.name.to_lowercase() == other.name.to_lowercase() && self.category == other.category
    }
}

impl Eq for FoodItem {}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_item() -> FoodItem {
        FoodItem {
            name: "Grilled Chicken".to_string(),
            calories: 200.0,
            category: Category::Protein,
            meal_type: "lunch".to_string(),
            restrictions: "gluten-free".to_string(),
        }
    }

    #[test]
    fn test_name_contains_case_insensitive() {
        let item = sample_item();
        assert!(item.name_contains("chicken"));
        assert!(item.name_contains("GRILLED"));
        assert!(!item.name_contains("tofu"));
    }

    #[test]
    fn test_has_restriction_tag() {
        let item = sample_item();
        assert!(item.has_restriction_tag("gluten-free"));
        assert!(item.has_restriction_tag("GLUTEN"));
        assert!(!item.has_restriction_tag("vegan"));
    }

    #[test]
    fn test_is_valid() {
        let item = sample_item();
        assert!(item.is_valid());

        let mut invalid = sample_item();
        invalid.calories = -10.0;
        assert!(!invalid.is_valid());
    }

    #[test]
    fn test_equality_case_insensitive() {
        let item1 = sample_item();
        let mut item2 = sample_item();
        item2.name = "GRILLED CHICKEN".to_string();
        assert_eq!(item1, item2);

        // Same name, different category = different item
        let mut item3 = sample_item();
        item3.category = Category::Grain;
        assert_ne!(item1, item3);
    }
}
