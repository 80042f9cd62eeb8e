use serde::Serialize;

/// A single generated meal combination.
///
/// Dessert is optional: a protein+grain+vegetable triple may yield options
/// both with and without one, depending on the caloric ceiling.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MealOption {
    /// Name of the protein item.
    pub protein: String,

    /// Name of the grain item.
    pub grain: String,

    /// Name of the vegetable item.
    pub vegetable: String,

    /// Name of the dessert item, if one fits under the ceiling.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dessert: Option<String>,

    /// Sum of the constituent items' calories.
    pub total_calories: f64,
}

impl MealOption {
    pub fn new(
        protein: String,
        grain: String,
        vegetable: String,
        dessert: Option<String>,
        total_calories: f64,
    ) -> Self {
        Self {
            protein,
            grain,
            vegetable,
            dessert,
            total_calories,
        }
    }
}
