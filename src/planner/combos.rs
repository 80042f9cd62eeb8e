use crate::models::{Category, FoodItem, MealOption};
use crate::planner::constants::default_item;
use crate::planner::filters::apply_restrictions;

/// Catalog items split by category, in catalog order.
#[derive(Debug, Default)]
pub struct CategoryPartition {
    pub proteins: Vec<FoodItem>,
    pub grains: Vec<FoodItem>,
    pub vegetables: Vec<FoodItem>,
    pub desserts: Vec<FoodItem>,
}

impl CategoryPartition {
    pub fn from_items(items: Vec<FoodItem>) -> Self {
        let mut partition = CategoryPartition::default();
        for item in items {
            match item.category {
                Category::Protein => partition.proteins.push(item),
                Category::Grain => partition.grains.push(item),
                Category::Vegetable => partition.vegetables.push(item),
                Category::Dessert => partition.desserts.push(item),
            }
        }
        partition
    }

    /// Substitute the synthetic fallback item into empty Protein, Grain,
    /// and Vegetable partitions. Dessert stays empty.
    pub fn fill_defaults(&mut self) {
        if self.proteins.is_empty() {
            self.proteins.extend(default_item(Category::Protein));
        }
        if self.grains.is_empty() {
            self.grains.extend(default_item(Category::Grain));
        }
        if self.vegetables.is_empty() {
            self.vegetables.extend(default_item(Category::Vegetable));
        }
    }
}

/// Enumerate all meal combinations under the caloric ceiling.
///
/// Pipeline: meal-type filter, restriction narrowing, category partition
/// with fallback defaults, then the full Protein x Grain x Vegetable cross
/// product. Per triple, every dessert that fits yields an option, followed
/// by the dessert-less option when the base total itself fits.
///
/// Never fails; an empty list is a valid result.
pub fn generate_meal_combinations(
    catalog: &[FoodItem],
    meal_type: &str,
    caloric_goal: f64,
    restrictions: &[String],
) -> Vec<MealOption> {
    let by_meal: Vec<FoodItem> = catalog
        .iter()
        .filter(|item| item.meal_type == meal_type)
        .cloned()
        .collect();

    let filtered = apply_restrictions(by_meal, restrictions);

    let mut partition = CategoryPartition::from_items(filtered);
    partition.fill_defaults();

    let mut options = Vec::new();

    for protein in &partition.proteins {
        for grain in &partition.grains {
            for vegetable in &partition.vegetables {
                let base_total = protein.calories + grain.calories + vegetable.calories;

                for dessert in &partition.desserts {
                    let total = base_total + dessert.calories;
                    if total <= caloric_goal {
                        options.push(MealOption::new(
                            protein.name.clone(),
                            grain.name.clone(),
                            vegetable.name.clone(),
                            Some(dessert.name.clone()),
                            total,
                        ));
                    }
                }

                if base_total <= caloric_goal {
                    options.push(MealOption::new(
                        protein.name.clone(),
                        grain.name.clone(),
                        vegetable.name.clone(),
                        None,
                        base_total,
                    ));
                }
            }
        }
    }

    options
}
