pub mod calculations;
pub mod combos;
pub mod constants;
pub mod filters;

pub use calculations::{
    activity_multiplier, basal_metabolic_rate, compute_caloric_goal, goal_adjustment,
};
pub use combos::{generate_meal_combinations, CategoryPartition};
pub use constants::*;
pub use filters::{apply_restrictions, parse_restrictions, RestrictionRule};
