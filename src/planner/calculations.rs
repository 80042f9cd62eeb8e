use crate::models::{ActivityLevel, Goal, Sex, UserProfile};
use crate::planner::constants::*;

/// Activity multiplier for TDEE scaling.
pub fn activity_multiplier(level: ActivityLevel) -> f64 {
    match level {
        ActivityLevel::Sedentary => ACTIVITY_MULT_SEDENTARY,
        ActivityLevel::LightlyActive => ACTIVITY_MULT_LIGHT,
        ActivityLevel::ModeratelyActive => ACTIVITY_MULT_MODERATE,
        ActivityLevel::Active => ACTIVITY_MULT_ACTIVE,
        ActivityLevel::ExtremelyActive => ACTIVITY_MULT_EXTREME,
    }
}

/// Calorie adjustment for the weight goal.
pub fn goal_adjustment(goal: Goal) -> f64 {
    match goal {
        Goal::Gain => GOAL_ADJUSTMENT,
        Goal::Lose => -GOAL_ADJUSTMENT,
        Goal::Maintain => 0.0,
    }
}

/// Basal Metabolic Rate via the sex-specific Harris-Benedict formula.
///
/// Takes canonical units (kg, cm).
pub fn basal_metabolic_rate(sex: Sex, weight_kg: f64, height_cm: f64, age: u32) -> f64 {
    match sex {
        Sex::Female => {
            BMR_FEMALE_BASE + BMR_FEMALE_WEIGHT * weight_kg + BMR_FEMALE_HEIGHT * height_cm
                - BMR_FEMALE_AGE * age as f64
        }
        Sex::Male => {
            BMR_MALE_BASE + BMR_MALE_WEIGHT * weight_kg + BMR_MALE_HEIGHT * height_cm
                - BMR_MALE_AGE * age as f64
        }
    }
}

/// Daily caloric target: BMR scaled by activity, shifted by goal.
///
/// Pure function of the profile; fractional results are returned unrounded.
pub fn compute_caloric_goal(profile: &UserProfile) -> f64 {
    let weight_kg = profile.weight_lb * LB_TO_KG;
    let height_cm = profile.height_in * IN_TO_CM;

    let bmr = basal_metabolic_rate(profile.sex, weight_kg, height_cm, profile.age);

    bmr * activity_multiplier(profile.activity) + goal_adjustment(profile.goal)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_profile() -> UserProfile {
        UserProfile {
            weight_lb: 154.0,
            height_in: 67.0,
            sex: Sex::Female,
            age: 30,
            activity: ActivityLevel::Sedentary,
            goal: Goal::Maintain,
        }
    }

    #[test]
    fn test_activity_multipliers() {
        assert_eq!(activity_multiplier(ActivityLevel::Sedentary), 1.2);
        assert_eq!(activity_multiplier(ActivityLevel::LightlyActive), 1.375);
        assert_eq!(activity_multiplier(ActivityLevel::ModeratelyActive), 1.55);
        assert_eq!(activity_multiplier(ActivityLevel::Active), 1.725);
        assert_eq!(activity_multiplier(ActivityLevel::ExtremelyActive), 1.9);
    }

    #[test]
    fn test_goal_adjustment() {
        assert_eq!(goal_adjustment(Goal::Gain), 500.0);
        assert_eq!(goal_adjustment(Goal::Lose), -500.0);
        assert_eq!(goal_adjustment(Goal::Maintain), 0.0);
    }

    #[test]
    fn test_bmr_female_coefficients() {
        // 655.1 + 9.563*70 + 1.850*170 - 4.676*30 = 1498.73
        let bmr = basal_metabolic_rate(Sex::Female, 70.0, 170.0, 30);
        assert!((bmr - 1498.73).abs() < 0.01);
    }

    #[test]
    fn test_bmr_male_coefficients() {
        // 66.47 + 13.75*80 + 5.003*180 - 6.755*25 = 1898.135
        let bmr = basal_metabolic_rate(Sex::Male, 80.0, 180.0, 25);
        assert!((bmr - 1898.135).abs() < 0.01);
    }

    #[test]
    fn test_goal_is_deterministic() {
        let profile = sample_profile();
        let first = compute_caloric_goal(&profile);
        let second = compute_caloric_goal(&profile);
        assert_eq!(first, second);
    }

    #[test]
    fn test_gain_and_lose_shift_by_500() {
        let maintain = compute_caloric_goal(&sample_profile());

        let mut gaining = sample_profile();
        gaining.goal = Goal::Gain;
        assert!((compute_caloric_goal(&gaining) - maintain - 500.0).abs() < 1e-9);

        let mut losing = sample_profile();
        losing.goal = Goal::Lose;
        assert!((compute_caloric_goal(&losing) - maintain + 500.0).abs() < 1e-9);
    }
}
