/// Biological sex category used by the BMR formula.
///
/// Anything other than "female" falls through to the male coefficients.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sex {
    Female,
    Male,
}

impl Sex {
    pub fn from_token(token: &str) -> Self {
        if token.trim().eq_ignore_ascii_case("female") {
            Sex::Female
        } else {
            Sex::Male
        }
    }
}

/// Activity tier for TDEE scaling.
///
/// Unrecognized tokens default to Sedentary.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActivityLevel {
    Sedentary,
    LightlyActive,
    ModeratelyActive,
    Active,
    ExtremelyActive,
}

impl ActivityLevel {
    pub fn from_token(token: &str) -> Self {
        match token.trim().to_lowercase().as_str() {
            "lightly active" => ActivityLevel::LightlyActive,
            "moderately active" => ActivityLevel::ModeratelyActive,
            "active" => ActivityLevel::Active,
            "extremely active" => ActivityLevel::ExtremelyActive,
            _ => ActivityLevel::Sedentary,
        }
    }

    pub const ALL: [ActivityLevel; 5] = [
        ActivityLevel::Sedentary,
        ActivityLevel::LightlyActive,
        ActivityLevel::ModeratelyActive,
        ActivityLevel::Active,
        ActivityLevel::ExtremelyActive,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            ActivityLevel::Sedentary => "sedentary",
            ActivityLevel::LightlyActive => "lightly active",
            ActivityLevel::ModeratelyActive => "moderately active",
            ActivityLevel::Active => "active",
            ActivityLevel::ExtremelyActive => "extremely active",
        }
    }
}

/// Weight goal applied on top of the activity-scaled BMR.
///
/// Unrecognized tokens default to Maintain.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Goal {
    Gain,
    Lose,
    Maintain,
}

impl Goal {
    pub fn from_token(token: &str) -> Self {
        match token.trim().to_lowercase().as_str() {
            "gain" => Goal::Gain,
            "lose" => Goal::Lose,
            _ => Goal::Maintain,
        }
    }
}

/// Biometric and lifestyle inputs for the caloric goal calculation.
///
/// Weight is in pounds and height in inches as collected; the calculator
/// converts to kg/cm internally. Transient, never persisted.
#[derive(Debug, Clone)]
pub struct UserProfile {
    pub weight_lb: f64,
    pub height_in: f64,
    pub sex: Sex,
    pub age: u32,
    pub activity: ActivityLevel,
    pub goal: Goal,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sex_from_token() {
        assert_eq!(Sex::from_token("female"), Sex::Female);
        assert_eq!(Sex::from_token("FEMALE"), Sex::Female);
        assert_eq!(Sex::from_token("male"), Sex::Male);
        assert_eq!(Sex::from_token(""), Sex::Male);
        assert_eq!(Sex::from_token("other"), Sex::Male);
    }

    #[test]
    fn test_activity_from_token_defaults_to_sedentary() {
        assert_eq!(
            ActivityLevel::from_token("moderately active"),
            ActivityLevel::ModeratelyActive
        );
        assert_eq!(ActivityLevel::from_token("Active"), ActivityLevel::Active);
        assert_eq!(ActivityLevel::from_token(""), ActivityLevel::Sedentary);
        assert_eq!(
            ActivityLevel::from_token("couch potato"),
            ActivityLevel::Sedentary
        );
    }

    #[test]
    fn test_goal_from_token_defaults_to_maintain() {
        assert_eq!(Goal::from_token("gain"), Goal::Gain);
        assert_eq!(Goal::from_token("Lose"), Goal::Lose);
        assert_eq!(Goal::from_token("maintain"), Goal::Maintain);
        assert_eq!(Goal::from_token(""), Goal::Maintain);
        assert_eq!(Goal::from_token("bulk"), Goal::Maintain);
    }
}
