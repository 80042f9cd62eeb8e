use dialoguer::{Confirm, Input, MultiSelect, Select};
use strsim::jaro_winkler;

use crate::error::{PlannerError, Result};
use crate::models::{ActivityLevel, Goal, Sex, UserProfile};

const MEAL_TYPES: &[&str] = &["breakfast", "lunch", "dinner"];

/// Prompt for the meal to plan.
pub fn prompt_meal_type() -> Result<String> {
    let selection = Select::new()
        .with_prompt("Which meal are you planning?")
        .items(MEAL_TYPES)
        .default(1)
        .interact()?;

    Ok(MEAL_TYPES[selection].to_string())
}

/// Prompt for dietary restrictions from the vocabulary feed.
pub fn prompt_restrictions(vocabulary: &[String]) -> Result<Vec<String>> {
    if vocabulary.is_empty() {
        return prompt_extra_restrictions(vocabulary);
    }

    let picked = MultiSelect::new()
        .with_prompt("Select dietary restrictions (space to toggle, enter to confirm)")
        .items(vocabulary)
        .interact()?;

    let mut restrictions: Vec<String> = picked
        .into_iter()
        .map(|i| vocabulary[i].to_lowercase())
        .collect();

    restrictions.extend(prompt_extra_restrictions(vocabulary)?);
    Ok(restrictions)
}

/// Prompt for free-text ingredient exclusions, fuzzy-matched against the
/// vocabulary so near-misses snap to a known token.
pub fn prompt_extra_restrictions(vocabulary: &[String]) -> Result<Vec<String>> {
    let mut restrictions = Vec::new();

    loop {
        let input: String = Input::new()
            .with_prompt("Avoid an ingredient (or press Enter to finish)")
            .allow_empty(true)
            .interact_text()?;

        let input = input.trim().to_lowercase();
        if input.is_empty() {
            break;
        }

        // Exact vocabulary hit
        if vocabulary.iter().any(|v| v.to_lowercase() == input) {
            println!("Added: {}", input);
            restrictions.push(input);
            continue;
        }

        // Fuzzy match against the vocabulary
        let best = vocabulary
            .iter()
            .map(|v| (v, jaro_winkler(&v.to_lowercase(), &input)))
            .filter(|(_, score)| *score > 0.85)
            .max_by(|a, b| a.1.partial_cmp(&b.1).unwrap_or(std::cmp::Ordering::Equal));

        if let Some((token, _)) = best {
            let confirm = Confirm::new()
                .with_prompt(format!("Did you mean '{}'?", token))
                .default(true)
                .interact()?;

            if confirm {
                println!("Added: {}", token);
                restrictions.push(token.to_lowercase());
                continue;
            }
        }

        // Unknown tokens still work as verbatim name exclusions
        println!("Added: {} (excluded by name)", input);
        restrictions.push(input);
    }

    Ok(restrictions)
}

/// Prompt for biometric data, or None if the user skips the calculator.
///
/// Weight, height, and age must parse as numbers; a failed parse is an
/// input error, not a fallback.
pub fn prompt_profile() -> Result<Option<UserProfile>> {
    let calculate = prompt_yes_no(
        "Calculate a personalized caloric goal? (No = use the default)",
        true,
    )?;

    if !calculate {
        return Ok(None);
    }

    let weight_lb = prompt_number("Weight (lb)")?;
    let height_in = prompt_number("Height (in)")?;

    let age_input: String = Input::new().with_prompt("Age (years)").interact_text()?;
    let age: u32 = age_input
        .trim()
        .parse()
        .map_err(|_| PlannerError::InvalidInput("Invalid number".to_string()))?;

    let sexes = &["female", "male"];
    let sex_selection = Select::new()
        .with_prompt("Sex")
        .items(sexes)
        .default(0)
        .interact()?;
    let sex = Sex::from_token(sexes[sex_selection]);

    let activity_labels: Vec<&str> = ActivityLevel::ALL.iter().map(|a| a.label()).collect();
    let activity_selection = Select::new()
        .with_prompt("Activity level")
        .items(&activity_labels)
        .default(0)
        .interact()?;
    let activity = ActivityLevel::ALL[activity_selection];

    let goals = &["maintain", "lose", "gain"];
    let goal_selection = Select::new()
        .with_prompt("Goal")
        .items(goals)
        .default(0)
        .interact()?;
    let goal = Goal::from_token(goals[goal_selection]);

    Ok(Some(UserProfile {
        weight_lb,
        height_in,
        sex,
        age,
        activity,
        goal,
    }))
}

/// Prompt for yes/no confirmation.
pub fn prompt_yes_no(prompt: &str, default: bool) -> Result<bool> {
    Ok(Confirm::new()
        .with_prompt(prompt)
        .default(default)
        .interact()?)
}

fn prompt_number(prompt: &str) -> Result<f64> {
    let input: String = Input::new().with_prompt(prompt).interact_text()?;

    input
        .trim()
        .parse()
        .map_err(|_| PlannerError::InvalidInput("Invalid number".to_string()))
}
