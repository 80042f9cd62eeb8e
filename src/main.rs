use clap::Parser;
use rand::seq::SliceRandom;
use std::path::Path;

use hall_combo_planner_rs::catalog::{load_catalog, load_restriction_vocabulary};
use hall_combo_planner_rs::cli::{Cli, Command};
use hall_combo_planner_rs::error::Result;
use hall_combo_planner_rs::interface::{
    display_meal_options, display_vocabulary, prompt_meal_type, prompt_profile,
    prompt_restrictions,
};
use hall_combo_planner_rs::models::{ActivityLevel, Goal, Sex, UserProfile};
use hall_combo_planner_rs::planner::{
    compute_caloric_goal, generate_meal_combinations, parse_restrictions, DEFAULT_CALORIC_GOAL,
};

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    let command = cli.command.unwrap_or_default();

    match command {
        Command::Plan {
            meal_type,
            restrictions,
            caloric_goal,
            json,
            surprise,
        } => cmd_plan(
            &cli.catalog,
            &cli.restrictions_file,
            meal_type,
            restrictions,
            caloric_goal,
            json,
            surprise,
        ),
        Command::Goal {
            weight,
            height,
            age,
            sex,
            activity,
            goal,
        } => cmd_goal(weight, height, age, &sex, &activity, &goal),
        Command::Restrictions => cmd_restrictions(&cli.restrictions_file),
    }
}

/// Generate and display meal combinations.
#[allow(clippy::too_many_arguments)]
fn cmd_plan(
    catalog_path: &str,
    restrictions_path: &str,
    meal_type: Option<String>,
    restrictions: Option<String>,
    caloric_goal: Option<f64>,
    json: bool,
    surprise: bool,
) -> Result<()> {
    let path = Path::new(catalog_path);

    if !path.exists() {
        eprintln!("Catalog file not found: {}", catalog_path);
        eprintln!("Please ensure the catalog CSV exists or pass --catalog.");
        return Ok(());
    }

    let catalog = load_catalog(path)?;
    println!("Loaded {} catalog items", catalog.len());

    let meal_type = match meal_type {
        Some(meal) => meal,
        None => prompt_meal_type()?,
    };

    let restrictions = match restrictions {
        Some(raw) => parse_restrictions(&raw),
        None => {
            let vocabulary_path = Path::new(restrictions_path);
            let vocabulary = if vocabulary_path.exists() {
                load_restriction_vocabulary(vocabulary_path)?
            } else {
                Vec::new()
            };
            prompt_restrictions(&vocabulary)?
        }
    };

    let caloric_goal = match caloric_goal {
        Some(goal) => goal,
        None => match prompt_profile()? {
            Some(profile) => {
                let goal = compute_caloric_goal(&profile);
                println!("Computed daily caloric goal: {:.0} kcal", goal);
                goal
            }
            None => {
                println!("Using default caloric goal: {:.0} kcal", DEFAULT_CALORIC_GOAL);
                DEFAULT_CALORIC_GOAL
            }
        },
    };

    println!();
    println!("Planning {} under {:.0} calories...", meal_type, caloric_goal);
    if !restrictions.is_empty() {
        println!("Restrictions: {}", restrictions.join(", "));
    }

    let options = generate_meal_combinations(&catalog, &meal_type, caloric_goal, &restrictions);

    if surprise {
        match options.choose(&mut rand::thread_rng()) {
            Some(pick) => display_meal_options(std::slice::from_ref(pick), caloric_goal),
            None => display_meal_options(&[], caloric_goal),
        }
        return Ok(());
    }

    if json {
        println!("{}", serde_json::to_string_pretty(&options)?);
        return Ok(());
    }

    display_meal_options(&options, caloric_goal);
    Ok(())
}

/// Compute a daily caloric goal from biometric flags.
fn cmd_goal(
    weight_lb: f64,
    height_in: f64,
    age: u32,
    sex: &str,
    activity: &str,
    goal: &str,
) -> Result<()> {
    let profile = UserProfile {
        weight_lb,
        height_in,
        sex: Sex::from_token(sex),
        age,
        activity: ActivityLevel::from_token(activity),
        goal: Goal::from_token(goal),
    };

    let target = compute_caloric_goal(&profile);
    println!("Daily caloric goal: {:.0} kcal", target);

    Ok(())
}

/// List the restriction vocabulary.
fn cmd_restrictions(restrictions_path: &str) -> Result<()> {
    let path = Path::new(restrictions_path);

    if !path.exists() {
        eprintln!("Restriction vocabulary not found: {}", restrictions_path);
        return Ok(());
    }

    let vocabulary = load_restriction_vocabulary(path)?;
    display_vocabulary(&vocabulary);

    Ok(())
}
