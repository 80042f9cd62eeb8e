use clap::{Parser, Subcommand};

/// HallComboPlanner — a dining-hall CLI that builds calorie-bounded meal combinations.
#[derive(Parser, Debug)]
#[command(name = "hall_combo_planner")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Path to the food catalog CSV file.
    #[arg(short, long, default_value = "catalog.csv")]
    pub catalog: String,

    /// Path to the restriction vocabulary CSV file.
    #[arg(long, default_value = "dietary_restrictions.csv")]
    pub restrictions_file: String,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Generate meal combinations under a caloric ceiling.
    Plan {
        /// Meal to plan (breakfast, lunch, dinner). Prompted if omitted.
        #[arg(long)]
        meal_type: Option<String>,

        /// Comma-joined restriction tokens, e.g. "vegan,nuts". Prompted if omitted.
        #[arg(long)]
        restrictions: Option<String>,

        /// Caloric ceiling. Computed from biometrics (or defaulted) if omitted.
        #[arg(long)]
        caloric_goal: Option<f64>,

        /// Print the options as JSON instead of a table.
        #[arg(long)]
        json: bool,

        /// Pick one random option instead of listing all of them.
        #[arg(long)]
        surprise: bool,
    },

    /// Compute a daily caloric goal from biometrics.
    Goal {
        /// Weight in pounds.
        #[arg(long)]
        weight: f64,

        /// Height in inches.
        #[arg(long)]
        height: f64,

        /// Age in years.
        #[arg(long)]
        age: u32,

        /// Biological sex ("female" or anything else for the default formula).
        #[arg(long, default_value = "male")]
        sex: String,

        /// Activity level (sedentary, lightly active, moderately active,
        /// active, extremely active).
        #[arg(long, default_value = "sedentary")]
        activity: String,

        /// Weight goal (maintain, lose, gain).
        #[arg(long, default_value = "maintain")]
        goal: String,
    },

    /// List the restriction vocabulary.
    Restrictions,
}

impl Default for Command {
    fn default() -> Self {
        Command::Plan {
            meal_type: None,
            restrictions: None,
            caloric_goal: None,
            json: false,
            surprise: false,
        }
    }
}
