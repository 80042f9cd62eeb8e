pub mod prompts;
pub mod render;

pub use prompts::{
    prompt_extra_restrictions, prompt_meal_type, prompt_profile, prompt_restrictions,
    prompt_yes_no,
};
pub use render::{display_meal_options, display_vocabulary};
