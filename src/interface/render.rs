use crate::models::MealOption;

/// Display generated meal options in a formatted table.
pub fn display_meal_options(options: &[MealOption], caloric_goal: f64) {
    if options.is_empty() {
        println!(
            "No meal combinations fit under {:.0} calories. Try fewer restrictions or a higher goal.",
            caloric_goal
        );
        return;
    }

    println!();
    println!("=== Meal Options (ceiling {:.0} cal) ===", caloric_goal);
    println!();

    let protein_width = column_width(options.iter().map(|o| o.protein.len()));
    let grain_width = column_width(options.iter().map(|o| o.grain.len()));
    let vegetable_width = column_width(options.iter().map(|o| o.vegetable.len()));

    for (i, option) in options.iter().enumerate() {
        let dessert = match &option.dessert {
            Some(name) => format!(" + {}", name),
            None => String::new(),
        };

        println!(
            "{:>3}. {:<pw$} | {:<gw$} | {:<vw$} - {:>4.0} cal{}",
            i + 1,
            option.protein,
            option.grain,
            option.vegetable,
            option.total_calories,
            dessert,
            pw = protein_width,
            gw = grain_width,
            vw = vegetable_width
        );
    }

    let with_dessert = options.iter().filter(|o| o.dessert.is_some()).count();

    println!();
    println!("--- Summary ---");
    println!("Total options: {}", options.len());
    println!("With dessert: {}", with_dessert);
    println!();
}

/// Display the restriction vocabulary.
pub fn display_vocabulary(vocabulary: &[String]) {
    if vocabulary.is_empty() {
        println!("No dietary restrictions on file.");
        return;
    }

    println!();
    println!("=== Dietary Restrictions ({}) ===", vocabulary.len());
    println!();

    for token in vocabulary {
        println!("  {}", token);
    }

    println!();
}

fn column_width(lengths: impl Iterator<Item = usize>) -> usize {
    lengths.max().unwrap_or(10)
}
