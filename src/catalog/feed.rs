use std::path::Path;

use serde::Deserialize;

use crate::error::Result;
use crate::models::FoodItem;

/// One row of the restriction vocabulary feed.
#[derive(Debug, Deserialize)]
struct RestrictionRow {
    restriction: String,
}

/// Load the food catalog from a CSV feed.
///
/// Expected columns: Food_Item, Calories, Category (P/G/V/D), Meal_Type,
/// Restrictions. Row order is preserved; it drives enumeration order
/// downstream.
pub fn load_catalog<P: AsRef<Path>>(path: P) -> Result<Vec<FoodItem>> {
    let mut reader = csv::Reader::from_path(path)?;

    let mut items = Vec::new();
    for record in reader.deserialize() {
        let item: FoodItem = record?;
        items.push(item);
    }

    Ok(items)
}

/// Load the restriction vocabulary from a CSV feed.
///
/// Expected column: restriction. Used only to present choices; blank rows
/// are skipped.
pub fn load_restriction_vocabulary<P: AsRef<Path>>(path: P) -> Result<Vec<String>> {
    let mut reader = csv::Reader::from_path(path)?;

    let mut tokens = Vec::new();
    for record in reader.deserialize() {
        let row: RestrictionRow = record?;
        let token = row.restriction.trim().to_string();
        if !token.is_empty() {
            tokens.push(token);
        }
    }

    Ok(tokens)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Category;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_load_catalog() {
        let csv = "\
Food_Item,Calories,Category,Meal_Type,Restrictions
Grilled Chicken,200,P,lunch,
Tofu Bowl,180,P,lunch,\"vegetarian, vegan\"
Rice,150,G,lunch,vegan
";

        let mut file = NamedTempFile::new().unwrap();
        file.write_all(csv.as_bytes()).unwrap();

        let catalog = load_catalog(file.path()).unwrap();
        assert_eq!(catalog.len(), 3);

        assert_eq!(catalog[0].name, "Grilled Chicken");
        assert_eq!(catalog[0].calories, 200.0);
        assert_eq!(catalog[0].category, Category::Protein);
        assert_eq!(catalog[0].meal_type, "lunch");
        assert!(catalog[0].restrictions.is_empty());

        assert!(catalog[1].has_restriction_tag("vegan"));
        assert_eq!(catalog[2].category, Category::Grain);
    }

    #[test]
    fn test_load_catalog_missing_file() {
        let result = load_catalog("no_such_catalog.csv");
        assert!(result.is_err());
    }

    #[test]
    fn test_load_restriction_vocabulary() {
        let csv = "\
restriction
vegetarian
vegan
nuts

gluten
";

        let mut file = NamedTempFile::new().unwrap();
        file.write_all(csv.as_bytes()).unwrap();

        let vocabulary = load_restriction_vocabulary(file.path()).unwrap();
        assert_eq!(vocabulary, vec!["vegetarian", "vegan", "nuts", "gluten"]);
    }
}
