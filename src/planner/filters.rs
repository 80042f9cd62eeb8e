use crate::models::FoodItem;
use crate::planner::constants::{EXCLUSION_KEYWORDS, INCLUSION_TOKENS};

/// Filter rule a single restriction token maps to.
///
/// "vegetarian"/"vegan" keep matching items; every other token drops them.
/// The asymmetry is intended: diet tags are opt-in labels on the catalog,
/// while ingredient tokens name things to avoid.
#[derive(Debug, Clone)]
pub enum RestrictionRule {
    /// Keep only items whose restriction tags contain the token.
    RequireTag(String),

    /// Drop items whose name contains any of the keywords.
    ExcludeKeywords(&'static [&'static str]),

    /// Drop items whose name contains the token verbatim.
    ExcludeVerbatim(String),
}

impl RestrictionRule {
    /// Resolve a restriction token to its filter rule.
    pub fn for_token(token: &str) -> Self {
        let token = token.trim().to_lowercase();

        if INCLUSION_TOKENS.contains(&token.as_str()) {
            return RestrictionRule::RequireTag(token);
        }

        if let Some(keywords) = EXCLUSION_KEYWORDS.get(token.as_str()).copied() {
            return RestrictionRule::ExcludeKeywords(keywords);
        }

        RestrictionRule::ExcludeVerbatim(token)
    }

    /// Whether an item survives this rule.
    pub fn keeps(&self, item: &FoodItem) -> bool {
        match self {
            RestrictionRule::RequireTag(tag) => item.has_restriction_tag(tag),
            RestrictionRule::ExcludeKeywords(keywords) => {
                !keywords.iter().any(|k| item.name_contains(k))
            }
            RestrictionRule::ExcludeVerbatim(token) => !item.name_contains(token),
        }
    }
}

/// Split a comma-joined restriction string into normalized tokens.
///
/// Empty input yields an empty set (no filtering).
pub fn parse_restrictions(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(|t| t.trim().to_lowercase())
        .filter(|t| !t.is_empty())
        .collect()
}

/// Narrow the item set one restriction token at a time.
///
/// Each pass is a pure subset operation, so adding tokens can only
/// remove items.
pub fn apply_restrictions(items: Vec<FoodItem>, restrictions: &[String]) -> Vec<FoodItem> {
    restrictions.iter().fold(items, |remaining, token| {
        let rule = RestrictionRule::for_token(token);
        remaining.into_iter().filter(|i| rule.keeps(i)).collect()
    })
}
