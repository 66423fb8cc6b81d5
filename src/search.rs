//! Recipe Search
//!
//! Case-insensitive substring filter over recipe names.

use crate::models::Recipe;

/// Whether `name` contains `query`, ignoring case
pub fn name_matches(name: &str, query: &str) -> bool {
    name.to_lowercase().contains(&query.to_lowercase())
}

/// Keep the recipes whose name contains `query`, in their original order.
///
/// Only `name` is searched. An empty query keeps everything.
pub fn filter_recipes(recipes: &[Recipe], query: &str) -> Vec<Recipe> {
    recipes
        .iter()
        .filter(|recipe| name_matches(&recipe.name, query))
        .cloned()
        .collect()
}
