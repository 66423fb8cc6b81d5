//! Recipe API
//!
//! Frontend gateway to the recipe backend.

mod cancel;
mod http;

use async_trait::async_trait;

use crate::error::FetchError;
use crate::models::Recipe;

pub use cancel::CancelToken;
pub use http::HttpRecipeSource;

/// Anything that can produce the recipe collection
#[async_trait(?Send)]
pub trait RecipeSource {
    async fn fetch_recipes(&self, cancel: &CancelToken) -> Result<Vec<Recipe>, FetchError>;
}

/// Parse the JSON array returned by the recipe endpoint.
///
/// Only a body that is not a JSON array fails. Records without an integer
/// `id` are skipped; the rest are kept.
pub fn decode_recipes(body: &str) -> Result<Vec<Recipe>, FetchError> {
    let records: Vec<serde_json::Value> = serde_json::from_str(body)?;
    Ok(records
        .into_iter()
        .enumerate()
        .filter_map(|(index, record)| match serde_json::from_value(record) {
            Ok(recipe) => Some(recipe),
            Err(e) => {
                log::warn!("Skipping recipe record {}: {}", index, e);
                None
            }
        })
        .collect())
}

/// Fetch recipes once.
///
/// Returns `None` when `cancel` was triggered, in which case nothing should be
/// committed. Any other failure is logged and yields an empty list.
pub async fn load_recipes<S>(source: &S, cancel: &CancelToken) -> Option<Vec<Recipe>>
where
    S: RecipeSource + ?Sized,
{
    let result = source.fetch_recipes(cancel).await;
    if cancel.is_cancelled() {
        log::debug!("Recipe fetch cancelled, dropping result");
        return None;
    }
    match result {
        Ok(recipes) => Some(recipes),
        Err(FetchError::Cancelled) => None,
        Err(e) => {
            log::error!("Error fetching recipes: {}", e);
            Some(Vec::new())
        }
    }
}
