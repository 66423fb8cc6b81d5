//! HTTP Recipe Source
//!
//! `window.fetch` binding for the recipe endpoint.

use async_trait::async_trait;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;

use super::{decode_recipes, CancelToken, RecipeSource};
use crate::error::FetchError;
use crate::models::Recipe;

/// Recipes from a JSON endpoint (`GET <url>`)
#[derive(Clone, Debug)]
pub struct HttpRecipeSource {
    url: String,
}

impl HttpRecipeSource {
    pub fn new(url: impl Into<String>) -> Self {
        Self { url: url.into() }
    }

    pub fn url(&self) -> &str {
        &self.url
    }
}

#[async_trait(?Send)]
impl RecipeSource for HttpRecipeSource {
    async fn fetch_recipes(&self, cancel: &CancelToken) -> Result<Vec<Recipe>, FetchError> {
        let window = web_sys::window().ok_or(FetchError::NoWindow)?;
        log::debug!("GET {}", self.url);

        let response = JsFuture::from(window.fetch_with_str(&self.url))
            .await
            .map_err(FetchError::network)?;
        let response: web_sys::Response = response.dyn_into().map_err(FetchError::network)?;

        if cancel.is_cancelled() {
            return Err(FetchError::Cancelled);
        }
        if !response.ok() {
            return Err(FetchError::Status(response.status()));
        }

        let text = response.text().map_err(FetchError::body)?;
        let body = JsFuture::from(text).await.map_err(FetchError::body)?;
        let body = body
            .as_string()
            .ok_or_else(|| FetchError::Body("response body is not text".to_string()))?;

        decode_recipes(&body)
    }
}
