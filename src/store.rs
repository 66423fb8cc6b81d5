//! Global Application State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity. All mutations go
//! through [`Action`]s applied by [`AppState::apply`].

use leptos::prelude::*;
use reactive_stores::Store;

use crate::models::Recipe;
use crate::search::filter_recipes;

/// Initial load phase. Moves to `Ready` once and never back.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum LoadStatus {
    #[default]
    Loading,
    Ready,
}

/// Global application state with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct AppState {
    pub status: LoadStatus,
    /// Recipes currently displayed (narrowed by each search)
    pub recipes: Vec<Recipe>,
    /// Recipes as fetched, used by "Show all"
    pub fetched: Vec<Recipe>,
    /// First fetched recipe, fixed at load time
    pub recommended: Option<Recipe>,
}

/// State transitions
#[derive(Clone, Debug, PartialEq)]
pub enum Action {
    /// Initial fetch finished (an empty list when it failed)
    Loaded(Vec<Recipe>),
    /// Search submitted; narrows the displayed recipes
    Search(String),
    /// Restore the fetched recipes
    ResetSearch,
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn apply(&mut self, action: Action) {
        match action {
            Action::Loaded(recipes) => {
                if self.status == LoadStatus::Ready {
                    log::warn!("Ignoring repeated load of {} recipes", recipes.len());
                    return;
                }
                log::info!("Loaded {} recipes", recipes.len());
                self.recommended = recipes.first().cloned();
                self.fetched = recipes.clone();
                self.recipes = recipes;
                self.status = LoadStatus::Ready;
            }
            Action::Search(query) => {
                let filtered = filter_recipes(&self.recipes, &query);
                log::debug!(
                    "Search {:?}: {} of {} recipes match",
                    query,
                    filtered.len(),
                    self.recipes.len()
                );
                self.recipes = filtered;
            }
            Action::ResetSearch => {
                self.recipes = self.fetched.clone();
            }
        }
    }

    pub fn is_loading(&self) -> bool {
        self.status == LoadStatus::Loading
    }

    /// True when a search has hidden some of the fetched recipes
    pub fn is_filtered(&self) -> bool {
        self.recipes.len() != self.fetched.len()
    }

    /// Look up a displayed recipe by id
    pub fn find(&self, id: i64) -> Option<&Recipe> {
        self.recipes.iter().find(|recipe| recipe.id == id)
    }
}

/// Type alias for the store
pub type AppStore = Store<AppState>;

/// Get the app store from context
pub fn use_app_store() -> AppStore {
    expect_context::<AppStore>()
}

/// Apply an action to the store
pub fn store_dispatch(store: &AppStore, action: Action) {
    store.write().apply(action);
}
