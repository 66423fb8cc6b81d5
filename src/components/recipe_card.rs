//! Recipe Card Component
//!
//! Name and description of a single recipe.

use leptos::prelude::*;

use crate::models::Recipe;

#[component]
pub fn RecipeCard(recipe: Recipe) -> impl IntoView {
    view! {
        <div class="recipe">
            <h3>{recipe.name}</h3>
            <p>{recipe.description}</p>
        </div>
    }
}
