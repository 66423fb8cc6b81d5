//! Home View Component

use leptos::prelude::*;

use crate::components::RecipeCard;
use crate::models::Recipe;

/// Welcome page; the recommendation section is left out when there is none
#[component]
pub fn HomeView(recommended: Option<Recipe>) -> impl IntoView {
    view! {
        <div class="home">
            <h2>"Welcome to the Recipe App!"</h2>
            {recommended.map(|recipe| view! {
                <div class="recommended">
                    <h3>"Recommended Recipe"</h3>
                    <RecipeCard recipe=recipe />
                </div>
            })}
        </div>
    }
}
