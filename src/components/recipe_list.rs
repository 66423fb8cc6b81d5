//! Recipe List Component
//!
//! One link per recipe, keyed by id.

use leptos::prelude::*;

use crate::components::NavLink;
use crate::models::Recipe;
use crate::route::Route;

#[component]
pub fn RecipeList(recipes: Vec<Recipe>) -> impl IntoView {
    view! {
        <ul class="recipe-list">
            <For
                each=move || recipes.clone()
                key=|recipe| recipe.id
                children=move |recipe| {
                    view! {
                        <li>
                            <NavLink route=Route::Detail(Some(recipe.id))>{recipe.name}</NavLink>
                        </li>
                    }
                }
            />
        </ul>
    }
}
