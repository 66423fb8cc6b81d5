//! Screen View Component
//!
//! Renders whatever the current route resolves to.

use leptos::prelude::*;

use crate::components::{HomeView, RecipeCard, RecipeList};
use crate::context::use_app_context;
use crate::route::{resolve, Screen};
use crate::store::use_app_store;

#[component]
pub fn ScreenView() -> impl IntoView {
    let store = use_app_store();
    let ctx = use_app_context();

    let screen = Memo::new(move |_| resolve(&ctx.route.get(), &store.read()));

    view! {
        <section class="screen">
            {move || match screen.get() {
                Screen::Loading => view! { <p class="loading">"Loading..."</p> }.into_any(),
                Screen::Home(recommended) => view! { <HomeView recommended=recommended /> }.into_any(),
                Screen::List(recipes) => view! { <RecipeList recipes=recipes /> }.into_any(),
                Screen::Detail(recipe) => view! { <RecipeCard recipe=recipe /> }.into_any(),
                Screen::NotFound => view! { <div class="not-found">"Recipe not found"</div> }.into_any(),
                Screen::Blank => ().into_any(),
            }}
        </section>
    }
}
