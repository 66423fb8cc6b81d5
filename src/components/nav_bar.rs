//! Nav Bar Component
//!
//! Top navigation with the search form.

use leptos::prelude::*;

use crate::components::{NavLink, SearchBar};
use crate::route::Route;
use crate::store::{store_dispatch, use_app_store, Action};

#[component]
pub fn NavBar() -> impl IntoView {
    let store = use_app_store();

    let on_search = move |query: String| store_dispatch(&store, Action::Search(query));
    let show_all = move |_| store_dispatch(&store, Action::ResetSearch);
    let filtered = move || store.read().is_filtered();

    view! {
        <nav>
            <ul>
                <li>
                    <NavLink route=Route::Home exact=true>"Home"</NavLink>
                </li>
                <li>
                    <NavLink route=Route::List>"All Recipes"</NavLink>
                </li>
            </ul>
            <SearchBar on_search=on_search />
            <Show when=filtered>
                <button type="button" class="show-all-btn" on:click=show_all>
                    "Show all"
                </button>
            </Show>
        </nav>
    }
}
