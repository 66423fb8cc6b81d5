//! Recipe Book Frontend App
//!
//! Root component: owns the store, the navigation context and the initial fetch.

use leptos::ev;
use leptos::prelude::*;
use leptos::task::spawn_local;
use reactive_stores::Store;

use crate::api::{self, CancelToken, HttpRecipeSource};
use crate::components::{NavBar, ScreenView};
use crate::config::AppConfig;
use crate::context::{current_path, AppContext};
use crate::store::{store_dispatch, Action, AppState};

#[component]
pub fn App(config: AppConfig) -> impl IntoView {
    // State
    let store = Store::new(AppState::new());
    provide_context(store);

    let ctx = AppContext::new(signal(current_path()));
    provide_context(ctx);

    // Back/forward buttons
    let popstate = window_event_listener(ev::popstate, move |_| ctx.sync_from_location());
    on_cleanup(move || popstate.remove());

    // Load recipes once on mount; the result is dropped if the app is gone by then
    let cancel = CancelToken::new();
    on_cleanup({
        let cancel = cancel.clone();
        move || cancel.cancel()
    });
    let source = HttpRecipeSource::new(config.recipes_url);
    log::info!("Loading recipes from {}", source.url());
    spawn_local(async move {
        if let Some(recipes) = api::load_recipes(&source, &cancel).await {
            store_dispatch(&store, Action::Loaded(recipes));
        }
    });

    view! {
        <div class="recipe-app">
            <h1>"Recipe Application"</h1>
            <NavBar />
            <hr />
            <ScreenView />
        </div>
    }
}
