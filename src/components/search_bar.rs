//! Search Bar Component
//!
//! Keeps the draft query locally and only reports it on submit.

use leptos::prelude::*;

#[component]
pub fn SearchBar(#[prop(into)] on_search: Callback<String>) -> impl IntoView {
    let (draft, set_draft) = signal(String::new());

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        on_search.run(draft.get_untracked());
    };

    view! {
        <form class="search-bar" on:submit=on_submit>
            <input
                type="text"
                placeholder="Search recipes..."
                prop:value=move || draft.get()
                on:input=move |ev| set_draft.set(event_target_value(&ev))
            />
            <button type="submit">"Search"</button>
        </form>
    }
}
