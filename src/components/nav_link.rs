//! Nav Link Component
//!
//! Anchor that switches views without a page load and highlights itself when
//! its route is current.

use leptos::prelude::*;

use crate::context::use_app_context;
use crate::route::Route;

/// Client-side navigation link
///
/// Props:
/// - route: Target route
/// - exact: Only active on the exact path (otherwise deeper paths match too)
#[component]
pub fn NavLink(
    route: Route,
    #[prop(optional)] exact: bool,
    children: Children,
) -> impl IntoView {
    let ctx = use_app_context();
    let href = route.href();
    let active_href = href.clone();
    let target = href.clone();

    let class = move || if ctx.is_active(&active_href, exact) { "active" } else { "" };

    let on_click = move |ev: web_sys::MouseEvent| {
        // Leave new-tab / new-window clicks to the browser
        if ev.button() != 0 || ev.ctrl_key() || ev.meta_key() || ev.shift_key() || ev.alt_key() {
            return;
        }
        ev.prevent_default();
        ctx.navigate(&target);
    };

    view! {
        <a href=href class=class on:click=on_click>
            {children()}
        </a>
    }
}
