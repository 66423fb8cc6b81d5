//! Application Context
//!
//! Navigation state provided via Leptos Context API. Paths are kept in sync
//! with the browser history (`pushState` on navigate, `popstate` on back/forward).

use leptos::prelude::*;
use wasm_bindgen::JsValue;

use crate::error::js_error_message;
use crate::route::{is_link_active, Route};

/// App-wide navigation signals provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    /// Current location path - read
    pub path: ReadSignal<String>,
    /// Current location path - write
    set_path: WriteSignal<String>,
    /// Route parsed from `path`
    pub route: Memo<Route>,
}

impl AppContext {
    pub fn new(path: (ReadSignal<String>, WriteSignal<String>)) -> Self {
        let (path, set_path) = path;
        let route = Memo::new(move |_| Route::parse(&path.get()));
        Self {
            path,
            set_path,
            route,
        }
    }

    /// Push `href` onto the browser history and switch views
    pub fn navigate(&self, href: &str) {
        if self.path.get_untracked() == href {
            return;
        }
        log::debug!("Navigate to {}", href);
        push_history(href);
        self.set_path.set(href.to_string());
    }

    /// Re-read the location after the browser moved through history
    pub fn sync_from_location(&self) {
        self.set_path.set(current_path());
    }

    pub fn is_active(&self, href: &str, exact: bool) -> bool {
        is_link_active(&self.path.get(), href, exact)
    }
}

/// Get the app context from context
pub fn use_app_context() -> AppContext {
    expect_context::<AppContext>()
}

/// Path of the current browser location, `/` when unavailable
pub fn current_path() -> String {
    window().location().pathname().unwrap_or_else(|_| "/".to_string())
}

fn push_history(href: &str) {
    let pushed = window()
        .history()
        .and_then(|history| history.push_state_with_url(&JsValue::NULL, "", Some(href)));
    if let Err(e) = pushed {
        log::warn!("Could not push history entry {}: {}", href, js_error_message(&e));
    }
}
