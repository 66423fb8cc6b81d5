//! Client Routes
//!
//! `/`, `/recipes` and `/recipes/:id`, and the screen each one shows.

use percent_encoding::percent_decode_str;

use crate::models::Recipe;
use crate::store::AppState;

const RECIPES_SEGMENT: &str = "recipes";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Route {
    Home,
    List,
    /// Recipe detail; `None` when the id segment has no leading integer
    Detail(Option<i64>),
    Unmatched,
}

impl Route {
    pub fn parse(path: &str) -> Self {
        let segments = path_segments(path);
        match segments.as_slice() {
            [] => Route::Home,
            [first] if first == RECIPES_SEGMENT => Route::List,
            [first, id, ..] if first == RECIPES_SEGMENT => Route::Detail(parse_leading_int(id)),
            _ => Route::Unmatched,
        }
    }

    /// Link path for this route
    pub fn href(&self) -> String {
        match self {
            Route::Home | Route::Unmatched => "/".to_string(),
            Route::List | Route::Detail(None) => format!("/{}", RECIPES_SEGMENT),
            Route::Detail(Some(id)) => format!("/{}/{}", RECIPES_SEGMENT, id),
        }
    }
}

/// Integer at the start of `segment`, read like `parseInt(segment, 10)`:
/// leading whitespace and an optional sign, then digits up to the first
/// non-digit (`"12abc"` is 12, `"3.7"` is 3, `"soup"` is `None`).
fn parse_leading_int(segment: &str) -> Option<i64> {
    let trimmed = segment.trim_start();
    let (negative, rest) = match trimmed.as_bytes().first() {
        Some(b'-') => (true, &trimmed[1..]),
        Some(b'+') => (false, &trimmed[1..]),
        _ => (false, trimmed),
    };
    let digits_len = rest.bytes().take_while(u8::is_ascii_digit).count();
    if digits_len == 0 {
        return None;
    }
    let value: i64 = rest[..digits_len].parse().ok()?;
    Some(if negative { -value } else { value })
}

/// Decoded, non-empty path segments. Query string and fragment are dropped.
fn path_segments(path: &str) -> Vec<String> {
    let path = path.split(['?', '#']).next().unwrap_or("");
    path.split('/')
        .filter(|segment| !segment.is_empty())
        .map(|segment| percent_decode_str(segment).decode_utf8_lossy().into_owned())
        .collect()
}

/// Whether a link to `link_path` should be highlighted at `current_path`.
///
/// Non-exact links also match any deeper path (`/recipes` is active on
/// `/recipes/3`), compared segment by segment.
pub fn is_link_active(current_path: &str, link_path: &str, exact: bool) -> bool {
    let current = path_segments(current_path);
    let link = path_segments(link_path);
    if exact {
        current == link
    } else {
        current.starts_with(&link)
    }
}

/// What the main area shows
#[derive(Clone, Debug, PartialEq)]
pub enum Screen {
    /// Initial fetch in flight; no route is rendered
    Loading,
    /// Welcome page with the recommendation, if any
    Home(Option<Recipe>),
    List(Vec<Recipe>),
    Detail(Recipe),
    NotFound,
    /// Path matched no route
    Blank,
}

/// Decide the screen for `route`. Detail lookups use the displayed
/// (possibly filtered) recipes.
pub fn resolve(route: &Route, state: &AppState) -> Screen {
    if state.is_loading() {
        return Screen::Loading;
    }
    match route {
        Route::Home => Screen::Home(state.recommended.clone()),
        Route::List => Screen::List(state.recipes.clone()),
        Route::Detail(Some(id)) => state
            .find(*id)
            .cloned()
            .map(Screen::Detail)
            .unwrap_or(Screen::NotFound),
        Route::Detail(None) => Screen::NotFound,
        Route::Unmatched => Screen::Blank,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::Action;

    fn loaded(recipes: Vec<Recipe>) -> AppState {
        let mut state = AppState::new();
        state.apply(Action::Loaded(recipes));
        state
    }

    fn soup_and_salad() -> Vec<Recipe> {
        vec![
            Recipe::new(1, "Soup", "Hot"),
            Recipe::new(2, "Salad", "Cold"),
        ]
    }

    #[test]
    fn test_parse_routes() {
        assert_eq!(Route::parse("/"), Route::Home);
        assert_eq!(Route::parse(""), Route::Home);
        assert_eq!(Route::parse("/recipes"), Route::List);
        assert_eq!(Route::parse("/recipes/"), Route::List);
        assert_eq!(Route::parse("/recipes/42"), Route::Detail(Some(42)));
        assert_eq!(Route::parse("/recipes/42/"), Route::Detail(Some(42)));
        assert_eq!(Route::parse("/about"), Route::Unmatched);
        assert_eq!(Route::parse("/recipesx"), Route::Unmatched);
    }

    #[test]
    fn test_parse_ignores_query_and_fragment() {
        assert_eq!(Route::parse("/recipes?sort=name"), Route::List);
        assert_eq!(Route::parse("/recipes/7#steps"), Route::Detail(Some(7)));
        assert_eq!(Route::parse("/?q=soup"), Route::Home);
    }

    #[test]
    fn test_parse_non_numeric_id() {
        assert_eq!(Route::parse("/recipes/soup"), Route::Detail(None));
        assert_eq!(Route::parse("/recipes/-"), Route::Detail(None));
        assert_eq!(Route::parse("/recipes/abc12"), Route::Detail(None));
    }

    #[test]
    fn test_parse_leading_integer_prefix() {
        assert_eq!(Route::parse("/recipes/12abc"), Route::Detail(Some(12)));
        assert_eq!(Route::parse("/recipes/3.7"), Route::Detail(Some(3)));
        assert_eq!(Route::parse("/recipes/%2012"), Route::Detail(Some(12)));
        assert_eq!(Route::parse("/recipes/+4"), Route::Detail(Some(4)));
        assert_eq!(Route::parse("/recipes/-4"), Route::Detail(Some(-4)));
        assert_eq!(Route::parse("/recipes/007"), Route::Detail(Some(7)));
    }

    #[test]
    fn test_parse_percent_encoded_id() {
        assert_eq!(Route::parse("/recipes/%31%32"), Route::Detail(Some(12)));
    }

    #[test]
    fn test_href_round_trips() {
        for route in [Route::Home, Route::List, Route::Detail(Some(5))] {
            assert_eq!(Route::parse(&route.href()), route);
        }
        assert_eq!(Route::Detail(None).href(), "/recipes");
    }

    #[test]
    fn test_link_active() {
        assert!(is_link_active("/", "/", true));
        assert!(!is_link_active("/recipes", "/", true));
        assert!(is_link_active("/recipes", "/recipes", false));
        assert!(is_link_active("/recipes/3", "/recipes", false));
        assert!(is_link_active("/recipes/3/", "/recipes/3", false));
        assert!(!is_link_active("/recipes/30", "/recipes/3", false));
        assert!(!is_link_active("/", "/recipes", false));
    }

    #[test]
    fn test_loading_suppresses_every_route() {
        let state = AppState::new();
        for route in [Route::Home, Route::List, Route::Detail(Some(1)), Route::Unmatched] {
            assert_eq!(resolve(&route, &state), Screen::Loading);
        }
    }

    #[test]
    fn test_soup_and_salad_scenario() {
        let mut state = loaded(soup_and_salad());

        assert_eq!(
            resolve(&Route::Home, &state),
            Screen::Home(Some(Recipe::new(1, "Soup", "Hot")))
        );
        assert_eq!(resolve(&Route::parse("/recipes"), &state), Screen::List(soup_and_salad()));

        state.apply(Action::Search("sa".to_string()));
        assert_eq!(
            resolve(&Route::parse("/recipes"), &state),
            Screen::List(vec![Recipe::new(2, "Salad", "Cold")])
        );
        // Recommendation is unaffected by the search
        assert_eq!(
            resolve(&Route::Home, &state),
            Screen::Home(Some(Recipe::new(1, "Soup", "Hot")))
        );
        // Filtered-out recipes are no longer reachable by id
        assert_eq!(resolve(&Route::parse("/recipes/1"), &state), Screen::NotFound);
    }

    #[test]
    fn test_failed_fetch_scenario() {
        let state = loaded(Vec::new());

        assert_eq!(resolve(&Route::Home, &state), Screen::Home(None));
        assert_eq!(resolve(&Route::List, &state), Screen::List(Vec::new()));
    }

    #[test]
    fn test_detail_lookup() {
        let state = loaded(soup_and_salad());

        assert_eq!(
            resolve(&Route::parse("/recipes/2"), &state),
            Screen::Detail(Recipe::new(2, "Salad", "Cold"))
        );
        assert_eq!(resolve(&Route::parse("/recipes/99"), &state), Screen::NotFound);
        assert_eq!(resolve(&Route::parse("/recipes/abc"), &state), Screen::NotFound);
        assert_eq!(
            resolve(&Route::parse("/recipes/2-salad"), &state),
            Screen::Detail(Recipe::new(2, "Salad", "Cold"))
        );
    }

    #[test]
    fn test_unmatched_is_blank() {
        let state = loaded(soup_and_salad());
        assert_eq!(resolve(&Route::parse("/nowhere"), &state), Screen::Blank);
    }
}
