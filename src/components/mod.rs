//! UI Components
//!
//! Reusable Leptos components.

mod home_view;
mod nav_bar;
mod nav_link;
mod recipe_card;
mod recipe_list;
mod screen_view;
mod search_bar;

pub use home_view::HomeView;
pub use nav_bar::NavBar;
pub use nav_link::NavLink;
pub use recipe_card::RecipeCard;
pub use recipe_list::RecipeList;
pub use screen_view::ScreenView;
pub use search_bar::SearchBar;
