//! Application Configuration
//!
//! The browser has no process environment, so overrides are baked in at build
//! time (`RECIPE_API_URL=... trunk build`).

use std::str::FromStr;

use log::LevelFilter;

pub const DEFAULT_RECIPES_URL: &str = "/api/recipes";
pub const DEFAULT_LOG_LEVEL: LevelFilter = LevelFilter::Info;

#[derive(Clone, Debug, PartialEq)]
pub struct AppConfig {
    /// Endpoint returning the JSON recipe array
    pub recipes_url: String,
    pub log_level: LevelFilter,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            recipes_url: DEFAULT_RECIPES_URL.to_string(),
            log_level: DEFAULT_LOG_LEVEL,
        }
    }
}

impl AppConfig {
    pub fn load() -> Self {
        Self::from_values(option_env!("RECIPE_API_URL"), option_env!("RECIPE_LOG"))
    }

    /// Build a config from optional raw values, falling back to defaults for
    /// anything missing, blank or unparsable.
    pub fn from_values(recipes_url: Option<&str>, log_level: Option<&str>) -> Self {
        let recipes_url = recipes_url
            .map(str::trim)
            .filter(|url| !url.is_empty())
            .unwrap_or(DEFAULT_RECIPES_URL)
            .to_string();
        let log_level = log_level
            .and_then(|level| LevelFilter::from_str(level.trim()).ok())
            .unwrap_or(DEFAULT_LOG_LEVEL);
        Self {
            recipes_url,
            log_level,
        }
    }
}
