// Theme preference - persisted dark/light selection
use std::sync::Arc;

use crate::error::Result;
use crate::storage::Storage;

const THEME_KEY: &str = "cineplus-theme";

/// Color theme selection. The storage strings double as the CSS class
/// names the rendering surface applies to the page body.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Theme {
    #[default]
    Dark,
    Light,
}

impl Theme {
    pub fn as_str(self) -> &'static str {
        match self {
            Theme::Dark => "dark-theme",
            Theme::Light => "light-theme",
        }
    }

    fn parse(value: &str) -> Option<Self> {
        match value {
            "dark-theme" => Some(Theme::Dark),
            "light-theme" => Some(Theme::Light),
            _ => None,
        }
    }

    fn flipped(self) -> Self {
        match self {
            Theme::Dark => Theme::Light,
            Theme::Light => Theme::Dark,
        }
    }
}

/// Loads, toggles and persists the theme preference.
pub struct ThemeManager {
    storage: Arc<dyn Storage>,
    current: Theme,
}

impl ThemeManager {
    /// Load the persisted preference; unknown or missing values fall back
    /// to dark.
    pub fn new(storage: Arc<dyn Storage>) -> Self {
        let current = storage
            .get(THEME_KEY)
            .and_then(|value| Theme::parse(&value))
            .unwrap_or_default();

        Self { storage, current }
    }

    pub fn current(&self) -> Theme {
        self.current
    }

    /// Flip between dark and light and persist the choice.
    pub fn toggle(&mut self) -> Result<Theme> {
        self.current = self.current.flipped();
        self.storage.set(THEME_KEY, self.current.as_str())?;
        Ok(self.current)
    }
}

#[cfg(test)]
#[path = "tests/theme_tests.rs"]
mod tests;
