use std::{fmt, sync::Arc};

use crate::{error::storage::StorageError, storage::KeyValueStore};

pub const THEME_KEY: &str = "theme";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    pub fn parse(raw: &str) -> Option<Self> {
        match raw {
            "light" => Some(Self::Light),
            "dark" => Some(Self::Dark),
            _ => None,
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Persisted UI theme preference
#[derive(Clone)]
pub struct ThemeService {
    store: Arc<dyn KeyValueStore>,
}

impl ThemeService {
    pub fn new(store: Arc<dyn KeyValueStore>) -> Self {
        Self { store }
    }

    /// Stored theme, falling back to light for missing or unknown values.
    pub fn get(&self) -> Theme {
        self.store
            .get(THEME_KEY)
            .ok()
            .flatten()
            .and_then(|raw| Theme::parse(&raw))
            .unwrap_or_default()
    }

    pub fn set(&self, theme: Theme) -> Result<(), StorageError> {
        self.store.set(THEME_KEY, theme.as_str())
    }
}
