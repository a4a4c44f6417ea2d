use glaze_storage::SharedStore;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::persist;

/// Storage key for the persisted theme mode.
pub const THEME_KEY: &str = "theme";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    #[default]
    Light,
    Dark,
}

impl ThemeMode {
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "dark" => Some(ThemeMode::Dark),
            "light" => Some(ThemeMode::Light),
            _ => None,
        }
    }

    pub fn from_dark(is_dark: bool) -> Self {
        if is_dark {
            ThemeMode::Dark
        } else {
            ThemeMode::Light
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ThemeMode::Light => "light",
            ThemeMode::Dark => "dark",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ThemeMode::Light => "Light",
            ThemeMode::Dark => "Dark",
        }
    }

    pub fn toggled(&self) -> Self {
        match self {
            ThemeMode::Light => ThemeMode::Dark,
            ThemeMode::Dark => ThemeMode::Light,
        }
    }
}

/// Snapshot of the theme preference.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ThemeState {
    pub is_dark: bool,
}

impl ThemeState {
    pub fn mode(&self) -> ThemeMode {
        ThemeMode::from_dark(self.is_dark)
    }

    pub fn is_light(&self) -> bool {
        !self.is_dark
    }
}

/// Light/dark preference, persisted under [`THEME_KEY`].
pub struct ThemeStore {
    storage: SharedStore,
    mode: ThemeMode,
}

impl std::fmt::Debug for ThemeStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ThemeStore").field("mode", &self.mode).finish()
    }
}

impl ThemeStore {
    /// Loads the persisted mode. Falls back to `system_prefers_dark` when
    /// nothing usable is stored, then to light.
    pub fn load(storage: SharedStore, system_prefers_dark: Option<bool>) -> Self {
        let fallback = system_prefers_dark
            .map(ThemeMode::from_dark)
            .unwrap_or_default();

        let mode = match persist::read(&storage, THEME_KEY) {
            Some(raw) => ThemeMode::parse(&raw).unwrap_or_else(|| {
                warn!(value = %raw, "ignoring unrecognized persisted theme");
                fallback
            }),
            None => fallback,
        };

        debug!(mode = mode.as_str(), "theme store initialized");
        Self { storage, mode }
    }

    pub fn state(&self) -> ThemeState {
        ThemeState {
            is_dark: self.mode == ThemeMode::Dark,
        }
    }

    pub fn mode(&self) -> ThemeMode {
        self.mode
    }

    pub fn is_dark(&self) -> bool {
        self.mode == ThemeMode::Dark
    }

    pub fn toggle(&mut self) {
        self.set_mode(self.mode.toggled());
    }

    pub fn set_dark(&mut self, is_dark: bool) {
        self.set_mode(ThemeMode::from_dark(is_dark));
    }

    pub fn set_mode(&mut self, mode: ThemeMode) {
        self.mode = mode;
        persist::write(&self.storage, THEME_KEY, mode.as_str());
        debug!(mode = mode.as_str(), "theme changed");
    }
}
