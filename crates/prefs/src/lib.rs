//! UI preference stores for glaze dashboards.
//!
//! Three independent stores share one persisted key-value medium:
//! - [`ThemeStore`] - light/dark mode
//! - [`LanguageStore`] - active language, derived text direction and the
//!   document attributes that follow it
//! - [`BackgroundStore`] - background rendering mode with named presets
//!
//! Stores are plain values. Consumers reach them through a [`Preferences`]
//! context, whose [`Provider`] slots report use outside their lifecycle as
//! [`PrefsError::OutsideProvider`].

mod background;
mod context;
mod document;
mod error;
mod language;
mod persist;
mod presets;
mod provider;
mod theme;
pub mod validation;

pub use background::{
    AnimatedGradientSettings, Background, BackgroundMode, BackgroundPatch, BackgroundSettings,
    BackgroundStore, GradientKind, GradientSettings, BACKGROUND_KEY, CUSTOM_PRESET_KEY,
};
pub use context::{Preferences, PreferencesConfig};
pub use document::{Document, DocumentAttributes, DocumentSurface};
pub use error::{PrefsError, Result};
pub use language::{
    default_languages, Direction, Language, LanguageState, LanguageStore, DEFAULT_LANGUAGE,
    LANGUAGE_KEY, RTL_LANGUAGES,
};
pub use presets::{GradientPreset, PresetCatalog, DEFAULT_PRESET_KEY};
pub use provider::Provider;
pub use theme::{ThemeMode, ThemeState, ThemeStore, THEME_KEY};

pub use glaze_storage::{shared, KeyValueStore, MemoryStore, SharedStore};
