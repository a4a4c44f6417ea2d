//! The preferences context handed to consumers.

use glaze_storage::SharedStore;
use tracing::debug;

use crate::background::BackgroundStore;
use crate::document::{Document, DocumentSurface};
use crate::error::Result;
use crate::language::{default_languages, Language, LanguageStore, DEFAULT_LANGUAGE};
use crate::provider::Provider;
use crate::theme::ThemeStore;

/// Startup inputs for [`Preferences::mount`].
#[derive(Debug, Clone)]
pub struct PreferencesConfig {
    pub languages: Vec<Language>,
    pub default_language: String,
    /// The platform's dark-mode preference, when known.
    pub system_prefers_dark: Option<bool>,
}

impl Default for PreferencesConfig {
    fn default() -> Self {
        Self {
            languages: default_languages(),
            default_language: DEFAULT_LANGUAGE.to_string(),
            system_prefers_dark: None,
        }
    }
}

/// All three preference stores over one storage handle.
///
/// Each store sits in its own [`Provider`], so the stores can be mounted and
/// torn down together while a consumer that outlives them gets an error
/// instead of stale data.
pub struct Preferences<D: DocumentSurface = Document> {
    storage: SharedStore,
    theme: Provider<ThemeStore>,
    language: Provider<LanguageStore<D>>,
    background: Provider<BackgroundStore>,
}

impl<D: DocumentSurface> std::fmt::Debug for Preferences<D> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Preferences")
            .field("backend", &self.storage.borrow().backend_name())
            .field("theme", &self.theme.is_mounted())
            .field("language", &self.language.is_mounted())
            .field("background", &self.background.is_mounted())
            .finish()
    }
}

impl<D: DocumentSurface> Preferences<D> {
    /// A context whose stores are not mounted yet.
    pub fn unmounted(storage: SharedStore) -> Self {
        Self {
            storage,
            theme: Provider::new("ThemeStore"),
            language: Provider::new("LanguageStore"),
            background: Provider::new("BackgroundStore"),
        }
    }

    /// Loads every store from `storage` and mounts it.
    pub fn mount(storage: SharedStore, config: PreferencesConfig, surface: D) -> Self {
        let mut prefs = Self::unmounted(storage);
        prefs.mount_stores(config, surface);
        prefs
    }

    /// (Re)loads every store from storage. Previously mounted stores are
    /// dropped.
    pub fn mount_stores(&mut self, config: PreferencesConfig, surface: D) {
        let PreferencesConfig {
            languages,
            default_language,
            system_prefers_dark,
        } = config;

        self.theme
            .mount(ThemeStore::load(self.storage.clone(), system_prefers_dark));
        self.language.mount(LanguageStore::load(
            self.storage.clone(),
            languages,
            &default_language,
            surface,
        ));
        self.background
            .mount(BackgroundStore::load(self.storage.clone()));

        debug!(
            backend = self.storage.borrow().backend_name(),
            "preferences mounted"
        );
    }

    /// Tears every store down. Accessors fail until the next mount.
    pub fn unmount(&mut self) {
        self.theme.unmount();
        self.language.unmount();
        self.background.unmount();
        debug!("preferences unmounted");
    }

    pub fn is_mounted(&self) -> bool {
        self.theme.is_mounted() && self.language.is_mounted() && self.background.is_mounted()
    }

    pub fn storage(&self) -> &SharedStore {
        &self.storage
    }

    pub fn theme(&self) -> Result<&ThemeStore> {
        self.theme.get()
    }

    pub fn theme_mut(&mut self) -> Result<&mut ThemeStore> {
        self.theme.get_mut()
    }

    pub fn language(&self) -> Result<&LanguageStore<D>> {
        self.language.get()
    }

    pub fn language_mut(&mut self) -> Result<&mut LanguageStore<D>> {
        self.language.get_mut()
    }

    pub fn background(&self) -> Result<&BackgroundStore> {
        self.background.get()
    }

    pub fn background_mut(&mut self) -> Result<&mut BackgroundStore> {
        self.background.get_mut()
    }
}
