use glaze_storage::SharedStore;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::document::{Document, DocumentAttributes, DocumentSurface};
use crate::persist;

/// Storage key for the persisted language code (stored as a plain string).
pub const LANGUAGE_KEY: &str = "language";

pub const DEFAULT_LANGUAGE: &str = "en";

/// Language codes written right-to-left.
pub const RTL_LANGUAGES: &[&str] = &["ar", "he", "fa", "ur"];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    #[default]
    Ltr,
    Rtl,
}

impl Direction {
    /// Direction for a language code. Anything outside [`RTL_LANGUAGES`]
    /// is left-to-right.
    pub fn for_code(code: &str) -> Self {
        if RTL_LANGUAGES.contains(&code) {
            Direction::Rtl
        } else {
            Direction::Ltr
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Direction::Ltr => "ltr",
            Direction::Rtl => "rtl",
        }
    }

    pub fn flipped(&self) -> Self {
        match self {
            Direction::Ltr => Direction::Rtl,
            Direction::Rtl => Direction::Ltr,
        }
    }
}

/// An entry in the language catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Language {
    pub code: String,
    /// English display name
    pub name: String,
    /// Name in the language itself
    pub native_name: String,
}

impl Language {
    pub fn new(code: &str, name: &str, native_name: &str) -> Self {
        Self {
            code: code.to_string(),
            name: name.to_string(),
            native_name: native_name.to_string(),
        }
    }

    pub fn direction(&self) -> Direction {
        Direction::for_code(&self.code)
    }
}

pub fn default_languages() -> Vec<Language> {
    vec![
        Language::new("en", "English", "English"),
        Language::new("ar", "Arabic", "العربية"),
    ]
}

/// Snapshot of the language preference.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LanguageState {
    pub language_code: String,
    pub direction: Direction,
}

/// Active language and the document surface that mirrors it.
///
/// The direction is never stored; it is derived from the code on every read.
pub struct LanguageStore<D: DocumentSurface = Document> {
    storage: SharedStore,
    languages: Vec<Language>,
    code: String,
    surface: D,
}

impl<D: DocumentSurface + std::fmt::Debug> std::fmt::Debug for LanguageStore<D> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LanguageStore")
            .field("code", &self.code)
            .field("languages", &self.languages.len())
            .field("surface", &self.surface)
            .finish()
    }
}

impl<D: DocumentSurface> LanguageStore<D> {
    /// Loads the persisted code (or `default_code`) and syncs `surface` to it.
    ///
    /// An empty catalog is replaced by [`default_languages`].
    pub fn load(
        storage: SharedStore,
        languages: Vec<Language>,
        default_code: &str,
        surface: D,
    ) -> Self {
        let languages = if languages.is_empty() {
            warn!("empty language catalog, using built-in languages");
            default_languages()
        } else {
            languages
        };

        let code = persist::read(&storage, LANGUAGE_KEY)
            .map(|c| c.trim().to_string())
            .filter(|c| !c.is_empty())
            .unwrap_or_else(|| default_code.to_string());

        let mut store = Self {
            storage,
            languages,
            code,
            surface,
        };
        store.sync_surface();
        debug!(code = %store.code, dir = store.direction().as_str(), "language store initialized");
        store
    }

    pub fn state(&self) -> LanguageState {
        LanguageState {
            language_code: self.code.clone(),
            direction: self.direction(),
        }
    }

    pub fn code(&self) -> &str {
        &self.code
    }

    pub fn direction(&self) -> Direction {
        Direction::for_code(&self.code)
    }

    pub fn is_rtl(&self) -> bool {
        self.direction() == Direction::Rtl
    }

    pub fn available_languages(&self) -> &[Language] {
        &self.languages
    }

    /// Catalog entry for the active code, if it is a known language.
    pub fn current_language(&self) -> Option<&Language> {
        self.languages.iter().find(|l| l.code == self.code)
    }

    pub fn surface(&self) -> &D {
        &self.surface
    }

    /// Switches to `code`. Unknown codes are accepted as-is; validating
    /// them against the catalog is the caller's job.
    pub fn change_language(&mut self, code: &str) {
        if !self.languages.iter().any(|l| l.code == code) {
            debug!(code, "switching to a language outside the catalog");
        }

        self.code = code.to_string();
        persist::write(&self.storage, LANGUAGE_KEY, &self.code);
        self.sync_surface();
        debug!(code, dir = self.direction().as_str(), "language changed");
    }

    /// Moves to the next catalog entry, wrapping around. With the default
    /// two-language catalog this flips `en` and `ar`. A code outside the
    /// catalog moves to the first entry.
    pub fn toggle_language(&mut self) {
        let next = match self.languages.iter().position(|l| l.code == self.code) {
            Some(i) => (i + 1) % self.languages.len(),
            None => 0,
        };
        let code = self.languages[next].code.clone();
        self.change_language(&code);
    }

    fn sync_surface(&mut self) {
        let attrs = DocumentAttributes::new(self.code.clone(), self.direction());
        self.surface.apply(&attrs);
    }
}
