use color_eyre::eyre::Result;
use glaze_prefs::{Background, DocumentSurface, LanguageState, Preferences, ThemeState};
use serde::Serialize;

use super::print_json;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Status {
    pub theme: ThemeState,
    pub language: LanguageState,
    pub background: Background,
    pub storage: &'static str,
}

pub fn collect<D: DocumentSurface>(prefs: &Preferences<D>) -> Result<Status> {
    Ok(Status {
        theme: prefs.theme()?.state(),
        language: prefs.language()?.state(),
        background: prefs.background()?.active(),
        storage: prefs.storage().borrow().backend_name(),
    })
}

pub fn run<D: DocumentSurface>(prefs: &Preferences<D>, compact: bool) -> Result<()> {
    print_json(&collect(prefs)?, compact)
}

#[cfg(test)]
mod tests {
    use super::*;
    use glaze_prefs::{shared, Document, MemoryStore, PreferencesConfig};
    use serde_json::json;

    #[test]
    fn status_reflects_defaults() {
        let prefs = Preferences::mount(
            shared(MemoryStore::new()),
            PreferencesConfig::default(),
            Document::new(),
        );
        let status = serde_json::to_value(collect(&prefs).unwrap()).unwrap();

        assert_eq!(status["theme"], json!({"isDark": false}));
        assert_eq!(
            status["language"],
            json!({"languageCode": "en", "direction": "ltr"})
        );
        assert_eq!(status["background"]["mode"], "animated-gradient");
        assert_eq!(status["background"]["presetKey"], "aurora");
        assert_eq!(status["storage"], "memory");
    }

    #[test]
    fn status_fails_when_unmounted() {
        let mut prefs = Preferences::mount(
            shared(MemoryStore::new()),
            PreferencesConfig::default(),
            Document::new(),
        );
        prefs.unmount();
        assert!(collect(&prefs).is_err());
    }
}
