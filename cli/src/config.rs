use glaze_prefs::{default_languages, Language, PreferencesConfig, DEFAULT_LANGUAGE};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;
use std::process::Command;
use tracing::Level;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Off,
    Error,
    #[default]
    Warn,
    Info,
    Debug,
    Trace,
}

impl LogLevel {
    pub fn from_str(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "off" | "none" => LogLevel::Off,
            "error" => LogLevel::Error,
            "info" => LogLevel::Info,
            "debug" => LogLevel::Debug,
            "trace" => LogLevel::Trace,
            _ => LogLevel::Warn,
        }
    }

    pub fn as_tracing_level(&self) -> Option<Level> {
        match self {
            LogLevel::Off => None,
            LogLevel::Error => Some(Level::ERROR),
            LogLevel::Warn => Some(Level::WARN),
            LogLevel::Info => Some(Level::INFO),
            LogLevel::Debug => Some(Level::DEBUG),
            LogLevel::Trace => Some(Level::TRACE),
        }
    }
}

/// Where preferences are persisted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum StorageBackend {
    #[default]
    Json,
    Sqlite,
    /// Nothing survives the process; useful for trying things out
    Memory,
}

impl StorageBackend {
    pub fn label(&self) -> &'static str {
        match self {
            StorageBackend::Json => "json",
            StorageBackend::Sqlite => "sqlite",
            StorageBackend::Memory => "memory",
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct UserConfig {
    pub log_level: LogLevel,
    pub storage: StorageBackend,
    pub default_language: String,
    /// Use the OS light/dark setting until a theme is chosen explicitly
    pub follow_system_theme: bool,
    pub languages: Vec<Language>,
}

impl Default for UserConfig {
    fn default() -> Self {
        Self {
            log_level: LogLevel::Warn,
            storage: StorageBackend::Json,
            default_language: DEFAULT_LANGUAGE.to_string(),
            follow_system_theme: true,
            languages: default_languages(),
        }
    }
}

pub fn config_dir() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("~/.config"))
        .join("glaze")
}

pub fn data_dir() -> PathBuf {
    dirs::data_dir()
        .unwrap_or_else(|| PathBuf::from("~/.local/share"))
        .join("glaze")
}

pub fn runtime_dir() -> PathBuf {
    dirs::runtime_dir()
        .or_else(dirs::cache_dir)
        .unwrap_or_else(|| PathBuf::from("/tmp"))
        .join("glaze")
}

pub fn config_path() -> PathBuf {
    config_dir().join("config.toml")
}

pub fn ensure_dirs() -> std::io::Result<()> {
    fs::create_dir_all(config_dir())?;
    fs::create_dir_all(data_dir())?;
    Ok(())
}

impl UserConfig {
    pub fn load() -> Self {
        let path = config_path();
        if !path.exists() {
            return Self::default();
        }

        match fs::read_to_string(&path) {
            Ok(content) => Self::parse(&content),
            Err(_) => Self::default(),
        }
    }

    /// Missing keys take their defaults; an unreadable file yields the
    /// default config.
    pub fn parse(content: &str) -> Self {
        toml::from_str(content).unwrap_or_default()
    }

    pub fn save(&self) -> std::io::Result<()> {
        let _ = ensure_dirs();
        let path = config_path();
        let content = toml::to_string_pretty(self)
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidData, e.to_string()))?;
        fs::write(path, content)
    }

    pub fn merge_with_args(&mut self, storage: Option<StorageBackend>) {
        if let Some(backend) = storage {
            self.storage = backend;
        }
    }

    /// Startup inputs for the preference stores.
    pub fn preferences_config(&self) -> PreferencesConfig {
        let system_prefers_dark = if self.follow_system_theme {
            detect_system_dark_mode()
        } else {
            None
        };

        PreferencesConfig {
            languages: self.languages.clone(),
            default_language: self.default_language.clone(),
            system_prefers_dark,
        }
    }
}

#[cfg(target_os = "macos")]
fn detect_system_dark_mode() -> Option<bool> {
    Command::new("defaults")
        .args(["read", "-g", "AppleInterfaceStyle"])
        .output()
        .ok()
        .map(|output| {
            String::from_utf8_lossy(&output.stdout)
                .trim()
                .eq_ignore_ascii_case("dark")
        })
}

#[cfg(not(target_os = "macos"))]
fn detect_system_dark_mode() -> Option<bool> {
    Command::new("gsettings")
        .args(["get", "org.gnome.desktop.interface", "color-scheme"])
        .output()
        .ok()
        .filter(|output| output.status.success())
        .map(|output| String::from_utf8_lossy(&output.stdout).contains("prefer-dark"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn empty_file_gives_defaults() {
        let config = UserConfig::parse("");
        assert_eq!(config.storage, StorageBackend::Json);
        assert_eq!(config.default_language, "en");
        assert_eq!(config.languages, default_languages());
    }

    #[test]
    fn partial_file_merges_over_defaults() {
        let config = UserConfig::parse(
            r#"
log_level = "debug"
storage = "memory"
"#,
        );
        assert_eq!(config.log_level, LogLevel::Debug);
        assert_eq!(config.storage, StorageBackend::Memory);
        assert!(config.follow_system_theme);
        assert_eq!(config.languages.len(), 2);
    }

    #[test]
    fn custom_language_catalog() {
        let config = UserConfig::parse(
            r#"
default_language = "he"
follow_system_theme = false

[[languages]]
code = "en"
name = "English"
native_name = "English"

[[languages]]
code = "he"
name = "Hebrew"
native_name = "עברית"
"#,
        );
        let prefs = config.preferences_config();
        assert_eq!(prefs.default_language, "he");
        assert_eq!(
            prefs.languages.iter().map(|l| l.code.as_str()).collect::<Vec<_>>(),
            vec!["en", "he"]
        );
    }

    #[test]
    fn invalid_toml_gives_defaults() {
        let config = UserConfig::parse("storage = [");
        assert_eq!(config.storage, StorageBackend::Json);
    }

    #[test]
    fn config_round_trips_through_toml() {
        let config = UserConfig::default();
        let text = toml::to_string_pretty(&config).unwrap();
        let parsed = UserConfig::parse(&text);
        assert_eq!(parsed.languages, config.languages);
        assert_eq!(parsed.log_level, config.log_level);
    }

    #[test]
    fn cli_storage_overrides_config() {
        let mut config = UserConfig::default();
        config.merge_with_args(Some(StorageBackend::Memory));
        assert_eq!(config.storage, StorageBackend::Memory);
        config.merge_with_args(None);
        assert_eq!(config.storage, StorageBackend::Memory);
    }

    #[test]
    fn log_level_parsing() {
        assert_eq!(LogLevel::from_str("TRACE"), LogLevel::Trace);
        assert_eq!(LogLevel::from_str("none"), LogLevel::Off);
        assert_eq!(LogLevel::from_str("bogus"), LogLevel::Warn);
        assert_eq!(LogLevel::Off.as_tracing_level(), None);
    }
}
