use std::collections::BTreeMap;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use serde_json::{Map, Value};
use tracing::{debug, warn};

use crate::{KeyValueStore, Result};

/// Storage kept in a single JSON object file (`{"key": "value", ...}`).
///
/// The whole map is held in memory and rewritten on every mutation via a
/// temporary file followed by a rename, so readers never see a torn file.
#[derive(Debug)]
pub struct JsonFileStore {
    path: PathBuf,
    entries: BTreeMap<String, String>,
}

impl JsonFileStore {
    /// Opens the store at `path`. A missing file is an empty store; it is
    /// only created on the first write.
    ///
    /// A file that is not a JSON object is moved aside to `<path>.bak` and
    /// the store opens empty. Entries whose values are not strings are
    /// dropped.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        let entries = match fs::read_to_string(&path) {
            Ok(content) if content.trim().is_empty() => BTreeMap::new(),
            Ok(content) => match serde_json::from_str::<Map<String, Value>>(&content) {
                Ok(map) => string_entries(map),
                Err(e) => {
                    let backup = backup_path(&path);
                    warn!(
                        path = %path.display(),
                        backup = %backup.display(),
                        error = %e,
                        "malformed storage file, starting empty"
                    );
                    fs::rename(&path, &backup)?;
                    BTreeMap::new()
                }
            },
            Err(e) if e.kind() == ErrorKind::NotFound => BTreeMap::new(),
            Err(e) => return Err(e.into()),
        };

        debug!(path = %path.display(), entries = entries.len(), "opened json storage");
        Ok(Self { path, entries })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn flush(&self) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }

        let content = serde_json::to_string_pretty(&self.entries)?;
        let tmp = self.path.with_extension("json.tmp");
        fs::write(&tmp, content)?;
        fs::rename(&tmp, &self.path)?;
        Ok(())
    }
}

fn string_entries(map: Map<String, Value>) -> BTreeMap<String, String> {
    map.into_iter()
        .filter_map(|(key, value)| match value {
            Value::String(s) => Some((key, s)),
            other => {
                warn!(key = %key, value = %other, "dropping non-string storage entry");
                None
            }
        })
        .collect()
}

fn backup_path(path: &Path) -> PathBuf {
    let mut name = path.as_os_str().to_os_string();
    name.push(".bak");
    PathBuf::from(name)
}

impl KeyValueStore for JsonFileStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.entries.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        self.entries.insert(key.to_string(), value.to_string());
        self.flush()
    }

    fn remove(&mut self, key: &str) -> Result<()> {
        if self.entries.remove(key).is_some() {
            self.flush()?;
        }
        Ok(())
    }

    fn keys(&self) -> Result<Vec<String>> {
        Ok(self.entries.keys().cloned().collect())
    }

    fn clear(&mut self) -> Result<()> {
        self.entries.clear();
        self.flush()
    }

    fn backend_name(&self) -> &'static str {
        "json"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn missing_file_opens_empty() {
        let dir = tempdir().unwrap();
        let store = JsonFileStore::open(dir.path().join("prefs.json")).unwrap();
        assert!(store.keys().unwrap().is_empty());
        assert!(!store.path().exists());
    }

    #[test]
    fn writes_survive_reopen() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("nested").join("prefs.json");

        let mut store = JsonFileStore::open(&path).unwrap();
        store.set("language", "ar").unwrap();
        store.set("theme", "dark").unwrap();
        drop(store);

        let reopened = JsonFileStore::open(&path).unwrap();
        assert_eq!(reopened.get("language").unwrap().as_deref(), Some("ar"));
        assert_eq!(reopened.get("theme").unwrap().as_deref(), Some("dark"));
    }

    #[test]
    fn remove_is_persisted() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("prefs.json");

        let mut store = JsonFileStore::open(&path).unwrap();
        store.set("backgroundSettings", "{}").unwrap();
        store.remove("backgroundSettings").unwrap();

        let reopened = JsonFileStore::open(&path).unwrap();
        assert_eq!(reopened.get("backgroundSettings").unwrap(), None);
    }

    #[test]
    fn malformed_file_is_moved_aside() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("prefs.json");
        fs::write(&path, "not json").unwrap();

        let mut store = JsonFileStore::open(&path).unwrap();
        assert!(store.keys().unwrap().is_empty());
        assert!(!path.exists());
        assert_eq!(
            fs::read_to_string(dir.path().join("prefs.json.bak")).unwrap(),
            "not json"
        );

        store.set("theme", "dark").unwrap();
        let reopened = JsonFileStore::open(&path).unwrap();
        assert_eq!(reopened.get("theme").unwrap().as_deref(), Some("dark"));
    }

    #[test]
    fn non_string_values_are_dropped() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("prefs.json");
        fs::write(&path, r#"{"language":"ar","speed":5,"flags":[true]}"#).unwrap();

        let store = JsonFileStore::open(&path).unwrap();
        assert_eq!(store.keys().unwrap(), vec!["language"]);
        assert_eq!(store.get("language").unwrap().as_deref(), Some("ar"));
        assert!(path.exists());
    }

    #[test]
    fn empty_file_opens_empty() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("prefs.json");
        fs::write(&path, "  \n").unwrap();

        let store = JsonFileStore::open(&path).unwrap();
        assert!(store.keys().unwrap().is_empty());
    }
}
