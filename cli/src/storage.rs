use std::path::PathBuf;

use color_eyre::eyre::{Result, WrapErr};
use glaze_storage::{shared, JsonFileStore, MemoryStore, SharedStore};
use tracing::info;

use crate::config::{data_dir, StorageBackend};

const JSON_FILE: &str = "preferences.json";
const SQLITE_FILE: &str = "preferences.db";

/// File backing `backend`, if it has one.
pub fn storage_path(backend: StorageBackend) -> Option<PathBuf> {
    match backend {
        StorageBackend::Json => Some(data_dir().join(JSON_FILE)),
        StorageBackend::Sqlite => Some(data_dir().join(SQLITE_FILE)),
        StorageBackend::Memory => None,
    }
}

pub fn open(backend: StorageBackend) -> Result<SharedStore> {
    let store = match (backend, storage_path(backend)) {
        (StorageBackend::Json, Some(path)) => shared(
            JsonFileStore::open(&path)
                .wrap_err_with(|| format!("Failed to open {}", path.display()))?,
        ),
        (StorageBackend::Sqlite, Some(path)) => open_sqlite(path)?,
        _ => shared(MemoryStore::new()),
    };

    info!(backend = backend.label(), "storage opened");
    Ok(store)
}

#[cfg(feature = "sqlite")]
fn open_sqlite(path: PathBuf) -> Result<SharedStore> {
    let store = glaze_storage::SqliteStore::open(&path)
        .wrap_err_with(|| format!("Failed to open {}", path.display()))?;
    Ok(shared(store))
}

#[cfg(not(feature = "sqlite"))]
fn open_sqlite(_path: PathBuf) -> Result<SharedStore> {
    color_eyre::eyre::bail!("This build of glaze was compiled without SQLite support")
}
