//! Read/write helpers shared by the stores.
//!
//! Stores never fail on persistence: a read error counts as "nothing stored"
//! and a write error leaves the in-memory state authoritative. Both are
//! logged.

use glaze_storage::SharedStore;
use tracing::warn;

pub(crate) fn read(storage: &SharedStore, key: &str) -> Option<String> {
    match storage.borrow().get(key) {
        Ok(value) => value,
        Err(e) => {
            warn!(key, error = %e, "failed to read persisted preference");
            None
        }
    }
}

pub(crate) fn write(storage: &SharedStore, key: &str, value: &str) {
    if let Err(e) = storage.borrow_mut().set(key, value) {
        warn!(key, error = %e, "failed to persist preference");
    }
}

pub(crate) fn remove(storage: &SharedStore, key: &str) {
    if let Err(e) = storage.borrow_mut().remove(key) {
        warn!(key, error = %e, "failed to clear persisted preference");
    }
}
