//! Client-local key-value storage for preference stores.
//!
//! Every backend stores plain string values under string keys, the same
//! contract a browser's `localStorage` offers:
//! - `MemoryStore` - in-process map, used by tests and `--storage memory`
//! - `JsonFileStore` - a single JSON object on disk
//! - `SqliteStore` - a `kv` table in a SQLite database (feature `sqlite`)

mod error;
mod file;
mod memory;
#[cfg(feature = "sqlite")]
mod sqlite;

pub use error::{Result, StorageError};
pub use file::JsonFileStore;
pub use memory::MemoryStore;
#[cfg(feature = "sqlite")]
pub use sqlite::SqliteStore;

use std::cell::RefCell;
use std::rc::Rc;

/// A durable string-to-string map.
///
/// Writers are expected to be serialized by the caller; backends do not
/// coordinate between processes and the last write wins.
pub trait KeyValueStore {
    /// Returns the value stored under `key`, if any.
    fn get(&self, key: &str) -> Result<Option<String>>;

    /// Stores `value` under `key`, replacing any previous value.
    fn set(&mut self, key: &str, value: &str) -> Result<()>;

    /// Removes `key`. Removing a missing key is not an error.
    fn remove(&mut self, key: &str) -> Result<()>;

    /// Returns all stored keys in ascending order.
    fn keys(&self) -> Result<Vec<String>>;

    /// Removes every entry.
    fn clear(&mut self) -> Result<()> {
        for key in self.keys()? {
            self.remove(&key)?;
        }
        Ok(())
    }

    /// Short backend name for logs and diagnostics.
    fn backend_name(&self) -> &'static str;
}

/// Storage handle shared by every store of one preferences context.
pub type SharedStore = Rc<RefCell<dyn KeyValueStore>>;

/// Wraps a backend into a [`SharedStore`].
pub fn shared<S: KeyValueStore + 'static>(store: S) -> SharedStore {
    Rc::new(RefCell::new(store))
}
