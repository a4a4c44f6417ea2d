use std::collections::BTreeMap;
use std::io::Write;

use color_eyre::eyre::Result;
use glaze_storage::SharedStore;

use super::print_json;
use crate::cli::StorageCommands;
use crate::config::StorageBackend;
use crate::storage::storage_path;

pub fn run(
    storage: &SharedStore,
    backend: StorageBackend,
    command: Option<StorageCommands>,
    compact: bool,
) -> Result<()> {
    match command.unwrap_or(StorageCommands::Path) {
        StorageCommands::Path => {
            match storage_path(backend) {
                Some(path) => println!("{} ({})", path.display(), backend.label()),
                None => println!("in-memory ({}): nothing is persisted", backend.label()),
            }
            Ok(())
        }
        StorageCommands::Dump => print_json(&entries(storage)?, compact),
        StorageCommands::Clear { yes } => {
            let keys = storage.borrow().keys()?;
            if keys.is_empty() {
                println!("No stored preferences.");
                return Ok(());
            }

            println!("Found {} stored preference(s):", keys.len());
            for key in &keys {
                println!("  - {}", key);
            }

            if !yes {
                print!("\nDelete all stored preferences? [y/N] ");
                std::io::stdout().flush()?;

                let mut input = String::new();
                std::io::stdin().read_line(&mut input)?;

                if !input.trim().eq_ignore_ascii_case("y") {
                    println!("Cancelled.");
                    return Ok(());
                }
            }

            storage.borrow_mut().clear()?;
            println!("Deleted {} stored preference(s).", keys.len());
            Ok(())
        }
    }
}

/// Every persisted entry. Values that hold JSON are shown decoded.
pub fn entries(storage: &SharedStore) -> Result<BTreeMap<String, serde_json::Value>> {
    let store = storage.borrow();
    let mut entries = BTreeMap::new();
    for key in store.keys()? {
        if let Some(raw) = store.get(&key)? {
            let value = match serde_json::from_str::<serde_json::Value>(&raw) {
                Ok(v @ (serde_json::Value::Object(_) | serde_json::Value::Array(_))) => v,
                _ => serde_json::Value::String(raw),
            };
            entries.insert(key, value);
        }
    }
    Ok(entries)
}

#[cfg(test)]
mod tests {
    use super::*;
    use glaze_storage::{shared, MemoryStore};
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn entries_decode_json_values_only() {
        let storage = shared(MemoryStore::with_entries([
            ("language", "ar"),
            ("theme", "dark"),
            ("backgroundSettings", r#"{"mode":"solid"}"#),
            ("counter", "42"),
        ]));

        let entries = entries(&storage).unwrap();
        assert_eq!(
            serde_json::to_value(&entries).unwrap(),
            json!({
                "backgroundSettings": {"mode": "solid"},
                "counter": "42",
                "language": "ar",
                "theme": "dark",
            })
        );
    }
}
