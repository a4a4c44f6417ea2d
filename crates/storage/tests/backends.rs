use glaze_storage::{shared, JsonFileStore, KeyValueStore, MemoryStore};
use pretty_assertions::assert_eq;

fn exercise(store: &mut dyn KeyValueStore) {
    assert_eq!(store.get("language").unwrap(), None);

    store.set("language", "en").unwrap();
    store.set("theme", "dark").unwrap();
    store
        .set("backgroundSettings", r##"{"mode":"solid","color":"#112233"}"##)
        .unwrap();
    assert_eq!(
        store.keys().unwrap(),
        vec!["backgroundSettings", "language", "theme"]
    );

    store.set("language", "ar").unwrap();
    assert_eq!(store.get("language").unwrap().as_deref(), Some("ar"));
    assert_eq!(
        store.get("backgroundSettings").unwrap().as_deref(),
        Some(r##"{"mode":"solid","color":"#112233"}"##)
    );

    store.remove("backgroundSettings").unwrap();
    store.remove("backgroundSettings").unwrap();
    assert_eq!(store.get("backgroundSettings").unwrap(), None);

    store.clear().unwrap();
    assert!(store.keys().unwrap().is_empty());
}

#[test]
fn memory_backend_contract() {
    exercise(&mut MemoryStore::new());
}

#[test]
fn json_backend_contract() {
    let dir = tempfile::tempdir().unwrap();
    let mut store = JsonFileStore::open(dir.path().join("prefs.json")).unwrap();
    exercise(&mut store);
}

#[cfg(feature = "sqlite")]
#[test]
fn sqlite_backend_contract() {
    let mut store = glaze_storage::SqliteStore::open_in_memory().unwrap();
    exercise(&mut store);
}

#[test]
fn shared_handle_sees_writes_through_clones() {
    let handle = shared(MemoryStore::new());
    let other = handle.clone();

    handle.borrow_mut().set("theme", "dark").unwrap();
    assert_eq!(other.borrow().get("theme").unwrap().as_deref(), Some("dark"));
    assert_eq!(other.borrow().backend_name(), "memory");
}
