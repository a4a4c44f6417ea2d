use crate::error::{PrefsError, Result};

/// Lifecycle slot for a store.
///
/// A provider is empty until [`Provider::mount`] and again after
/// [`Provider::unmount`]; reading it while empty is a usage error rather than
/// a silent default.
#[derive(Debug)]
pub struct Provider<S> {
    name: &'static str,
    store: Option<S>,
}

impl<S> Provider<S> {
    /// An empty provider. `name` identifies the store in errors.
    pub const fn new(name: &'static str) -> Self {
        Self { name, store: None }
    }

    pub fn mounted(name: &'static str, store: S) -> Self {
        Self {
            name,
            store: Some(store),
        }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Installs `store`, returning the previously mounted one.
    pub fn mount(&mut self, store: S) -> Option<S> {
        self.store.replace(store)
    }

    pub fn unmount(&mut self) -> Option<S> {
        self.store.take()
    }

    pub fn is_mounted(&self) -> bool {
        self.store.is_some()
    }

    pub fn get(&self) -> Result<&S> {
        self.store
            .as_ref()
            .ok_or(PrefsError::OutsideProvider { store: self.name })
    }

    pub fn get_mut(&mut self) -> Result<&mut S> {
        self.store
            .as_mut()
            .ok_or(PrefsError::OutsideProvider { store: self.name })
    }
}
