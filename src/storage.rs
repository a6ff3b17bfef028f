use dice_core::{KeyValueStore, StoreError};
use web_sys as web;

/// `window.localStorage` as a string key-value store.
pub struct LocalStorage {
    storage: web::Storage,
}

impl LocalStorage {
    /// `None` when storage is disabled (private mode, sandboxed iframe, ...).
    pub fn open() -> Option<Self> {
        let storage = web::window()?.local_storage().ok().flatten()?;
        Some(Self { storage })
    }
}

impl KeyValueStore for LocalStorage {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        self.storage
            .get_item(key)
            .map_err(|e| StoreError::Backend(format!("{:?}", e)))
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StoreError> {
        self.storage
            .set_item(key, value)
            .map_err(|e| StoreError::Backend(format!("{:?}", e)))
    }
}
