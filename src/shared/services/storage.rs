//! Client-side key/value storage
//!
//! The dashboard only ever reads and drops the access token, but it does so
//! through `KeyValueStore` so page logic can run against `MemoryStore` in tests
//! and on native targets.

use std::ops::Deref;
use std::rc::Rc;

use dashmap::DashMap;

use crate::shared::errors::Result;

pub trait KeyValueStore {
    fn get(&self, key: &str) -> Result<Option<String>>;
    fn set(&self, key: &str, value: &str) -> Result<()>;
    fn remove(&self, key: &str) -> Result<()>;
}

/// Cloneable handle to the active store, shared through Dioxus context
#[derive(Clone)]
pub struct SharedStore(Rc<dyn KeyValueStore>);

impl SharedStore {
    pub fn new(store: impl KeyValueStore + 'static) -> Self {
        Self(Rc::new(store))
    }
}

impl Deref for SharedStore {
    type Target = dyn KeyValueStore;

    fn deref(&self) -> &Self::Target {
        self.0.as_ref()
    }
}

/// In-process store
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: DashMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_entry(self, key: &str, value: &str) -> Self {
        self.entries.insert(key.to_string(), value.to_string());
        self
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.entries.get(key).map(|entry| entry.value().clone()))
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<()> {
        self.entries.remove(key);
        Ok(())
    }
}

/// Browser `localStorage`
#[cfg(target_arch = "wasm32")]
#[derive(Debug, Default, Clone, Copy)]
pub struct BrowserStorage;

#[cfg(target_arch = "wasm32")]
impl BrowserStorage {
    fn storage(&self) -> Result<web_sys::Storage> {
        use crate::shared::errors::AppError;

        let window = web_sys::window()
            .ok_or_else(|| AppError::Storage("window unavailable".to_string()))?;
        window
            .local_storage()
            .map_err(|e| AppError::Storage(format!("{:?}", e)))?
            .ok_or_else(|| AppError::Storage("localStorage unavailable".to_string()))
    }
}

#[cfg(target_arch = "wasm32")]
impl KeyValueStore for BrowserStorage {
    fn get(&self, key: &str) -> Result<Option<String>> {
        use crate::shared::errors::AppError;

        self.storage()?
            .get_item(key)
            .map_err(|e| AppError::Storage(format!("{:?}", e)))
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        use crate::shared::errors::AppError;

        self.storage()?
            .set_item(key, value)
            .map_err(|e| AppError::Storage(format!("{:?}", e)))
    }

    fn remove(&self, key: &str) -> Result<()> {
        use crate::shared::errors::AppError;

        self.storage()?
            .remove_item(key)
            .map_err(|e| AppError::Storage(format!("{:?}", e)))
    }
}

/// Store for the current target: `localStorage` in the browser, memory elsewhere
#[cfg(target_arch = "wasm32")]
pub fn default_store() -> SharedStore {
    SharedStore::new(BrowserStorage)
}

#[cfg(not(target_arch = "wasm32"))]
pub fn default_store() -> SharedStore {
    SharedStore::new(MemoryStore::new())
}
