use std::collections::HashMap;
use std::sync::RwLock;

use paydesk_application::PermissionStore;
use paydesk_core::{AppError, AppResult};

/// In-memory key/value storage adapter for stored permissions.
#[derive(Debug, Default)]
pub struct InMemoryPermissionStore {
    items: RwLock<HashMap<String, String>>,
}

impl InMemoryPermissionStore {
    /// Creates an empty in-memory store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Stores a raw value under a key, replacing any previous value.
    pub fn set_item(&self, key: impl Into<String>, value: impl Into<String>) -> AppResult<()> {
        self.items
            .write()
            .map_err(|_| AppError::Internal("permission store lock poisoned".to_owned()))?
            .insert(key.into(), value.into());
        Ok(())
    }

    /// Removes the value under a key. Returns whether a value was present.
    pub fn remove_item(&self, key: &str) -> AppResult<bool> {
        Ok(self
            .items
            .write()
            .map_err(|_| AppError::Internal("permission store lock poisoned".to_owned()))?
            .remove(key)
            .is_some())
    }

    /// Drops every stored value, as on logout.
    pub fn clear(&self) -> AppResult<()> {
        self.items
            .write()
            .map_err(|_| AppError::Internal("permission store lock poisoned".to_owned()))?
            .clear();
        Ok(())
    }
}

impl PermissionStore for InMemoryPermissionStore {
    fn read_item(&self, key: &str) -> AppResult<Option<String>> {
        let items = self
            .items
            .read()
            .map_err(|_| AppError::Internal("permission store lock poisoned".to_owned()))?;

        Ok(items.get(key).cloned())
    }
}
