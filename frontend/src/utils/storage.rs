use std::cell::RefCell;
use std::collections::HashMap;
use web_sys::{Storage, Window};

use crate::error::AppError;

pub fn window() -> Result<Window, AppError> {
    web_sys::window().ok_or_else(|| AppError::storage("No window object"))
}

pub fn local_storage() -> Result<Storage, AppError> {
    window()?
        .local_storage()
        .map_err(|_| AppError::storage("No localStorage"))?
        .ok_or_else(|| AppError::storage("No localStorage"))
}

/// String key/value slot store backing the persisted session.
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Result<Option<String>, AppError>;
    fn set(&self, key: &str, value: &str) -> Result<(), AppError>;
    fn remove(&self, key: &str) -> Result<(), AppError>;
}

#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserStorage;

impl KeyValueStore for BrowserStorage {
    fn get(&self, key: &str) -> Result<Option<String>, AppError> {
        local_storage()?
            .get_item(key)
            .map_err(|_| AppError::storage(format!("Failed to read {key}")))
    }

    fn set(&self, key: &str, value: &str) -> Result<(), AppError> {
        local_storage()?
            .set_item(key, value)
            .map_err(|_| AppError::storage(format!("Failed to write {key}")))
    }

    fn remove(&self, key: &str) -> Result<(), AppError> {
        local_storage()?
            .remove_item(key)
            .map_err(|_| AppError::storage(format!("Failed to remove {key}")))
    }
}

#[derive(Debug, Default)]
pub struct MemoryStorage {
    slots: RefCell<HashMap<String, String>>,
}

impl MemoryStorage {
    pub fn with_entry(key: &str, value: &str) -> Self {
        let storage = Self::default();
        storage
            .slots
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        storage
    }

    pub fn len(&self) -> usize {
        self.slots.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.borrow().is_empty()
    }
}

impl KeyValueStore for MemoryStorage {
    fn get(&self, key: &str) -> Result<Option<String>, AppError> {
        Ok(self.slots.borrow().get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<(), AppError> {
        self.slots
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), AppError> {
        self.slots.borrow_mut().remove(key);
        Ok(())
    }
}
