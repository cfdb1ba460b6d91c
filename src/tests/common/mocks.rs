use std::cell::RefCell;
use std::collections::HashMap;

use crate::error::PreferenceError;
use crate::utils::storage::PreferenceStore;

/// In-memory stand-in for localStorage.
pub struct MemoryStore {
    values: RefCell<HashMap<String, String>>,
}

impl MemoryStore {
    pub fn empty() -> Self {
        Self { values: RefCell::new(HashMap::new()) }
    }

    pub fn with(key: &str, value: &str) -> Self {
        let store = Self::empty();
        store.values.borrow_mut().insert(key.to_string(), value.to_string());
        store
    }

    pub fn raw(&self, key: &str) -> Option<String> {
        self.values.borrow().get(key).cloned()
    }
}

impl PreferenceStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>, PreferenceError> {
        Ok(self.values.borrow().get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<(), PreferenceError> {
        self.values.borrow_mut().insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// Store whose every operation fails, like localStorage with quota
/// exhausted or access denied.
pub struct FailingStore;

impl PreferenceStore for FailingStore {
    fn get(&self, _key: &str) -> Result<Option<String>, PreferenceError> {
        Err(PreferenceError::Backend("access denied".to_string()))
    }

    fn set(&self, _key: &str, _value: &str) -> Result<(), PreferenceError> {
        Err(PreferenceError::Backend("access denied".to_string()))
    }
}
