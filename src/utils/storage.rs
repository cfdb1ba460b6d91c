use crate::error::PreferenceError;

// The store is injected as an Option because the runtime may not
// provide one at all (desktop builds, storage disabled).
pub trait PreferenceStore {
    fn get(&self, key: &str) -> Result<Option<String>, PreferenceError>;
    fn set(&self, key: &str, value: &str) -> Result<(), PreferenceError>;
}

pub struct BrowserStore {
    #[cfg(target_arch = "wasm32")]
    storage: web_sys::Storage,
}

impl BrowserStore {
    #[cfg(target_arch = "wasm32")]
    pub fn open() -> Option<Self> {
        let storage = web_sys::window()?.local_storage().ok().flatten()?;
        Some(Self { storage })
    }

    #[cfg(not(target_arch = "wasm32"))]
    pub fn open() -> Option<Self> {
        None
    }
}

#[cfg(target_arch = "wasm32")]
impl PreferenceStore for BrowserStore {
    fn get(&self, key: &str) -> Result<Option<String>, PreferenceError> {
        self.storage.get_item(key).map_err(PreferenceError::from)
    }

    fn set(&self, key: &str, value: &str) -> Result<(), PreferenceError> {
        self.storage.set_item(key, value).map_err(PreferenceError::from)
    }
}

#[cfg(not(target_arch = "wasm32"))]
impl PreferenceStore for BrowserStore {
    fn get(&self, _key: &str) -> Result<Option<String>, PreferenceError> {
        Err(PreferenceError::Unavailable)
    }

    fn set(&self, _key: &str, _value: &str) -> Result<(), PreferenceError> {
        Err(PreferenceError::Unavailable)
    }
}
