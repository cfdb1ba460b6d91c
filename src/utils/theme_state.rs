use dioxus::prelude::*;
use serde::{ Deserialize, Serialize };

use crate::error::PreferenceError;
use crate::utils::storage::{ BrowserStore, PreferenceStore };

pub const THEME_STORAGE_KEY: &str = "hotel-theme";

// Stored form is a bare JSON boolean, hence the transparent repr.
#[derive(Clone, Copy, Debug, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ThemeState {
    pub is_dark: bool,
}

impl ThemeState {
    /// Seed from a preference store; any failure falls back to light.
    pub fn load<S: PreferenceStore>(store: Option<&S>) -> Self {
        let Some(store) = store else {
            log::debug!("no preference store available, starting with light theme");
            return Self::default();
        };

        let raw = match store.get(THEME_STORAGE_KEY) {
            Ok(Some(raw)) => raw,
            Ok(None) => return Self::default(),
            Err(e) => {
                log::warn!("could not read theme preference: {}", e);
                return Self::default();
            }
        };

        match serde_json::from_str::<Self>(&raw) {
            Ok(state) => state,
            Err(e) => {
                let err = PreferenceError::from(e);
                log::warn!("stored theme preference {:?} rejected ({}), using light theme", raw, err);
                Self::default()
            }
        }
    }

    /// Best-effort write-back; a failing store never disturbs the session.
    pub fn persist<S: PreferenceStore>(self, store: Option<&S>) {
        let Some(store) = store else {
            return;
        };
        let raw = serde_json::to_string(&self).unwrap_or_default();
        if let Err(e) = store.set(THEME_STORAGE_KEY, &raw) {
            log::warn!("could not persist theme preference: {}", e);
        }
    }

    pub fn toggled(self) -> Self {
        Self { is_dark: !self.is_dark }
    }

    pub fn restore() -> Self {
        Self::load(BrowserStore::open().as_ref())
    }

    pub fn save(self) {
        self.persist(BrowserStore::open().as_ref());
    }
}

/// Shared theme signal; without a mounted provider, a detached default.
pub fn use_theme() -> Signal<ThemeState> {
    use_hook(|| {
        try_consume_context::<Signal<ThemeState>>()
            .unwrap_or_else(|| Signal::new(ThemeState::default()))
    })
}
