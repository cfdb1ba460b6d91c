use std::fmt::{Display, Formatter};

// Never escapes to the UI; the theme holder logs and falls back.
#[derive(Debug)]
pub enum PreferenceError {
    Unavailable,
    Backend(String),
    Malformed(String),
}

impl Display for PreferenceError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            PreferenceError::Unavailable => write!(f, "Storage Unavailable"),
            PreferenceError::Backend(msg) => write!(f, "Storage Error: {}", msg),
            PreferenceError::Malformed(msg) => write!(f, "Malformed Value: {}", msg),
        }
    }
}

impl From<serde_json::Error> for PreferenceError {
    fn from(error: serde_json::Error) -> Self {
        PreferenceError::Malformed(error.to_string())
    }
}

#[cfg(target_arch = "wasm32")]
impl From<wasm_bindgen::JsValue> for PreferenceError {
    fn from(value: wasm_bindgen::JsValue) -> Self {
        PreferenceError::Backend(format!("{:?}", value))
    }
}
