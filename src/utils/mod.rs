mod theme_state;
pub mod storage;

pub use theme_state::{ use_theme, ThemeState, THEME_STORAGE_KEY };
