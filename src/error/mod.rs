mod storage;

pub use storage::PreferenceError;
