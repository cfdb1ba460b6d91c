use crate::configs::SiteMeta;
use crate::error::PreferenceError;

#[test]
fn default_metadata_names_the_app() {
    let meta = SiteMeta::default();
    assert_eq!(meta.title, "Hotel Management App");
    assert_eq!(meta.description, "Discover the best hotel rooms");
}

#[test]
fn from_env_falls_back_to_defaults() {
    // Scoped to this test binary; the vars are not set by the suite.
    std::env::remove_var("HOTEL_APP_TITLE");
    std::env::remove_var("HOTEL_APP_DESCRIPTION");
    assert_eq!(SiteMeta::from_env(), SiteMeta::default());
}

#[test]
fn preference_error_formats_each_variant() {
    assert_eq!(PreferenceError::Unavailable.to_string(), "Storage Unavailable");
    assert_eq!(
        PreferenceError::Backend("quota".to_string()).to_string(),
        "Storage Error: quota"
    );
    assert_eq!(
        PreferenceError::Malformed("not a boolean".to_string()).to_string(),
        "Malformed Value: not a boolean"
    );
}
