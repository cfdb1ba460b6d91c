const DEFAULT_TITLE: &str = "Hotel Management App";
const DEFAULT_DESCRIPTION: &str = "Discover the best hotel rooms";

/// Document metadata rendered into the page head.
#[derive(Clone, Debug, PartialEq)]
pub struct SiteMeta {
    pub title: String,
    pub description: String,
}

impl SiteMeta {
    /// Build the metadata, letting the environment override the defaults.
    pub fn from_env() -> Self {
        let title = std::env::var("HOTEL_APP_TITLE").unwrap_or_else(|_| {
            log::debug!("HOTEL_APP_TITLE not set, using default title");
            DEFAULT_TITLE.to_string()
        });
        let description = std::env::var("HOTEL_APP_DESCRIPTION").unwrap_or_else(|_| {
            log::debug!("HOTEL_APP_DESCRIPTION not set, using default description");
            DEFAULT_DESCRIPTION.to_string()
        });

        Self { title, description }
    }
}

impl Default for SiteMeta {
    fn default() -> Self {
        Self {
            title: DEFAULT_TITLE.to_string(),
            description: DEFAULT_DESCRIPTION.to_string(),
        }
    }
}
