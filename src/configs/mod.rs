mod site_meta;

pub use site_meta::SiteMeta;
