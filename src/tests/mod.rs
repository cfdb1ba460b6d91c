// Make common test utilities available
pub mod common;
mod site_meta;
