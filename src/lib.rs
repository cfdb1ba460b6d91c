pub mod views;
mod utils;
mod routes;
mod configs;
mod error;
#[cfg(test)]
mod tests;

pub use crate::routes::*;
pub use crate::utils::*;
pub use crate::configs::SiteMeta;
pub use crate::error::PreferenceError;
