pub mod config;
pub mod details;
pub mod error;
pub mod modal;
pub mod render;

// Browser-only modules
#[cfg(feature = "csr")]
pub mod admin;
#[cfg(feature = "csr")]
pub mod logging;

pub use error::{ConfigError, DetailError, DetailResult};
