pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;
pub use config::TomlConfig;

pub use adapters::http::{router, serve, AppState};
pub use crate::core::{proxy::ProxyHandler, upstream::YelpClient};
pub use utils::error::{ProxyError, Result};
