#![allow(clippy::must_use_candidate)]

mod env;
pub mod health;
mod loader;
pub mod logging;
pub mod server;
pub mod users;

use serde::Deserialize;

pub use health::*;
pub use logging::*;
pub use server::*;
pub use users::*;

/// Top-level users service configuration
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Server configuration
    #[serde(default)]
    pub server: ServerConfig,
    /// User-creation rules
    #[serde(default)]
    pub users: UsersConfig,
    /// Log output configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}
