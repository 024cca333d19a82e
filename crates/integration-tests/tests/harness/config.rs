//! Programmatic configuration builder for integration tests

use std::net::SocketAddr;

use users_config::{Config, HealthConfig, ServerConfig, UsersConfig};

/// Builder for constructing test configurations
pub struct ConfigBuilder {
    config: Config,
}

impl ConfigBuilder {
    /// Create a new builder with minimal defaults
    pub fn new() -> Self {
        Self {
            config: Config {
                server: ServerConfig {
                    listen_address: Some(SocketAddr::from(([127, 0, 0, 1], 0))),
                    health: HealthConfig::default(),
                },
                users: UsersConfig::default(),
                ..Config::default()
            },
        }
    }

    /// Replace the accepted password symbols
    pub fn with_password_symbols(mut self, symbols: &str) -> Self {
        self.config.users.password_symbols = symbols.to_owned();
        self
    }

    /// Serve the health check on another path
    pub fn with_health_path(mut self, path: &str) -> Self {
        self.config.server.health.path = path.to_owned();
        self
    }

    /// Disable health endpoint
    pub fn without_health(mut self) -> Self {
        self.config.server.health.enabled = false;
        self
    }

    /// Build the final config
    pub fn build(self) -> Config {
        self.config
    }
}
