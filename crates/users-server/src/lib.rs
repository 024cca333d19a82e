#![allow(clippy::must_use_candidate, clippy::missing_errors_doc)]

mod error;
mod health;
mod users;

use std::net::SocketAddr;
use std::sync::Arc;

use axum::Router;
use tower_http::{catch_panic::CatchPanicLayer, trace::TraceLayer};
use users_config::Config;
use users_manager::{Manager, MemoryStore, PasswordPolicy, UserManager};

pub use error::ApiError;
pub use users::{CreateUserRequest, CreateUserResponse};

/// Assembled server with all routes and middleware
pub struct Server {
    router: Router,
    listen_address: SocketAddr,
}

impl Server {
    /// Build the server from configuration, backed by an in-memory store
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration fails validation
    pub fn new(config: &Config) -> anyhow::Result<Self> {
        let store = Arc::new(MemoryStore::new());
        let manager = UserManager::new(store, PasswordPolicy::from_config(&config.users));

        Self::with_manager(config, Arc::new(manager))
    }

    /// Build the server around an existing user manager
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration fails validation
    pub fn with_manager(config: &Config, manager: Arc<dyn Manager>) -> anyhow::Result<Self> {
        config.validate()?;

        let listen_address = config
            .server
            .listen_address
            .unwrap_or_else(|| SocketAddr::from(([0, 0, 0, 0], 3000)));

        let mut app = Router::new();

        if config.server.health.enabled {
            app = app.route(&config.server.health.path, axum::routing::get(health::health_handler));
        }

        app = app.merge(users::endpoint_router().with_state(manager));

        // Panic catch-all (innermost, so traces still see the 500)
        app = app.layer(CatchPanicLayer::custom(error::panic_response));

        app = app.layer(TraceLayer::new_for_http());

        tracing::debug!(%listen_address, health = config.server.health.enabled, "server assembled");

        Ok(Self {
            router: app,
            listen_address,
        })
    }

    /// Get the configured listen address
    #[must_use]
    pub const fn listen_address(&self) -> SocketAddr {
        self.listen_address
    }

    /// Consume the server and return the inner router
    ///
    /// Useful for testing when the caller manages the listener
    pub fn into_router(self) -> Router {
        self.router
    }

    /// Start serving requests
    ///
    /// Blocks until the cancellation token is triggered.
    ///
    /// # Errors
    ///
    /// Returns an error if binding the TCP listener or serving fails
    pub async fn serve(self, shutdown: tokio_util::sync::CancellationToken) -> anyhow::Result<()> {
        let listener = tokio::net::TcpListener::bind(self.listen_address).await?;
        let local_addr = listener.local_addr()?;
        tracing::info!(%local_addr, "server listening");

        axum::serve(listener, self.router)
            .with_graceful_shutdown(async move {
                shutdown.cancelled().await;
                tracing::info!("graceful shutdown initiated");
            })
            .await?;

        Ok(())
    }
}
