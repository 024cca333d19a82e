//! Test server wrapper that starts the users service on a random port

use std::net::SocketAddr;
use std::sync::Arc;

use tokio_util::sync::CancellationToken;
use users_config::Config;
use users_manager::{PasswordPolicy, UserManager, UserStore};
use users_server::Server;

/// A running test server instance
pub struct TestServer {
    addr: SocketAddr,
    shutdown: CancellationToken,
    client: reqwest::Client,
}

impl TestServer {
    /// Start a test server backed by a fresh in-memory store
    pub async fn start(config: Config) -> anyhow::Result<Self> {
        Self::spawn(Server::new(&config)?).await
    }

    /// Start a test server backed by the given store
    pub async fn start_with_store(config: Config, store: Arc<dyn UserStore>) -> anyhow::Result<Self> {
        let manager = UserManager::new(store, PasswordPolicy::from_config(&config.users));
        Self::spawn(Server::with_manager(&config, Arc::new(manager))?).await
    }

    async fn spawn(server: Server) -> anyhow::Result<Self> {
        let shutdown = CancellationToken::new();
        let shutdown_clone = shutdown.clone();

        // Bind the listener here so we know the actual port
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await?;
        let addr = listener.local_addr()?;

        tokio::spawn(async move {
            axum::serve(listener, server.into_router())
                .with_graceful_shutdown(async move {
                    shutdown_clone.cancelled().await;
                })
                .await
                .ok();
        });

        let client = reqwest::Client::new();

        Ok(Self { addr, shutdown, client })
    }

    /// Base URL of the running test server
    pub fn url(&self, path: &str) -> String {
        format!("http://{}{path}", self.addr)
    }

    /// Get a reference to the HTTP client
    pub fn client(&self) -> &reqwest::Client {
        &self.client
    }

    /// POST a user-creation payload
    pub async fn create_user(&self, body: &serde_json::Value) -> reqwest::Result<reqwest::Response> {
        self.client.post(self.url("/v1/users")).json(body).send().await
    }
}

impl Drop for TestServer {
    fn drop(&mut self) {
        self.shutdown.cancel();
    }
}
