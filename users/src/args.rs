use std::path::PathBuf;

use clap::Parser;

/// Users microservice
#[derive(Debug, Parser)]
#[command(name = "users", about = "HTTP service for creating users")]
pub struct Args {
    /// Path to configuration file
    #[arg(short, long, default_value = "users.toml", env = "USERS_CONFIG")]
    pub config: PathBuf,

    /// Override the listen address
    #[arg(long, env = "USERS_LISTEN")]
    pub listen: Option<std::net::SocketAddr>,
}
