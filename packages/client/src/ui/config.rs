//! Command line arguments and validated client configuration.

use clap::Parser;

use crate::domain::{BaseUrl, ServerUrl, ValueObjectError};

/// Terminal client for the fsagent file system agent
#[derive(Debug, Clone, Parser)]
#[command(name = "fsagent-client", version, about)]
pub struct Args {
    /// Origin of the backend serving /api/reply
    #[arg(long, env = "FSAGENT_SERVER_URL", default_value = "http://127.0.0.1:8000")]
    pub server_url: String,

    /// Base the route history is mounted under
    #[arg(long, env = "FSAGENT_BASE_URL", default_value = "/")]
    pub base_url: String,

    /// Location to open at start-up
    #[arg(long, env = "FSAGENT_LOCATION", default_value = "#/")]
    pub location: String,

    /// Log level for the client's own events (RUST_LOG overrides)
    #[arg(long, default_value = "info")]
    pub log_level: String,
}

/// Validated client configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    pub server_url: ServerUrl,
    pub base_url: BaseUrl,
    pub location: String,
}

impl ClientConfig {
    pub fn from_args(args: &Args) -> Result<Self, ValueObjectError> {
        Ok(Self {
            server_url: ServerUrl::new(&args.server_url)?,
            base_url: BaseUrl::new(args.base_url.clone()),
            location: args.location.clone(),
        })
    }
}
