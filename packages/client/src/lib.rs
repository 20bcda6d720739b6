//! Terminal client library for the fsagent file system agent.
//!
//! Messages typed by the user are posted to the backend's `/api/reply`
//! endpoint and the replies are rendered by the layout the route table
//! resolves for the start location.

pub mod domain;
pub mod infrastructure;
pub mod ui;
pub mod usecase;

use std::sync::Arc;

use infrastructure::HttpMessageSender;
use ui::{Args, ClientConfig, ClientError, create_router};

/// Build the router and HTTP sender from the arguments and run the client.
pub async fn run_client(args: Args) -> Result<(), ClientError> {
    let config = ClientConfig::from_args(&args)?;
    let router = create_router(config.base_url.clone());
    let sender = Arc::new(HttpMessageSender::new(&config.server_url)?);

    ui::run(config, router, sender).await
}
