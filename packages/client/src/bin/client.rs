//! Interactive terminal client for the fsagent backend.
//!
//! Run with:
//! ```not_rust
//! cargo run --bin fsagent-client -- --server-url http://127.0.0.1:8000
//! ```

use clap::Parser;
use fsagent_client::ui::Args;
use fsagent_shared::logger::setup_logger;

#[tokio::main]
async fn main() {
    let args = Args::parse();

    // Initialize tracing
    setup_logger(env!("CARGO_BIN_NAME"), &args.log_level);

    if let Err(e) = fsagent_client::run_client(args).await {
        tracing::error!("Client error: {}", e);
        std::process::exit(1);
    }
}
