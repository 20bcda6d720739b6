//! Logger setup shared by fsagent binaries.

use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Build the default filter directive for a crate.
///
/// Cargo binary names use hyphens while tracing targets use the module path,
/// so `fsagent-client` becomes `fsagent_client`.
pub fn default_directive(name: &str, level: &str) -> String {
    format!("{}={}", name.replace('-', "_"), level)
}

/// Initialize the global tracing subscriber.
///
/// `RUST_LOG` takes precedence; otherwise only events from `name` at `level`
/// and above are emitted. Output goes to stderr so it does not interleave with
/// the interactive prompt on stdout.
pub fn setup_logger(name: &str, level: &str) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive(name, level)));

    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr).with_target(true))
        .try_init();
}
