//! Terminal front end: route table, layout component and the host loop.

pub mod config;
pub mod error;
pub mod layout;
pub mod router;
mod runner;

pub use config::{Args, ClientConfig};
pub use error::ClientError;
pub use layout::{Layout, MainLayout};
pub use router::{HashHistory, Route, Router, create_router};
pub use runner::{LineReader, TerminalReader, run, run_session};
