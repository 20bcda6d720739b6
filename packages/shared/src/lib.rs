//! Shared utilities for fsagent packages.

pub mod logger;
pub mod time;
