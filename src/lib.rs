//! blockout - Training studio schedule tool
//!
//! Blocks out unavailable time (one-off or recurring) and manages training
//! sessions against a scheduling API, queueing requests locally when no API
//! is configured.

pub mod application;
pub mod cli;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod telemetry;

pub use error::BlockoutError;
