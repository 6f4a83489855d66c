//! Application layer - Use cases and orchestration

pub mod create_block;
pub mod init;
pub mod listing;
pub mod manage_config;
pub mod manage_sessions;

#[cfg(test)]
pub(crate) mod testing;

pub use create_block::{BlockCreated, CreateBlockService};
pub use listing::{load_sessions, load_trainers};
pub use manage_config::ConfigService;
pub use manage_sessions::{SessionDraft, SessionService};
