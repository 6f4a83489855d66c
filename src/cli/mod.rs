//! CLI layer - Command-line interface

pub mod commands;
pub mod output;

pub use commands::{BlockArgs, Cli, Commands, SessionCommand};
pub use output::{format_outbox, format_session_list, format_trainer_list};
