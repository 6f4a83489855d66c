//! CLI command definitions

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "blockout")]
#[command(about = "Block out unavailable time and manage training sessions", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Initialize a new workspace
    Init {
        /// Directory to initialize (default: current directory)
        #[arg(default_value = ".")]
        path: PathBuf,

        /// Id of the user this workspace acts as
        #[arg(long)]
        user_id: String,

        /// Role of that user (admin, trainer, client)
        #[arg(short, long, default_value = "trainer")]
        role: String,

        /// First name used in announcements
        #[arg(long)]
        first_name: Option<String>,

        /// Base URL of the scheduling API; omit to queue requests locally
        #[arg(long)]
        api_url: Option<String>,
    },

    /// View or modify configuration
    Config {
        /// Config key to get or set
        key: Option<String>,

        /// Value to set (if provided, sets the key)
        value: Option<String>,

        /// List all configuration
        #[arg(short, long)]
        list: bool,
    },

    /// Block out time on the schedule
    Block(BlockArgs),

    /// Remove a blocked slot
    Unblock {
        /// Id of the blocked slot
        id: String,

        /// Remove every occurrence of the recurring series
        #[arg(long)]
        all: bool,
    },

    /// Create, book, cancel or confirm a session
    Session {
        #[command(subcommand)]
        action: SessionCommand,
    },

    /// List sessions and blocked slots
    Sessions,

    /// List trainers
    Trainers,

    /// Show or clear requests queued while offline
    Outbox {
        /// Discard all queued requests
        #[arg(long)]
        clear: bool,
    },
}

#[derive(Args, Debug)]
pub struct BlockArgs {
    /// Start date (today, tomorrow, friday, next monday, 2025-01-17)
    #[arg(short, long, default_value = "today")]
    pub date: String,

    /// Start time (14:30 or 2:30pm)
    #[arg(short, long)]
    pub time: String,

    /// Length of the block (15m, 30m, 45m, 1h, 1.5h, 2h, 3h, 4h, 8h, 24h)
    #[arg(long, default_value = "1h")]
    pub duration: String,

    /// Why the time is unavailable
    #[arg(long, default_value = "")]
    pub reason: String,

    #[arg(long)]
    pub location: Option<String>,

    /// Trainer to block for (admins only; omit for all trainers)
    #[arg(long)]
    pub trainer: Option<String>,

    /// Block type (single, weekly, monthly, yearly)
    #[arg(long = "type", default_value = "single")]
    pub block_type: String,

    /// Weekly: days to block (mon,wed or weekdays)
    #[arg(long)]
    pub days: Option<String>,

    /// Weekly: number of weeks
    #[arg(long)]
    pub weeks: Option<u32>,

    /// Monthly: dates of the month (1,15 or 1-5)
    #[arg(long)]
    pub dates: Option<String>,

    /// Monthly: number of months
    #[arg(long)]
    pub months: Option<u32>,

    /// Yearly: months to include (jan,jul or 1-6)
    #[arg(long)]
    pub months_included: Option<String>,

    /// Print the request instead of sending it
    #[arg(long)]
    pub dry_run: bool,
}

#[derive(Subcommand, Debug)]
pub enum SessionCommand {
    /// Create an available session
    Create {
        #[arg(short, long, default_value = "today")]
        date: String,

        #[arg(short, long)]
        time: String,

        /// Length of the session (e.g. 45m, 1h)
        #[arg(long, default_value = "1h")]
        duration: String,

        #[arg(long, default_value = "Available Session")]
        title: String,

        #[arg(long)]
        location: Option<String>,

        #[arg(long)]
        trainer: Option<String>,

        #[arg(long)]
        notes: Option<String>,
    },

    /// Book a session
    Book { id: String },

    /// Cancel a session
    Cancel { id: String },

    /// Confirm a booked session
    Confirm { id: String },
}
