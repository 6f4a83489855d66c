//! Infrastructure layer - External I/O and persistence

pub mod config;
pub mod gateway;
pub mod http;
pub mod outbox;
pub mod workspace;

pub use config::Config;
pub use gateway::{connect, ScheduleGateway};
pub use http::HttpGateway;
pub use outbox::{OutboxEntry, OutboxGateway};
pub use workspace::{FileSystemWorkspace, WorkspaceRepository};
