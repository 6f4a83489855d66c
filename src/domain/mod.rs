//! Domain layer - Scheduling rules and data models

pub mod announcement;
pub mod block_spec;
pub mod block_type;
pub mod duration;
pub mod recurrence;
pub mod request;
pub mod role;
pub mod session;
pub mod time_ref;

pub use block_spec::{BlockForm, BlockSpec, TrainerScope, ValidationError};
pub use block_type::BlockType;
pub use duration::{BlockDuration, DURATION_CHOICES};
pub use recurrence::{MonthlyOptions, Recurrence, WeeklyOptions, YearlyOptions};
pub use request::{BlockedTimeRequest, NewSession, RecurringPattern};
pub use role::{Actor, Role, Trainer};
pub use session::{SessionEvent, SessionStatus};
pub use time_ref::DateReference;
