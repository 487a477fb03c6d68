//! Background jobs.

mod scheduler;
mod sweeper;

pub use scheduler::{Scheduler, SchedulerConfig};
pub use sweeper::register_view_sweeper;
