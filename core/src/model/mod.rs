pub mod recurrence;
pub mod task;

pub use recurrence::{RecurrenceSet, WEEK};
pub use task::{Task, TaskColor, TaskPatch, DESCRIPTION_MAX};
