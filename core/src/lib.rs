pub mod input;
pub mod model;
pub mod repository;
pub mod schedule;
pub mod service;
pub mod time;
pub mod view;

pub use input::{expand_key, parse_args, ParsedInput};
pub use model::recurrence::{RecurrenceSet, WEEK};
pub use model::task::{Task, TaskColor, TaskPatch, DESCRIPTION_MAX};
pub use repository::{Ack, HttpTaskStore, TaskStore, DEFAULT_BASE_URL};
pub use schedule::{active_today, is_expired, is_expiring_today};
pub use service::board_service::BoardService;
pub use service::draft::{DraftError, TaskDraft, DRAFT_KEYS};
pub use time::{format_date_info, format_due_date, parse_human_date, parse_weekday, today};
pub use view::counts::CategoryCounts;
pub use view::filter::{derive_view, filter_tasks, Category};
pub use view::sort::{compare_due, sort_tasks, SortOrder};
