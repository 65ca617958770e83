pub mod counts;
pub mod filter;
pub mod sort;

pub use counts::CategoryCounts;
pub use filter::{derive_view, filter_tasks, Category};
pub use sort::{compare_due, sort_tasks, SortOrder};
