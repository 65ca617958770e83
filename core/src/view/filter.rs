use chrono::NaiveDate;

use crate::model::Task;
use crate::schedule;

/// The six board views. They reinforce each other but are not mutually
/// exclusive over the underlying data: the same task can show up under
/// several of them.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Category {
    #[default]
    All,
    Overdue,
    Today,
    Favorites,
    Repeating,
    Archive,
}

impl Category {
    pub const ALL: [Category; 6] = [
        Category::All,
        Category::Overdue,
        Category::Today,
        Category::Favorites,
        Category::Repeating,
        Category::Archive,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Category::All => "All",
            Category::Overdue => "Overdue",
            Category::Today => "Today",
            Category::Favorites => "Favorites",
            Category::Repeating => "Repeating",
            Category::Archive => "Archive",
        }
    }

    /// The per-category membership predicate. The counters reuse exactly
    /// this function, so the two can never disagree.
    ///
    /// Archived tasks are invisible everywhere except the Archive view. A
    /// task with both a due date and active repeat days matches Today on
    /// either ground; neither takes precedence.
    pub fn matches(&self, task: &Task, today: NaiveDate) -> bool {
        match self {
            Category::All => !task.is_archived,
            Category::Overdue => {
                !task.is_archived && schedule::is_expired(task.due_date, today)
            }
            Category::Today => {
                !task.is_archived
                    && (schedule::is_expiring_today(task.due_date, today)
                        || schedule::active_today(&task.repeating_days, today))
            }
            Category::Favorites => !task.is_archived && task.is_favorite,
            Category::Repeating => !task.is_archived && task.repeating_days.is_repeating(),
            Category::Archive => task.is_archived,
        }
    }
}

impl std::str::FromStr for Category {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "all" => Ok(Category::All),
            "overdue" => Ok(Category::Overdue),
            "today" => Ok(Category::Today),
            "favorites" => Ok(Category::Favorites),
            "repeating" => Ok(Category::Repeating),
            "archive" => Ok(Category::Archive),
            other => Err(anyhow::anyhow!("Unknown category: '{}'", other)),
        }
    }
}

/// Selects the visible subset for a category without reordering anything.
/// `None` (no selection) passes the list through unchanged.
pub fn filter_tasks(tasks: &[Task], category: Option<Category>, today: NaiveDate) -> Vec<Task> {
    match category {
        None => tasks.to_vec(),
        Some(c) => tasks
            .iter()
            .filter(|t| c.matches(t, today))
            .cloned()
            .collect(),
    }
}

/// The sort-then-filter pipeline the UI renders: the snapshot is ordered
/// first, then narrowed, so filtering never reorders.
pub fn derive_view(
    tasks: &[Task],
    category: Option<Category>,
    order: super::sort::SortOrder,
    today: NaiveDate,
) -> Vec<Task> {
    let mut sorted = tasks.to_vec();
    super::sort::sort_tasks(&mut sorted, order);
    filter_tasks(&sorted, category, today)
}
