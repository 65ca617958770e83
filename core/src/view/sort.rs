use std::cmp::Ordering;

use crate::model::Task;

/// Due-date sort direction. An unrecognized direction at any input boundary
/// falls back to the default rather than erroring.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SortOrder {
    #[default]
    Ascending,
    Descending,
}

impl SortOrder {
    pub fn toggled(self) -> Self {
        match self {
            SortOrder::Ascending => SortOrder::Descending,
            SortOrder::Descending => SortOrder::Ascending,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            SortOrder::Ascending => "date up",
            SortOrder::Descending => "date down",
        }
    }
}

/// Compares two tasks by due date. Undated tasks order after any dated task
/// in BOTH directions; two undated tasks compare equal, so a stable sort
/// keeps their fetched relative order.
pub fn compare_due(a: &Task, b: &Task, order: SortOrder) -> Ordering {
    match (a.due_date, b.due_date) {
        (None, None) => Ordering::Equal,
        (None, Some(_)) => Ordering::Greater,
        (Some(_), None) => Ordering::Less,
        (Some(da), Some(db)) => match order {
            SortOrder::Ascending => da.cmp(&db),
            SortOrder::Descending => db.cmp(&da),
        },
    }
}

/// Stable in-place sort by due date.
pub fn sort_tasks(tasks: &mut [Task], order: SortOrder) {
    tasks.sort_by(|a, b| compare_due(a, b, order));
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn task(id: &str, due: Option<(i32, u32, u32)>) -> Task {
        let today = NaiveDate::from_ymd_opt(2024, 5, 6).unwrap();
        let mut t = Task::new(format!("task {}", id), None, today);
        t.id = id.to_string();
        t.due_date = due.map(|(y, m, d)| NaiveDate::from_ymd_opt(y, m, d).unwrap());
        t
    }

    fn ids(tasks: &[Task]) -> Vec<&str> {
        tasks.iter().map(|t| t.id.as_str()).collect()
    }

    #[test]
    fn undated_sort_last_in_both_directions() {
        let mut tasks = vec![
            task("a", None),
            task("b", Some((2024, 5, 1))),
            task("c", None),
        ];
        sort_tasks(&mut tasks, SortOrder::Ascending);
        assert_eq!(ids(&tasks), vec!["b", "a", "c"]);

        let mut tasks = vec![
            task("a", None),
            task("b", Some((2024, 5, 1))),
            task("c", None),
        ];
        sort_tasks(&mut tasks, SortOrder::Descending);
        assert_eq!(ids(&tasks), vec!["b", "a", "c"]);
    }

    #[test]
    fn dated_tasks_follow_the_direction() {
        let mut tasks = vec![task("x", Some((2024, 5, 10))), task("y", Some((2024, 5, 1)))];
        sort_tasks(&mut tasks, SortOrder::Ascending);
        assert_eq!(ids(&tasks), vec!["y", "x"]);

        sort_tasks(&mut tasks, SortOrder::Descending);
        assert_eq!(ids(&tasks), vec!["x", "y"]);
    }

    #[test]
    fn equal_dates_keep_their_relative_order() {
        let mut tasks = vec![
            task("first", Some((2024, 5, 1))),
            task("second", Some((2024, 5, 1))),
            task("third", Some((2024, 4, 30))),
        ];
        sort_tasks(&mut tasks, SortOrder::Ascending);
        assert_eq!(ids(&tasks), vec!["third", "first", "second"]);
    }

    #[test]
    fn default_direction_is_ascending() {
        assert_eq!(SortOrder::default(), SortOrder::Ascending);
        assert_eq!(SortOrder::Ascending.toggled(), SortOrder::Descending);
    }
}
