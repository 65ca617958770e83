use chrono::NaiveDate;

use crate::model::Task;
use crate::view::filter::Category;

/// Per-category task counts for the navigation badges. Derived from the same
/// `Category::matches` predicate the filter engine uses, never a parallel
/// re-implementation, so badge and view can't drift apart.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CategoryCounts {
    pub all: usize,
    pub overdue: usize,
    pub today: usize,
    pub favorites: usize,
    pub repeating: usize,
    pub archive: usize,
}

impl CategoryCounts {
    pub fn tally(tasks: &[Task], today: NaiveDate) -> Self {
        let mut counts = Self::default();
        for task in tasks {
            for category in Category::ALL {
                if category.matches(task, today) {
                    *counts.slot_mut(category) += 1;
                }
            }
        }
        counts
    }

    pub fn get(&self, category: Category) -> usize {
        match category {
            Category::All => self.all,
            Category::Overdue => self.overdue,
            Category::Today => self.today,
            Category::Favorites => self.favorites,
            Category::Repeating => self.repeating,
            Category::Archive => self.archive,
        }
    }

    /// A zero count disables the corresponding navigation tab.
    pub fn is_empty(&self, category: Category) -> bool {
        self.get(category) == 0
    }

    fn slot_mut(&mut self, category: Category) -> &mut usize {
        match category {
            Category::All => &mut self.all,
            Category::Overdue => &mut self.overdue,
            Category::Today => &mut self.today,
            Category::Favorites => &mut self.favorites,
            Category::Repeating => &mut self.repeating,
            Category::Archive => &mut self.archive,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::view::filter::filter_tasks;
    use chrono::Weekday;

    // 2024-05-06 is a Monday.
    fn monday() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 5, 6).unwrap()
    }

    fn fixture() -> Vec<Task> {
        let today = monday();

        let mut a = Task::new("overdue favorite".to_string(), None, today);
        a.due_date = Some(today.pred_opt().unwrap());
        a.is_favorite = true;

        let mut b = Task::new("weekly standup".to_string(), None, today);
        b.repeating_days.set(Weekday::Mon, true);
        b.repeating_days.set(Weekday::Thu, true);

        let mut c = Task::new("archived".to_string(), Some(today), today);
        c.is_archived = true;

        vec![a, b, c]
    }

    #[test]
    fn counts_agree_with_the_filter_engine_for_every_category() {
        let tasks = fixture();
        let counts = CategoryCounts::tally(&tasks, monday());
        for category in Category::ALL {
            assert_eq!(
                counts.get(category),
                filter_tasks(&tasks, Some(category), monday()).len(),
                "{:?}",
                category
            );
        }
    }

    #[test]
    fn expected_badge_numbers() {
        let counts = CategoryCounts::tally(&fixture(), monday());
        assert_eq!(counts.all, 2);
        assert_eq!(counts.overdue, 1);
        assert_eq!(counts.today, 1);
        assert_eq!(counts.favorites, 1);
        assert_eq!(counts.repeating, 1);
        assert_eq!(counts.archive, 1);
    }

    #[test]
    fn zero_counts_mark_the_tab_inert() {
        let counts = CategoryCounts::tally(&[], monday());
        for category in Category::ALL {
            assert!(counts.is_empty(category));
        }
    }
}
