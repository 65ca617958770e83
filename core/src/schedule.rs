//! Temporal classification of a single task, relative to a caller-supplied
//! "today". All comparisons are at day granularity.

use chrono::{Datelike, NaiveDate};

use crate::model::RecurrenceSet;

/// True iff the due date exists and lies strictly before today.
/// A task due today is not expired; an undated task never is.
pub fn is_expired(due_date: Option<NaiveDate>, today: NaiveDate) -> bool {
    due_date.is_some_and(|due| due < today)
}

/// True iff the due date exists and falls on today.
pub fn is_expiring_today(due_date: Option<NaiveDate>, today: NaiveDate) -> bool {
    due_date.is_some_and(|due| due == today)
}

/// True iff the repeat pattern marks today's weekday as active.
pub fn active_today(days: &RecurrenceSet, today: NaiveDate) -> bool {
    days.contains(today.weekday())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Weekday;

    // 2024-05-06 is a Monday.
    fn monday() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 5, 6).unwrap()
    }

    #[test]
    fn undated_is_never_expired_nor_due() {
        assert!(!is_expired(None, monday()));
        assert!(!is_expiring_today(None, monday()));
    }

    #[test]
    fn due_today_is_not_expired() {
        let today = monday();
        assert!(!is_expired(Some(today), today));
        assert!(is_expiring_today(Some(today), today));
    }

    #[test]
    fn any_earlier_day_is_expired() {
        let today = monday();
        assert!(is_expired(Some(today.pred_opt().unwrap()), today));
        assert!(is_expired(
            Some(NaiveDate::from_ymd_opt(2020, 1, 1).unwrap()),
            today
        ));
        assert!(!is_expired(Some(today.succ_opt().unwrap()), today));
    }

    #[test]
    fn recurrence_matches_only_todays_weekday() {
        let mut days = RecurrenceSet::none();
        days.set(Weekday::Mon, true);

        assert!(active_today(&days, monday()));
        // Tuesday the 7th
        assert!(!active_today(&days, monday().succ_opt().unwrap()));
        // empty pattern matches nothing
        assert!(!active_today(&RecurrenceSet::none(), monday()));
    }
}
