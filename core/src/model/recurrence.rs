use chrono::Weekday;
use serde::{Deserialize, Serialize};

/// Weekdays in canonical order. Counting and display both rely on this
/// order, so it must never be sorted or reshuffled.
pub const WEEK: [Weekday; 7] = [
    Weekday::Mon,
    Weekday::Tue,
    Weekday::Wed,
    Weekday::Thu,
    Weekday::Fri,
    Weekday::Sat,
    Weekday::Sun,
];

/// Weekly repeat pattern: one flag per weekday.
///
/// The store serializes this as an object with exactly the seven two-letter
/// keys, which the named fields enforce structurally.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RecurrenceSet {
    pub mo: bool,
    pub tu: bool,
    pub we: bool,
    pub th: bool,
    pub fr: bool,
    pub sa: bool,
    pub su: bool,
}

impl RecurrenceSet {
    /// The all-false pattern.
    pub const fn none() -> Self {
        Self {
            mo: false,
            tu: false,
            we: false,
            th: false,
            fr: false,
            sa: false,
            su: false,
        }
    }

    /// True if at least one weekday flag is set.
    pub fn is_repeating(&self) -> bool {
        self.mo || self.tu || self.we || self.th || self.fr || self.sa || self.su
    }

    pub fn contains(&self, day: Weekday) -> bool {
        match day {
            Weekday::Mon => self.mo,
            Weekday::Tue => self.tu,
            Weekday::Wed => self.we,
            Weekday::Thu => self.th,
            Weekday::Fri => self.fr,
            Weekday::Sat => self.sa,
            Weekday::Sun => self.su,
        }
    }

    pub fn set(&mut self, day: Weekday, active: bool) {
        *self.flag_mut(day) = active;
    }

    /// Flips a single weekday, leaving the other six untouched.
    pub fn toggle(&mut self, day: Weekday) {
        let flag = self.flag_mut(day);
        *flag = !*flag;
    }

    /// Set weekdays in Monday..Sunday order.
    pub fn active_days(&self) -> Vec<Weekday> {
        WEEK.iter().copied().filter(|d| self.contains(*d)).collect()
    }

    /// The two-letter key used on the wire and on task cards.
    pub fn day_key(day: Weekday) -> &'static str {
        match day {
            Weekday::Mon => "mo",
            Weekday::Tue => "tu",
            Weekday::Wed => "we",
            Weekday::Thu => "th",
            Weekday::Fri => "fr",
            Weekday::Sat => "sa",
            Weekday::Sun => "su",
        }
    }

    fn flag_mut(&mut self, day: Weekday) -> &mut bool {
        match day {
            Weekday::Mon => &mut self.mo,
            Weekday::Tue => &mut self.tu,
            Weekday::Wed => &mut self.we,
            Weekday::Thu => &mut self.th,
            Weekday::Fri => &mut self.fr,
            Weekday::Sat => &mut self.sa,
            Weekday::Sun => &mut self.su,
        }
    }
}
