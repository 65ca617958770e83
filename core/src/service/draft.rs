use anyhow::Result;
use chrono::{NaiveDate, Weekday};
use thiserror::Error;

use crate::input::{expand_key, parse_args};
use crate::model::{RecurrenceSet, TaskColor, DESCRIPTION_MAX};
use crate::time::{parse_human_date, parse_weekday};

/// Field-level validation failures for the create/edit surface. These are
/// caught before anything reaches the store or the view logic.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DraftError {
    #[error("Description is required")]
    EmptyDescription,
    #[error("Description is limited to {DESCRIPTION_MAX} characters (got {0})")]
    DescriptionTooLong(usize),
    #[error("Pick a due date or at least one repeat day")]
    Unscheduled,
}

/// Keys understood by the one-line add/edit grammar, expandable by prefix
/// (`d:` works for `due:`).
pub const DRAFT_KEYS: [&str; 3] = ["due", "repeat", "color"];

/// In-progress task form. A due date and repeat days are mutually exclusive
/// input modes: committing to one clears the other, exactly like the board's
/// edit dialog. Stored tasks may still carry both; that combination simply
/// can't be produced from here.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TaskDraft {
    pub description: String,
    pub color: TaskColor,
    pub due_date: Option<NaiveDate>,
    pub repeating_days: RecurrenceSet,
}

impl TaskDraft {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seeds an edit form from an existing task.
    pub fn from_task(task: &crate::model::Task) -> Self {
        Self {
            description: task.description.clone(),
            color: task.color,
            due_date: task.due_date,
            repeating_days: task.repeating_days,
        }
    }

    /// Parses a full one-line command into a fresh draft, e.g.
    /// `Water the plants due:2024-05-10 color:green`.
    pub fn from_tokens(args: &[String], today: NaiveDate) -> Result<Self> {
        let mut draft = Self::new();
        draft.apply_tokens(args, today)?;
        Ok(draft)
    }

    /// Applies a one-line command to an existing draft. Only the fields
    /// actually mentioned change; `due:none` / `repeat:none` clear. Tokens
    /// apply in input order, so a line naming both a date and repeat days
    /// ends up with whichever came last, mirroring how the edit dialog's
    /// two modes exclude each other.
    pub fn apply_tokens(&mut self, args: &[String], today: NaiveDate) -> Result<()> {
        let parsed = parse_args(args);
        if !parsed.description.is_empty() {
            self.description = parsed.description;
        }

        for (key, value) in parsed.metadata {
            match expand_key(&key, &DRAFT_KEYS)?.as_str() {
                "color" => self.color = value.parse()?,
                "due" => {
                    if value.eq_ignore_ascii_case("none") {
                        self.set_due_date(None);
                    } else {
                        self.set_due_date(Some(parse_human_date(&value, today)?));
                    }
                }
                "repeat" => {
                    if value.eq_ignore_ascii_case("none") {
                        self.repeating_days = RecurrenceSet::none();
                    } else {
                        let mut days = RecurrenceSet::none();
                        for token in value.split(',').filter(|t| !t.is_empty()) {
                            days.set(parse_weekday(token)?, true);
                        }
                        self.due_date = None;
                        self.repeating_days = days;
                    }
                }
                _ => {}
            }
        }
        Ok(())
    }

    /// Setting a date drops the repeat pattern.
    pub fn set_due_date(&mut self, date: Option<NaiveDate>) {
        if date.is_some() {
            self.repeating_days = RecurrenceSet::none();
        }
        self.due_date = date;
    }

    /// Flipping a repeat day drops the date.
    pub fn toggle_day(&mut self, day: Weekday) {
        self.due_date = None;
        self.repeating_days.toggle(day);
    }

    pub fn validate(&self) -> Result<(), DraftError> {
        let trimmed = self.description.trim();
        if trimmed.is_empty() {
            return Err(DraftError::EmptyDescription);
        }
        let len = trimmed.chars().count();
        if len > DESCRIPTION_MAX {
            return Err(DraftError::DescriptionTooLong(len));
        }
        if self.due_date.is_none() && !self.repeating_days.is_repeating() {
            return Err(DraftError::Unscheduled);
        }
        Ok(())
    }
}
