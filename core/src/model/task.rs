use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::model::recurrence::RecurrenceSet;

/// Hard cap on description length, enforced by the create/edit surface.
pub const DESCRIPTION_MAX: usize = 32;

/// The fixed tag palette. Cosmetic only; nothing in the view logic reads it.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, Default, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum TaskColor {
    #[default]
    Black,
    Gold,
    Blue,
    Green,
    Fuchsia,
}

impl TaskColor {
    pub const ALL: [TaskColor; 5] = [
        TaskColor::Black,
        TaskColor::Gold,
        TaskColor::Blue,
        TaskColor::Green,
        TaskColor::Fuchsia,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            TaskColor::Black => "black",
            TaskColor::Gold => "gold",
            TaskColor::Blue => "blue",
            TaskColor::Green => "green",
            TaskColor::Fuchsia => "fuchsia",
        }
    }
}

impl std::str::FromStr for TaskColor {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "black" => Ok(TaskColor::Black),
            "gold" => Ok(TaskColor::Gold),
            "blue" => Ok(TaskColor::Blue),
            "green" => Ok(TaskColor::Green),
            "fuchsia" => Ok(TaskColor::Fuchsia),
            other => Err(anyhow::anyhow!("Unknown color: '{}'", other)),
        }
    }
}

/// A task as the remote collection stores it. The client holds read-only
/// snapshots; every mutation goes through the store.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    pub id: String,
    pub color: TaskColor,
    pub description: String,
    /// Calendar date, no time component. `None` means undated: a purely
    /// recurring task or an undated one-off.
    pub due_date: Option<NaiveDate>,
    pub created_at: NaiveDate,
    pub updated_at: NaiveDate,
    pub is_archived: bool,
    pub is_favorite: bool,
    pub repeating_days: RecurrenceSet,
}

impl Task {
    /// Builds a fresh task with a client-assigned id. The store acknowledges
    /// the id as-is; it never assigns one itself.
    pub fn new(description: String, due_date: Option<NaiveDate>, today: NaiveDate) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            color: TaskColor::default(),
            description,
            due_date,
            created_at: today,
            updated_at: today,
            is_archived: false,
            is_favorite: false,
            repeating_days: RecurrenceSet::none(),
        }
    }
}

/// Partial-field update payload for `PATCH`. Absent fields are left alone by
/// the store; `due_date` is doubly optional so an explicit `null` (clear the
/// date) is distinguishable from "not patched".
#[derive(Serialize, Debug, Clone, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct TaskPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<TaskColor>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub due_date: Option<Option<NaiveDate>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_archived: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_favorite: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub repeating_days: Option<RecurrenceSet>,
}

impl TaskPatch {
    pub fn archived(flag: bool) -> Self {
        Self {
            is_archived: Some(flag),
            ..Self::default()
        }
    }

    pub fn favorite(flag: bool) -> Self {
        Self {
            is_favorite: Some(flag),
            ..Self::default()
        }
    }
}
