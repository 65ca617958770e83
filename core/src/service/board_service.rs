use anyhow::Result;
use chrono::NaiveDate;
use tracing::debug;

use crate::model::task::{Task, TaskPatch};
use crate::repository::traits::{Ack, TaskStore};
use crate::service::draft::TaskDraft;

/// Mutation and refresh facade over the remote collection. Holds no task
/// state itself; callers keep the snapshot and re-fetch after each change.
pub struct BoardService<S: TaskStore> {
    store: S,
}

impl<S: TaskStore> BoardService<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Full snapshot for one view refresh.
    pub fn fetch(&self) -> Result<Vec<Task>> {
        self.store.list()
    }

    pub fn create_task(&self, draft: &TaskDraft, today: NaiveDate) -> Result<Task> {
        draft.validate()?;
        let mut task = Task::new(draft.description.trim().to_string(), draft.due_date, today);
        task.color = draft.color;
        task.repeating_days = draft.repeating_days;
        let created = self.store.create(&task)?;
        debug!(id = %created.id, "task created");
        Ok(created)
    }

    /// Pushes an edited draft as a partial update. The due date is always
    /// sent (an explicit `null` clears it on the store) and `updatedAt` is
    /// stamped; the archived/favorite flags are left untouched.
    pub fn apply_edit(&self, id: &str, draft: &TaskDraft, today: NaiveDate) -> Result<Task> {
        draft.validate()?;
        let patch = TaskPatch {
            color: Some(draft.color),
            description: Some(draft.description.trim().to_string()),
            due_date: Some(draft.due_date),
            updated_at: Some(today),
            repeating_days: Some(draft.repeating_days),
            ..TaskPatch::default()
        };
        self.store.update(id, &patch)
    }

    /// Single-flag toggle; deliberately does not touch `updatedAt`.
    pub fn toggle_archived(&self, task: &Task) -> Result<Task> {
        self.store
            .update(&task.id, &TaskPatch::archived(!task.is_archived))
    }

    /// Single-flag toggle; deliberately does not touch `updatedAt`.
    pub fn toggle_favorite(&self, task: &Task) -> Result<Task> {
        self.store
            .update(&task.id, &TaskPatch::favorite(!task.is_favorite))
    }

    pub fn delete_task(&self, id: &str) -> Result<Ack> {
        self.store.delete(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::TaskColor;
    use crate::service::draft::DraftError;
    use anyhow::anyhow;
    use chrono::Weekday;
    use std::cell::RefCell;

    // 2024-05-06 is a Monday.
    fn monday() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 5, 6).unwrap()
    }

    #[derive(Default)]
    struct MockStore {
        tasks: RefCell<Vec<Task>>,
        patches: RefCell<Vec<(String, TaskPatch)>>,
    }

    impl TaskStore for MockStore {
        fn list(&self) -> Result<Vec<Task>> {
            Ok(self.tasks.borrow().clone())
        }

        fn create(&self, task: &Task) -> Result<Task> {
            self.tasks.borrow_mut().push(task.clone());
            Ok(task.clone())
        }

        fn update(&self, id: &str, patch: &TaskPatch) -> Result<Task> {
            self.patches.borrow_mut().push((id.to_string(), patch.clone()));
            let mut tasks = self.tasks.borrow_mut();
            let task = tasks
                .iter_mut()
                .find(|t| t.id == id)
                .ok_or_else(|| anyhow!("Task {} not found", id))?;
            if let Some(flag) = patch.is_archived {
                task.is_archived = flag;
            }
            if let Some(flag) = patch.is_favorite {
                task.is_favorite = flag;
            }
            if let Some(color) = patch.color {
                task.color = color;
            }
            if let Some(description) = &patch.description {
                task.description = description.clone();
            }
            if let Some(due) = patch.due_date {
                task.due_date = due;
            }
            if let Some(days) = patch.repeating_days {
                task.repeating_days = days;
            }
            if let Some(stamp) = patch.updated_at {
                task.updated_at = stamp;
            }
            Ok(task.clone())
        }

        fn delete(&self, id: &str) -> Result<Ack> {
            self.tasks.borrow_mut().retain(|t| t.id != id);
            Ok(Ack {
                status: "ok".to_string(),
                message: format!("task {} deleted", id),
            })
        }
    }

    fn dated_draft(description: &str) -> TaskDraft {
        let mut draft = TaskDraft::new();
        draft.description = description.to_string();
        draft.set_due_date(Some(monday()));
        draft
    }

    #[test]
    fn create_carries_the_draft_fields() {
        let service = BoardService::new(MockStore::default());
        let mut draft = TaskDraft::new();
        draft.description = "  Standup  ".to_string();
        draft.color = TaskColor::Blue;
        draft.toggle_day(Weekday::Mon);

        let created = service.create_task(&draft, monday()).unwrap();
        assert_eq!(created.description, "Standup");
        assert_eq!(created.color, TaskColor::Blue);
        assert!(created.repeating_days.mo);
        assert_eq!(created.due_date, None);
        assert_eq!(created.created_at, monday());
    }

    #[test]
    fn invalid_drafts_never_reach_the_store() {
        let service = BoardService::new(MockStore::default());
        let err = service
            .create_task(&TaskDraft::new(), monday())
            .unwrap_err();
        assert_eq!(
            err.downcast::<DraftError>().unwrap(),
            DraftError::EmptyDescription
        );
        assert!(service.fetch().unwrap().is_empty());
    }

    #[test]
    fn flag_toggles_send_single_field_patches() {
        let service = BoardService::new(MockStore::default());
        let task = service
            .create_task(&dated_draft("Water plants"), monday())
            .unwrap();

        let archived = service.toggle_archived(&task).unwrap();
        assert!(archived.is_archived);
        let unfavorited = service.toggle_favorite(&archived).unwrap();
        assert!(unfavorited.is_favorite);

        let patches = service.store.patches.borrow();
        assert_eq!(patches[0].1, TaskPatch::archived(true));
        assert_eq!(patches[1].1, TaskPatch::favorite(true));
        // toggles must not stamp updatedAt
        assert_eq!(patches[0].1.updated_at, None);
    }

    #[test]
    fn edit_stamps_updated_at_and_clears_dates_explicitly() {
        let service = BoardService::new(MockStore::default());
        let task = service
            .create_task(&dated_draft("Water plants"), monday())
            .unwrap();

        let mut draft = TaskDraft::from_task(&task);
        draft.toggle_day(Weekday::Wed);
        let next_day = monday().succ_opt().unwrap();
        let updated = service.apply_edit(&task.id, &draft, next_day).unwrap();

        assert_eq!(updated.due_date, None);
        assert!(updated.repeating_days.we);
        assert_eq!(updated.updated_at, next_day);

        let patches = service.store.patches.borrow();
        // the cleared date goes out as an explicit null, not an omission
        assert_eq!(patches[0].1.due_date, Some(None));
    }

    #[test]
    fn delete_returns_the_stores_acknowledgement() {
        let service = BoardService::new(MockStore::default());
        let task = service
            .create_task(&dated_draft("Water plants"), monday())
            .unwrap();

        let ack = service.delete_task(&task.id).unwrap();
        assert_eq!(ack.status, "ok");
        assert!(service.fetch().unwrap().is_empty());
    }
}
