use std::time::Duration;

use anyhow::{Context, Result};
use tracing::{debug, warn};

use crate::model::task::{Task, TaskPatch};
use crate::repository::traits::{Ack, TaskStore};

/// Fallback collection endpoint; deployments override it via `--url` or the
/// `TASKBOARD_URL` environment variable.
pub const DEFAULT_BASE_URL: &str = "http://localhost:3000/tasks";

const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// REST client for the remote task collection.
///
/// Blocking on purpose: the whole client is synchronous (the TUI runs a
/// plain poll loop), so the store seam stays a simple function call.
pub struct HttpTaskStore {
    base_url: String,
    client: reqwest::blocking::Client,
}

impl HttpTaskStore {
    pub fn new(base_url: impl Into<String>) -> Result<Self> {
        let client = reqwest::blocking::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .context("Failed to build HTTP client")?;

        Ok(Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            client,
        })
    }

    fn task_url(&self, id: &str) -> String {
        format!("{}/{}", self.base_url, id)
    }
}

impl TaskStore for HttpTaskStore {
    fn list(&self) -> Result<Vec<Task>> {
        debug!(url = %self.base_url, "fetching task collection");
        let tasks: Vec<Task> = self
            .client
            .get(&self.base_url)
            .send()
            .and_then(|r| r.error_for_status())
            .map_err(|err| {
                warn!(%err, "task collection fetch failed");
                err
            })
            .context("Failed to fetch tasks")?
            .json()
            .context("Malformed task collection payload")?;
        debug!(count = tasks.len(), "task collection fetched");
        Ok(tasks)
    }

    fn create(&self, task: &Task) -> Result<Task> {
        debug!(id = %task.id, "creating task");
        let created = self
            .client
            .post(&self.base_url)
            .json(task)
            .send()
            .and_then(|r| r.error_for_status())
            .context("Failed to create task")?
            .json()
            .context("Malformed create response")?;
        Ok(created)
    }

    fn update(&self, id: &str, patch: &TaskPatch) -> Result<Task> {
        debug!(id, "patching task");
        let updated = self
            .client
            .patch(self.task_url(id))
            .json(patch)
            .send()
            .and_then(|r| r.error_for_status())
            .with_context(|| format!("Failed to update task {}", id))?
            .json()
            .context("Malformed update response")?;
        Ok(updated)
    }

    fn delete(&self, id: &str) -> Result<Ack> {
        debug!(id, "deleting task");
        let ack = self
            .client
            .delete(self.task_url(id))
            .send()
            .and_then(|r| r.error_for_status())
            .with_context(|| format!("Failed to delete task {}", id))?
            .json()
            .context("Malformed delete acknowledgement")?;
        Ok(ack)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trailing_slash_is_normalized() {
        let store = HttpTaskStore::new("http://localhost:3000/tasks/").unwrap();
        assert_eq!(store.task_url("abc"), "http://localhost:3000/tasks/abc");
    }

    #[test]
    fn ack_deserializes_the_stores_shape() {
        let ack: Ack =
            serde_json::from_str(r#"{"status":"ok","message":"task deleted"}"#).unwrap();
        assert_eq!(ack.status, "ok");
        assert_eq!(ack.message, "task deleted");
    }
}
