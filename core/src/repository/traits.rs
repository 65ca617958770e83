use anyhow::Result;
use serde::Deserialize;

use crate::model::task::{Task, TaskPatch};

/// Generic acknowledgement the store returns for a delete.
#[derive(Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Ack {
    pub status: String,
    pub message: String,
}

/// The remote task collection, seen as an atomic CRUD store. Each call is
/// all-or-nothing; no partial-write state ever leaks back to the caller.
pub trait TaskStore {
    /// Full snapshot for one view refresh.
    fn list(&self) -> Result<Vec<Task>>;
    fn create(&self, task: &Task) -> Result<Task>;
    fn update(&self, id: &str, patch: &TaskPatch) -> Result<Task>;
    fn delete(&self, id: &str) -> Result<Ack>;
}
