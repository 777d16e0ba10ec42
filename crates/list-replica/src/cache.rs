//! Replica Cache
//!
//! In-memory mirror of the server's tasks, keyed by task id.

use std::collections::BTreeMap;

use crate::models::{Task, TaskId};

/// Tasks as last confirmed by the server, at most one per id.
///
/// Ordered by id so an unsorted listing is stable between renders.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ReplicaCache {
    tasks: BTreeMap<TaskId, Task>,
}

impl ReplicaCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace everything with a bulk-read result.
    /// Later duplicates of an id win.
    pub fn replace_all(&mut self, tasks: impl IntoIterator<Item = Task>) {
        self.tasks = tasks.into_iter().map(|task| (task.id.clone(), task)).collect();
    }

    /// Drop any entry with the same id and store `task` in its place.
    /// Returns the replaced entry.
    pub fn reconcile(&mut self, task: Task) -> Option<Task> {
        self.tasks.insert(task.id.clone(), task)
    }

    pub fn remove(&mut self, task_id: &TaskId) -> Option<Task> {
        self.tasks.remove(task_id)
    }

    pub fn get(&self, task_id: &TaskId) -> Option<&Task> {
        self.tasks.get(task_id)
    }

    pub fn contains(&self, task_id: &TaskId) -> bool {
        self.tasks.contains_key(task_id)
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    /// Owned copy for rendering
    pub fn snapshot(&self) -> Vec<Task> {
        self.tasks.values().cloned().collect()
    }
}
