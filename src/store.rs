//! Global Application State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity. The `tasks`
//! field is a render copy of the replica cache and is only written by the
//! replica subscription set up in `App`.

use leptos::prelude::*;
use reactive_stores::Store;
use list_replica::{ReplicaCache, Task, TaskId};

/// Global application state with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct AppState {
    /// Snapshot of the replica cache
    pub tasks: Vec<Task>,
    /// Whether the initial bulk read has finished (successfully or not)
    pub loaded: bool,
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }
}

/// Type alias for the store
pub type AppStore = Store<AppState>;

/// Get the app store from context
pub fn use_app_store() -> AppStore {
    expect_context::<AppStore>()
}

// ========================
// Store Helper Functions
// ========================

/// Mirror the replica cache into the store
pub fn store_sync_tasks(store: &AppStore, cache: &ReplicaCache) {
    store.tasks().set(cache.snapshot());
}

/// Look up one task by ID, tracking the task list
pub fn store_find_task(store: &AppStore, task_id: &TaskId) -> Option<Task> {
    store.tasks().with(|tasks| tasks.iter().find(|task| &task.id == task_id).cloned())
}
