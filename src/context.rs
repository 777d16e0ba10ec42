//! Application Context
//!
//! Shared handles provided via Leptos Context API.

use leptos::prelude::*;
use list_replica::{HttpTaskApi, ReplicaStore};

use crate::components::Toaster;

/// The replica store as used by the app
pub type Replica = ReplicaStore<HttpTaskApi>;

/// App-wide handles provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    /// Replica store; not `Send`, so kept in local storage
    replica: StoredValue<Replica, LocalStorage>,
    /// Toast queue
    pub toaster: Toaster,
}

impl AppContext {
    pub fn new(replica: Replica, toaster: Toaster) -> Self {
        Self {
            replica: StoredValue::new_local(replica),
            toaster,
        }
    }

    /// Handle to the replica store (clones share one cache)
    pub fn replica(&self) -> Replica {
        self.replica.get_value()
    }
}
