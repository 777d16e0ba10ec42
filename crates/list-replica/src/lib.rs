//! List Replica
//!
//! Client-side core of the list manager:
//! - models: Task / Item entities and request bodies
//! - api: the REST surface as a trait, plus the reqwest implementation
//! - cache / store: local replica kept in sync with server-confirmed responses
//! - views: pure sorting and filtering over a cache snapshot
//! - validation: form rules checked before any request is issued

pub mod api;
pub mod cache;
pub mod config;
pub mod error;
pub mod http;
pub mod models;
pub mod store;
pub mod validation;
pub mod views;

#[cfg(test)]
mod testing;

pub use api::{ApiResponse, ApiResult, Operation, StatusClass, TaskApi};
pub use cache::ReplicaCache;
pub use config::ApiConfig;
pub use error::ClientError;
pub use http::HttpTaskApi;
pub use models::{Item, ItemId, ItemState, NewItem, NewTask, Priority, Task, TaskId, TaskUpdate};
pub use reqwest::StatusCode;
pub use store::ReplicaStore;
