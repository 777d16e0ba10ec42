//! Task API Surface
//!
//! The remote REST API as a trait, so the replica store can run against the
//! real HTTP client or an in-memory double.

use std::fmt;

use async_trait::async_trait;
use reqwest::StatusCode;

use crate::error::ClientError;
use crate::models::{Item, NewItem, NewTask, Task, TaskId, TaskUpdate};

/// Status plus body of one API call.
///
/// `body` is only filled when the status is the operation's success status
/// and the payload decoded.
#[derive(Debug, Clone, PartialEq)]
pub struct ApiResponse<T> {
    pub status: StatusCode,
    pub body: Option<T>,
}

impl<T> ApiResponse<T> {
    pub fn confirmed(status: StatusCode, body: T) -> Self {
        Self { status, body: Some(body) }
    }

    pub fn status_only(status: StatusCode) -> Self {
        Self { status, body: None }
    }

    /// The body, if this response carries `expected` status
    pub fn into_confirmed(self, expected: StatusCode) -> Option<T> {
        if self.status == expected {
            self.body
        } else {
            None
        }
    }
}

pub type ApiResult<T> = Result<ApiResponse<T>, ClientError>;

/// One replica store operation, with the status that confirms it
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    Initialize,
    CreateTask,
    UpdateTask,
    DeleteTask,
    AddItem,
    UpdateItem,
    DeleteItem,
    ClearItems,
}

impl Operation {
    /// The only status the cache is reconciled on
    pub fn success_status(self) -> StatusCode {
        match self {
            Operation::CreateTask => StatusCode::CREATED,
            Operation::DeleteTask => StatusCode::NO_CONTENT,
            _ => StatusCode::OK,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Operation::Initialize => "load tasks",
            Operation::CreateTask => "create task",
            Operation::UpdateTask => "update task",
            Operation::DeleteTask => "delete task",
            Operation::AddItem => "add item",
            Operation::UpdateItem => "update item",
            Operation::DeleteItem => "delete item",
            Operation::ClearItems => "clear items",
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// How the UI should react to the status of an operation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusClass {
    /// The operation's own success status; the cache was reconciled
    Success,
    /// 409, returned by update-task for an invalid expiration date
    Conflict,
    /// Anything else, including a 2xx the operation does not expect
    Other,
}

impl StatusClass {
    pub fn of(status: StatusCode, operation: Operation) -> Self {
        if status == operation.success_status() {
            StatusClass::Success
        } else if status == StatusCode::CONFLICT {
            StatusClass::Conflict
        } else {
            StatusClass::Other
        }
    }
}

/// Endpoints of the task API.
///
/// Futures are not `Send`: in the browser they run on the single JS thread.
#[async_trait(?Send)]
pub trait TaskApi {
    /// GET /tasks/find-all, 200
    async fn find_all(&self) -> ApiResult<Vec<Task>>;

    /// POST /tasks/save, 201
    async fn save_task(&self, task: &NewTask) -> ApiResult<Task>;

    /// PUT /tasks/update/{id}, 200 (409 on invalid date)
    async fn update_task(&self, task_id: &TaskId, update: &TaskUpdate) -> ApiResult<Task>;

    /// DELETE /tasks/delete/{id}, 204
    async fn delete_task(&self, task_id: &TaskId) -> ApiResult<()>;

    /// POST /tasks/task/{id}/add-item, 200 with the whole task
    async fn add_item(&self, task_id: &TaskId, item: &NewItem) -> ApiResult<Task>;

    /// PUT /tasks/task/{id}/update-item, 200 with the whole task
    async fn update_item(&self, task_id: &TaskId, item: &Item) -> ApiResult<Task>;

    /// DELETE /tasks/task/{id}/delete-item, 200 with the whole task
    async fn delete_item(&self, task_id: &TaskId, item: &Item) -> ApiResult<Task>;

    /// DELETE /tasks/task/{id}/clear-items, 200 with the emptied task
    async fn clear_items(&self, task_id: &TaskId) -> ApiResult<Task>;
}
