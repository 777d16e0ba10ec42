//! Test fixtures and an in-memory `TaskApi` with scripted replies.

use std::cell::RefCell;
use std::collections::VecDeque;

use async_trait::async_trait;
use chrono::{DateTime, TimeZone, Utc};
use tokio::sync::oneshot;

use crate::api::{ApiResponse, ApiResult, TaskApi};
use crate::error::ClientError;
use crate::models::{Item, ItemId, ItemState, NewItem, NewTask, Priority, Task, TaskId, TaskUpdate};

pub fn created_on(id: &str, title: &str, created_at: DateTime<Utc>) -> Task {
    Task {
        id: TaskId::new(id),
        title: title.to_string(),
        description: format!("About {title}"),
        created_at,
        updated_at: None,
        expires_at: Utc.with_ymd_and_hms(2030, 1, 1, 0, 0, 0).unwrap(),
        items: Vec::new(),
    }
}

pub fn task(id: &str, title: &str) -> Task {
    created_on(id, title, Utc.with_ymd_and_hms(2024, 1, 2, 12, 0, 0).unwrap())
}

pub fn item(id: &str, title: &str) -> Item {
    Item {
        id: ItemId::new(id),
        title: title.to_string(),
        description: String::new(),
        priority: Priority::Medium,
        state: ItemState::Pending,
    }
}

/// A recorded request
#[derive(Debug, Clone, PartialEq)]
pub enum Call {
    FindAll,
    SaveTask(NewTask),
    UpdateTask(TaskId, TaskUpdate),
    DeleteTask(TaskId),
    AddItem(TaskId, NewItem),
    UpdateItem(TaskId, Item),
    DeleteItem(TaskId, Item),
    ClearItems(TaskId),
}

/// Next scripted answer
pub enum Reply {
    Tasks(ApiResponse<Vec<Task>>),
    Task(ApiResponse<Task>),
    Empty(ApiResponse<()>),
    Fail(ClientError),
    /// Task response that arrives whenever the test sends it
    Deferred(oneshot::Receiver<ApiResponse<Task>>),
}

#[derive(Default)]
pub struct FakeApi {
    replies: RefCell<VecDeque<Reply>>,
    calls: RefCell<Vec<Call>>,
}

impl FakeApi {
    pub fn push(&self, reply: Reply) {
        self.replies.borrow_mut().push_back(reply);
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.borrow().clone()
    }

    fn record(&self, call: Call) -> Reply {
        self.calls.borrow_mut().push(call.clone());
        self.replies
            .borrow_mut()
            .pop_front()
            .unwrap_or_else(|| panic!("no reply scripted for {call:?}"))
    }

    async fn task_reply(&self, call: Call) -> ApiResult<Task> {
        match self.record(call) {
            Reply::Task(response) => Ok(response),
            Reply::Fail(error) => Err(error),
            Reply::Deferred(rx) => Ok(rx.await.expect("deferred reply dropped")),
            _ => panic!("expected a task reply"),
        }
    }
}

#[async_trait(?Send)]
impl TaskApi for FakeApi {
    async fn find_all(&self) -> ApiResult<Vec<Task>> {
        match self.record(Call::FindAll) {
            Reply::Tasks(response) => Ok(response),
            Reply::Fail(error) => Err(error),
            _ => panic!("expected a task list reply"),
        }
    }

    async fn save_task(&self, task: &NewTask) -> ApiResult<Task> {
        self.task_reply(Call::SaveTask(task.clone())).await
    }

    async fn update_task(&self, task_id: &TaskId, update: &TaskUpdate) -> ApiResult<Task> {
        self.task_reply(Call::UpdateTask(task_id.clone(), update.clone())).await
    }

    async fn delete_task(&self, task_id: &TaskId) -> ApiResult<()> {
        match self.record(Call::DeleteTask(task_id.clone())) {
            Reply::Empty(response) => Ok(response),
            Reply::Fail(error) => Err(error),
            _ => panic!("expected an empty reply"),
        }
    }

    async fn add_item(&self, task_id: &TaskId, item: &NewItem) -> ApiResult<Task> {
        self.task_reply(Call::AddItem(task_id.clone(), item.clone())).await
    }

    async fn update_item(&self, task_id: &TaskId, item: &Item) -> ApiResult<Task> {
        self.task_reply(Call::UpdateItem(task_id.clone(), item.clone())).await
    }

    async fn delete_item(&self, task_id: &TaskId, item: &Item) -> ApiResult<Task> {
        self.task_reply(Call::DeleteItem(task_id.clone(), item.clone())).await
    }

    async fn clear_items(&self, task_id: &TaskId) -> ApiResult<Task> {
        self.task_reply(Call::ClearItems(task_id.clone())).await
    }
}
