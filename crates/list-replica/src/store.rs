//! Replica Store
//!
//! Owns the replica cache and is the only way to change it. Every mutation
//! issues one request and, once the server confirms, reconciles the returned
//! task into the cache and notifies subscribers. Nothing is applied
//! optimistically.

use std::cell::RefCell;
use std::rc::Rc;

use reqwest::StatusCode;

use crate::api::{ApiResult, Operation, TaskApi};
use crate::cache::ReplicaCache;
use crate::error::ClientResult;
use crate::models::{Item, NewItem, NewTask, Task, TaskId, TaskUpdate};

type Subscriber = Box<dyn Fn(&ReplicaCache)>;

/// Cloneable handle to the replica; clones share one cache.
///
/// Operations return the HTTP status unmodified so callers can branch on it
/// (e.g. 409 from update-task). `Err` means no usable response arrived and
/// the cache was left alone.
pub struct ReplicaStore<A> {
    api: Rc<A>,
    cache: Rc<RefCell<ReplicaCache>>,
    subscribers: Rc<RefCell<Vec<Subscriber>>>,
}

impl<A> Clone for ReplicaStore<A> {
    fn clone(&self) -> Self {
        Self {
            api: Rc::clone(&self.api),
            cache: Rc::clone(&self.cache),
            subscribers: Rc::clone(&self.subscribers),
        }
    }
}

impl<A: TaskApi> ReplicaStore<A> {
    pub fn new(api: A) -> Self {
        Self {
            api: Rc::new(api),
            cache: Rc::new(RefCell::new(ReplicaCache::new())),
            subscribers: Rc::new(RefCell::new(Vec::new())),
        }
    }

    pub fn api(&self) -> &A {
        &self.api
    }

    /// Call `f` with the cache after every applied change
    pub fn subscribe(&self, f: impl Fn(&ReplicaCache) + 'static) {
        self.subscribers.borrow_mut().push(Box::new(f));
    }

    // ========================
    // Reads
    // ========================

    pub fn snapshot(&self) -> Vec<Task> {
        self.cache.borrow().snapshot()
    }

    pub fn get(&self, task_id: &TaskId) -> Option<Task> {
        self.cache.borrow().get(task_id).cloned()
    }

    pub fn len(&self) -> usize {
        self.cache.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.cache.borrow().is_empty()
    }

    // ========================
    // Mutations
    // ========================

    /// Seed the cache with one bulk read. A failure leaves it as it was.
    pub async fn initialize(&self) -> ClientResult<StatusCode> {
        let op = Operation::Initialize;
        let response = self
            .api
            .find_all()
            .await
            .inspect_err(|e| log::warn!("{op} failed: {e}"))?;
        let status = response.status;

        match response.into_confirmed(op.success_status()) {
            Some(tasks) => {
                log::info!("loaded {} tasks", tasks.len());
                self.apply(|cache| cache.replace_all(tasks));
            }
            None => log::warn!("{op} returned {status}"),
        }
        Ok(status)
    }

    pub async fn create_task(&self, task: &NewTask) -> ClientResult<StatusCode> {
        let result = self.api.save_task(task).await;
        self.confirm(result, Operation::CreateTask)
    }

    pub async fn update_task(
        &self,
        task_id: &TaskId,
        update: &TaskUpdate,
    ) -> ClientResult<StatusCode> {
        let result = self.api.update_task(task_id, update).await;
        self.confirm(result, Operation::UpdateTask)
    }

    pub async fn delete_task(&self, task_id: &TaskId) -> ClientResult<StatusCode> {
        let op = Operation::DeleteTask;
        let response = self
            .api
            .delete_task(task_id)
            .await
            .inspect_err(|e| log::warn!("{op} {task_id} failed: {e}"))?;
        let status = response.status;

        if response.into_confirmed(op.success_status()).is_some() {
            self.apply(|cache| {
                cache.remove(task_id);
            });
        } else {
            log::debug!("{op} {task_id} returned {status}");
        }
        Ok(status)
    }

    pub async fn add_item(&self, task_id: &TaskId, item: &NewItem) -> ClientResult<StatusCode> {
        let result = self.api.add_item(task_id, item).await;
        self.confirm(result, Operation::AddItem)
    }

    pub async fn update_item(&self, task_id: &TaskId, item: &Item) -> ClientResult<StatusCode> {
        let result = self.api.update_item(task_id, item).await;
        self.confirm(result, Operation::UpdateItem)
    }

    pub async fn delete_item(&self, task_id: &TaskId, item: &Item) -> ClientResult<StatusCode> {
        let result = self.api.delete_item(task_id, item).await;
        self.confirm(result, Operation::DeleteItem)
    }

    pub async fn clear_items(&self, task_id: &TaskId) -> ClientResult<StatusCode> {
        let result = self.api.clear_items(task_id).await;
        self.confirm(result, Operation::ClearItems)
    }

    /// Reconcile the returned task if the server confirmed `op`
    fn confirm(&self, result: ApiResult<Task>, op: Operation) -> ClientResult<StatusCode> {
        let response = result.inspect_err(|e| log::warn!("{op} failed: {e}"))?;
        let status = response.status;

        match response.into_confirmed(op.success_status()) {
            Some(task) => {
                log::debug!("{op}: reconciling task {}", task.id);
                self.apply(|cache| {
                    cache.reconcile(task);
                });
            }
            None => log::debug!("{op} returned {status}"),
        }
        Ok(status)
    }

    fn apply(&self, f: impl FnOnce(&mut ReplicaCache)) {
        f(&mut self.cache.borrow_mut());
        let cache = self.cache.borrow();
        for subscriber in self.subscribers.borrow().iter() {
            subscriber(&cache);
        }
    }
}
