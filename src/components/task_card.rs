//! Task Card Component
//!
//! One task of the list: dates, description, items and the task actions.

use leptos::prelude::*;
use list_replica::views::format_display_date;
use list_replica::{Task, TaskId};

use crate::components::{
    ClearItemsButton, ItemAddDialog, TaskDeleteButton, TaskItems, TaskUpdateDialog,
};
use crate::store::{store_find_task, use_app_store};

/// One field of the task, or its default once the task is gone
fn read<T: Default>(task: Memo<Option<Task>>, f: impl FnOnce(&Task) -> T) -> T {
    task.with(|t| t.as_ref().map(f).unwrap_or_default())
}

#[component]
pub fn TaskCard(task_id: TaskId) -> impl IntoView {
    let store = use_app_store();

    let task = {
        let task_id = task_id.clone();
        Memo::new(move |_| store_find_task(&store, &task_id))
    };

    let title = Signal::derive(move || read(task, |t| t.title.clone()));
    let description = move || read(task, |t| t.description.clone());
    let items = Signal::derive(move || read(task, |t| t.items.clone()));

    let created = move || read(task, |t| format_display_date(t.created_at));
    let updated = move || {
        read(task, |t| t.updated_at.map(format_display_date))
            .unwrap_or_else(|| "-".to_string())
    };
    let expires = move || read(task, |t| format_display_date(t.expires_at));

    view! {
        <article class="task-card">
            <header class="task-card-header">
                <h3 class="task-title">{move || title.get()}</h3>
                <div class="task-dates">
                    <span class="badge">"Created: " {created}</span>
                    <span class="badge">"Updated: " {updated}</span>
                    <span class="badge warning">"Expires: " {expires}</span>
                </div>
            </header>

            <p class="task-description">{description}</p>

            <TaskItems task_id=task_id.clone() items=items />

            <footer class="task-card-footer">
                <ItemAddDialog task_id=task_id.clone() task_title=title />
                <TaskUpdateDialog task=task />
                <TaskDeleteButton task_id=task_id.clone() task_title=title />
                <ClearItemsButton task_id=task_id task_title=title />
            </footer>
        </article>
    }
}
