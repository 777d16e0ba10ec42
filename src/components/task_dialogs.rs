//! Task Dialogs
//!
//! Create, edit, delete and clear-items actions on a task. Each one
//! validates first, then goes through the replica store; the dialog only
//! closes once the server has confirmed.

use chrono::Utc;
use leptos::prelude::*;
use leptos::task::spawn_local;
use list_replica::validation::{FormErrors, TaskForm};
use list_replica::{Operation, Task, TaskId};

use crate::components::{ConfirmButton, Modal, TaskFormFields};
use crate::context::AppContext;
use crate::feedback::{report, INVALID_DATE};

/// "New task" button and its dialog
#[component]
pub fn TaskSaveDialog() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");

    let open = RwSignal::new(false);
    let form = RwSignal::new(TaskForm::default());
    let errors = RwSignal::new(FormErrors::default());

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let task = match form.with_untracked(|f| f.validate(Utc::now())) {
            Ok(task) => task,
            Err(invalid) => {
                errors.set(invalid);
                return;
            }
        };
        errors.set(FormErrors::default());

        let replica = ctx.replica();
        spawn_local(async move {
            let result = replica.create_task(&task).await;
            let confirmed = report(
                ctx.toaster,
                Operation::CreateTask,
                result,
                || format!("{} was created", task.title),
                None,
            );
            if confirmed {
                form.set(TaskForm::default());
                open.set(false);
            }
        });
    };

    view! {
        <button type="button" class="btn primary" on:click=move |_| open.set(true)>
            "New task"
        </button>
        <Modal open=open title="New task" description="Create a new task">
            <form class="dialog-form" on:submit=on_submit>
                <TaskFormFields form=form errors=errors />
                <button type="submit" class="btn primary">"Save task"</button>
            </form>
        </Modal>
    }
}

/// "Edit task" action; 409 from the server is reported as an invalid date
#[component]
pub fn TaskUpdateDialog(task: Memo<Option<Task>>) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");

    let open = RwSignal::new(false);
    let form = RwSignal::new(TaskForm::default());
    let errors = RwSignal::new(FormErrors::default());

    let open_dialog = move |_| {
        if let Some(task) = task.get_untracked() {
            form.set(TaskForm {
                title: task.title,
                description: task.description,
                expires_at: task.expires_at.format("%Y-%m-%d").to_string(),
            });
            errors.set(FormErrors::default());
            open.set(true);
        }
    };

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let Some(task_id) = task.with_untracked(|t| t.as_ref().map(|t| t.id.clone())) else {
            return;
        };
        let update = match form.with_untracked(|f| f.validate_update(&task_id, Utc::now())) {
            Ok(update) => update,
            Err(invalid) => {
                errors.set(invalid);
                return;
            }
        };
        errors.set(FormErrors::default());

        let replica = ctx.replica();
        spawn_local(async move {
            let result = replica.update_task(&task_id, &update).await;
            let confirmed = report(
                ctx.toaster,
                Operation::UpdateTask,
                result,
                || format!("{} was updated", update.title),
                Some(INVALID_DATE),
            );
            if confirmed {
                open.set(false);
            }
        });
    };

    let title = move || {
        task.with(|t| t.as_ref().map(|t| format!("Editing - {}", t.title)).unwrap_or_default())
    };

    view! {
        <button type="button" class="menu-item" on:click=open_dialog>
            "Edit task"
        </button>
        <Modal open=open title="Edit task" description="Change title, description or expiration">
            <p class="dialog-subtitle">{title}</p>
            <form class="dialog-form" on:submit=on_submit>
                <TaskFormFields form=form errors=errors />
                <button type="submit" class="btn primary">"Save task"</button>
            </form>
        </Modal>
    }
}

/// "Delete task" action with inline confirmation
#[component]
pub fn TaskDeleteButton(
    task_id: TaskId,
    #[prop(into)] task_title: Signal<String>,
) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");

    let on_confirm = Callback::new(move |_: ()| {
        let replica = ctx.replica();
        let task_id = task_id.clone();
        let title = task_title.get_untracked();
        spawn_local(async move {
            let result = replica.delete_task(&task_id).await;
            let success = || format!("{title} was deleted");
            report(ctx.toaster, Operation::DeleteTask, result, success, None);
        });
    });

    view! {
        <ConfirmButton
            label="Delete task"
            prompt="Delete this task?"
            button_class="menu-item danger"
            on_confirm=on_confirm
        />
    }
}

/// "Clear items" action with inline confirmation
#[component]
pub fn ClearItemsButton(
    task_id: TaskId,
    #[prop(into)] task_title: Signal<String>,
) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");

    let on_confirm = Callback::new(move |_: ()| {
        let replica = ctx.replica();
        let task_id = task_id.clone();
        let title = task_title.get_untracked();
        spawn_local(async move {
            let result = replica.clear_items(&task_id).await;
            let success = || format!("All items of {title} were removed");
            report(ctx.toaster, Operation::ClearItems, result, success, None);
        });
    });

    view! {
        <ConfirmButton
            label="Clear items"
            prompt="Remove every item?"
            button_class="menu-item danger"
            on_confirm=on_confirm
        />
    }
}
