//! Item Dialogs
//!
//! Add, edit and delete items of one task. Item requests answer with the
//! whole parent task, which the replica store reconciles as a unit.

use leptos::prelude::*;
use leptos::task::spawn_local;
use list_replica::validation::{FormErrors, ItemForm};
use list_replica::{Item, Operation, TaskId};

use crate::components::{ConfirmButton, ItemFormFields, Modal};
use crate::context::AppContext;
use crate::feedback::report;

/// "New item" button and its dialog
#[component]
pub fn ItemAddDialog(task_id: TaskId, #[prop(into)] task_title: Signal<String>) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");

    let open = RwSignal::new(false);
    let form = RwSignal::new(ItemForm::default());
    let errors = RwSignal::new(FormErrors::default());
    let task_id = StoredValue::new(task_id);

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let item = match form.with_untracked(ItemForm::validate) {
            Ok(item) => item,
            Err(invalid) => {
                errors.set(invalid);
                return;
            }
        };
        errors.set(FormErrors::default());

        let replica = ctx.replica();
        let task_id = task_id.get_value();
        let title = task_title.get_untracked();
        spawn_local(async move {
            let result = replica.add_item(&task_id, &item).await;
            let confirmed = report(
                ctx.toaster,
                Operation::AddItem,
                result,
                || format!("{} was added to {title}", item.title),
                None,
            );
            if confirmed {
                form.set(ItemForm::default());
                open.set(false);
            }
        });
    };

    let description = move || format!("Add a new item to {}", task_title.get());

    view! {
        <button
            type="button"
            class="btn primary small"
            on:click=move |_| {
                errors.set(FormErrors::default());
                open.set(true);
            }
        >
            "New item"
        </button>
        <Modal open=open title="New item">
            <p class="dialog-subtitle">{description}</p>
            <form class="dialog-form" on:submit=on_submit>
                <ItemFormFields form=form errors=errors />
                <button type="submit" class="btn primary">"Save item"</button>
            </form>
        </Modal>
    }
}

/// "Edit item" action
#[component]
pub fn ItemUpdateDialog(task_id: TaskId, item: Item) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");

    let open = RwSignal::new(false);
    let form = RwSignal::new(ItemForm::from_item(&item));
    let errors = RwSignal::new(FormErrors::default());
    let task_id = StoredValue::new(task_id);
    let item = StoredValue::new(item);

    let open_dialog = move |_| {
        form.set(item.with_value(ItemForm::from_item));
        errors.set(FormErrors::default());
        open.set(true);
    };

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let item_id = item.with_value(|item| item.id.clone());
        let validated = form.with_untracked(|f| f.validate_update(&item_id));
        let edited = match validated {
            Ok(edited) => edited,
            Err(invalid) => {
                errors.set(invalid);
                return;
            }
        };
        errors.set(FormErrors::default());

        let replica = ctx.replica();
        let task_id = task_id.get_value();
        spawn_local(async move {
            let result = replica.update_item(&task_id, &edited).await;
            let success = || format!("{} was updated", edited.title);
            if report(ctx.toaster, Operation::UpdateItem, result, success, None) {
                open.set(false);
            }
        });
    };

    let subtitle = item.with_value(|item| format!("Editing - {}", item.title));

    view! {
        <button type="button" class="menu-item" on:click=open_dialog>
            "Edit item"
        </button>
        <Modal open=open title="Edit item" description=subtitle>
            <form class="dialog-form" on:submit=on_submit>
                <ItemFormFields form=form errors=errors />
                <button type="submit" class="btn primary">"Save item"</button>
            </form>
        </Modal>
    }
}

/// "Delete item" action with inline confirmation
#[component]
pub fn ItemDeleteButton(task_id: TaskId, item: Item) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");

    let on_confirm = Callback::new(move |_: ()| {
        let replica = ctx.replica();
        let task_id = task_id.clone();
        let item = item.clone();
        spawn_local(async move {
            let result = replica.delete_item(&task_id, &item).await;
            let success = || format!("{} was removed", item.title);
            report(ctx.toaster, Operation::DeleteItem, result, success, None);
        });
    });

    view! {
        <ConfirmButton
            label="Delete item"
            prompt="Delete this item?"
            button_class="menu-item danger"
            on_confirm=on_confirm
        />
    }
}
