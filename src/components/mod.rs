//! UI Components
//!
//! Reusable Leptos components.

mod confirm_button;
mod form_fields;
mod item_dialogs;
mod modal;
mod navbar;
mod task_card;
mod task_dialogs;
mod task_filter_bar;
mod task_items;
mod toast;

pub use confirm_button::ConfirmButton;
pub use form_fields::{ItemFormFields, TaskFormFields};
pub use item_dialogs::{ItemAddDialog, ItemDeleteButton, ItemUpdateDialog};
pub use modal::Modal;
pub use navbar::Navbar;
pub use task_card::TaskCard;
pub use task_dialogs::{ClearItemsButton, TaskDeleteButton, TaskSaveDialog, TaskUpdateDialog};
pub use task_filter_bar::TaskFilterBar;
pub use task_items::TaskItems;
pub use toast::{ToastViewport, Toaster};
