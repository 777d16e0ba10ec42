//! Task Items Component
//!
//! Items of one task with a local sort (priority / state), plus per-item
//! edit and delete actions.

use leptos::prelude::*;
use list_replica::views::{sort_items, ItemSort};
use list_replica::{Item, ItemState, Priority, TaskId};

use crate::components::{ItemDeleteButton, ItemUpdateDialog};

fn priority_badge(priority: Priority) -> &'static str {
    match priority {
        Priority::Low => "badge low",
        Priority::Medium => "badge warning",
        Priority::High => "badge destructive",
    }
}

fn state_badge(state: ItemState) -> &'static str {
    match state {
        ItemState::Pending => "badge pending",
        ItemState::Doing => "badge doing",
        ItemState::Done => "badge completed",
        ItemState::Canceled => "badge canceled",
    }
}

/// Item list of a task card
#[component]
pub fn TaskItems(task_id: TaskId, #[prop(into)] items: Signal<Vec<Item>>) -> impl IntoView {
    let (sort, set_sort) = signal::<Option<ItemSort>>(None);
    let task_id = StoredValue::new(task_id);

    let sorted = move || items.with(|items| sort_items(items, sort.get()));
    let sort_class = move |which: ItemSort| {
        move || if sort.get() == Some(which) { "btn small secondary" } else { "btn small outline" }
    };

    view! {
        <div class="item-filters">
            <h4>"Sort items"</h4>
            <div class="item-filter-row">
                <button
                    type="button"
                    class=sort_class(ItemSort::PriorityDesc)
                    on:click=move |_| set_sort.set(Some(ItemSort::PriorityDesc))
                >
                    "By priority"
                </button>
                <button
                    type="button"
                    class=sort_class(ItemSort::StateAsc)
                    on:click=move |_| set_sort.set(Some(ItemSort::StateAsc))
                >
                    "By state"
                </button>
                <button
                    type="button"
                    class="btn small outline"
                    on:click=move |_| set_sort.set(None)
                >
                    "Clear"
                </button>
            </div>
        </div>

        <div class="item-list">
            <Show when=move || items.with(|items| items.is_empty())>
                <p class="empty">"No items yet"</p>
            </Show>
            <For
                each=sorted
                key=|item| item.clone()
                children=move |item| {
                    let task_id = task_id.get_value();
                    view! {
                        <div class="item-row">
                            <div class="item-body">
                                <p class="item-title">{item.title.clone()}</p>
                                <p class="item-description">{item.description.clone()}</p>
                                <div class="item-badges">
                                    <span class=priority_badge(item.priority)>
                                        "Priority: " {item.priority.label()}
                                    </span>
                                    <span class=state_badge(item.state)>
                                        "State: " {item.state.label()}
                                    </span>
                                </div>
                            </div>
                            <div class="item-actions">
                                <ItemUpdateDialog task_id=task_id.clone() item=item.clone() />
                                <ItemDeleteButton task_id=task_id item=item />
                            </div>
                        </div>
                    }
                }
            />
        </div>
    }
}
