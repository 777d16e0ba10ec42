//! Task Filter Bar
//!
//! Search, creation-date sort and creation-date range over the task list.
//! Only edits the query; the list itself is derived in `App`.

use leptos::prelude::*;
use list_replica::views::{DateRange, TaskQuery, TaskSort};

#[component]
pub fn TaskFilterBar(query: RwSignal<TaskQuery>) -> impl IntoView {
    let (start, set_start) = signal(String::new());
    let (end, set_end) = signal(String::new());

    let range = Memo::new(move |_| DateRange::parse(&start.get(), &end.get()));

    let sort_class = move |which: TaskSort| {
        move || {
            if query.with(|q| q.sort == Some(which)) {
                "btn small secondary"
            } else {
                "btn small outline"
            }
        }
    };

    let apply_range = move |_| {
        if let Some(range) = range.get_untracked() {
            query.update(|q| q.created_between = Some(range));
        }
    };

    let clear = move |_| {
        query.update(TaskQuery::clear);
        set_start.set(String::new());
        set_end.set(String::new());
    };

    view! {
        <section class="filter-bar">
            <div class="filter-group">
                <span class="filter-label">"Created"</span>
                <button
                    type="button"
                    class=sort_class(TaskSort::CreatedAsc)
                    on:click=move |_| query.update(|q| q.sort = Some(TaskSort::CreatedAsc))
                >
                    "Oldest"
                </button>
                <button
                    type="button"
                    class=sort_class(TaskSort::CreatedDesc)
                    on:click=move |_| query.update(|q| q.sort = Some(TaskSort::CreatedDesc))
                >
                    "Newest"
                </button>
            </div>

            <div class="filter-group">
                <span class="filter-label">"Between"</span>
                <input
                    type="date"
                    class="input"
                    prop:value=start
                    on:input=move |ev| set_start.set(event_target_value(&ev))
                />
                <input
                    type="date"
                    class="input"
                    prop:value=end
                    on:input=move |ev| set_end.set(event_target_value(&ev))
                />
                <button
                    type="button"
                    class="btn small primary"
                    disabled=move || range.with(Option::is_none)
                    on:click=apply_range
                >
                    "Filter"
                </button>
            </div>

            <input
                type="search"
                class="input search"
                placeholder="Search by title"
                prop:value=move || query.with(|q| q.search.clone())
                on:input=move |ev| query.update(|q| q.search = event_target_value(&ev))
            />

            <Show when=move || query.with(TaskQuery::is_active)>
                <button type="button" class="btn small outline" on:click=clear>
                    "Clear filters"
                </button>
            </Show>
        </section>
    }
}
