//! List Manager App
//!
//! Root component: wires the replica store to the reactive store, loads the
//! task list once, and renders the (filtered) task cards.

use leptos::prelude::*;
use leptos::task::spawn_local;
use list_replica::views::TaskQuery;
use list_replica::{ApiConfig, HttpTaskApi, ReplicaStore};
use reactive_stores::Store;

use crate::components::{Navbar, TaskCard, TaskFilterBar, ToastViewport, Toaster};
use crate::context::AppContext;
use crate::store::{store_sync_tasks, AppState, AppStateStoreFields};

#[component]
pub fn App() -> impl IntoView {
    let state = Store::new(AppState::new());
    provide_context(state);

    let toaster = Toaster::new();
    let replica = ReplicaStore::new(HttpTaskApi::new(ApiConfig::from_env()));
    replica.subscribe(move |cache| store_sync_tasks(&state, cache));
    let ctx = AppContext::new(replica, toaster);
    provide_context(ctx);

    // Initial bulk read
    Effect::new(move |_| {
        let replica = ctx.replica();
        spawn_local(async move {
            if let Err(e) = replica.initialize().await {
                log::error!("could not reach the task API: {e}");
            }
            state.loaded().set(true);
        });
    });

    let query = RwSignal::new(TaskQuery::default());
    let visible = Memo::new(move |_| state.tasks().with(|tasks| query.with(|q| q.apply(tasks))));

    view! {
        <div class="app-layout">
            <Navbar />
            <main class="main-content">
                <TaskFilterBar query=query />

                <Show
                    when=move || state.loaded().get()
                    fallback=|| view! { <p class="empty">"Loading tasks..."</p> }
                >
                    <Show
                        when=move || visible.with(|tasks| !tasks.is_empty())
                        fallback=|| view! { <p class="empty">"No tasks to show"</p> }
                    >
                        <div class="task-list">
                            <For
                                each=move || visible.get()
                                key=|task| task.id.clone()
                                children=|task| view! { <TaskCard task_id=task.id /> }
                            />
                        </div>
                    </Show>
                </Show>
            </main>
            <ToastViewport toaster=toaster />
        </div>
    }
}
