//! Modal Dialog Component

use leptos::prelude::*;

/// Overlay dialog shown while `open` is true. Clicking the backdrop or ×
/// closes it.
#[component]
pub fn Modal(
    open: RwSignal<bool>,
    #[prop(into)] title: String,
    #[prop(optional, into)] description: String,
    children: ChildrenFn,
) -> impl IntoView {
    view! {
        <Show when=move || open.get()>
            <div class="modal-backdrop" on:click=move |_| open.set(false)>
                <div class="modal" on:click=|ev| ev.stop_propagation()>
                    <header class="modal-header">
                        <h2>{title.clone()}</h2>
                        <p class="modal-description">{description.clone()}</p>
                        <button type="button" class="modal-close" on:click=move |_| open.set(false)>
                            "×"
                        </button>
                    </header>
                    {children()}
                </div>
            </div>
        </Show>
    }
}
