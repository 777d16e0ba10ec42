//! Navbar Component

use leptos::prelude::*;

use crate::components::TaskSaveDialog;

#[component]
pub fn Navbar() -> impl IntoView {
    view! {
        <nav class="navbar">
            <h1 class="app-title">"List Manager"</h1>
            <TaskSaveDialog />
        </nav>
    }
}
