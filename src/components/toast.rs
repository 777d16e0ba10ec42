//! Toast Notifications
//!
//! A queue of short-lived messages shown in a corner of the page.

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;

/// How long a toast stays up
const TOAST_MS: u32 = 4_000;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Error,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Toast {
    pub id: u32,
    pub kind: ToastKind,
    pub title: String,
    pub description: String,
}

/// Handle for pushing toasts; copy it freely
#[derive(Clone, Copy)]
pub struct Toaster {
    toasts: RwSignal<Vec<Toast>>,
    next_id: RwSignal<u32>,
}

impl Toaster {
    pub fn new() -> Self {
        Self {
            toasts: RwSignal::new(Vec::new()),
            next_id: RwSignal::new(0),
        }
    }

    pub fn success(&self, title: impl Into<String>, description: impl Into<String>) {
        self.push(ToastKind::Success, title.into(), description.into());
    }

    pub fn error(&self, title: impl Into<String>, description: impl Into<String>) {
        self.push(ToastKind::Error, title.into(), description.into());
    }

    pub fn dismiss(&self, id: u32) {
        self.toasts.update(|toasts| toasts.retain(|toast| toast.id != id));
    }

    fn push(&self, kind: ToastKind, title: String, description: String) {
        let id = self.next_id.get_untracked();
        self.next_id.set(id.wrapping_add(1));
        self.toasts.update(|toasts| toasts.push(Toast { id, kind, title, description }));

        let toaster = *self;
        spawn_local(async move {
            TimeoutFuture::new(TOAST_MS).await;
            toaster.dismiss(id);
        });
    }
}

impl Default for Toaster {
    fn default() -> Self {
        Self::new()
    }
}

/// Renders the toast queue
#[component]
pub fn ToastViewport(toaster: Toaster) -> impl IntoView {
    view! {
        <div class="toast-viewport">
            <For
                each=move || toaster.toasts.get()
                key=|toast| toast.id
                children=move |toast| {
                    let id = toast.id;
                    let class = match toast.kind {
                        ToastKind::Success => "toast",
                        ToastKind::Error => "toast destructive",
                    };
                    view! {
                        <div class=class on:click=move |_| toaster.dismiss(id)>
                            <div class="toast-title">{toast.title}</div>
                            <div class="toast-description">{toast.description}</div>
                        </div>
                    }
                }
            />
        </div>
    }
}
