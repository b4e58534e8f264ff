//! Transient notifications.
//!
//! [`ToastQueue`] is the browser [`Notifier`]: every message the API client
//! reports lands here and dismisses itself after `TOAST_DURATION_MS`.

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

use crate::app::AppContext;
use crate::config::TOAST_DURATION_MS;
use crate::core::platform::Notifier;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Toast {
    pub id: u64,
    pub message: String,
}

/// Visible toasts, oldest first.
///
/// `Copy` because both fields are signals.
#[derive(Clone, Copy)]
pub struct ToastQueue {
    items: RwSignal<Vec<Toast>>,
    next_id: RwSignal<u64>,
}

impl ToastQueue {
    pub fn new() -> Self {
        Self {
            items: RwSignal::new(Vec::new()),
            next_id: RwSignal::new(0),
        }
    }

    /// Show `message` until dismissed. Returns the toast id.
    pub fn push(&self, message: &str) -> u64 {
        let id = self.next_id.get_untracked();
        self.next_id.set(id + 1);
        self.items.update(|items| {
            items.push(Toast {
                id,
                message: message.to_string(),
            })
        });
        id
    }

    pub fn dismiss(&self, id: u64) {
        self.items.update(|items| items.retain(|toast| toast.id != id));
    }

    pub fn items(&self) -> Vec<Toast> {
        self.items.get()
    }
}

impl Default for ToastQueue {
    fn default() -> Self {
        Self::new()
    }
}

impl Notifier for ToastQueue {
    fn notify(&self, message: &str) {
        let id = self.push(message);
        let queue = *self;
        spawn_local(async move {
            TimeoutFuture::new(TOAST_DURATION_MS).await;
            queue.dismiss(id);
        });
    }
}

/// Overlay rendering the toast queue.
#[component]
pub fn Toasts() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");
    let toasts = ctx.toasts;

    view! {
        <div class="toast-overlay" aria-live="polite">
            <For
                each=move || toasts.items()
                key=|toast| toast.id
                children=move |toast: Toast| {
                    let id = toast.id;
                    view! {
                        <div class="toast" on:click=move |_| toasts.dismiss(id)>
                            {toast.message}
                        </div>
                    }
                }
            />
        </div>
    }
}
