//! Toast stack rendering transient notifications from `UiState`.
//!
//! DESIGN
//! ======
//! Each toast schedules its own timed dismissal when it mounts; manual
//! dismissal goes through the same reducer, so a toast can never be
//! removed twice.

use leptos::prelude::*;

use crate::state::ui::{Toast, UiState};
#[cfg(feature = "hydrate")]
use crate::state::ui::TOAST_DISMISS_MS;

/// Renders the queued toasts in a fixed stack.
#[component]
pub fn ToastHost() -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();

    view! {
        <div class="toast-stack" aria-live="polite">
            {move || {
                ui.get()
                    .toasts
                    .into_iter()
                    .map(|toast| view! { <ToastItem toast=toast/> })
                    .collect::<Vec<_>>()
            }}
        </div>
    }
}

/// One toast with a dismiss button and an auto-dismiss timer.
#[component]
fn ToastItem(toast: Toast) -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();
    let toast_id = toast.id;
    let class = format!("toast {}", toast.kind.css_class());

    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        gloo_timers::future::sleep(std::time::Duration::from_millis(u64::from(TOAST_DISMISS_MS)))
            .await;
        ui.update(|u| u.dismiss_toast(toast_id));
    });

    view! {
        <div class=class>
            <span class="toast__message">{toast.message}</span>
            <button
                class="toast__dismiss"
                on:click=move |_| ui.update(|u| u.dismiss_toast(toast_id))
                aria-label="Dismiss"
            >
                "✕"
            </button>
        </div>
    }
}
