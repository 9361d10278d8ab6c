//! Toast rendering and the notify helper pages use to raise one.
//!
//! Toasts auto-dismiss after a few seconds (browser only); the close
//! control dismisses immediately. Timed dismissal targets the toast id
//! it was armed for, so it never removes a newer toast.

use leptos::prelude::*;

use crate::state::toast::{ToastKind, ToastState};

/// Seconds a toast stays visible before auto-dismissal.
pub const TOAST_AUTO_DISMISS_SECS: u64 = 3;

/// Push a toast and arm its timed dismissal.
pub fn notify(toasts: RwSignal<ToastState>, message: impl Into<String>, kind: ToastKind) {
    let mut id = 0;
    toasts.update(|state| id = state.push(message, kind));
    #[cfg(feature = "hydrate")]
    {
        leptos::task::spawn_local(async move {
            gloo_timers::future::sleep(std::time::Duration::from_secs(TOAST_AUTO_DISMISS_SECS)).await;
            toasts.update(|state| state.dismiss(id));
        });
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = id;
    }
}

/// Fixed-position stack of active toasts.
#[component]
pub fn ToastStack() -> impl IntoView {
    let toasts = expect_context::<RwSignal<ToastState>>();

    view! {
        <div class="toast-stack" aria-live="assertive">
            {move || {
                toasts
                    .get()
                    .toasts
                    .into_iter()
                    .map(|toast| {
                        let dismiss_id = toast.id;
                        view! {
                            <div class=format!("toast {}", toast.kind.class()) role="alert">
                                <i
                                    class=format!("fas {} toast__icon", toast.kind.icon_class())
                                    aria-hidden="true"
                                ></i>
                                <span class="toast__message">{toast.message}</span>
                                <button
                                    class="toast__close"
                                    aria-label="Close"
                                    on:click=move |_| toasts.update(|state| state.dismiss(dismiss_id))
                                >
                                    "✕"
                                </button>
                            </div>
                        }
                    })
                    .collect::<Vec<_>>()
            }}
        </div>
    }
}
