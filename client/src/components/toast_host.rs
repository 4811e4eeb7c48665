//! Renders the current toast and owns its auto-dismiss timer.

use leptos::prelude::*;

use crate::state::toast::{ToastKind, ToastState};

/// Show an error toast that dismisses itself after `TOAST_MS`.
pub fn push_error(toasts: RwSignal<ToastState>, description: &str) {
    let mut seq = 0;
    toasts.update(|t| seq = t.error(description));
    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        gloo_timers::future::TimeoutFuture::new(crate::state::toast::TOAST_MS).await;
        toasts.update(|t| t.dismiss(seq));
    });
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = seq;
    }
}

#[component]
pub fn ToastHost() -> impl IntoView {
    let toasts = expect_context::<RwSignal<ToastState>>();

    view! {
        <div class="toast-host" role="status" aria-live="polite">
            {move || {
                let state = toasts.get();
                state.current.map(|toast| {
                    let seq = state.seq;
                    view! {
                        <div class="toast" class:toast--destructive={toast.kind == ToastKind::Destructive}>
                            <strong class="toast__title">{toast.title}</strong>
                            <p class="toast__description">{toast.description}</p>
                            <button
                                class="toast__close"
                                aria-label="Dismiss"
                                on:click=move |_| toasts.update(|t| t.dismiss(seq))
                            >
                                "✕"
                            </button>
                        </div>
                    }
                })
            }}
        </div>
    }
}
