use icondata as i;
use leptos::prelude::*;
use leptos_icons::Icon;

use crate::global_state::toasts::{use_toast, Toast, ToastLevel};

#[component]
pub fn ToastItem(toast: Toast) -> impl IntoView {
    let toasts = use_toast().expect("Toast context not found");

    let alert_class = match toast.level {
        ToastLevel::Success => "alert alert-success alert-dismissible fade show",
        ToastLevel::Error => "alert alert-danger alert-dismissible fade show",
    };
    let icon = match toast.level {
        ToastLevel::Success => i::BsCheckCircle,
        ToastLevel::Error => i::BsExclamationCircle,
    };

    let message = toast.message.clone();
    let id = toast.id;

    view! {
        <div class=alert_class role="alert">
            <Icon icon=icon width="1.2em" height="1.2em" />
            <span class="ms-2">{message}</span>
            <button
                type="button"
                class="btn-close"
                aria-label="Close"
                on:click=move |_| toasts.remove(id)
            >
                <Icon icon=i::BsX width="1.2em" height="1.2em" />
            </button>
        </div>
    }
}

#[component]
pub fn ToastContainer() -> impl IntoView {
    let toasts = use_toast().expect("Toast context not found");

    view! {
        <div class="toast-stack position-fixed top-0 start-50 translate-middle-x p-3">
            <For
                each=move || toasts.0.get()
                key=|toast| toast.id
                children=|toast| view! { <ToastItem toast=toast /> }
            />
        </div>
    }
}
