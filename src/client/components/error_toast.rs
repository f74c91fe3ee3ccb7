use std::time::Duration;

use dioxus::prelude::*;
use dioxus_logger::tracing;
use havasi::{error::Error, platform, store::ErrorState};

/// How long a toast stays up without being closed
pub const TOAST_DURATION: Duration = Duration::from_secs(5);

/// Shows `error` in the toast and schedules its dismissal.
///
/// A dismissal only clears the message it was scheduled for, so a newer error
/// raised in the meantime stays visible for its full duration.
pub fn raise_error(mut errors: Signal<ErrorState>, error: &Error) {
    tracing::error!("{}", error);

    let seq = errors.write().raise(error.user_message());
    spawn(async move {
        platform::sleep(TOAST_DURATION).await;
        errors.write().dismiss(seq);
    });
}

#[component]
pub fn ErrorToast() -> Element {
    let mut errors = use_context::<Signal<ErrorState>>();

    let ErrorState { message, seq } = errors.read().clone();
    let Some(message) = message else {
        return rsx! {};
    };

    rsx!(
        div { class: "toast toast-top toast-end z-50",
            div { class: "alert alert-error shadow-lg max-w-96",
                div { class: "flex flex-col",
                    p { class: "font-bold", "Error" }
                    p { "{message}" }
                }
                button {
                    class: "btn btn-sm btn-ghost",
                    onclick: move |_| {
                        errors.write().dismiss(seq);
                    },
                    "✕"
                }
            }
        }
    )
}
