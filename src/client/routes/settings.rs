use dioxus::document::Title;
use dioxus::prelude::*;
use dioxus_logger::tracing;
use havasi::{
    error::Error,
    storage::Theme,
    store::{ErrorState, UserState},
};

use crate::client::{
    app::Services,
    components::{raise_error, Loading, Page},
};

#[component]
pub fn Settings() -> Element {
    let services = use_context::<Services>();
    let profile = use_context::<SyncSignal<UserState>>();
    let mut theme = use_context::<Signal<Theme>>();
    let errors = use_context::<Signal<ErrorState>>();
    let navigator = navigator();

    let user = profile.read().user.clone();
    let joined = user
        .as_ref()
        .and_then(|user| user.created_at)
        .map(|created_at| created_at.date_time());

    rsx!(
        Title { "Settings | Havasi" }
        Page { class: "flex flex-col gap-4 max-w-xl",
            h3 { class: "text-xl font-bold", "User Settings" }
            if let Some(user) = user {
                div { class: "flex flex-col gap-1",
                    p { span { class: "font-bold", "Name: " } "{user.username}" }
                    p { span { class: "font-bold", "Email: " } "{user.email}" }
                    if let Some(joined) = joined {
                        p { span { class: "font-bold", "Joined: " } "{joined}" }
                    }
                }
            } else {
                Loading {}
            }
            label { class: "form-control w-full max-w-xs",
                span { class: "label-text", "Theme" }
                select {
                    class: "select select-bordered",
                    value: "{theme}",
                    onchange: move |evt| {
                        let Some(selected) = Theme::parse(&evt.value()) else {
                            return;
                        };
                        if let Err(e) = services.themes.set(selected) {
                            raise_error(errors, &Error::from(e));
                            return;
                        }
                        tracing::debug!(theme = %selected, "Theme changed");
                        theme.set(selected);
                    },
                    option { value: "light", "Light" }
                    option { value: "dark", "Dark" }
                }
            }
            div {
                button {
                    class: "btn btn-secondary",
                    onclick: move |_| navigator.go_back(),
                    "Back"
                }
            }
        }
    )
}
