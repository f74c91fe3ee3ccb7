use dioxus::document::{Meta, Title};
use dioxus::prelude::*;
use havasi::store::{ErrorState, UserState};

use crate::client::{
    app::Services,
    components::{raise_error, Page},
    router::Route,
};

#[component]
pub fn Dashboard() -> Element {
    let services = use_context::<Services>();
    let profile = use_context::<SyncSignal<UserState>>();
    let errors = use_context::<Signal<ErrorState>>();
    let mut rule_count = use_signal(|| None::<usize>);

    let notifications = services.notifications.clone();
    use_future(move || {
        let notifications = notifications.clone();
        async move {
            match notifications.refresh().await {
                Ok(rules) => rule_count.set(Some(rules.len())),
                Err(e) => raise_error(errors, &e),
            }
        }
    });

    let username = profile
        .read()
        .user
        .as_ref()
        .map(|user| user.username.clone())
        .unwrap_or_default();
    let loaded_listings = services.directory.len();

    rsx!(
        Title { "Dashboard | Havasi" }
        Meta {
            name: "description",
            content: "Havasi administration dashboard."
        }
        Page { class: "flex flex-col gap-4",
            h2 { class: "text-2xl font-bold", "Welcome to Admin Dashboard" }
            p { class: "opacity-70", "Signed in as {username}" }
            div { class: "stats shadow",
                div { class: "stat",
                    div { class: "stat-title", "Notification rules" }
                    div { class: "stat-value",
                        if let Some(count) = rule_count() {
                            "{count}"
                        } else {
                            span { class: "loading loading-dots" }
                        }
                    }
                    div { class: "stat-actions",
                        Link { to: Route::Notifications {}, class: "btn btn-sm", "Manage" }
                    }
                }
                div { class: "stat",
                    div { class: "stat-title", "Listings on the current page" }
                    div { class: "stat-value", "{loaded_listings}" }
                    div { class: "stat-actions",
                        Link {
                            to: Route::RealEstates { query: String::new() },
                            class: "btn btn-sm",
                            "Browse"
                        }
                    }
                }
            }
        }
    )
}
