use dioxus::prelude::*;
use dioxus_free_icons::icons::fa_solid_icons::{FaGear, FaRightFromBracket};
use dioxus_free_icons::Icon;
use havasi::store::UserState;

use crate::client::{app::Services, router::Route};

#[component]
pub fn AppLayout() -> Element {
    rsx!(
        div { class: "flex flex-col min-h-screen",
            Navbar {}
            div { class: "flex flex-grow",
                Sidebar {}
                div { class: "flex-grow",
                    Outlet::<Route> {}
                }
            }
        }
    )
}

#[component]
fn Navbar() -> Element {
    let services = use_context::<Services>();
    let profile = use_context::<SyncSignal<UserState>>();
    let navigator = navigator();

    let username = profile
        .read()
        .user
        .as_ref()
        .map(|user| user.username.clone())
        .unwrap_or_default();

    rsx!(
        div { class: "navbar bg-base-200 px-4 border-b border-base-300",
            div { class: "navbar-start",
                Link { to: Route::RootRedirect {},
                    p { class: "text-xl font-bold", "Havasi" }
                }
            }
            div { class: "navbar-end flex gap-2",
                p { class: "text-sm", "{username}" }
                Link {
                    to: Route::Settings {},
                    class: "btn btn-ghost btn-square",
                    Icon { width: 18, height: 18, icon: FaGear }
                }
                button {
                    class: "btn btn-outline flex gap-2",
                    onclick: move |_| {
                        services.session.logout();
                        navigator.replace(Route::Login {});
                    },
                    Icon { width: 16, height: 16, icon: FaRightFromBracket }
                    "Logout"
                }
            }
        }
    )
}

#[component]
fn Sidebar() -> Element {
    let profile = use_context::<SyncSignal<UserState>>();
    let is_admin = profile.read().is_admin();

    rsx!(
        ul { class: "menu bg-base-200 w-56 min-h-full",
            if is_admin {
                li { Link { to: Route::Dashboard {}, "Dashboard" } }
                li { Link { to: Route::RealEstates { query: String::new() }, "Real Estates" } }
            }
            li { Link { to: Route::Notifications {}, "Notifications" } }
            li { Link { to: Route::ReceivedNotifications {}, "Received Notifications" } }
            li { Link { to: Route::Settings {}, "Settings" } }
        }
    )
}
