use dioxus::document::{Meta, Title};
use dioxus::prelude::*;
use havasi::auth::Session;

use crate::client::{
    components::{GoogleLoginButton, Loading, Page, Redirect},
    router::Route,
};

#[component]
pub fn Login() -> Element {
    let session = use_context::<SyncSignal<Session>>();
    let Session {
        is_authenticated,
        is_initializing,
        ..
    } = session.read().clone();

    rsx!(
        Title { "Login | Havasi" }
        Meta {
            name: "description",
            content: "Real estate listings aggregated from Czech providers, with alerts for new matches."
        }
        Page { class: "flex items-center justify-center",
            if is_initializing {
                Loading {}
            } else if is_authenticated {
                Redirect { to: Route::RootRedirect {} }
            } else {
                div { class: "card bg-base-200 shadow-sm w-full max-w-96",
                    div { class: "card-body items-center gap-4",
                        h1 { class: "card-title text-2xl", "Havasi" }
                        p { class: "text-center opacity-80",
                            "Sign in to browse listings and manage your notifications."
                        }
                        GoogleLoginButton {}
                    }
                }
            }
        }
    )
}
