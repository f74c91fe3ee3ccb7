use dioxus::prelude::*;
use dioxus_free_icons::icons::fa_brands_icons::FaGoogle;
use dioxus_free_icons::Icon;

use crate::client::app::Services;

#[component]
pub fn GoogleLoginButton() -> Element {
    let services = use_context::<Services>();

    // Built once per mount; every build persists a fresh CSRF state
    let authorization = use_hook(move || {
        services.google.as_ref().map(|google| {
            google
                .authorization_url()
                .map(|url| url.to_string())
                .map_err(|e| e.user_message())
        })
    });

    match authorization {
        Some(Ok(url)) => rsx!(
            a { href: "{url}",
                button { class: "btn btn-outline w-64 flex gap-2",
                    Icon {
                        width: 20,
                        height: 20,
                        icon: FaGoogle
                    }
                    p { "Sign in with Google" }
                }
            }
        ),
        Some(Err(message)) => rsx!(
            div { class: "alert alert-error", "{message}" }
        ),
        None => rsx!(
            div { class: "alert alert-warning",
                "Google sign-in is not configured for this deployment."
            }
        ),
    }
}
