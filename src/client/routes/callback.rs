use dioxus::prelude::*;
use dioxus_logger::tracing;
use havasi::{error::Error, store::ErrorState};

use crate::client::{
    app::Services,
    components::{raise_error, Loading, Page},
    router::Route,
};

/// Landing route of the Google redirect; the token arrives in the URL fragment.
#[component]
pub fn Callback(fragment: String) -> Element {
    let services = use_context::<Services>();
    let errors = use_context::<Signal<ErrorState>>();
    let navigator = navigator();

    use_future(move || {
        let services = services.clone();
        let fragment = fragment.clone();
        async move {
            let result = match services.google.as_deref() {
                Some(google) => google.parse_callback(&fragment),
                None => Err(Error::Validation(
                    "Google sign-in is not configured".to_string(),
                )),
            };

            let outcome = match result {
                Ok(token) => services.session.login(&token).await,
                Err(e) => Err(e),
            };

            match outcome {
                Ok(()) => {
                    tracing::info!("Google sign-in completed");
                    navigator.replace(Route::RootRedirect {});
                }
                Err(e) => {
                    raise_error(errors, &e);
                    navigator.replace(Route::Login {});
                }
            }
        }
    });

    rsx!(
        Page { class: "flex items-center justify-center",
            div { class: "flex flex-col items-center gap-2",
                Loading {}
                p { "Signing you in…" }
            }
        }
    )
}
