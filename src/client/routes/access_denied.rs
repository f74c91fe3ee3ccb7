use dioxus::document::Title;
use dioxus::prelude::*;

use crate::client::{components::Page, router::Route};

#[component]
pub fn AccessDenied() -> Element {
    rsx!(
        Title { "Access Denied | Havasi" }
        Page { class: "flex justify-center",
            div { class: "flex flex-col items-center gap-2 my-12 text-center",
                h2 { class: "text-2xl font-bold", "Access Denied" }
                p { class: "text-lg", "You don't have permission to access this page." }
                p { "This area is restricted to administrators only." }
                Link {
                    to: Route::Settings {},
                    class: "btn btn-primary mt-4",
                    "Go to Settings"
                }
            }
        }
    )
}
