use dioxus::document::Title;
use dioxus::prelude::*;

use crate::client::{components::Page, router::Route};

#[component]
pub fn NotFound(segments: Vec<String>) -> Element {
    let path = segments.join("/");

    rsx!(
        Title { "Not Found | Havasi" }
        Page { class: "flex justify-center",
            div { class: "flex flex-col items-center gap-2 my-12",
                h2 { class: "text-2xl font-bold", "Page not found" }
                p { class: "opacity-70", "/{path}" }
                Link { to: Route::RootRedirect {}, class: "btn btn-outline mt-4", "Home" }
            }
        }
    )
}
