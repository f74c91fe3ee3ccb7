use dioxus::document::Title;
use dioxus::prelude::*;
use havasi::service::{
    comparison::format_currency,
    sent::{self, PageRequest},
    SentNotificationPager,
};

use crate::client::{
    app::Services,
    components::{Loading, Page},
    router::Route,
};

#[component]
pub fn ReceivedNotifications() -> Element {
    let services = use_context::<Services>();
    let mut pager = use_signal(SentNotificationPager::new);

    let api = services.api().clone();
    let load = use_callback(move |request: PageRequest| {
        let api = api.clone();
        spawn(async move {
            let result = sent::fetch_page(&api, &request).await;
            pager.write().apply(&request, result);
        });
    });

    use_future(move || async move {
        let request = pager.write().start();
        load.call(request);
    });

    let previous = move |_: MouseEvent| {
        let request = pager.write().previous_page();
        if let Some(request) = request {
            load.call(request);
        }
    };
    let next = move |_: MouseEvent| {
        let request = pager.write().next_page();
        if let Some(request) = request {
            load.call(request);
        }
    };
    let retry = move |_: MouseEvent| {
        let request = pager.write().start();
        load.call(request);
    };

    let state = pager.read().state().clone();

    rsx!(
        Title { "Received Notifications | Havasi" }
        Page { class: "flex flex-col gap-4",
            h1 { class: "text-3xl font-bold", "Received Notifications" }

            if let Some(error) = state.error.clone() {
                div { role: "alert", class: "alert alert-error",
                    span { "{error}" }
                    button { class: "btn btn-sm", onclick: retry, "Try again" }
                }
            }

            if state.loading {
                Loading {}
            } else if state.notifications.is_empty() && state.error.is_none() {
                p { class: "text-center my-12", "No notifications on this page." }
            } else {
                div { class: "overflow-x-auto",
                    table { class: "table",
                        thead {
                            tr {
                                th { "Sent" }
                                th { "Listing" }
                                th { "Price" }
                                th { "City" }
                                th { "Provider" }
                                th { "Type" }
                            }
                        }
                        tbody {
                            for sent in state.notifications.iter() {
                                {
                                    let sent_at = sent
                                        .sent_at
                                        .as_ref()
                                        .map(|t| t.date_time())
                                        .unwrap_or_else(|| "-".to_string());
                                    let price = format_currency(sent.real_estate.price, "CZK");
                                    rsx! {
                                        tr { key: "{sent.notification_id}-{sent.real_estate.id}",
                                            td { "{sent_at}" }
                                            td {
                                                Link {
                                                    to: Route::PublicDetail { id: sent.real_estate.id.clone() },
                                                    class: "link link-hover",
                                                    "{sent.real_estate.name}"
                                                }
                                                a {
                                                    href: "{sent.real_estate.url}",
                                                    target: "_blank",
                                                    rel: "noopener noreferrer",
                                                    class: "link text-xs ml-2",
                                                    "Open"
                                                }
                                            }
                                            td { "{price}" }
                                            td { "{sent.real_estate.city}" }
                                            td { "{sent.real_estate.provider}" }
                                            td { span { class: "badge badge-outline", "{sent.kind}" } }
                                        }
                                    }
                                }
                            }
                        }
                    }
                }
            }

            div { class: "join self-center",
                button {
                    class: "join-item btn",
                    disabled: state.loading || state.page <= 1,
                    onclick: previous,
                    "«"
                }
                button { class: "join-item btn", "Page {state.page}" }
                button {
                    class: "join-item btn",
                    disabled: state.loading || !state.has_more,
                    onclick: next,
                    "»"
                }
            }
        }
    )
}
