use dioxus::document::{Meta, Title};
use dioxus::prelude::*;
use havasi::{
    model::real_estate::RealEstateDto,
    service::comparison::{
        address_line, format_currency, lower_price_providers, lowest_price, offers_by_price,
        price_history, savings_percent,
    },
};

use crate::client::{
    app::Services,
    components::{ListingMap, Loading, Page, PriceTag},
    router::Route,
};

/// Listing detail for signed-in users, served from the loaded page when possible.
#[component]
pub fn RealEstateDetail(id: String) -> Element {
    let services = use_context::<Services>();
    let navigator = navigator();

    let estate = use_resource(use_reactive((&id,), move |(id,)| {
        let services = services.clone();
        async move {
            match services.directory.find_by_id(&id) {
                Some(estate) => Ok(estate),
                None => services.api().fetch_real_estate_by_id(&id).await,
            }
        }
    }));

    let content = match &*estate.read() {
        None => rsx!(Loading {}),
        Some(Err(e)) => {
            let message = e.user_message();
            rsx!(div { class: "alert alert-error", "{message}" })
        }
        Some(Ok(estate)) => rsx!(
            div { class: "flex gap-2",
                button {
                    class: "btn btn-sm btn-outline",
                    onclick: move |_| navigator.go_back(),
                    "Back"
                }
                Link {
                    to: Route::PublicDetail { id: estate.id.clone() },
                    class: "btn btn-sm btn-ghost",
                    "Shareable link"
                }
            }
            EstateDetails { estate: estate.clone() }
        ),
    };

    rsx!(
        Title { "Real Estate | Havasi" }
        Page { class: "flex flex-col gap-4", {content} }
    )
}

/// Listing detail reachable without signing in.
#[component]
pub fn PublicDetail(id: String) -> Element {
    let services = use_context::<Services>();

    let estate = use_resource(use_reactive((&id,), move |(id,)| {
        let services = services.clone();
        async move { services.api().fetch_real_estate_by_id(&id).await }
    }));

    let content = match &*estate.read() {
        None => rsx!(Loading {}),
        Some(Err(e)) => {
            let message = e.user_message();
            rsx!(div { class: "alert alert-error", "{message}" })
        }
        Some(Ok(estate)) => rsx!(EstateDetails { estate: estate.clone() }),
    };

    rsx!(
        Title { "Real Estate | Havasi" }
        Meta {
            name: "description",
            content: "Real estate listing compared across Czech providers."
        }
        Page { class: "flex flex-col gap-4 max-w-5xl mx-auto", {content} }
    )
}

#[component]
fn EstateDetails(estate: RealEstateDto) -> Element {
    let lowest = lowest_price(&estate);
    let savings = savings_percent(&estate, lowest);
    let cheaper_at = lower_price_providers(&estate).join(", ");
    let address = address_line(&estate.locality);
    let per_m2 = format_currency(estate.price_per_m2, &estate.currency);
    let description = estate.description.clone().unwrap_or_default();

    rsx!(
        div { class: "flex flex-col gap-1",
            h1 { class: "text-2xl font-bold", "{estate.name}" }
            p { class: "text-lg", PriceTag { estate: estate.clone() } }
            if lowest < estate.price {
                p { class: "text-error", "Save {savings}% at {cheaper_at}" }
            }
            p { class: "opacity-70", "{address}" }
        }
        div { class: "flex flex-wrap gap-2",
            span { class: "badge badge-outline", "{estate.size_in_m2} m²" }
            span { class: "badge badge-outline", "{per_m2} / m²" }
            span { class: "badge badge-outline", "{estate.main_category}" }
            span { class: "badge badge-outline", "{estate.sub_category}" }
            span { class: "badge badge-outline", "{estate.transaction_type}" }
            a {
                class: "badge badge-neutral",
                href: "{estate.url}",
                target: "_blank",
                "View on {estate.provider}"
            }
        }
        if !estate.images.is_empty() {
            div { class: "carousel carousel-center gap-2 rounded-box",
                for image in estate.images.iter().take(8) {
                    div { class: "carousel-item", key: "{image}",
                        img { class: "h-56 rounded-box", src: "{image}", alt: "{estate.name}" }
                    }
                }
            }
        }
        if !description.is_empty() {
            p { class: "whitespace-pre-line", "{description}" }
        }
        ProviderComparison { estate: estate.clone() }
        PriceHistory { estate: estate.clone() }
        ListingMap { estate: estate.clone() }
    )
}

#[component]
fn ProviderComparison(estate: RealEstateDto) -> Element {
    if estate.duplicates.is_empty() {
        return rsx! {};
    }

    let rows: Vec<_> = offers_by_price(&estate)
        .into_iter()
        .map(|offer| {
            (
                offer.provider.to_string(),
                format_currency(offer.price, &estate.currency),
                format_currency(offer.price_per_m2, &estate.currency),
                offer.url.to_string(),
                offer.is_original,
            )
        })
        .collect();

    rsx!(
        div { class: "overflow-x-auto",
            h2 { class: "text-xl font-semibold mb-2", "Provider comparison" }
            table { class: "table table-sm",
                thead {
                    tr {
                        th { "Provider" }
                        th { "Price" }
                        th { "Price per m²" }
                        th {}
                    }
                }
                tbody {
                    for (provider, price, per_m2, url, is_original) in rows {
                        tr { key: "{url}",
                            td {
                                "{provider}"
                                if is_original {
                                    span { class: "badge badge-sm badge-primary ml-2", "Original" }
                                }
                            }
                            td { "{price}" }
                            td { "{per_m2}" }
                            td {
                                a { class: "link", href: "{url}", target: "_blank", "Open" }
                            }
                        }
                    }
                }
            }
        }
    )
}

#[component]
fn PriceHistory(estate: RealEstateDto) -> Element {
    if estate.duplicates.is_empty() {
        return rsx! {};
    }

    let rows: Vec<_> = price_history(&estate)
        .into_iter()
        .map(|point| {
            let change = match point.change_percent {
                Some(change) => format!("{:+.1}%", change),
                None => "-".to_string(),
            };

            (
                point.offer.provider.to_string(),
                format_currency(point.offer.price, &estate.currency),
                change,
            )
        })
        .collect();

    rsx!(
        div { class: "overflow-x-auto",
            h2 { class: "text-xl font-semibold mb-2", "Price history" }
            table { class: "table table-sm",
                thead {
                    tr {
                        th { "Provider" }
                        th { "Price" }
                        th { "Change" }
                    }
                }
                tbody {
                    for (index, (provider, price, change)) in rows.into_iter().enumerate() {
                        tr { key: "{index}",
                            td { "{provider}" }
                            td { "{price}" }
                            td { "{change}" }
                        }
                    }
                }
            }
        }
    )
}
