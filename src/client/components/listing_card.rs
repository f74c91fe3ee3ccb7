use dioxus::prelude::*;
use havasi::{
    model::real_estate::RealEstateDto,
    service::comparison::{
        address_line, format_currency, lower_price_providers, lowest_price, savings_percent,
    },
};

use crate::client::router::Route;

/// Listing price, struck through next to the cheapest duplicate when one is cheaper
#[component]
pub fn PriceTag(estate: RealEstateDto) -> Element {
    let lowest = lowest_price(&estate);
    let price = format_currency(estate.price, &estate.currency);

    if lowest < estate.price {
        let cheapest = format_currency(lowest, &estate.currency);

        rsx!(
            span { class: "line-through opacity-60", "{price}" }
            span { class: "ml-2 text-error font-semibold", "{cheapest}" }
        )
    } else {
        rsx!(span { class: "opacity-80", "{price}" })
    }
}

#[component]
pub fn ListingCard(estate: RealEstateDto) -> Element {
    let lowest = lowest_price(&estate);
    let savings = savings_percent(&estate, lowest);
    let cheaper_at = lower_price_providers(&estate).join(", ");
    let address = address_line(&estate.locality);
    let duplicates = estate.duplicates.len();
    let image = estate.images.first().cloned();

    rsx!(
        Link {
            to: Route::RealEstateDetail { id: estate.id.clone() },
            class: "card bg-base-100 shadow-sm hover:shadow-lg transition-shadow h-full",
            if let Some(image) = image {
                figure {
                    img {
                        class: "h-48 w-full object-cover",
                        src: "{image}",
                        alt: "{estate.name}",
                    }
                }
            }
            div { class: "card-body p-4",
                h2 { class: "card-title text-base", "{estate.name}" }
                p { PriceTag { estate: estate.clone() } }
                div { class: "flex justify-between text-sm opacity-70",
                    span { "{estate.size_in_m2} m²" }
                    span { "{estate.sub_category}" }
                }
                if !address.is_empty() {
                    p { class: "text-sm opacity-70", "{address}" }
                }
                div { class: "card-actions justify-between items-center mt-2",
                    span { class: "badge badge-neutral", "{estate.provider}" }
                    div { class: "flex gap-1",
                        if lowest < estate.price {
                            span {
                                class: "badge badge-error tooltip",
                                "data-tip": "{cheaper_at}",
                                "Save {savings}%"
                            }
                        }
                        if duplicates > 0 {
                            span { class: "badge badge-info",
                                if duplicates == 1 { "1 duplicate" } else { "{duplicates} duplicates" }
                            }
                        }
                    }
                }
            }
        }
    )
}
