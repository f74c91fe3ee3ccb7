use dioxus::prelude::*;
use havasi::{
    map::{geocode_in_batches, partition, LatLng, MapView},
    model::real_estate::RealEstateDto,
};

use crate::client::{app::Services, router::Route};

#[component]
fn MapFrame(view: MapView, marker: Option<LatLng>, height: u32) -> Element {
    let src = view.embed_url(marker);

    rsx!(
        iframe {
            class: "w-full rounded-box border border-base-300",
            height: "{height}",
            src: "{src}",
            title: "Map",
        }
    )
}

/// Map of a single listing, geocoding its address when no coordinates are stored
#[component]
pub fn ListingMap(estate: RealEstateDto) -> Element {
    let services = use_context::<Services>();

    let location = use_resource(use_reactive((&estate,), move |(estate,)| {
        let geocoder = services.geocoder.clone();
        async move { geocoder.locate(&estate).await }
    }));

    let location = *location.read();

    match location {
        None => rsx!(
            div { class: "skeleton h-96 w-full" }
        ),
        Some(Some(point)) => rsx!(
            MapFrame { view: MapView::fit(&[point]), marker: Some(point), height: 400 }
        ),
        Some(None) => rsx!(
            div { class: "alert alert-warning", "Location could not be determined." }
        ),
    }
}

/// Map of a page of listings.
///
/// Listings with stored coordinates are shown at once; the rest are geocoded in
/// small batches and added as they resolve. Key the component by page so a new
/// page starts a fresh geocoding run.
#[component]
pub fn ListingsMap(estates: Vec<RealEstateDto>) -> Element {
    let services = use_context::<Services>();

    let (initial, pending) = use_hook(|| partition(&estates));
    let mut located = use_signal(move || initial);

    use_future(move || {
        let geocoder = services.geocoder.clone();
        let pending = pending.clone();
        async move {
            geocode_in_batches(&geocoder, pending, |estate, point| {
                located.write().push((estate.clone(), point));
            })
            .await;
        }
    });

    let points: Vec<LatLng> = located.read().iter().map(|(_, point)| *point).collect();
    let marker = match points.as_slice() {
        [point] => Some(*point),
        _ => None,
    };
    let view = MapView::fit(&points);

    rsx!(
        div { class: "flex flex-col gap-2",
            MapFrame { view, marker, height: 360 }
            ul { class: "flex flex-wrap gap-2 text-sm",
                for (estate, point) in located.read().iter() {
                    li { key: "{estate.id}",
                        Link {
                            to: Route::RealEstateDetail { id: estate.id.clone() },
                            class: "link link-hover",
                            "{estate.name}"
                        }
                        a {
                            class: "ml-1 opacity-60",
                            href: "https://www.openstreetmap.org/?mlat={point.lat}&mlon={point.lon}#map=17/{point.lat}/{point.lon}",
                            target: "_blank",
                            "(map)"
                        }
                    }
                }
            }
        }
    )
}
