use dioxus::document::Title;
use dioxus::prelude::*;
use havasi::{
    model::real_estate::{BuildingType, SortDirection, TransactionType},
    service::{BrowserEvent, ListingBrowser, ListingFilter, PageItem, SearchDebouncer},
};

use crate::client::{
    app::Services,
    components::{ListingCard, ListingsMap, Loading, Page},
    router::Route,
};

#[component]
pub fn RealEstates(query: String) -> Element {
    let services = use_context::<Services>();
    let navigator = navigator();

    let page_size = services.config.page_size;
    let directory = services.directory.clone();
    let mut browser =
        use_signal(move || ListingBrowser::from_query_string(page_size, directory, &query));
    let mut search_text = use_signal(|| browser.peek().state().search.clone());
    let debounce = services.config.search_debounce();
    let debouncer = use_hook(move || SearchDebouncer::new(debounce));

    let api = services.api().clone();
    let dispatch = use_callback(move |event: BrowserEvent| {
        let fetch = browser.write().handle(event);
        navigator.replace(Route::RealEstates {
            query: browser.peek().query_string(),
        });

        let api = api.clone();
        spawn(async move {
            let result = api.fetch_real_estates(&fetch.query).await;
            browser.write().apply(&fetch, result);
        });
    });

    use_future(move || async move { dispatch.call(BrowserEvent::Retry) });

    let on_search = {
        let debouncer = debouncer.clone();
        move |evt: FormEvent| {
            let term = evt.value();
            search_text.set(term.clone());

            let debouncer = debouncer.clone();
            spawn(async move {
                if let Some(term) = debouncer.settle(term).await {
                    dispatch.call(BrowserEvent::SearchDebounced(term));
                }
            });
        }
    };

    let clear_search = move |_: MouseEvent| {
        search_text.set(String::new());
        debouncer.cancel();
        dispatch.call(BrowserEvent::SearchDebounced(String::new()));
    };

    let state = browser.read().state().clone();
    let pagination = browser.read().pagination();
    let page_size = browser.read().page_size();
    let first_shown = (state.page - 1) * page_size + 1;
    let last_shown = (state.page - 1) * page_size + state.listings.len();
    let map_key = format!("{}-{}", state.page, browser.read().query_string());

    rsx!(
        Title { "Real Estates | Havasi" }
        Page { class: "flex flex-col gap-4",
            div { class: "flex flex-wrap justify-between items-end gap-2",
                div {
                    h1 { class: "text-3xl font-bold", "Real Estates" }
                    p { class: "opacity-70", "Browse available real estates" }
                }
                div { class: "flex gap-2",
                    select {
                        class: "select select-sm select-bordered",
                        value: state.sort_direction.as_str(),
                        onchange: move |evt| {
                            if let Some(direction) = SortDirection::parse(&evt.value()) {
                                dispatch.call(BrowserEvent::SortChanged(direction));
                            }
                        },
                        option { value: "DESC", "Newest first" }
                        option { value: "ASC", "Oldest first" }
                    }
                    select {
                        class: "select select-sm select-bordered",
                        value: state.transaction.as_str(),
                        onchange: move |evt| {
                            if let Some(transaction) = TransactionType::parse(&evt.value()) {
                                dispatch.call(BrowserEvent::TransactionChanged(transaction));
                            }
                        },
                        option { value: "SALE", "For Sale" }
                        option { value: "RENT", "For Rent" }
                    }
                }
            }
            div { class: "flex justify-center",
                label { class: "input input-bordered flex items-center gap-2 w-full max-w-xl",
                    input {
                        class: "grow",
                        r#type: "text",
                        placeholder: "Search real estates by name, address or description...",
                        value: "{search_text}",
                        oninput: on_search,
                    }
                    if !search_text.read().is_empty() {
                        button { class: "btn btn-ghost btn-xs", onclick: clear_search, "✕" }
                    }
                }
            }
            FilterPanel {
                filter: state.filter.clone(),
                on_apply: move |filter| dispatch.call(BrowserEvent::FilterChanged(filter)),
            }
            if state.loading {
                Loading {}
            } else if let Some(error) = state.error.clone() {
                div { class: "alert alert-error",
                    span { "{error}" }
                    button {
                        class: "btn btn-link btn-sm",
                        onclick: move |_| dispatch.call(BrowserEvent::Retry),
                        "Try again"
                    }
                }
            } else if state.listings.is_empty() {
                p { class: "text-center my-12", "No real estates found." }
            } else {
                div { class: "grid grid-cols-1 md:grid-cols-2 xl:grid-cols-3 gap-4",
                    for estate in state.listings.iter() {
                        ListingCard { key: "{estate.id}", estate: estate.clone() }
                    }
                }
                div { class: "flex flex-wrap justify-between items-center gap-2",
                    p { class: "text-sm opacity-70",
                        "Showing {first_shown} - {last_shown} of at least {state.estimated_total} results"
                        if !state.search.is_empty() {
                            " for \"{state.search}\""
                        }
                    }
                    Pagination {
                        items: pagination,
                        page: state.page,
                        has_more: state.has_more,
                        on_change: move |page| dispatch.call(BrowserEvent::PageChanged(page)),
                    }
                }
                ListingsMap { key: "{map_key}", estates: state.listings.clone() }
            }
        }
    )
}

#[component]
fn Pagination(
    items: Vec<PageItem>,
    page: usize,
    has_more: bool,
    on_change: EventHandler<usize>,
) -> Element {
    if items.len() <= 1 && !has_more {
        return rsx! {};
    }

    rsx!(
        div { class: "join",
            button {
                class: "join-item btn btn-sm",
                disabled: page == 1,
                onclick: move |_| on_change.call(1),
                "«"
            }
            button {
                class: "join-item btn btn-sm",
                disabled: page == 1,
                onclick: move |_| on_change.call(page - 1),
                "‹"
            }
            for (index, item) in items.into_iter().enumerate() {
                {match item {
                    PageItem::Page { number, active } => rsx!(
                        button {
                            key: "{index}",
                            class: if active { "join-item btn btn-sm btn-active" } else { "join-item btn btn-sm" },
                            onclick: move |_| on_change.call(number),
                            "{number}"
                        }
                    ),
                    PageItem::Ellipsis => rsx!(
                        button { key: "{index}", class: "join-item btn btn-sm btn-disabled", "…" }
                    ),
                }}
            }
            button {
                class: "join-item btn btn-sm",
                disabled: !has_more,
                onclick: move |_| on_change.call(page + 1),
                "›"
            }
        }
    )
}

/// Advanced search bounds, applied together
#[component]
fn FilterPanel(filter: ListingFilter, on_apply: EventHandler<ListingFilter>) -> Element {
    let mut building = use_signal(|| filter.building);
    let size_min = use_signal(|| filter.size_min.to_string());
    let size_max = use_signal(|| filter.size_max.to_string());
    let price_min = use_signal(|| filter.price_min.to_string());
    let price_max = use_signal(|| filter.price_max.to_string());

    let apply = move |_: MouseEvent| {
        let defaults = ListingFilter::default();
        on_apply.call(ListingFilter {
            building: building(),
            size_min: size_min.read().trim().parse().unwrap_or(defaults.size_min),
            size_max: size_max.read().trim().parse().unwrap_or(defaults.size_max),
            price_min: price_min.read().trim().parse().unwrap_or(defaults.price_min),
            price_max: price_max.read().trim().parse().unwrap_or(defaults.price_max),
        });
    };

    rsx!(
        details { class: "collapse collapse-arrow bg-base-200",
            summary { class: "collapse-title font-medium", "Advanced search" }
            div { class: "collapse-content flex flex-wrap items-end gap-2",
                label { class: "form-control",
                    span { class: "label-text", "Building" }
                    select {
                        class: "select select-sm select-bordered",
                        value: building().as_str(),
                        onchange: move |evt| {
                            if let Some(selected) = BuildingType::parse(&evt.value()) {
                                building.set(selected);
                            }
                        },
                        for option_type in BuildingType::ALL {
                            option { value: option_type.as_str(), "{option_type}" }
                        }
                    }
                }
                RangeInput { label: "Size (m²)", from: size_min, to: size_max }
                RangeInput { label: "Price", from: price_min, to: price_max }
                button { class: "btn btn-sm btn-primary", onclick: apply, "Apply" }
            }
        }
    )
}

#[component]
fn RangeInput(label: &'static str, from: Signal<String>, to: Signal<String>) -> Element {
    let (mut from, mut to) = (from, to);

    rsx!(
        label { class: "form-control",
            span { class: "label-text", "{label}" }
            div { class: "flex gap-1",
                input {
                    class: "input input-sm input-bordered w-28",
                    r#type: "number",
                    value: "{from}",
                    oninput: move |evt| from.set(evt.value()),
                }
                input {
                    class: "input input-sm input-bordered w-28",
                    r#type: "number",
                    value: "{to}",
                    oninput: move |evt| to.set(evt.value()),
                }
            }
        }
    )
}
