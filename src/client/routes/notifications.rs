use dioxus::document::Title;
use dioxus::prelude::*;
use havasi::{
    model::notification::{FilterRange, NotificationDto},
    service::{notification::NotificationsState, RowAction},
    store::ErrorState,
};

use crate::client::{
    app::Services,
    components::{raise_error, Loading, Page},
    router::Route,
};

#[derive(Clone, Copy, PartialEq)]
enum RowCommand {
    Toggle,
    Delete,
}

#[component]
pub fn Notifications() -> Element {
    let services = use_context::<Services>();
    let errors = use_context::<Signal<ErrorState>>();

    let manager = services.notifications.clone();
    let initial = manager.clone();
    let mut state = use_signal(move || {
        let mut snapshot = initial.snapshot();
        snapshot.loading = true;
        snapshot
    });

    let refresh_manager = manager.clone();
    use_future(move || {
        let manager = refresh_manager.clone();
        async move {
            if let Err(e) = manager.refresh().await {
                raise_error(errors, &e);
            }
            state.set(manager.snapshot());
        }
    });

    let run = use_callback(move |(id, command): (String, RowCommand)| {
        let manager = manager.clone();
        spawn(async move {
            let action = async {
                match command {
                    RowCommand::Toggle => manager.toggle(&id).await,
                    RowCommand::Delete => manager.delete(&id).await,
                }
            };
            // join polls in order: the row is already marked busy when the snapshot is taken
            let (result, ()) = futures::join!(action, async {
                state.set(manager.snapshot());
            });

            if let Err(e) = result {
                raise_error(errors, &e);
            }
            state.set(manager.snapshot());
        });
    });

    let current = state.read().clone();

    rsx!(
        Title { "Notifications | Havasi" }
        Page { class: "flex flex-col gap-4",
            div { class: "flex justify-between items-center",
                h1 { class: "text-3xl font-bold", "Notifications" }
                Link { to: Route::AddNotification {}, class: "btn btn-primary", "Add Notification" }
            }
            if current.loading && current.notifications.is_empty() {
                Loading {}
            } else if current.notifications.is_empty() {
                p { class: "text-center my-12", "No notifications configured yet." }
            } else {
                div { class: "overflow-x-auto",
                    table { class: "table",
                        thead {
                            tr {
                                th { "Name" }
                                th { "Type" }
                                th { "Destination" }
                                th { "Filter" }
                                th { "Status" }
                                th {}
                            }
                        }
                        tbody {
                            for notification in current.notifications.iter() {
                                NotificationRow {
                                    key: "{notification.id}",
                                    notification: notification.clone(),
                                    action: current.action(&notification.id),
                                    on_toggle: move |id| run.call((id, RowCommand::Toggle)),
                                    on_delete: move |id| run.call((id, RowCommand::Delete)),
                                }
                            }
                        }
                    }
                }
            }
        }
    )
}

#[component]
fn NotificationRow(
    notification: NotificationDto,
    action: RowAction,
    on_toggle: EventHandler<String>,
    on_delete: EventHandler<String>,
) -> Element {
    let busy = action != RowAction::Idle;
    let (label, destination) = notification.channel.destination();
    let filter = &notification.filter;
    let size = FilterRange::describe(filter.size.as_ref());
    let price = FilterRange::describe(filter.price.as_ref());
    let sub_types = filter
        .sub_types
        .as_ref()
        .map(|sub_types| sub_types.join(", "))
        .unwrap_or_else(|| "Any".to_string());
    let kind = notification.notification_type().as_str();
    let toggle_label = match (action, notification.enabled) {
        (RowAction::Enabling, _) => "Enabling…",
        (RowAction::Disabling, _) => "Disabling…",
        (_, true) => "Disable",
        (_, false) => "Enable",
    };
    let (toggle_id, delete_id) = (notification.id.clone(), notification.id.clone());

    rsx!(
        tr {
            td { "{notification.name}" }
            td { span { class: "badge badge-outline", "{kind}" } }
            td { class: "text-sm", "{label}: {destination}" }
            td { class: "text-sm",
                p { "{filter.building_type} / {filter.transaction_type}" }
                p { "Size: {size}" }
                p { "Price: {price}" }
                p { "Sub-types: {sub_types}" }
            }
            td {
                if notification.enabled {
                    span { class: "badge badge-success", "Enabled" }
                } else {
                    span { class: "badge badge-ghost", "Disabled" }
                }
            }
            td { class: "flex gap-2",
                button {
                    class: "btn btn-sm",
                    disabled: busy,
                    onclick: move |_| on_toggle.call(toggle_id.clone()),
                    "{toggle_label}"
                }
                button {
                    class: "btn btn-sm btn-error",
                    disabled: busy,
                    onclick: move |_| on_delete.call(delete_id.clone()),
                    if action == RowAction::Deleting { "Deleting…" } else { "Delete" }
                }
            }
        }
    )
}
