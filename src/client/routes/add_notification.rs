use dioxus::document::Title;
use dioxus::prelude::*;
use havasi::{
    model::real_estate::{BuildingType, TransactionType},
    service::{ChannelKind, NotificationForm},
    store::ErrorState,
};

use crate::client::{
    app::Services,
    components::{raise_error, Page},
    router::Route,
};

#[component]
pub fn AddNotification() -> Element {
    let services = use_context::<Services>();
    let errors = use_context::<Signal<ErrorState>>();
    let navigator = use_navigator();

    let mut form = use_signal(NotificationForm::default);
    let mut submitting = use_signal(|| false);

    let manager = services.notifications.clone();
    let submit = move |event: FormEvent| {
        event.prevent_default();
        if submitting() {
            return;
        }

        let command = match form.read().to_command() {
            Ok(command) => command,
            Err(e) => {
                raise_error(errors, &e);
                return;
            }
        };

        submitting.set(true);
        let manager = manager.clone();
        spawn(async move {
            match manager.create(&command).await {
                Ok(()) => {
                    navigator.push(Route::Notifications {});
                }
                Err(e) => {
                    raise_error(errors, &e);
                    submitting.set(false);
                }
            }
        });
    };

    let current = form.read().clone();

    rsx!(
        Title { "Add Notification | Havasi" }
        Page { class: "flex justify-center",
            form { class: "card bg-base-200 w-full max-w-2xl", onsubmit: submit,
                div { class: "card-body flex flex-col gap-3",
                    h1 { class: "card-title text-2xl", "Add Notification" }

                    TextField {
                        label: "Name",
                        value: current.name.clone(),
                        oninput: move |value| form.write().name = value,
                    }

                    label { class: "form-control",
                        span { class: "label-text", "Type" }
                        select {
                            class: "select select-bordered",
                            value: current.channel.as_str(),
                            onchange: move |event: FormEvent| {
                                if let Some(kind) = ChannelKind::parse(&event.value()) {
                                    form.write().channel = kind;
                                }
                            },
                            for kind in ChannelKind::ALL {
                                option { value: kind.as_str(), selected: kind == current.channel, "{kind.label()}" }
                            }
                        }
                    }

                    {match current.channel {
                        ChannelKind::Email => rsx! {
                            TextField {
                                label: "Email",
                                value: current.email.clone(),
                                input_type: "email",
                                oninput: move |value| form.write().email = value,
                            }
                        },
                        ChannelKind::Webhook => rsx! {
                            TextField {
                                label: "URL",
                                value: current.url.clone(),
                                input_type: "url",
                                oninput: move |value| form.write().url = value,
                            }
                        },
                        ChannelKind::Discord => rsx! {
                            TextField {
                                label: "Discord Webhook ID",
                                value: current.webhook_id.clone(),
                                oninput: move |value| form.write().webhook_id = value,
                            }
                            TextField {
                                label: "Discord Token",
                                value: current.token.clone(),
                                input_type: "password",
                                oninput: move |value| form.write().token = value,
                            }
                        },
                    }}

                    div { class: "grid grid-cols-2 gap-3",
                        label { class: "form-control",
                            span { class: "label-text", "Building type" }
                            select {
                                class: "select select-bordered",
                                onchange: move |event: FormEvent| {
                                    if let Some(building) = BuildingType::parse(&event.value()) {
                                        form.write().building_type = building;
                                    }
                                },
                                for building in BuildingType::ALL {
                                    option {
                                        value: building.as_str(),
                                        selected: building == current.building_type,
                                        "{building}"
                                    }
                                }
                            }
                        }
                        label { class: "form-control",
                            span { class: "label-text", "Transaction type" }
                            select {
                                class: "select select-bordered",
                                onchange: move |event: FormEvent| {
                                    if let Some(transaction) = TransactionType::parse(&event.value()) {
                                        form.write().transaction_type = transaction;
                                    }
                                },
                                for transaction in [TransactionType::Sale, TransactionType::Rent] {
                                    option {
                                        value: transaction.as_str(),
                                        selected: transaction == current.transaction_type,
                                        "{transaction}"
                                    }
                                }
                            }
                        }
                        TextField {
                            label: "Size from (m²)",
                            value: current.size_from.clone(),
                            input_type: "number",
                            oninput: move |value| form.write().size_from = value,
                        }
                        TextField {
                            label: "Size to (m²)",
                            value: current.size_to.clone(),
                            input_type: "number",
                            oninput: move |value| form.write().size_to = value,
                        }
                        TextField {
                            label: "Price from",
                            value: current.price_from.clone(),
                            input_type: "number",
                            oninput: move |value| form.write().price_from = value,
                        }
                        TextField {
                            label: "Price to",
                            value: current.price_to.clone(),
                            input_type: "number",
                            oninput: move |value| form.write().price_to = value,
                        }
                    }

                    TextField {
                        label: "Sub-types (comma separated, e.g. 2+kk, 3+1)",
                        value: current.sub_types.clone(),
                        oninput: move |value| form.write().sub_types = value,
                    }

                    div { class: "card-actions justify-end",
                        Link { to: Route::Notifications {}, class: "btn btn-ghost", "Cancel" }
                        button {
                            class: "btn btn-primary",
                            r#type: "submit",
                            disabled: submitting(),
                            if submitting() {
                                span { class: "loading loading-spinner loading-sm" }
                            }
                            "Create"
                        }
                    }
                }
            }
        }
    )
}

#[component]
fn TextField(
    label: &'static str,
    value: String,
    #[props(default = "text")] input_type: &'static str,
    oninput: EventHandler<String>,
) -> Element {
    rsx!(
        label { class: "form-control",
            span { class: "label-text", "{label}" }
            input {
                class: "input input-bordered",
                r#type: input_type,
                value: "{value}",
                oninput: move |event: FormEvent| oninput.call(event.value()),
            }
        }
    )
}
