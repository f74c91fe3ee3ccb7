use dioxus::prelude::*;
use havasi::{
    auth::{RouteAccess, RouteDecision, Session},
    store::UserState,
};

use crate::client::{router::Route, routes::AccessDenied};

#[component]
pub fn RequireAuth() -> Element {
    guarded(RouteAccess::Authenticated)
}

#[component]
pub fn RequireAdmin() -> Element {
    guarded(RouteAccess::Admin)
}

fn guarded(access: RouteAccess) -> Element {
    let session = use_context::<SyncSignal<Session>>();
    let profile = use_context::<SyncSignal<UserState>>();

    let decision = RouteDecision::for_session(&session.read(), &profile.read(), access);

    match decision {
        RouteDecision::Pending => rsx!(Loading {}),
        RouteDecision::Login => rsx!(Redirect { to: Route::Login {} }),
        RouteDecision::AccessDenied => rsx!(AccessDenied {}),
        RouteDecision::Render => rsx!(Outlet::<Route> {}),
    }
}

/// Replaces the current history entry with `to` once mounted.
#[component]
pub fn Redirect(to: Route) -> Element {
    let navigator = navigator();

    use_effect(move || {
        navigator.replace(to.clone());
    });

    rsx! {}
}

#[component]
pub fn Loading() -> Element {
    rsx!(
        div { class: "flex justify-center items-center my-16",
            span { class: "loading loading-spinner loading-lg" }
        }
    )
}
