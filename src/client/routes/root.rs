use dioxus::prelude::*;
use havasi::{
    auth::guard::{root_redirect, Landing},
    store::UserState,
};

use crate::client::{
    components::{Loading, Redirect},
    router::Route,
};

/// Sends admins to the dashboard and everyone else to their settings.
#[component]
pub fn RootRedirect() -> Element {
    let profile = use_context::<SyncSignal<UserState>>();
    let state = profile.read().clone();

    if state.user.is_none() && !state.fetched {
        return rsx!(Loading {});
    }

    let to = match root_redirect(&state) {
        Landing::Dashboard => Route::Dashboard {},
        Landing::Settings => Route::Settings {},
    };

    rsx!(Redirect { to })
}
