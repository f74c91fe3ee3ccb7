use dioxus::prelude::*;

use crate::client::{
    components::{AppLayout, RequireAdmin, RequireAuth},
    routes::{
        AccessDenied, AddNotification, Callback, Dashboard, Login, NotFound, Notifications,
        PublicDetail, RealEstateDetail, RealEstates, ReceivedNotifications, RootRedirect,
        Settings,
    },
};

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[route("/login")]
    Login {},

    #[route("/auth/callback#:fragment")]
    Callback { fragment: String },

    #[route("/public/real-estates/:id")]
    PublicDetail { id: String },

    #[layout(RequireAuth)]
        #[layout(AppLayout)]

        #[route("/")]
        RootRedirect {},

        #[route("/settings")]
        Settings {},

        #[route("/notifications")]
        Notifications {},

        #[route("/notifications/add")]
        AddNotification {},

        #[route("/sent-notifications")]
        ReceivedNotifications {},

        #[route("/access-denied")]
        AccessDenied {},

            #[layout(RequireAdmin)]

            #[route("/dashboard")]
            Dashboard {},

            #[route("/real-estates?:..query")]
            RealEstates { query: String },

            #[route("/real-estates/:id")]
            RealEstateDetail { id: String },

            #[end_layout]
        #[end_layout]
    #[end_layout]

    #[route("/:..segments")]
    NotFound { segments: Vec<String> },
}
