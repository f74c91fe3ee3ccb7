use std::sync::Arc;

use dioxus::prelude::*;
use dioxus_logger::tracing;
use havasi::{
    api::ApiClient,
    auth::{GoogleLogin, Session, SessionManager},
    config::Config,
    map::Geocoder,
    platform,
    service::NotificationManager,
    storage::{OAuthStateService, ThemeService, TokenService, UserService},
    store::{ErrorState, ProfileStore, RealEstateDirectory, UserState},
};

use crate::client::{components::ErrorToast, router::Route};

const TAILWIND_CSS: Asset = asset!("/assets/tailwind.css");

/// Long-lived services shared by every page
#[derive(Clone)]
pub struct Services {
    pub config: Arc<Config>,
    pub session: Arc<SessionManager>,
    pub directory: RealEstateDirectory,
    pub notifications: NotificationManager,
    /// Absent when no Google client ID is configured
    pub google: Option<Arc<GoogleLogin>>,
    pub themes: ThemeService,
    pub geocoder: Geocoder,
}

impl Services {
    fn from_env() -> Self {
        let config = Config::from_env().unwrap_or_else(|e| {
            tracing::error!("Invalid configuration, using defaults: {}", e);
            Config::default()
        });

        let store = platform::default_store(&config);
        let api = Arc::new(ApiClient::new(
            config.api_url.clone(),
            TokenService::new(store.clone()),
            UserService::new(store.clone()),
        ));

        let google = match GoogleLogin::new(&config, OAuthStateService::new(store.clone())) {
            Ok(google) => Some(Arc::new(google)),
            Err(e) => {
                tracing::error!("Google login is unavailable: {}", e);
                None
            }
        };

        Self {
            session: SessionManager::new(api.clone(), ProfileStore::new()),
            directory: RealEstateDirectory::new(),
            notifications: NotificationManager::new(api),
            google,
            themes: ThemeService::new(store),
            geocoder: Geocoder::new(config.geocoder_url.clone()),
            config: Arc::new(config),
        }
    }

    pub fn api(&self) -> &Arc<ApiClient> {
        self.session.api()
    }
}

#[component]
pub fn App() -> Element {
    let services = use_context_provider(Services::from_env);

    let initial_session = services.session.session();
    let session: SyncSignal<Session> =
        use_context_provider(|| Signal::new_maybe_sync(initial_session));
    let profile: SyncSignal<UserState> =
        use_context_provider(|| Signal::new_maybe_sync(UserState::default()));
    use_context_provider(|| Signal::new(ErrorState::default()));
    let initial_theme = services.themes.get();
    let theme = use_context_provider(|| Signal::new(initial_theme));

    // Mirror every session and profile change, including forced logouts, into the signals
    use_hook(|| {
        let store = services.session.profile().clone();
        services.session.subscribe(Arc::new(move |snapshot: &Session| {
            let (mut session, mut profile) = (session, profile);
            session.set(snapshot.clone());
            profile.set(store.snapshot());
        }));
    });

    let restore = services.clone();
    use_future(move || {
        let services = restore.clone();
        async move { services.session.initialize().await }
    });

    rsx!(
        document::Stylesheet { href: TAILWIND_CSS }
        div {
            "data-theme": "{theme}",
            class: "min-h-screen bg-base-100",
            Router::<Route> {}
            ErrorToast {}
        }
    )
}
