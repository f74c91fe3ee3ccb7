//! Session state machine.
//!
//! The persisted token record is the source of truth for "logged in". The
//! [`SessionManager`] mirrors it in memory as a [`Session`] snapshot, keeps the
//! cached profile in sync, and is the only writer of either. Each profile fetch it
//! starts takes a ticket from a [`RequestSequencer`]; a fetch whose ticket is no
//! longer current when it resolves is ignored, so a late response can never revive a
//! session that was logged out or replaced in the meantime.

use std::sync::{
    atomic::{AtomicBool, Ordering},
    Arc, Mutex,
};

use dioxus_logger::tracing;

use crate::{
    api::ApiClient,
    error::Error,
    model::user::UserDto,
    service::sequence::RequestSequencer,
    store::ProfileStore,
};

/// Lifecycle position of the session
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionPhase {
    Uninitialized,
    Initializing,
    Authenticated,
    Unauthenticated,
}

/// Observable session snapshot
///
/// `is_authenticated` is true exactly when `token` is present.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    pub token: Option<String>,
    pub is_authenticated: bool,
    /// True until the startup restore has finished; guards show a loading state meanwhile
    pub is_initializing: bool,
}

impl Default for Session {
    fn default() -> Self {
        Self {
            token: None,
            is_authenticated: false,
            is_initializing: true,
        }
    }
}

impl Session {
    fn set_token(&mut self, token: Option<String>) {
        self.is_authenticated = token.is_some();
        self.token = token;
    }
}

/// Called with the new snapshot after every session change
pub type SessionListener = Arc<dyn Fn(&Session) + Send + Sync>;

#[derive(Debug)]
struct SessionState {
    session: Session,
    phase: SessionPhase,
}

pub struct SessionManager {
    api: Arc<ApiClient>,
    profile: ProfileStore,
    state: Mutex<SessionState>,
    initialized: AtomicBool,
    profile_requests: RequestSequencer,
    listeners: Mutex<Vec<SessionListener>>,
}

impl SessionManager {
    /// Creates the session manager and registers its forced logout as the API
    /// client's token expiry handler.
    ///
    /// # Arguments
    /// - `api` - Client shared with every other service; its token and user ID records back the session
    /// - `profile` - Profile cache the manager fills on login and empties on logout
    pub fn new(api: Arc<ApiClient>, profile: ProfileStore) -> Arc<Self> {
        let manager = Arc::new(Self {
            api,
            profile,
            state: Mutex::new(SessionState {
                session: Session::default(),
                phase: SessionPhase::Uninitialized,
            }),
            initialized: AtomicBool::new(false),
            profile_requests: RequestSequencer::new(),
            listeners: Mutex::new(Vec::new()),
        });

        let weak = Arc::downgrade(&manager);
        manager.api.register_expiry_handler(Arc::new(move || {
            if let Some(manager) = weak.upgrade() {
                manager.logout();
            }
        }));

        manager
    }

    pub fn api(&self) -> &Arc<ApiClient> {
        &self.api
    }

    pub fn profile(&self) -> &ProfileStore {
        &self.profile
    }

    pub fn session(&self) -> Session {
        self.lock_state().session.clone()
    }

    pub fn phase(&self) -> SessionPhase {
        self.lock_state().phase
    }

    /// Registers a listener notified after every session change.
    pub fn subscribe(&self, listener: SessionListener) {
        self.listeners
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .push(listener);
    }

    /// Restores the session from storage once per process.
    ///
    /// A stored token is trusted as-is: the session becomes authenticated before the
    /// profile fetch starts, and a failed fetch leaves it authenticated. Only a 401,
    /// through the expiry handler, logs the user out. Subsequent calls are no-ops.
    pub async fn initialize(&self) {
        if self.initialized.swap(true, Ordering::SeqCst) {
            tracing::debug!("Session already initialized");
            return;
        }

        self.update(|state| {
            state.phase = SessionPhase::Initializing;
            state.session.is_initializing = true;
        });

        let Some(token) = self.api.tokens().get() else {
            tracing::info!("No stored session found");
            self.update(|state| {
                state.phase = SessionPhase::Unauthenticated;
                state.session.set_token(None);
                state.session.is_initializing = false;
            });
            return;
        };

        let ticket = self.profile_requests.next();
        self.update(|state| {
            state.phase = SessionPhase::Authenticated;
            state.session.set_token(Some(token));
        });

        match self.api.get_current_user().await {
            Ok(user) if self.profile_requests.is_current(ticket) => {
                tracing::info!(user_id = %user.id, "Restored stored session");
                self.store_profile(user);
            }
            Ok(_) => tracing::debug!("Discarding profile of a superseded session"),
            Err(e) => {
                tracing::warn!("Failed to restore user profile, keeping stored session: {}", e);
                if self.profile_requests.is_current(ticket) {
                    self.profile.mark_fetched();
                }
            }
        }

        self.update(|state| state.session.is_initializing = false);
    }

    /// Persists `access_token`, marks the session authenticated and loads the profile.
    ///
    /// # Returns
    /// - `Ok(())` - Logged in; the profile is cached unless a newer login or a logout superseded this one
    /// - `Err(Error)` - The profile could not be fetched; unless superseded, the session was logged out
    pub async fn login(&self, access_token: &str) -> Result<(), Error> {
        let ticket = self.profile_requests.next();

        if let Err(e) = self.api.tokens().set(access_token) {
            tracing::error!("Failed to persist access token: {}", e);
        }

        self.update(|state| {
            state.phase = SessionPhase::Authenticated;
            state.session.set_token(Some(access_token.to_string()));
        });
        tracing::info!("Logged in, fetching user profile");

        match self.api.get_current_user().await {
            Ok(user) => {
                if self.profile_requests.is_current(ticket) {
                    tracing::info!(user_id = %user.id, "User profile loaded");
                    self.store_profile(user);
                    self.notify();
                } else {
                    tracing::debug!("Discarding profile of a superseded session");
                }

                Ok(())
            }
            Err(e) => {
                if self.profile_requests.is_current(ticket) {
                    tracing::error!("Failed to fetch user profile after login: {}", e);
                    self.logout();
                } else {
                    tracing::debug!("Superseded login failed: {}", e);
                }

                Err(e)
            }
        }
    }

    /// Clears the persisted token and user ID, the cached profile and the session.
    ///
    /// Safe to call repeatedly and from the 401 handler while requests are in flight;
    /// any pending profile fetch is invalidated.
    pub fn logout(&self) {
        self.profile_requests.invalidate();

        if let Err(e) = self.api.tokens().remove() {
            tracing::error!("Failed to remove stored access token: {}", e);
        }
        if let Err(e) = self.api.users().remove() {
            tracing::error!("Failed to remove stored user ID: {}", e);
        }
        self.profile.clear();

        self.update(|state| {
            state.phase = SessionPhase::Unauthenticated;
            state.session.set_token(None);
        });
        tracing::info!("Logged out");
    }

    /// Persists the user ID for per-user endpoints and caches the profile. Only
    /// called for the current profile request.
    fn store_profile(&self, user: UserDto) {
        if let Err(e) = self.api.users().set(&user.id) {
            tracing::error!(user_id = %user.id, "Failed to persist user ID: {}", e);
        }
        self.profile.set(user);
    }

    fn lock_state(&self) -> std::sync::MutexGuard<'_, SessionState> {
        self.state.lock().unwrap_or_else(|e| e.into_inner())
    }

    /// Applies `change` and notifies listeners with the resulting snapshot.
    fn update(&self, change: impl FnOnce(&mut SessionState)) {
        change(&mut self.lock_state());
        self.notify();
    }

    /// Runs every listener with the current snapshot. No lock is held while
    /// listeners run, so they may read the manager and its profile again.
    fn notify(&self) {
        let snapshot = self.lock_state().session.clone();

        let listeners = self
            .listeners
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .clone();
        for listener in listeners {
            listener(&snapshot);
        }
    }
}
