use std::sync::{Arc, RwLock};

use crate::model::user::UserDto;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct UserState {
    pub user: Option<UserDto>,
    /// Whether a profile fetch has completed since the last logout, successfully or not
    pub fetched: bool,
}

impl UserState {
    pub fn is_admin(&self) -> bool {
        self.user.as_ref().is_some_and(UserDto::is_admin)
    }
}

/// Cached profile of the authenticated user
#[derive(Debug, Clone, Default)]
pub struct ProfileStore {
    state: Arc<RwLock<UserState>>,
}

impl ProfileStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn snapshot(&self) -> UserState {
        self.state.read().unwrap_or_else(|e| e.into_inner()).clone()
    }

    pub fn user(&self) -> Option<UserDto> {
        self.snapshot().user
    }

    pub fn is_admin(&self) -> bool {
        self.state
            .read()
            .unwrap_or_else(|e| e.into_inner())
            .is_admin()
    }

    pub fn is_empty(&self) -> bool {
        self.state
            .read()
            .unwrap_or_else(|e| e.into_inner())
            .user
            .is_none()
    }

    pub(crate) fn set(&self, user: UserDto) {
        let mut state = self.state.write().unwrap_or_else(|e| e.into_inner());
        state.user = Some(user);
        state.fetched = true;
    }

    /// Records a finished fetch that produced no profile.
    pub(crate) fn mark_fetched(&self) {
        self.state.write().unwrap_or_else(|e| e.into_inner()).fetched = true;
    }

    pub(crate) fn clear(&self) {
        *self.state.write().unwrap_or_else(|e| e.into_inner()) = UserState::default();
    }
}
