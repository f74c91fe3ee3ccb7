use crate::{auth::session::Session, store::user::UserState};

/// Who may open a route
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RouteAccess {
    Public,
    Authenticated,
    Admin,
}

/// What a guarded route should render
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RouteDecision {
    /// Session or profile is still loading
    Pending,
    /// Redirect to the login page
    Login,
    AccessDenied,
    Render,
}

impl RouteDecision {
    /// Decides how to handle navigation to a route requiring `access`.
    ///
    /// Admin routes wait for the profile fetch instead of denying access while the
    /// profile is still unknown.
    pub fn for_session(session: &Session, profile: &UserState, access: RouteAccess) -> Self {
        if access == RouteAccess::Public {
            return Self::Render;
        }

        if session.is_initializing {
            return Self::Pending;
        }

        if !session.is_authenticated {
            return Self::Login;
        }

        match access {
            RouteAccess::Admin if profile.user.is_none() && !profile.fetched => Self::Pending,
            RouteAccess::Admin if !profile.is_admin() => Self::AccessDenied,
            _ => Self::Render,
        }
    }
}

/// Landing page for `/`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Landing {
    Dashboard,
    Settings,
}

/// Admins land on the dashboard, everyone else on their settings.
pub fn root_redirect(profile: &UserState) -> Landing {
    if profile.is_admin() {
        Landing::Dashboard
    } else {
        Landing::Settings
    }
}
