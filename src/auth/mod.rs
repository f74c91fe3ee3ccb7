//! Session lifecycle: Google login, the session state machine and route guards.

pub mod guard;
pub mod oauth;
pub mod session;

pub use guard::{RouteAccess, RouteDecision};
pub use oauth::GoogleLogin;
pub use session::{Session, SessionManager, SessionPhase};
