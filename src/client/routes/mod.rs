pub mod access_denied;
pub mod add_notification;
pub mod callback;
pub mod dashboard;
pub mod detail;
pub mod login;
pub mod not_found;
pub mod notifications;
pub mod real_estates;
pub mod received;
pub mod root;
pub mod settings;

pub use access_denied::AccessDenied;
pub use add_notification::AddNotification;
pub use callback::Callback;
pub use dashboard::Dashboard;
pub use detail::{PublicDetail, RealEstateDetail};
pub use login::Login;
pub use not_found::NotFound;
pub use notifications::Notifications;
pub use real_estates::RealEstates;
pub use received::ReceivedNotifications;
pub use root::RootRedirect;
pub use settings::Settings;
