pub mod error_toast;
pub mod google_login;
pub mod guard;
pub mod layout;
pub mod listing_card;
pub mod map;
pub mod page;

pub use error_toast::{raise_error, ErrorToast};
pub use google_login::GoogleLoginButton;
pub use guard::{Loading, Redirect, RequireAdmin, RequireAuth};
pub use layout::AppLayout;
pub use listing_card::{ListingCard, PriceTag};
pub use map::{ListingMap, ListingsMap};
pub use page::Page;
