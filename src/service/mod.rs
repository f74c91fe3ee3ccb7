//! Page-level services: listing browser, notification management, sent history and
//! price comparison. They hold no UI types and are driven by the Dioxus client.

pub mod browser;
pub mod comparison;
pub mod debounce;
pub mod notification;
pub mod sent;
pub mod sequence;

pub use browser::{BrowserEvent, FetchTicket, ListingBrowser, ListingFilter, PageItem};
pub use debounce::SearchDebouncer;
pub use notification::{ChannelKind, NotificationForm, NotificationManager, RowAction};
pub use sent::SentNotificationPager;
pub use sequence::RequestSequencer;
