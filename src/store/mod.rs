//! In-memory client state shared between components.
//!
//! Stores are cheap to clone handles over shared state. Only the session manager
//! mutates the profile store; the directory store is replaced wholesale by the
//! listing browser after every page load.

pub mod error;
pub mod real_estate;
pub mod user;

pub use error::ErrorState;
pub use real_estate::RealEstateDirectory;
pub use user::{ProfileStore, UserState};
