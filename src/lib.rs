//! Havasi Reality Platform front-end library.
//!
//! Holds everything the web client needs that can be exercised without a browser:
//! persisted session records, the authenticated API client, the session state
//! machine, in-memory stores, listing and notification services, and the map
//! geocoding core. The Dioxus client in `src/client` is a thin layer over these.

pub mod api;
pub mod auth;
pub mod config;
pub mod error;
pub mod map;
pub mod model;
pub mod platform;
pub mod service;
pub mod storage;
pub mod store;
