//! Data transfer objects exchanged with the Havasi API.
//!
//! Field names follow the API's camelCase JSON. The server is authoritative for all of
//! these; the client only ever holds snapshots.

pub mod api;
pub mod notification;
pub mod real_estate;
pub mod time;
pub mod user;
