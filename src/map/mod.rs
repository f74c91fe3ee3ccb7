//! Map rendering core: which listings can be placed right away, address geocoding
//! for the rest, and the viewport that fits them.

pub mod geocode;
pub mod view;

pub use geocode::{geocode_in_batches, geocode_query, Geocoder};
pub use view::{partition, Bounds, LatLng, MapView};
