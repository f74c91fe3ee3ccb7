use std::time::Duration;

use dioxus_logger::tracing;
use futures::future::join_all;
use serde::Deserialize;
use url::Url;

use crate::{
    map::view::LatLng,
    model::real_estate::{LocalityDto, RealEstateDto},
    platform,
};

/// Listings geocoded concurrently per batch
pub const BATCH_SIZE: usize = 2;
/// Pause between batches to stay within the public geocoder's rate limit
pub const BATCH_DELAY: Duration = Duration::from_millis(300);

const COUNTRY: &str = "Czech Republic";

/// Free-text query for a locality: "street number, district, city, Czech Republic".
///
/// Returns `None` when the locality has no street, district or city.
pub fn geocode_query(locality: &LocalityDto) -> Option<String> {
    let mut parts = Vec::new();

    if !locality.street.is_empty() {
        match locality.street_number.as_deref().filter(|n| !n.is_empty()) {
            Some(number) => parts.push(format!("{} {}", locality.street, number)),
            None => parts.push(locality.street.clone()),
        }
    }
    if !locality.district.is_empty() {
        parts.push(locality.district.clone());
    }
    if !locality.city.is_empty() {
        parts.push(locality.city.clone());
    }

    if parts.is_empty() {
        return None;
    }

    parts.push(COUNTRY.to_string());
    Some(parts.join(", "))
}

#[derive(Debug, Deserialize)]
struct Place {
    lat: Coordinate,
    lon: Coordinate,
}

/// Nominatim returns coordinates as strings
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum Coordinate {
    Text(String),
    Number(f64),
}

impl Coordinate {
    fn value(&self) -> Option<f64> {
        let value = match self {
            Self::Text(raw) => raw.trim().parse::<f64>().ok(),
            Self::Number(value) => Some(*value),
        };

        value.filter(|v| v.is_finite())
    }
}

/// Client of a Nominatim-compatible search endpoint
#[derive(Clone)]
pub struct Geocoder {
    http: reqwest::Client,
    endpoint: Url,
}

impl Geocoder {
    pub fn new(endpoint: Url) -> Self {
        Self {
            http: reqwest::Client::new(),
            endpoint,
        }
    }

    /// Resolves `query` to the best matching point in the Czech Republic.
    ///
    /// Any failure (transport, status, body, unparsable coordinates) is logged and
    /// yields `None`; a missing marker is not worth an error toast.
    pub async fn geocode(&self, query: &str) -> Option<LatLng> {
        let mut url = self.endpoint.clone();
        url.query_pairs_mut()
            .append_pair("format", "json")
            .append_pair("q", query)
            .append_pair("limit", "1")
            .append_pair("countrycodes", "cz");

        let response = match self.http.get(url).send().await {
            Ok(response) if response.status().is_success() => response,
            Ok(response) => {
                tracing::warn!(query = %query, status = %response.status(), "Geocoding failed");
                return None;
            }
            Err(e) => {
                tracing::warn!(query = %query, "Geocoding failed: {}", e);
                return None;
            }
        };

        let places: Vec<Place> = match response.json().await {
            Ok(places) => places,
            Err(e) => {
                tracing::warn!(query = %query, "Unreadable geocoding response: {}", e);
                return None;
            }
        };

        let place = places.into_iter().next()?;
        Some(LatLng {
            lat: place.lat.value()?,
            lon: place.lon.value()?,
        })
    }

    /// Stored coordinates of `estate`, or its geocoded address.
    pub async fn locate(&self, estate: &RealEstateDto) -> Option<LatLng> {
        if let Some(point) = estate.locality.coordinates() {
            return Some(point.into());
        }

        let query = geocode_query(&estate.locality)?;
        self.geocode(&query).await
    }
}

/// Geocodes `estates` two at a time with a pause between batches, reporting each
/// located listing to `on_located` as soon as its batch completes.
///
/// # Returns
/// Every listing that could be located, in input order.
pub async fn geocode_in_batches<F>(
    geocoder: &Geocoder,
    estates: Vec<RealEstateDto>,
    mut on_located: F,
) -> Vec<(RealEstateDto, LatLng)>
where
    F: FnMut(&RealEstateDto, LatLng),
{
    let mut located = Vec::new();
    let batches: Vec<_> = estates.chunks(BATCH_SIZE).map(<[_]>::to_vec).collect();
    let batch_count = batches.len();

    for (index, batch) in batches.into_iter().enumerate() {
        let points = join_all(batch.iter().map(|estate| geocoder.locate(estate))).await;

        for (estate, point) in batch.into_iter().zip(points) {
            match point {
                Some(point) => {
                    on_located(&estate, point);
                    located.push((estate, point));
                }
                None => tracing::debug!(id = %estate.id, "Listing could not be located"),
            }
        }

        if index + 1 < batch_count {
            platform::sleep(BATCH_DELAY).await;
        }
    }

    located
}
