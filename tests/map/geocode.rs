//! Tests for the Geocoder and batched geocoding.

use havasi::{
    map::{geocode_in_batches, Geocoder, LatLng},
    model::real_estate::RealEstateDto,
};
use serde_json::json;
use url::Url;

use super::*;

fn geocoder(test: &TestSetup) -> Geocoder {
    Geocoder::new(Url::parse(&format!("{}/search", test.url())).unwrap())
}

/// Listing fixture without stored coordinates in `city`.
fn unlocated_estate(id: &str, city: &str) -> Result<RealEstateDto, TestError> {
    let mut estate = factory::mock_real_estate(id, 4_200_000.0);
    estate["locality"] = json!({ "city": city, "district": "", "street": "" });

    Ok(serde_json::from_value(estate)?)
}

/// Tests resolving a free-text query.
///
/// Verifies the query parameters sent and the string coordinates returned by
/// Nominatim are parsed.
///
/// Expected: Some(LatLng) with the returned point
#[tokio::test]
async fn geocode_parses_first_place() -> Result<(), TestError> {
    let mut test = TestSetup::new().await?;
    let search = test
        .api()
        .create_geocoder_endpoint(
            "Brno, Czech Republic",
            json!([{ "lat": "49.1951", "lon": "16.6068" }, { "lat": "0", "lon": "0" }]),
            1,
        )
        .await?;

    let point = geocoder(&test).geocode("Brno, Czech Republic").await;

    assert_eq!(point, Some(LatLng { lat: 49.1951, lon: 16.6068 }));
    search.assert_async().await;

    Ok(())
}

/// Tests a query with no match.
///
/// Expected: None
#[tokio::test]
async fn geocode_without_match_is_none() -> Result<(), TestError> {
    let mut test = TestSetup::new().await?;
    let search = test
        .api()
        .create_geocoder_endpoint("Nowhere, Czech Republic", json!([]), 1)
        .await?;

    let point = geocoder(&test).geocode("Nowhere, Czech Republic").await;

    assert_eq!(point, None);
    search.assert_async().await;

    Ok(())
}

/// Tests that stored coordinates are used without a request.
///
/// Expected: the stored point, geocoder never called
#[tokio::test]
async fn locate_prefers_stored_coordinates() -> Result<(), TestError> {
    let mut test = TestSetup::new().await?;
    let search = test
        .api()
        .create_geocoder_endpoint("Praha, Czech Republic", json!([]), 0)
        .await?;
    let estate: RealEstateDto =
        serde_json::from_value(factory::mock_real_estate(TEST_REAL_ESTATE_ID, 5_000_000.0))?;

    let point = geocoder(&test).locate(&estate).await;

    assert_eq!(point, Some(LatLng { lat: 50.0755, lon: 14.4378 }));
    search.assert_async().await;

    Ok(())
}

/// Tests batched geocoding of several listings.
///
/// Verifies each address is requested once, unresolvable listings are skipped
/// and the callback sees every located listing.
///
/// Expected: two located listings in input order
#[tokio::test]
async fn geocodes_in_batches() -> Result<(), TestError> {
    let mut test = TestSetup::new().await?;
    let brno = test
        .api()
        .create_geocoder_endpoint(
            "Brno, Czech Republic",
            json!([{ "lat": "49.1951", "lon": "16.6068" }]),
            1,
        )
        .await?;
    let ostrava = test
        .api()
        .create_geocoder_endpoint(
            "Ostrava, Czech Republic",
            json!([{ "lat": 49.8209, "lon": 18.2625 }]),
            1,
        )
        .await?;
    let unknown = test
        .api()
        .create_geocoder_endpoint("Atlantis, Czech Republic", json!([]), 1)
        .await?;
    let estates = vec![
        unlocated_estate("re-a", "Brno")?,
        unlocated_estate("re-b", "Atlantis")?,
        unlocated_estate("re-c", "Ostrava")?,
    ];

    let mut seen = Vec::new();
    let located = geocode_in_batches(&geocoder(&test), estates, |estate, _| {
        seen.push(estate.id.clone());
    })
    .await;

    let ids: Vec<_> = located.iter().map(|(estate, _)| estate.id.as_str()).collect();
    assert_eq!(ids, vec!["re-a", "re-c"]);
    assert_eq!(seen, vec!["re-a".to_string(), "re-c".to_string()]);
    assert_eq!(located[1].1, LatLng { lat: 49.8209, lon: 18.2625 });
    brno.assert_async().await;
    ostrava.assert_async().await;
    unknown.assert_async().await;

    Ok(())
}
