//! Tests for the real-estate endpoints.

use havasi::{api::RealEstateQuery, error::Error};
use mockito::Matcher;

use super::*;

/// Tests fetching a page of listings as a bare array.
///
/// Expected: Ok with every listing decoded
#[tokio::test]
async fn fetch_real_estates_decodes_array() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_real_estates_endpoint(0, 10, 3, 1)
        .build()
        .await?;
    let api = test.api_client_with_session(TEST_ACCESS_TOKEN, None);

    let estates = api
        .fetch_real_estates(&RealEstateQuery::default())
        .await
        .unwrap();

    assert_eq!(estates.len(), 3);
    assert_eq!(estates[0].id, "re-0");
    assert_eq!(estates[0].locality.city, "Praha");
    test.assert_mocks().await;

    Ok(())
}

/// Tests the `{data: [...]}` payload shape and unknown shapes.
///
/// Expected: wrapped list decoded, any other object yields an empty list
#[tokio::test]
async fn fetch_real_estates_accepts_wrapped_and_unknown_shapes() -> Result<(), TestError> {
    let mut test = TestSetup::new().await?;
    let wrapped = serde_json::json!({ "data": factory::mock_real_estates(2) });
    test.server
        .mock("GET", "/api/real-estates")
        .match_query(Matcher::UrlEncoded("sortDirection".into(), "DESC".into()))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(wrapped.to_string())
        .create_async()
        .await;
    test.server
        .mock("GET", "/api/real-estates")
        .match_query(Matcher::UrlEncoded("sortDirection".into(), "ASC".into()))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"{"total": 0}"#)
        .create_async()
        .await;
    let api = test.api_client_with_session(TEST_ACCESS_TOKEN, None);

    let wrapped = api
        .fetch_real_estates(&RealEstateQuery::default())
        .await
        .unwrap();
    let unknown = api
        .fetch_real_estates(&RealEstateQuery {
            sort_direction: havasi::model::real_estate::SortDirection::Asc,
            ..Default::default()
        })
        .await
        .unwrap();

    assert_eq!(wrapped.len(), 2);
    assert!(unknown.is_empty());

    Ok(())
}

/// Tests that every query parameter reaches the server.
///
/// Expected: the mock matching all parameters is hit once
#[tokio::test]
async fn fetch_real_estates_sends_all_parameters() -> Result<(), TestError> {
    let mut test = TestSetup::new().await?;
    let mock = test
        .server
        .mock("GET", "/api/real-estates")
        .match_query(Matcher::AllOf(vec![
            Matcher::UrlEncoded("offset".into(), "20".into()),
            Matcher::UrlEncoded("limit".into(), "11".into()),
            Matcher::UrlEncoded("sortDirection".into(), "DESC".into()),
            Matcher::UrlEncoded("search".into(), "Praha 2".into()),
            Matcher::UrlEncoded("transaction".into(), "SALE".into()),
            Matcher::UrlEncoded("building".into(), "APARTMENT".into()),
            Matcher::UrlEncoded("sizeMin".into(), "0".into()),
            Matcher::UrlEncoded("sizeMax".into(), "1000".into()),
            Matcher::UrlEncoded("priceMin".into(), "0".into()),
            Matcher::UrlEncoded("priceMax".into(), "1000000000".into()),
        ]))
        .with_status(200)
        .with_body("[]")
        .expect(1)
        .create_async()
        .await;
    let api = test.api_client_with_session(TEST_ACCESS_TOKEN, None);

    let query = RealEstateQuery {
        offset: 20,
        limit: 11,
        search: Some(" Praha 2 ".to_string()),
        transaction: Some(havasi::model::real_estate::TransactionType::Sale),
        ..Default::default()
    };
    api.fetch_real_estates(&query).await.unwrap();

    mock.assert_async().await;

    Ok(())
}

/// Tests the public detail endpoint.
///
/// Verifies that the detail endpoint needs no token and that its 401 does not
/// clear the session.
///
/// Expected: Ok for a known listing, Client error without logout for 401
#[tokio::test]
async fn fetch_real_estate_by_id_is_public() -> Result<(), TestError> {
    let mut test = TestSetup::new().await?;
    let estate = factory::mock_real_estate(TEST_REAL_ESTATE_ID, 4_500_000.0);
    let found = test
        .api()
        .create_real_estate_endpoint(TEST_REAL_ESTATE_ID, estate, 1)
        .await?;
    test.api()
        .create_error_endpoint("GET", "/api/real-estates/hidden", 401, "Unauthorized", 1)
        .await?;
    let api = test.api_client_with_session(TEST_ACCESS_TOKEN, Some(TEST_USER_ID));

    let estate = api.fetch_real_estate_by_id(TEST_REAL_ESTATE_ID).await.unwrap();
    let hidden = api.fetch_real_estate_by_id("hidden").await;

    assert_eq!(estate.id, TEST_REAL_ESTATE_ID);
    assert_eq!(estate.price, 4_500_000.0);
    assert!(matches!(hidden, Err(Error::Client { status: 401, .. })));
    assert!(api.tokens().has());
    found.assert_async().await;

    Ok(())
}
