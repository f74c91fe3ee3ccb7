//! Tests for the ListingBrowser.

use havasi::{
    service::{browser, BrowserEvent, ListingBrowser},
    store::RealEstateDirectory,
};

use super::*;

/// Tests a full first page with one extra item.
///
/// Expected: ten listings shown, next page available, directory updated
#[tokio::test]
async fn full_page_trims_extra_item() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_real_estates_endpoint(0, 11, 11, 1)
        .build()
        .await?;
    let api = test.api_client_with_session(TEST_ACCESS_TOKEN, None);
    let directory = RealEstateDirectory::new();
    let mut listing = ListingBrowser::new(10, directory.clone());

    let fetch = listing.start();
    assert!(browser::load(&api, &mut listing, &fetch).await);

    assert_eq!(listing.state().listings.len(), 10);
    assert!(listing.state().has_more);
    assert_eq!(directory.len(), 10);
    assert!(directory.find_by_id("re-9").is_some());
    assert!(directory.find_by_id("re-10").is_none());
    test.assert_mocks().await;

    Ok(())
}

/// Tests a short last page.
///
/// Expected: seven listings shown, no next page
#[tokio::test]
async fn short_page_has_no_next_page() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_real_estates_endpoint(10, 11, 7, 1)
        .build()
        .await?;
    let api = test.api_client_with_session(TEST_ACCESS_TOKEN, None);
    let mut listing = ListingBrowser::new(10, RealEstateDirectory::new());

    let fetch = listing.handle(BrowserEvent::PageChanged(2));
    browser::load(&api, &mut listing, &fetch).await;

    assert_eq!(listing.state().listings.len(), 7);
    assert!(!listing.state().has_more);
    assert_eq!(listing.state().estimated_total, 17);
    test.assert_mocks().await;

    Ok(())
}

/// Tests a failed page load followed by a retry.
///
/// Expected: error message exposed, retry reissues the same query
#[tokio::test]
async fn failed_load_can_be_retried() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_error_endpoint("GET", "/api/real-estates", 500, "Search index offline", 2)
        .build()
        .await?;
    let api = test.api_client_with_session(TEST_ACCESS_TOKEN, None);
    let mut listing = ListingBrowser::new(10, RealEstateDirectory::new());

    let fetch = listing.start();
    browser::load(&api, &mut listing, &fetch).await;
    assert_eq!(
        listing.state().error.as_deref(),
        Some("Server Error (500): Search index offline")
    );

    let retry = listing.handle(BrowserEvent::Retry);
    assert_eq!(retry.query, fetch.query);
    browser::load(&api, &mut listing, &retry).await;

    assert!(!listing.state().loading);
    test.assert_mocks().await;

    Ok(())
}
