//! Tests for the SentNotificationPager.

use havasi::service::{sent, SentNotificationPager};

use super::*;

/// Tests paging forward through delivered notifications.
///
/// Expected: second page requested at offset 20, empty page ends pagination
#[tokio::test]
async fn pages_until_empty() -> Result<(), TestError> {
    let mut test = TestSetup::new().await?;
    let first_page = test
        .api()
        .create_sent_notifications_endpoint(
            TEST_ACCESS_TOKEN,
            TEST_USER_ID,
            20,
            0,
            factory::mock_sent_notifications(TEST_USER_ID, 20),
            1,
        )
        .await?;
    let second_page = test
        .api()
        .create_sent_notifications_endpoint(TEST_ACCESS_TOKEN, TEST_USER_ID, 20, 20, Vec::new(), 1)
        .await?;
    let api = test.api_client_with_session(TEST_ACCESS_TOKEN, Some(TEST_USER_ID));
    let mut pager = SentNotificationPager::new();

    let request = pager.start();
    let result = sent::fetch_page(&api, &request).await;
    pager.apply(&request, result);
    assert_eq!(pager.state().notifications.len(), 20);
    assert!(pager.state().has_more);

    let request = pager.next_page().unwrap();
    let result = sent::fetch_page(&api, &request).await;
    pager.apply(&request, result);

    assert_eq!(pager.state().page, 2);
    assert!(pager.state().notifications.is_empty());
    assert!(!pager.state().has_more);
    assert!(pager.next_page().is_none());
    first_page.assert_async().await;
    second_page.assert_async().await;

    Ok(())
}

/// Tests the pager without a stored user ID.
///
/// Expected: error shown, has_more unchanged, no request made
#[tokio::test]
async fn missing_user_id_is_reported() -> Result<(), TestError> {
    let test = TestSetup::new().await?;
    let api = test.api_client_with_session(TEST_ACCESS_TOKEN, None);
    let mut pager = SentNotificationPager::new();

    let request = pager.start();
    let result = sent::fetch_page(&api, &request).await;
    pager.apply(&request, result);

    assert_eq!(
        pager.state().error.as_deref(),
        Some("User ID not found in storage")
    );
    assert!(pager.state().has_more);

    Ok(())
}
