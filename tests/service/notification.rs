//! Tests for the NotificationManager.

use havasi::{
    error::{auth::AuthError, Error},
    model::{
        notification::{AddNotificationCommand, NotificationFilter, NotificationType},
        real_estate::{BuildingType, TransactionType},
    },
    service::{NotificationManager, RowAction},
};
use serde_json::json;

use super::*;

/// Tests creating a rule and the refetch that follows.
///
/// Expected: the refetched list contains the new email rule
#[tokio::test]
async fn create_refetches_list() -> Result<(), TestError> {
    let mut test = TestBuilder::new()
        .with_notifications_endpoint(
            TEST_USER_ID,
            vec![factory::mock_email_notification(
                TEST_NOTIFICATION_ID,
                TEST_USER_ID,
                "Prague Alert",
                true,
            )],
            1,
        )
        .build()
        .await?;
    let post = test
        .api()
        .create_add_notification_endpoint(
            TEST_ACCESS_TOKEN,
            TEST_USER_ID,
            json!({
                "type": "email",
                "name": "Prague Alert",
                "filter": { "buildingType": "APARTMENT", "transactionType": "SALE" },
                "email": "a@b.com"
            }),
            1,
        )
        .await?;
    let api = test.api_client_with_session(TEST_ACCESS_TOKEN, Some(TEST_USER_ID));
    let manager = NotificationManager::new(api);

    let command = AddNotificationCommand::email(
        "Prague Alert",
        NotificationFilter::new(BuildingType::Apartment, TransactionType::Sale),
        "a@b.com",
    );
    manager.create(&command).await.unwrap();

    let state = manager.snapshot();
    assert_eq!(state.notifications.len(), 1);
    assert_eq!(state.notifications[0].name, "Prague Alert");
    assert_eq!(state.notifications[0].notification_type(), NotificationType::Email);
    assert!(!state.loading);
    post.assert_async().await;
    test.assert_mocks().await;

    Ok(())
}

/// Tests toggling an enabled rule.
///
/// Expected: disable endpoint called, row back to idle, list refetched
#[tokio::test]
async fn toggle_disables_enabled_rule() -> Result<(), TestError> {
    let mut test = TestBuilder::new()
        .with_notifications_endpoint(
            TEST_USER_ID,
            vec![factory::mock_email_notification(
                TEST_NOTIFICATION_ID,
                TEST_USER_ID,
                "Prague Alert",
                true,
            )],
            2,
        )
        .build()
        .await?;
    let disable = test
        .api()
        .create_notification_action_endpoint(
            TEST_ACCESS_TOKEN,
            "POST",
            TEST_USER_ID,
            TEST_NOTIFICATION_ID,
            Some("disable"),
            1,
        )
        .await?;
    let api = test.api_client_with_session(TEST_ACCESS_TOKEN, Some(TEST_USER_ID));
    let manager = NotificationManager::new(api);
    manager.refresh().await.unwrap();

    let sent = manager.toggle(TEST_NOTIFICATION_ID).await.unwrap();

    assert!(sent);
    assert_eq!(manager.snapshot().action(TEST_NOTIFICATION_ID), RowAction::Idle);
    disable.assert_async().await;
    test.assert_mocks().await;

    Ok(())
}

/// Tests that concurrent actions on one row are collapsed.
///
/// Expected: the second delete is ignored while the first is in flight
#[tokio::test]
async fn concurrent_actions_on_same_row_are_ignored() -> Result<(), TestError> {
    let mut test = TestBuilder::new()
        .with_notifications_endpoint(TEST_USER_ID, Vec::new(), 1)
        .build()
        .await?;
    let delete = test
        .api()
        .create_notification_action_endpoint(
            TEST_ACCESS_TOKEN,
            "DELETE",
            TEST_USER_ID,
            TEST_NOTIFICATION_ID,
            None,
            1,
        )
        .await?;
    let api = test.api_client_with_session(TEST_ACCESS_TOKEN, Some(TEST_USER_ID));
    let manager = NotificationManager::new(api);

    let (first, second) = tokio::join!(
        manager.delete(TEST_NOTIFICATION_ID),
        manager.delete(TEST_NOTIFICATION_ID)
    );

    assert!(first.unwrap());
    assert!(!second.unwrap());
    assert!(manager.snapshot().notifications.is_empty());
    delete.assert_async().await;
    test.assert_mocks().await;

    Ok(())
}

/// Tests that a failed action clears the row state and keeps the list.
///
/// Expected: Err with the server message, row idle
#[tokio::test]
async fn failed_action_resets_row() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_error_endpoint(
            "DELETE",
            "/api/users/u1/notifications/n-1",
            404,
            "Notification not found",
            1,
        )
        .build()
        .await?;
    let api = test.api_client_with_session(TEST_ACCESS_TOKEN, Some(TEST_USER_ID));
    let manager = NotificationManager::new(api);

    let err = manager.delete(TEST_NOTIFICATION_ID).await.unwrap_err();

    assert_eq!(err.user_message(), "Client Error (404): Notification not found");
    assert_eq!(manager.snapshot().action(TEST_NOTIFICATION_ID), RowAction::Idle);

    Ok(())
}

/// Tests that no request is made without a stored user ID.
///
/// Expected: Err with AuthError::UserIdNotStored
#[tokio::test]
async fn refresh_requires_user_id() -> Result<(), TestError> {
    let test = TestSetup::new().await?;
    let api = test.api_client_with_session(TEST_ACCESS_TOKEN, None);
    let manager = NotificationManager::new(api);

    let result = manager.refresh().await;

    assert!(matches!(result, Err(Error::AuthError(AuthError::UserIdNotStored))));
    assert!(!manager.snapshot().loading);

    Ok(())
}
