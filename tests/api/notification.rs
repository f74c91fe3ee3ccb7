//! Tests for the notification endpoints.

use havasi::model::{
    notification::{AddNotificationCommand, NotificationChannel, NotificationFilter, NotificationType},
    real_estate::{BuildingType, TransactionType},
};
use serde_json::json;

use super::*;

/// Tests decoding every channel variant of the rule list.
///
/// Expected: Ok with channel-specific fields decoded
#[tokio::test]
async fn get_user_notifications_decodes_channels() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_notifications_endpoint(
            TEST_USER_ID,
            vec![
                factory::mock_email_notification("n-1", TEST_USER_ID, "Prague Alert", true),
                factory::mock_discord_notification("n-2", TEST_USER_ID, "Brno Rentals"),
            ],
            1,
        )
        .build()
        .await?;
    let api = test.api_client_with_session(TEST_ACCESS_TOKEN, Some(TEST_USER_ID));

    let rules = api.get_user_notifications(TEST_USER_ID).await.unwrap();

    assert_eq!(rules.len(), 2);
    assert_eq!(rules[0].notification_type(), NotificationType::Email);
    assert_eq!(rules[0].channel.destination(), ("Email", "a@b.com"));
    assert!(rules[0].enabled);
    assert_eq!(
        rules[1].channel,
        NotificationChannel::Discord {
            webhook_id: "123456".to_string(),
            token: "discord-token".to_string()
        }
    );
    assert_eq!(rules[1].filter.building_type, BuildingType::House);
    assert_eq!(rules[1].filter.price.and_then(|p| p.to), Some(25_000));
    test.assert_mocks().await;

    Ok(())
}

/// Tests the create request body.
///
/// Expected: the webhook command is posted with the `api` wire tag
#[tokio::test]
async fn add_notification_posts_command() -> Result<(), TestError> {
    let mut test = TestSetup::new().await?;
    let mock = test
        .api()
        .create_add_notification_endpoint(
            TEST_ACCESS_TOKEN,
            TEST_USER_ID,
            json!({
                "type": "api",
                "name": "Hook",
                "filter": { "buildingType": "LAND", "transactionType": "RENT" },
                "url": "https://hooks.example.com/havasi"
            }),
            1,
        )
        .await?;
    let api = test.api_client_with_session(TEST_ACCESS_TOKEN, Some(TEST_USER_ID));

    let command = AddNotificationCommand::webhook(
        "Hook",
        NotificationFilter::new(BuildingType::Land, TransactionType::Rent),
        "https://hooks.example.com/havasi",
    );
    api.add_notification(TEST_USER_ID, &command).await.unwrap();

    mock.assert_async().await;

    Ok(())
}

/// Tests enable, disable and delete paths.
///
/// Expected: each action hits its own endpoint once
#[tokio::test]
async fn row_actions_hit_their_endpoints() -> Result<(), TestError> {
    let mut test = TestSetup::new().await?;
    let mut mocks = Vec::new();
    for (method, action) in [("POST", Some("enable")), ("POST", Some("disable")), ("DELETE", None)] {
        mocks.push(
            test.api()
                .create_notification_action_endpoint(
                    TEST_ACCESS_TOKEN,
                    method,
                    TEST_USER_ID,
                    TEST_NOTIFICATION_ID,
                    action,
                    1,
                )
                .await?,
        );
    }
    let api = test.api_client_with_session(TEST_ACCESS_TOKEN, Some(TEST_USER_ID));

    api.enable_notification(TEST_USER_ID, TEST_NOTIFICATION_ID).await.unwrap();
    api.disable_notification(TEST_USER_ID, TEST_NOTIFICATION_ID).await.unwrap();
    api.delete_notification(TEST_USER_ID, TEST_NOTIFICATION_ID).await.unwrap();

    for mock in mocks {
        mock.assert_async().await;
    }

    Ok(())
}

/// Tests paging parameters of the delivered-notification history.
///
/// Expected: Ok with the page decoded
#[tokio::test]
async fn fetch_sent_notifications_pages() -> Result<(), TestError> {
    let mut test = TestSetup::new().await?;
    let mock = test
        .api()
        .create_sent_notifications_endpoint(
            TEST_ACCESS_TOKEN,
            TEST_USER_ID,
            20,
            40,
            factory::mock_sent_notifications(TEST_USER_ID, 2),
            1,
        )
        .await?;
    let api = test.api_client_with_session(TEST_ACCESS_TOKEN, Some(TEST_USER_ID));

    let sent = api
        .fetch_sent_notifications(TEST_USER_ID, 20, 40)
        .await
        .unwrap();

    assert_eq!(sent.len(), 2);
    assert_eq!(sent[0].real_estate.city, "Praha");
    assert!(sent[0].sent_at.is_some());
    mock.assert_async().await;

    Ok(())
}
