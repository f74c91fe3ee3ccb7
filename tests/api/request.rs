//! Tests for authenticated request handling.

use std::sync::{
    atomic::{AtomicUsize, Ordering},
    Arc,
};

use havasi::error::{auth::AuthError, Error};

use super::*;

/// Tests 401 interception on an authenticated request.
///
/// Verifies that a 401 clears the persisted token and user ID, runs the expiry
/// handler exactly once, and surfaces an expired-token error to the caller.
///
/// Expected: Err with AuthError::TokenExpired
#[tokio::test]
async fn unauthorized_clears_session_and_runs_handler_once() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_error_endpoint("GET", "/api/users/u1/notifications", 401, "Unauthorized", 1)
        .build()
        .await?;
    let api = test.api_client_with_session(TEST_ACCESS_TOKEN, Some(TEST_USER_ID));

    let calls = Arc::new(AtomicUsize::new(0));
    let counter = calls.clone();
    assert!(api.register_expiry_handler(Arc::new(move || {
        counter.fetch_add(1, Ordering::SeqCst);
    })));

    let result = api.get_user_notifications(TEST_USER_ID).await;

    assert!(matches!(result, Err(Error::AuthError(AuthError::TokenExpired))));
    assert_eq!(
        result.unwrap_err().user_message(),
        "Authentication token has expired"
    );
    assert!(!api.tokens().has());
    assert!(!api.users().has());
    assert_eq!(calls.load(Ordering::SeqCst), 1);
    test.assert_mocks().await;

    Ok(())
}

/// Tests that only the first expiry handler is kept.
///
/// Expected: second registration rejected, only the first handler runs
#[tokio::test]
async fn expiry_handler_registers_once() -> Result<(), TestError> {
    let test = TestBuilder::new().with_expired_token_endpoint(1).build().await?;
    let api = test.api_client_with_session(TEST_EXPIRED_TOKEN, None);

    let first = Arc::new(AtomicUsize::new(0));
    let second = Arc::new(AtomicUsize::new(0));
    let (a, b) = (first.clone(), second.clone());
    assert!(api.register_expiry_handler(Arc::new(move || {
        a.fetch_add(1, Ordering::SeqCst);
    })));
    assert!(!api.register_expiry_handler(Arc::new(move || {
        b.fetch_add(1, Ordering::SeqCst);
    })));

    let _ = api.get_current_user().await;

    assert_eq!(first.load(Ordering::SeqCst), 1);
    assert_eq!(second.load(Ordering::SeqCst), 0);

    Ok(())
}

/// Tests that requests go out without a stored token.
///
/// Verifies that no Authorization header is attached when no token is stored,
/// and the server's 401 is handled like any other expiry.
///
/// Expected: Err with AuthError::TokenExpired, request reached the server once
#[tokio::test]
async fn request_without_token_omits_header() -> Result<(), TestError> {
    let mut test = TestSetup::new().await?;
    let mock = test
        .server
        .mock("GET", "/api/users/me")
        .match_header("authorization", mockito::Matcher::Missing)
        .with_status(401)
        .expect(1)
        .create_async()
        .await;
    let api = test.api_client();

    let result = api.get_current_user().await;

    assert!(result.unwrap_err().is_token_expired());
    mock.assert_async().await;

    Ok(())
}

/// Tests server error message extraction.
///
/// Expected: Err with the server message prefixed by the status class
#[tokio::test]
async fn server_error_uses_body_message() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_error_endpoint("GET", "/api/users/me", 500, "Database unavailable", 1)
        .build()
        .await?;
    let api = test.api_client_with_session(TEST_ACCESS_TOKEN, None);

    let result = api.get_current_user().await;

    let err = result.unwrap_err();
    assert!(matches!(err, Error::Server { status: 500, .. }));
    assert_eq!(err.user_message(), "Server Error (500): Database unavailable");
    assert!(api.tokens().has(), "non-401 errors keep the session");

    Ok(())
}

/// Tests the fallback message for an empty error body.
///
/// Expected: Err with the default message for the operation
#[tokio::test]
async fn client_error_falls_back_to_default_message() -> Result<(), TestError> {
    let mut test = TestSetup::new().await?;
    test.server
        .mock("GET", "/api/users/me")
        .with_status(404)
        .create_async()
        .await;
    let api = test.api_client_with_session(TEST_ACCESS_TOKEN, None);

    let err = api.get_current_user().await.unwrap_err();

    assert_eq!(err.user_message(), "Client Error (404): Failed to fetch user");

    Ok(())
}

/// Tests that transport failures surface as the generic message.
///
/// Expected: Err with "Unknown error occurred"
#[tokio::test]
async fn transport_failure_is_unknown_error() -> Result<(), TestError> {
    let store: Arc<dyn havasi::storage::KeyValueStore> =
        Arc::new(havasi::storage::MemoryStore::new());
    let api = havasi::api::ApiClient::new(
        url::Url::parse("http://127.0.0.1:1").unwrap(),
        havasi::storage::TokenService::new(store.clone()),
        havasi::storage::UserService::new(store),
    );

    let err = api.get_current_user().await.unwrap_err();

    assert!(matches!(err, Error::Transport(_)));
    assert_eq!(err.user_message(), "Unknown error occurred");

    Ok(())
}

/// Tests profile retrieval with a valid token.
///
/// Verifies that the client itself leaves the user ID record alone; only the
/// session manager persists it for the current login.
///
/// Expected: Ok with the user, no user ID persisted
#[tokio::test]
async fn get_current_user_returns_profile() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_current_user_endpoint(TEST_USER_ID, &["ADMIN"], 1)
        .build()
        .await?;
    let api = test.api_client_with_session(TEST_ACCESS_TOKEN, None);

    let user = api.get_current_user().await.unwrap();

    assert_eq!(user.id, TEST_USER_ID);
    assert_eq!(user.username, TEST_USERNAME);
    assert!(user.is_admin());
    assert_eq!(api.users().get(), None);
    test.assert_mocks().await;

    Ok(())
}
