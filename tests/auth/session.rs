//! Tests for the SessionManager.

use std::{
    io::Write,
    sync::{Arc, Mutex},
    time::Duration,
};

use havasi::{
    auth::{RouteAccess, RouteDecision, Session, SessionManager, SessionPhase},
    error::{auth::AuthError, Error},
    store::ProfileStore,
};

use super::*;

/// Tests login with a token the API accepts.
///
/// Verifies that the token is persisted, the session becomes authenticated and the
/// admin profile is cached.
///
/// Expected: Ok with an authenticated admin session
#[tokio::test]
async fn login_with_valid_token_loads_admin_profile() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_current_user_endpoint(TEST_USER_ID, &["ADMIN"], 1)
        .build()
        .await?;
    let manager = test.session_manager();

    manager.login(TEST_ACCESS_TOKEN).await.unwrap();

    let session = manager.session();
    assert!(session.is_authenticated);
    assert_eq!(session.token.as_deref(), Some(TEST_ACCESS_TOKEN));
    assert_eq!(manager.phase(), SessionPhase::Authenticated);
    assert!(manager.profile().is_admin());
    assert_eq!(
        manager.profile().user().map(|u| u.username).as_deref(),
        Some(TEST_USERNAME)
    );
    assert_eq!(manager.api().tokens().get().as_deref(), Some(TEST_ACCESS_TOKEN));
    assert_eq!(manager.api().users().get().as_deref(), Some(TEST_USER_ID));
    test.assert_mocks().await;

    Ok(())
}

/// Tests login with a token the API rejects.
///
/// Expected: Err with AuthError::TokenExpired, session logged out and storage cleared
#[tokio::test]
async fn login_with_rejected_token_logs_out() -> Result<(), TestError> {
    let test = TestBuilder::new().with_expired_token_endpoint(1).build().await?;
    let manager = test.session_manager();

    let result = manager.login(TEST_EXPIRED_TOKEN).await;

    assert!(matches!(result, Err(Error::AuthError(AuthError::TokenExpired))));
    assert!(!manager.session().is_authenticated);
    assert!(manager.session().token.is_none());
    assert_eq!(manager.phase(), SessionPhase::Unauthenticated);
    assert!(!manager.api().tokens().has());
    assert!(manager.profile().is_empty());
    test.assert_mocks().await;

    Ok(())
}

/// Tests login when the profile fetch fails for a reason other than 401.
///
/// Expected: Err with the server error, session logged out
#[tokio::test]
async fn login_with_profile_failure_logs_out() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_error_endpoint("GET", "/api/users/me", 503, "Maintenance", 1)
        .build()
        .await?;
    let manager = test.session_manager();

    let result = manager.login(TEST_ACCESS_TOKEN).await;

    assert!(matches!(result, Err(Error::Server { status: 503, .. })));
    assert!(!manager.session().is_authenticated);
    assert!(!manager.api().tokens().has());

    Ok(())
}

/// Tests logout from any state.
///
/// Expected: unauthenticated session, empty storage and profile, repeatable
#[tokio::test]
async fn logout_clears_everything() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_current_user_endpoint(TEST_USER_ID, &["USER"], 1)
        .build()
        .await?;
    let manager = test.session_manager();
    manager.login(TEST_ACCESS_TOKEN).await.unwrap();

    manager.logout();
    manager.logout();

    assert!(!manager.session().is_authenticated);
    assert!(manager.session().token.is_none());
    assert!(!manager.api().tokens().has());
    assert!(!manager.api().users().has());
    assert!(manager.profile().is_empty());

    Ok(())
}

/// Tests restoring a stored session at startup.
///
/// Expected: authenticated session with profile, initializing cleared
#[tokio::test]
async fn initialize_restores_stored_token() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_current_user_endpoint(TEST_USER_ID, &["ADMIN"], 1)
        .build()
        .await?;
    let api = test.api_client_with_session(TEST_ACCESS_TOKEN, None);
    let manager = SessionManager::new(api, ProfileStore::new());

    manager.initialize().await;

    let session = manager.session();
    assert!(session.is_authenticated);
    assert!(!session.is_initializing);
    assert!(manager.profile().is_admin());
    test.assert_mocks().await;

    Ok(())
}

/// Tests that a failed profile fetch at startup keeps the stored session.
///
/// Expected: still authenticated, no profile, admin routes denied
#[tokio::test]
async fn initialize_keeps_session_on_profile_failure() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_error_endpoint("GET", "/api/users/me", 500, "Boom", 1)
        .build()
        .await?;
    let api = test.api_client_with_session(TEST_ACCESS_TOKEN, None);
    let manager = SessionManager::new(api, ProfileStore::new());

    manager.initialize().await;

    assert!(manager.session().is_authenticated);
    assert!(manager.profile().is_empty());
    assert_eq!(
        RouteDecision::for_session(
            &manager.session(),
            &manager.profile().snapshot(),
            RouteAccess::Admin
        ),
        RouteDecision::AccessDenied
    );
    assert_eq!(
        RouteDecision::for_session(
            &manager.session(),
            &manager.profile().snapshot(),
            RouteAccess::Authenticated
        ),
        RouteDecision::Render
    );

    Ok(())
}

/// Tests that initialize runs only once per process.
///
/// Expected: second call leaves identical state and makes no request
#[tokio::test]
async fn initialize_is_idempotent() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_current_user_endpoint(TEST_USER_ID, &["USER"], 1)
        .build()
        .await?;
    let api = test.api_client_with_session(TEST_ACCESS_TOKEN, None);
    let manager = SessionManager::new(api, ProfileStore::new());

    manager.initialize().await;
    let first = (manager.session(), manager.phase(), manager.profile().snapshot());
    manager.initialize().await;
    let second = (manager.session(), manager.phase(), manager.profile().snapshot());

    assert_eq!(first, second);
    test.assert_mocks().await;

    Ok(())
}

/// Tests forced logout when a request mid-session is rejected.
///
/// Expected: caller gets the expired-token error and the session is unauthenticated
#[tokio::test]
async fn unauthorized_request_mid_session_forces_logout() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_current_user_endpoint(TEST_USER_ID, &["USER"], 1)
        .with_error_endpoint("GET", "/api/real-estates", 401, "Unauthorized", 1)
        .build()
        .await?;
    let manager = test.session_manager();
    manager.login(TEST_ACCESS_TOKEN).await.unwrap();
    assert!(manager.session().is_authenticated);

    let result = manager
        .api()
        .fetch_real_estates(&havasi::api::RealEstateQuery::default())
        .await;

    let err = result.unwrap_err();
    assert_eq!(err.user_message(), "Authentication token has expired");
    assert_eq!(manager.phase(), SessionPhase::Unauthenticated);
    assert!(!manager.session().is_authenticated);
    assert!(manager.profile().is_empty());
    assert!(!manager.api().users().has());
    test.assert_mocks().await;

    Ok(())
}

/// Tests that a logout during a pending login discards the late profile.
///
/// Expected: session stays logged out and the profile stays empty
#[tokio::test]
async fn logout_during_login_discards_late_profile() -> Result<(), TestError> {
    let mut test = TestSetup::new().await?;
    let user = factory::mock_user(TEST_USER_ID, &["ADMIN"]);
    test.server
        .mock("GET", "/api/users/me")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_chunked_body(move |writer| {
            std::thread::sleep(Duration::from_millis(200));
            writer.write_all(user.to_string().as_bytes())
        })
        .create_async()
        .await;
    let manager = test.session_manager();

    let pending = {
        let manager = manager.clone();
        tokio::spawn(async move { manager.login(TEST_ACCESS_TOKEN).await })
    };
    tokio::time::sleep(Duration::from_millis(50)).await;
    manager.logout();

    let result = pending.await.unwrap();

    assert!(result.is_ok());
    assert!(!manager.session().is_authenticated);
    assert!(manager.profile().is_empty());
    assert!(!manager.api().users().has());

    Ok(())
}

/// Tests that listeners observe the loaded profile once login completes.
///
/// Verifies that the last notification of a successful login happens after the
/// profile is cached, so a listener mirroring the profile needs no extra sync.
///
/// Expected: the final notification carries an authenticated session and the user
#[tokio::test]
async fn login_notifies_listeners_with_loaded_profile() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_current_user_endpoint(TEST_USER_ID, &["ADMIN"], 1)
        .build()
        .await?;
    let manager = test.session_manager();
    let seen = Arc::new(Mutex::new(Vec::new()));
    let sink = seen.clone();
    let profile = manager.profile().clone();
    manager.subscribe(Arc::new(move |session: &Session| {
        let user_id = profile.user().map(|user| user.id);
        sink.lock().unwrap().push((session.is_authenticated, user_id));
    }));

    manager.login(TEST_ACCESS_TOKEN).await.unwrap();

    let seen = seen.lock().unwrap();
    assert_eq!(seen.first(), Some(&(true, None)));
    assert_eq!(seen.last(), Some(&(true, Some(TEST_USER_ID.to_string()))));
    test.assert_mocks().await;

    Ok(())
}

/// Tests a superseded login resolving after a newer login completed.
///
/// Verifies the ordering login A, logout, login B where A's profile response
/// arrives last: neither A's user ID nor A's profile may replace B's.
///
/// Expected: token, persisted user ID and profile all belong to B
#[tokio::test]
async fn superseded_login_does_not_overwrite_newer_session() -> Result<(), TestError> {
    let mut test = TestSetup::new().await?;
    let first_user = factory::mock_user("u-first", &["USER"]);
    test.server
        .mock("GET", "/api/users/me")
        .match_header("authorization", "Bearer tok-first")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_chunked_body(move |writer| {
            std::thread::sleep(Duration::from_millis(300));
            writer.write_all(first_user.to_string().as_bytes())
        })
        .create_async()
        .await;
    test.server
        .mock("GET", "/api/users/me")
        .match_header("authorization", "Bearer tok-second")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(factory::mock_user("u-second", &["ADMIN"]).to_string())
        .create_async()
        .await;
    let manager = test.session_manager();

    let first = {
        let manager = manager.clone();
        tokio::spawn(async move { manager.login("tok-first").await })
    };
    tokio::time::sleep(Duration::from_millis(50)).await;
    manager.logout();
    manager.login("tok-second").await.unwrap();

    assert_eq!(manager.api().users().get().as_deref(), Some("u-second"));

    let result = first.await.unwrap();

    assert!(result.is_ok());
    assert_eq!(manager.session().token.as_deref(), Some("tok-second"));
    assert_eq!(manager.api().tokens().get().as_deref(), Some("tok-second"));
    assert_eq!(manager.api().users().get().as_deref(), Some("u-second"));
    assert_eq!(
        manager.profile().user().map(|user| user.id).as_deref(),
        Some("u-second")
    );
    assert!(manager.profile().is_admin());

    Ok(())
}
