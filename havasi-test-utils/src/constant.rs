//! Fixed values shared by fixtures and tests. None of them are real credentials.

/// Bearer token accepted by the mock API.
pub static TEST_ACCESS_TOKEN: &str = "tok-123";

/// Bearer token the mock API rejects with 401.
pub static TEST_EXPIRED_TOKEN: &str = "tok-bad";

pub static TEST_USER_ID: &str = "u1";

pub static TEST_USERNAME: &str = "alice";

pub static TEST_EMAIL: &str = "alice@example.com";

pub static TEST_REAL_ESTATE_ID: &str = "re-1";

pub static TEST_NOTIFICATION_ID: &str = "n-1";
