//! Tests for the API client.
//!
//! This module verifies request execution against a mock API: bearer headers, the
//! 401 interception that forces a logout, server error message extraction, and
//! decoding of each endpoint's payload.

mod notification;
mod real_estate;
mod request;

use havasi_test_utils::prelude::*;

use crate::TestSetupExt;
