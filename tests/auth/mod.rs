//! Tests for the session lifecycle.
//!
//! This module exercises the session manager against a mock API: login with a
//! valid and a rejected token, startup restore, forced logout on 401 and the
//! fencing of stale profile responses.

mod session;

use havasi_test_utils::prelude::*;

use crate::TestSetupExt;
