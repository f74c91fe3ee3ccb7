//! Tests for the page-level services.
//!
//! This module drives the listing browser, notification manager and sent
//! notification pager against a mock API, covering pagination, refetch after
//! mutation and per-row action tracking.

mod browser;
mod notification;
mod sent;

use havasi_test_utils::prelude::*;

use crate::TestSetupExt;
