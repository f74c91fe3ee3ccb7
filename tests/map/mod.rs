//! Tests for listing geocoding.
//!
//! This module runs the geocoder against a mock Nominatim search endpoint and
//! checks the batched locating of listings without stored coordinates.

mod geocode;

use havasi_test_utils::prelude::*;
