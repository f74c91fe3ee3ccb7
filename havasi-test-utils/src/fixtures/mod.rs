//! Test fixtures for the mock Havasi API.
//!
//! - `factory` - JSON bodies shaped like the API's responses
//! - `mockito` - endpoint registration on the [`TestSetup`] mock server

pub mod factory;
pub mod mockito;

use crate::TestSetup;

impl TestSetup {
    pub fn api<'a>(&'a mut self) -> ApiFixtures<'a> {
        ApiFixtures { setup: self }
    }
}

pub struct ApiFixtures<'a> {
    pub setup: &'a mut TestSetup,
}
