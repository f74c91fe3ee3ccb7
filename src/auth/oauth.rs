//! Google sign-in using the OAuth2 implicit flow.
//!
//! The provider redirects back to the callback route with the access token in the
//! URL fragment. The CSRF state generated for the redirect is persisted first and
//! must match the one echoed back.

use std::collections::HashMap;

use dioxus_logger::tracing;
use oauth2::{basic::BasicClient, AuthUrl, ClientId, CsrfToken, RedirectUrl, Scope};
use url::Url;

use crate::{
    config::Config,
    error::{auth::AuthError, Error},
    storage::OAuthStateService,
};

const SCOPES: [&str; 3] = ["openid", "email", "profile"];

pub struct GoogleLogin {
    client_id: String,
    auth_url: Url,
    redirect_url: Url,
    states: OAuthStateService,
}

impl GoogleLogin {
    pub fn new(config: &Config, states: OAuthStateService) -> Result<Self, Error> {
        let client_id = config.require_google_client_id()?.to_string();

        Ok(Self {
            client_id,
            auth_url: config.google_auth_url.clone(),
            redirect_url: config.oauth_redirect_url.clone(),
            states,
        })
    }

    /// Builds the provider URL to send the user to and persists its CSRF state.
    ///
    /// # Returns
    /// - `Ok(Url)` - Google authorization URL requesting a token in the fragment
    /// - `Err(Error::StorageError)` - The CSRF state could not be persisted
    pub fn authorization_url(&self) -> Result<Url, Error> {
        let client = BasicClient::new(ClientId::new(self.client_id.clone()))
            .set_auth_uri(AuthUrl::from_url(self.auth_url.clone()))
            .set_redirect_uri(RedirectUrl::from_url(self.redirect_url.clone()));

        let (url, csrf_state) = client
            .authorize_url(CsrfToken::new_random)
            .add_scopes(SCOPES.iter().map(|scope| Scope::new(scope.to_string())))
            .use_implicit_flow()
            .url();

        self.states.insert(csrf_state.secret())?;

        Ok(url)
    }

    /// Extracts the access token from the callback URL fragment.
    ///
    /// The pending CSRF state is consumed whether or not the callback is accepted.
    ///
    /// # Returns
    /// - `Ok(String)` - The access token to log in with
    /// - `Err(Error::AuthError)` - Provider error, missing token, or state mismatch
    pub fn parse_callback(&self, fragment: &str) -> Result<String, Error> {
        let params: HashMap<String, String> =
            url::form_urlencoded::parse(fragment.trim_start_matches('#').as_bytes())
                .into_owned()
                .collect();

        let expected_state = self.states.take()?;

        if let Some(error) = params.get("error") {
            tracing::warn!("Google login returned an error: {}", error);
            return Err(AuthError::ProviderError(error.clone()).into());
        }

        let Some(expected_state) = expected_state else {
            return Err(AuthError::CsrfMissingValue.into());
        };

        if params.get("state") != Some(&expected_state) {
            return Err(AuthError::CsrfValidationFailed.into());
        }

        params
            .get("access_token")
            .filter(|token| !token.is_empty())
            .cloned()
            .ok_or_else(|| AuthError::MissingAccessToken.into())
    }
}
