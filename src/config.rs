use std::time::Duration;

use url::Url;

use crate::error::config::ConfigError;

pub const DEFAULT_API_URL: &str = "http://localhost:8080";
pub const DEFAULT_OAUTH_REDIRECT_URL: &str = "http://localhost:8080/auth/callback";
pub const DEFAULT_GEOCODER_URL: &str = "https://nominatim.openstreetmap.org/search";
pub const DEFAULT_GOOGLE_AUTH_URL: &str = "https://accounts.google.com/o/oauth2/v2/auth";
pub const DEFAULT_PAGE_SIZE: usize = 10;
pub const DEFAULT_SEARCH_DEBOUNCE_MS: u64 = 500;

const ENV_API_URL: &str = "HAVASI_API_URL";
const ENV_GOOGLE_CLIENT_ID: &str = "HAVASI_GOOGLE_CLIENT_ID";
const ENV_GOOGLE_AUTH_URL: &str = "HAVASI_GOOGLE_AUTH_URL";
const ENV_OAUTH_REDIRECT_URL: &str = "HAVASI_OAUTH_REDIRECT_URL";
const ENV_GEOCODER_URL: &str = "HAVASI_GEOCODER_URL";
const ENV_PAGE_SIZE: &str = "HAVASI_PAGE_SIZE";
const ENV_SEARCH_DEBOUNCE_MS: &str = "HAVASI_SEARCH_DEBOUNCE_MS";
const ENV_STORAGE_PATH: &str = "HAVASI_STORAGE_PATH";

#[derive(Debug, Clone)]
pub struct Config {
    pub api_url: Url,
    pub google_client_id: String,
    pub google_auth_url: Url,
    pub oauth_redirect_url: Url,
    pub geocoder_url: Url,
    pub page_size: usize,
    pub search_debounce_ms: u64,
    /// Location of the native key-value file; unused by the browser build.
    pub storage_path: Option<String>,
}

impl Config {
    /// Reads configuration from the process environment.
    ///
    /// Native builds load `.env` first. Browser builds have no process environment,
    /// so they read the values baked in at compile time instead.
    pub fn from_env() -> Result<Self, ConfigError> {
        #[cfg(not(target_arch = "wasm32"))]
        {
            dotenvy::dotenv().ok();
            Self::from_lookup(|key| std::env::var(key).ok())
        }

        #[cfg(target_arch = "wasm32")]
        {
            Self::from_lookup(compiled_env)
        }
    }

    /// Builds configuration from an arbitrary key lookup, applying defaults for
    /// every key the lookup does not know.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let value = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        Ok(Self {
            api_url: parse_url(ENV_API_URL, value(ENV_API_URL), DEFAULT_API_URL)?,
            google_client_id: value(ENV_GOOGLE_CLIENT_ID).unwrap_or_default(),
            google_auth_url: parse_url(
                ENV_GOOGLE_AUTH_URL,
                value(ENV_GOOGLE_AUTH_URL),
                DEFAULT_GOOGLE_AUTH_URL,
            )?,
            oauth_redirect_url: parse_url(
                ENV_OAUTH_REDIRECT_URL,
                value(ENV_OAUTH_REDIRECT_URL),
                DEFAULT_OAUTH_REDIRECT_URL,
            )?,
            geocoder_url: parse_url(
                ENV_GEOCODER_URL,
                value(ENV_GEOCODER_URL),
                DEFAULT_GEOCODER_URL,
            )?,
            page_size: parse_number(ENV_PAGE_SIZE, value(ENV_PAGE_SIZE), DEFAULT_PAGE_SIZE)?,
            search_debounce_ms: parse_number(
                ENV_SEARCH_DEBOUNCE_MS,
                value(ENV_SEARCH_DEBOUNCE_MS),
                DEFAULT_SEARCH_DEBOUNCE_MS,
            )?,
            storage_path: value(ENV_STORAGE_PATH),
        })
    }

    /// Checks the values that only matter once a user tries to log in.
    pub fn require_google_client_id(&self) -> Result<&str, ConfigError> {
        if self.google_client_id.is_empty() {
            return Err(ConfigError::MissingEnvVar(ENV_GOOGLE_CLIENT_ID.to_string()));
        }

        Ok(&self.google_client_id)
    }

    pub fn search_debounce(&self) -> Duration {
        Duration::from_millis(self.search_debounce_ms)
    }
}

impl Default for Config {
    fn default() -> Self {
        // Defaults are constant strings that always parse
        match Self::from_lookup(|_| None) {
            Ok(config) => config,
            Err(_) => unreachable!("default configuration constants are valid"),
        }
    }
}

fn parse_url(var: &str, value: Option<String>, default: &str) -> Result<Url, ConfigError> {
    let raw = value.unwrap_or_else(|| default.to_string());

    Url::parse(&raw).map_err(|e| ConfigError::InvalidEnvValue {
        var: var.to_string(),
        reason: e.to_string(),
    })
}

fn parse_number<T>(var: &str, value: Option<String>, default: T) -> Result<T, ConfigError>
where
    T: std::str::FromStr + PartialOrd + Default,
    T::Err: std::fmt::Display,
{
    let Some(raw) = value else {
        return Ok(default);
    };

    let parsed = raw
        .trim()
        .parse::<T>()
        .map_err(|e| ConfigError::InvalidEnvValue {
            var: var.to_string(),
            reason: e.to_string(),
        })?;

    if parsed <= T::default() {
        return Err(ConfigError::InvalidEnvValue {
            var: var.to_string(),
            reason: "must be greater than zero".to_string(),
        });
    }

    Ok(parsed)
}

#[cfg(target_arch = "wasm32")]
fn compiled_env(key: &str) -> Option<String> {
    let value = match key {
        ENV_API_URL => option_env!("HAVASI_API_URL"),
        ENV_GOOGLE_CLIENT_ID => option_env!("HAVASI_GOOGLE_CLIENT_ID"),
        ENV_GOOGLE_AUTH_URL => option_env!("HAVASI_GOOGLE_AUTH_URL"),
        ENV_OAUTH_REDIRECT_URL => option_env!("HAVASI_OAUTH_REDIRECT_URL"),
        ENV_GEOCODER_URL => option_env!("HAVASI_GEOCODER_URL"),
        ENV_PAGE_SIZE => option_env!("HAVASI_PAGE_SIZE"),
        ENV_SEARCH_DEBOUNCE_MS => option_env!("HAVASI_SEARCH_DEBOUNCE_MS"),
        _ => None,
    };

    value.map(str::to_string)
}
