use crate::constants::{DEFAULT_BASE_URL, DEFAULT_TIMEOUT_SECS};
use crate::error::{AppError, AppResult};
use crate::utils::config::{get_env_or_default, get_env_or_none};
use dotenv::dotenv;
use pretty_simple_display::{DebugPretty, DisplaySimple};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

#[derive(DebugPretty, DisplaySimple, Serialize, Deserialize, Clone, Default, PartialEq)]
/// Authentication credentials for the ServiceTrade API
///
/// Secrets are never serialized, so they stay out of `Debug`/`Display` output.
pub struct Credentials {
    /// Username of the ServiceTrade account
    pub username: String,
    /// Password of the ServiceTrade account
    #[serde(skip_serializing, default)]
    pub password: String,
    /// Pre-issued session token, used instead of a username/password login
    #[serde(skip_serializing, default)]
    pub auth_token: Option<String>,
}

/// The single authentication method a configuration resolves to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthMethod<'a> {
    /// Log in through `POST /auth`
    Password {
        /// Account username
        username: &'a str,
        /// Account password
        password: &'a str,
    },
    /// Reuse an already issued session token
    Token(&'a str),
}

impl Credentials {
    /// Resolves the configured authentication method
    ///
    /// # Returns
    /// * `Ok(AuthMethod)` - exactly one method is configured
    /// * `Err(AppError::Configuration)` - no credentials, half a username/password pair,
    ///   or both a password pair and a token
    pub fn auth_method(&self) -> AppResult<AuthMethod<'_>> {
        let has_user = !self.username.is_empty();
        let has_password = !self.password.is_empty();
        let token = self.auth_token.as_deref().filter(|t| !t.is_empty());

        match (has_user, has_password, token) {
            (true, true, None) => Ok(AuthMethod::Password {
                username: &self.username,
                password: &self.password,
            }),
            (false, false, Some(token)) => Ok(AuthMethod::Token(token)),
            (true, true, Some(_)) => Err(AppError::Configuration(
                "both username/password and auth token are set; configure exactly one".to_string(),
            )),
            (true, false, _) => Err(AppError::Configuration("password is missing".to_string())),
            (false, true, _) => Err(AppError::Configuration("username is missing".to_string())),
            (false, false, None) => Err(AppError::Configuration(
                "no credentials configured".to_string(),
            )),
        }
    }
}

#[derive(DebugPretty, DisplaySimple, Serialize, Deserialize, Clone, PartialEq)]
/// Configuration for the REST API
pub struct RestApiConfig {
    /// Base URL for the ServiceTrade REST API, e.g. `https://api.servicetrade.com/api`
    pub base_url: String,
    /// Timeout in seconds for REST API requests
    pub timeout: u64,
}

impl Default for RestApiConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: DEFAULT_TIMEOUT_SECS,
        }
    }
}

#[derive(DebugPretty, DisplaySimple, Serialize, Deserialize, Clone, Default, PartialEq)]
/// Main configuration for the ServiceTrade API client
///
/// `Config::default()` is the blank state: no credentials, default base URL and timeout.
pub struct Config {
    /// Authentication credentials
    pub credentials: Credentials,
    /// REST API configuration
    pub rest_api: RestApiConfig,
}

/// Partial update applied by [`Config::configure`]
///
/// Only the fields that are `Some` overwrite the configuration.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ConfigOptions {
    /// New base URL
    pub base_url: Option<String>,
    /// New username
    pub username: Option<String>,
    /// New password
    pub password: Option<String>,
    /// New pre-issued session token
    pub auth_token: Option<String>,
    /// New timeout in seconds
    pub timeout: Option<u64>,
}

impl ConfigOptions {
    /// Creates an empty set of options
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the base URL
    #[must_use]
    pub fn base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = Some(base_url.into());
        self
    }

    /// Sets the username
    #[must_use]
    pub fn username(mut self, username: impl Into<String>) -> Self {
        self.username = Some(username.into());
        self
    }

    /// Sets the password
    #[must_use]
    pub fn password(mut self, password: impl Into<String>) -> Self {
        self.password = Some(password.into());
        self
    }

    /// Sets a pre-issued session token
    #[must_use]
    pub fn auth_token(mut self, auth_token: impl Into<String>) -> Self {
        self.auth_token = Some(auth_token.into());
        self
    }

    /// Sets the request timeout in seconds
    #[must_use]
    pub fn timeout(mut self, timeout: u64) -> Self {
        self.timeout = Some(timeout);
        self
    }
}

impl Config {
    /// Creates a configuration from the environment
    ///
    /// Loads a `.env` file when present and reads `SERVICETRADE_USERNAME`,
    /// `SERVICETRADE_PASSWORD`, `SERVICETRADE_AUTH_TOKEN`, `SERVICETRADE_BASE_URL` and
    /// `SERVICETRADE_TIMEOUT`. Missing credentials are not an error here; they surface as
    /// [`AppError::Configuration`] on the first login.
    pub fn new() -> Self {
        match dotenv() {
            Ok(_) => debug!("Successfully loaded .env file"),
            Err(e) => debug!("Failed to load .env file: {e}"),
        }

        let username = get_env_or_default("SERVICETRADE_USERNAME", String::new());
        let password = get_env_or_default("SERVICETRADE_PASSWORD", String::new());
        let auth_token: Option<String> = get_env_or_none("SERVICETRADE_AUTH_TOKEN");

        if username.is_empty() && auth_token.is_none() {
            warn!("SERVICETRADE_USERNAME not found in environment variables or .env file");
        }

        Config {
            credentials: Credentials {
                username,
                password,
                auth_token,
            },
            rest_api: RestApiConfig {
                base_url: get_env_or_default(
                    "SERVICETRADE_BASE_URL",
                    String::from(DEFAULT_BASE_URL),
                ),
                timeout: get_env_or_default("SERVICETRADE_TIMEOUT", DEFAULT_TIMEOUT_SECS),
            },
        }
    }

    /// Creates a configuration with a username/password pair and default endpoint
    #[must_use]
    pub fn with_credentials(username: impl Into<String>, password: impl Into<String>) -> Self {
        let mut config = Self::default();
        config.configure(ConfigOptions::new().username(username).password(password));
        config
    }

    /// Overwrites the fields set in `options`, leaving the others untouched
    pub fn configure(&mut self, options: ConfigOptions) -> &mut Self {
        if let Some(base_url) = options.base_url {
            self.rest_api.base_url = base_url;
        }
        if let Some(username) = options.username {
            self.credentials.username = username;
        }
        if let Some(password) = options.password {
            self.credentials.password = password;
        }
        if let Some(auth_token) = options.auth_token {
            self.credentials.auth_token = Some(auth_token);
        }
        if let Some(timeout) = options.timeout {
            self.rest_api.timeout = timeout;
        }
        self
    }

    /// Restores the blank state
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Builds the absolute URL of an endpoint path
    ///
    /// Absolute `http(s)` URLs are returned unchanged.
    #[must_use]
    pub fn url_for(&self, path: &str) -> String {
        if path.starts_with("http://") || path.starts_with("https://") {
            return path.to_string();
        }
        format!(
            "{}/{}",
            self.rest_api.base_url.trim_end_matches('/'),
            path.trim_start_matches('/')
        )
    }
}
