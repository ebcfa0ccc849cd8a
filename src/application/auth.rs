/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 19/10/26
******************************************************************************/

//! Session management for the ServiceTrade API
//!
//! [`Auth`] is a two-state machine: no session (Unauthenticated) or one cached
//! [`Session`] (Authenticated). It logs in lazily through `POST /auth` and is sent back
//! to Unauthenticated by the transport when the server answers 401/403.
//!
//! The session lives in a single `RwLock` cell. Two tasks racing while Unauthenticated
//! may both log in; the last token written wins, which the server tolerates.

use crate::application::config::{AuthMethod, Config};
use crate::constants::{AUTH_PATH, SESSION_COOKIE};
use crate::error::{AppError, AppResult};
use crate::model::auth::{LoginRequest, LoginResponse};
use crate::model::http::make_http_request;
use chrono::{DateTime, Utc};
use pretty_simple_display::{DebugPretty, DisplaySimple};
use reqwest::{Client, Method};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::{debug, info, warn};

/// Session information for authenticated requests
#[derive(DebugPretty, DisplaySimple, Clone, Serialize, Deserialize, PartialEq)]
pub struct Session {
    /// Session token presented as the `PHPSESSID` cookie
    #[serde(skip_serializing, default)]
    pub token: String,
    /// Id of the user the server authenticated, when reported
    pub authenticated_user_id: Option<i64>,
    /// When the session was obtained
    pub created_at: DateTime<Utc>,
}

impl Session {
    /// Creates a session from an already issued token
    #[must_use]
    pub fn from_token(token: impl Into<String>) -> Self {
        Self {
            token: token.into(),
            authenticated_user_id: None,
            created_at: Utc::now(),
        }
    }

    /// Value of the `Cookie` header carrying this session
    #[must_use]
    pub fn cookie(&self) -> String {
        format!("{}={}", SESSION_COOKIE, self.token)
    }
}

/// Authentication manager for the ServiceTrade API
pub struct Auth {
    config: Arc<Config>,
    client: Client,
    session: Arc<RwLock<Option<Session>>>,
}

impl Auth {
    /// Creates a new, unauthenticated session manager
    ///
    /// # Arguments
    /// * `config` - Configuration containing credentials and API settings
    /// * `client` - HTTP client shared with the transport
    pub fn new(config: Arc<Config>, client: Client) -> Self {
        Self {
            config,
            client,
            session: Arc::new(RwLock::new(None)),
        }
    }

    /// Gets the current session, logging in first when there is none
    ///
    /// # Returns
    /// * `Ok(Session)` - A session to present on the next request
    /// * `Err(AppError)` - If credentials are missing or the login is rejected
    pub async fn get_session(&self) -> AppResult<Session> {
        if let Some(session) = self.session.read().await.as_ref() {
            return Ok(session.clone());
        }

        info!("No active session, logging in");
        self.login().await
    }

    /// Checks whether a session is currently cached
    pub async fn is_authenticated(&self) -> bool {
        self.session.read().await.is_some()
    }

    /// Performs a login and stores the resulting session
    ///
    /// With a username/password configuration this calls `POST /auth`; with a
    /// pre-issued token the session is built locally.
    ///
    /// # Returns
    /// * `Ok(Session)` - Authenticated session
    /// * `Err(AppError::Configuration)` - No (or ambiguous) credentials
    /// * `Err(AppError::Authentication)` - Login rejected or malformed response
    /// * `Err(AppError::Network)` - The login request could not be sent
    pub async fn login(&self) -> AppResult<Session> {
        let session = match self.config.credentials.auth_method()? {
            AuthMethod::Password { username, password } => {
                self.login_with_password(username, password).await?
            }
            AuthMethod::Token(token) => {
                debug!("Using pre-issued auth token");
                Session::from_token(token)
            }
        };

        let mut sess = self.session.write().await;
        *sess = Some(session.clone());

        info!(
            "✓ Login successful, user: {}",
            session
                .authenticated_user_id
                .map_or_else(|| "unknown".to_string(), |id| id.to_string())
        );
        Ok(session)
    }

    async fn login_with_password(&self, username: &str, password: &str) -> AppResult<Session> {
        let url = self.config.url_for(AUTH_PATH);
        let body = serde_json::to_value(LoginRequest { username, password })?;

        debug!("Sending login request to: {}", url);

        let text = match make_http_request(
            &self.client,
            Method::POST,
            &url,
            Vec::new(),
            &[],
            Some(&body),
        )
        .await
        {
            Ok(text) => text,
            Err(AppError::Api { status, body }) => {
                warn!("Login rejected with status {}", status);
                return Err(AppError::Authentication(format!(
                    "login rejected with status {status}: {body}"
                )));
            }
            Err(e) => return Err(e),
        };

        let response: LoginResponse = serde_json::from_str(&text).map_err(|e| {
            AppError::Authentication(format!("malformed login response: {e}"))
        })?;

        response.into_session()
    }

    /// Drops the cached session if it is still the one the server rejected
    ///
    /// A session obtained meanwhile by a concurrent request carries another token and is
    /// kept, so a late 401 does not force an extra login.
    ///
    /// # Arguments
    /// * `rejected_token` - Token of the session the server answered 401/403 to
    pub async fn invalidate(&self, rejected_token: &str) {
        let mut session = self.session.write().await;
        match session.as_ref().map(|current| current.token == rejected_token) {
            Some(true) => {
                *session = None;
                debug!("Session invalidated");
            }
            Some(false) => debug!("Rejected session already replaced, keeping the current one"),
            None => {}
        }
    }
}
