/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 19/10/26
******************************************************************************/

//! Transport for the ServiceTrade API
//!
//! [`Client`] sends every request with the current session cookie. When the server
//! answers 401 or 403 the session is invalidated, a fresh one is obtained and the
//! request is sent exactly once more; a second rejection is returned to the caller.
//!
//! # Example
//! ```ignore
//! use servicetrade_client::prelude::*;
//!
//! let client = Client::new(Config::with_credentials("user", "secret"))?;
//! let payload = client.get("webhook/123", &[]).await?;
//! ```

use crate::application::auth::{Auth, Session};
use crate::application::config::Config;
use crate::constants::USER_AGENT;
use crate::error::AppResult;
use crate::model::http::{ApiRequest, RawPayload, make_http_request};
use reqwest::Client as HttpInternalClient;
use serde_json::Value;
use std::sync::Arc;
use std::time::Duration;
use tracing::warn;

/// Client for the ServiceTrade API with automatic authentication
///
/// Authentication happens lazily on the first request.
pub struct Client {
    auth: Arc<Auth>,
    http_client: HttpInternalClient,
    config: Arc<Config>,
}

impl Client {
    /// Creates a new client without performing authentication
    ///
    /// # Arguments
    /// * `config` - Configuration containing credentials and API settings
    ///
    /// # Returns
    /// * `Err(AppError::Network)` - If the underlying HTTP client cannot be built
    pub fn new(config: Config) -> AppResult<Self> {
        let config = Arc::new(config);

        let http_client = HttpInternalClient::builder()
            .user_agent(USER_AGENT)
            .timeout(Duration::from_secs(config.rest_api.timeout))
            .build()?;

        let auth = Arc::new(Auth::new(config.clone(), http_client.clone()));

        Ok(Self {
            auth,
            http_client,
            config,
        })
    }

    /// Makes a GET request with query pairs
    pub async fn get(&self, path: &str, query: &[(&str, &str)]) -> AppResult<RawPayload> {
        let request = ApiRequest::get(path).extend_query(query.iter().copied());
        self.send(request).await
    }

    /// Makes a POST request with a JSON body
    pub async fn post(&self, path: &str, body: Value) -> AppResult<RawPayload> {
        self.send(ApiRequest::post(path, body)).await
    }

    /// Makes a PUT request with a JSON body
    pub async fn put(&self, path: &str, body: Value) -> AppResult<RawPayload> {
        self.send(ApiRequest::put(path, body)).await
    }

    /// Makes a DELETE request, ignoring the response body
    pub async fn delete(&self, path: &str) -> AppResult<()> {
        self.execute(ApiRequest::delete(path)).await.map(|_| ())
    }

    /// Sends a request and decodes the JSON response
    ///
    /// # Returns
    /// * `Ok(RawPayload)` - Decoded body of a 2xx response (`null` when empty)
    /// * `Err(AppError::Decode)` - The body is not valid JSON
    /// * `Err(AppError)` - Any error from [`Client::execute`]
    pub async fn send(&self, request: ApiRequest) -> AppResult<RawPayload> {
        let text = self.execute(request).await?;
        RawPayload::from_body(&text)
    }

    /// Sends a request and returns the raw body of the 2xx response
    ///
    /// Runs the full session cycle: ensure session → send → on 401/403 invalidate,
    /// ensure session and resend once → on a second 401/403 invalidate and fail.
    ///
    /// # Returns
    /// * `Ok(String)` - Raw response body
    /// * `Err(AppError::Api)` - Non-2xx response, including a repeated 401/403
    /// * `Err(AppError::Network)` - The exchange failed
    /// * `Err(AppError::Configuration | AppError::Authentication)` - No session could be obtained
    pub async fn execute(&self, request: ApiRequest) -> AppResult<String> {
        let session = self.auth.get_session().await?;

        match self.dispatch(&request, &session).await {
            Err(e) if e.is_auth_failure() => {
                warn!(
                    "Session rejected ({}), re-authenticating and retrying {} {}",
                    e, request.method, request.path
                );
                self.auth.invalidate(&session.token).await;
                let session = self.auth.get_session().await?;

                match self.dispatch(&request, &session).await {
                    Err(e) if e.is_auth_failure() => {
                        self.auth.invalidate(&session.token).await;
                        Err(e)
                    }
                    other => other,
                }
            }
            other => other,
        }
    }

    async fn dispatch(&self, request: &ApiRequest, session: &Session) -> AppResult<String> {
        let url = self.config.url_for(&request.path);
        let cookie = session.cookie();
        let headers = vec![("Cookie", cookie.as_str())];

        make_http_request(
            &self.http_client,
            request.method.clone(),
            &url,
            headers,
            &request.query,
            request.body.as_ref(),
        )
        .await
    }

    /// Gets the current session, logging in when needed
    pub async fn get_session(&self) -> AppResult<Session> {
        self.auth.get_session().await
    }

    /// Checks whether the client currently holds a session
    pub async fn is_authenticated(&self) -> bool {
        self.auth.is_authenticated().await
    }

    /// Gets the configuration this client was built with
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Gets Auth reference
    pub fn auth(&self) -> &Auth {
        &self.auth
    }
}
