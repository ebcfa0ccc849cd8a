/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 19/10/26
******************************************************************************/
use crate::application::auth::Session;
use crate::error::{AppError, AppResult};
use chrono::Utc;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Body of the `POST /auth` login request
#[derive(Debug, Clone, Serialize)]
pub struct LoginRequest<'a> {
    /// Account username
    pub username: &'a str,
    /// Account password
    pub password: &'a str,
}

/// Response of the `POST /auth` login endpoint
///
/// `{ "sessionId": "...", "data": { "authenticated": true, "authToken": "...", "user": {...} } }`
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginResponse {
    /// Session identifier, the same value as `data.authToken` on current servers
    #[serde(default)]
    pub session_id: Option<String>,
    /// Login envelope
    pub data: Option<LoginData>,
}

/// `data` part of the login response
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginData {
    /// Whether the credentials were accepted
    #[serde(default)]
    pub authenticated: bool,
    /// Token to present as the session cookie
    #[serde(default)]
    pub auth_token: Option<String>,
    /// The authenticated user, kept untyped
    #[serde(default)]
    pub user: Option<Value>,
}

impl LoginResponse {
    /// Converts the response into a [`Session`]
    ///
    /// # Returns
    /// * `Ok(Session)` - the login was accepted and a token is present
    /// * `Err(AppError::Authentication)` - missing envelope, `authenticated: false`, or no token
    pub fn into_session(self) -> AppResult<Session> {
        let data = self.data.ok_or_else(|| {
            AppError::Authentication("login response has no data envelope".to_string())
        })?;

        if !data.authenticated {
            return Err(AppError::Authentication(
                "server reported authenticated: false".to_string(),
            ));
        }

        let token = data
            .auth_token
            .filter(|t| !t.is_empty())
            .or(self.session_id.filter(|t| !t.is_empty()))
            .ok_or_else(|| {
                AppError::Authentication("login response carries no session token".to_string())
            })?;

        let authenticated_user_id = data
            .user
            .as_ref()
            .and_then(|user| user.get("id"))
            .and_then(Value::as_i64);

        Ok(Session {
            token,
            authenticated_user_id,
            created_at: Utc::now(),
        })
    }
}
