/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 19/10/26
******************************************************************************/
use crate::error::{AppError, AppResult};
use reqwest::{Client, Method, Url};
use serde_json::Value;
use std::fmt::Display;
use tracing::debug;

/// A single request against the REST API
///
/// Built per call and consumed by the transport; never retained.
#[derive(Debug, Clone, PartialEq)]
pub struct ApiRequest {
    /// HTTP method
    pub method: Method,
    /// Endpoint path relative to the base URL, e.g. `webhook/123`
    pub path: String,
    /// Query string pairs, sent in insertion order
    pub query: Vec<(String, String)>,
    /// JSON body
    pub body: Option<Value>,
}

impl ApiRequest {
    /// Creates a request without query or body
    pub fn new(method: Method, path: impl Into<String>) -> Self {
        Self {
            method,
            path: path.into(),
            query: Vec::new(),
            body: None,
        }
    }

    /// `GET path`
    pub fn get(path: impl Into<String>) -> Self {
        Self::new(Method::GET, path)
    }

    /// `POST path` with a JSON body
    pub fn post(path: impl Into<String>, body: Value) -> Self {
        Self::new(Method::POST, path).body(body)
    }

    /// `PUT path` with a JSON body
    pub fn put(path: impl Into<String>, body: Value) -> Self {
        Self::new(Method::PUT, path).body(body)
    }

    /// `DELETE path`
    pub fn delete(path: impl Into<String>) -> Self {
        Self::new(Method::DELETE, path)
    }

    /// Appends one query pair
    #[must_use]
    pub fn query(mut self, key: impl Into<String>, value: impl Display) -> Self {
        self.query.push((key.into(), value.to_string()));
        self
    }

    /// Appends several query pairs, keeping their order
    #[must_use]
    pub fn extend_query<I, K, V>(mut self, pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Display,
    {
        self.query
            .extend(pairs.into_iter().map(|(k, v)| (k.into(), v.to_string())));
        self
    }

    /// Sets the JSON body
    #[must_use]
    pub fn body(mut self, body: Value) -> Self {
        self.body = Some(body);
        self
    }
}

/// Decoded body of a successful response
///
/// Every successful response is expected to carry a top-level `data` field; reading it
/// through [`RawPayload::data`] enforces that.
#[derive(Debug, Clone, PartialEq)]
pub struct RawPayload(Value);

impl RawPayload {
    /// Wraps an already decoded JSON value
    #[must_use]
    pub fn new(value: Value) -> Self {
        Self(value)
    }

    /// Decodes a response body; an empty body decodes to `null`
    pub fn from_body(body: &str) -> AppResult<Self> {
        if body.trim().is_empty() {
            return Ok(Self(Value::Null));
        }
        Ok(Self(serde_json::from_str(body)?))
    }

    /// The whole decoded body
    #[must_use]
    pub fn as_value(&self) -> &Value {
        &self.0
    }

    /// Consumes the payload and returns the whole decoded body
    #[must_use]
    pub fn into_value(self) -> Value {
        self.0
    }

    /// The `data` field of the envelope
    ///
    /// # Returns
    /// * `Err(AppError::Protocol)` - the body has no (or a `null`) `data` field
    pub fn data(&self) -> AppResult<&Value> {
        match self.0.get("data") {
            Some(Value::Null) | None => Err(AppError::Protocol(
                "response envelope has no `data` field".to_string(),
            )),
            Some(data) => Ok(data),
        }
    }

    /// Consumes the payload and returns the `data` field of the envelope
    pub fn into_data(self) -> AppResult<Value> {
        match self.0 {
            Value::Object(mut map) => match map.remove("data") {
                Some(Value::Null) | None => Err(AppError::Protocol(
                    "response envelope has no `data` field".to_string(),
                )),
                Some(data) => Ok(data),
            },
            _ => Err(AppError::Protocol(
                "response body is not a JSON object".to_string(),
            )),
        }
    }
}

/// Percent-encodes one caller-supplied path segment
///
/// `/`, `?`, `#`, `%` and spaces are escaped, so the value stays a single segment.
///
/// ```
/// use servicetrade_client::model::http::encode_path_segment;
/// assert_eq!(encode_path_segment("WO#42").unwrap(), "WO%2342");
/// assert_eq!(encode_path_segment("a/b c").unwrap(), "a%2Fb%20c");
/// ```
///
/// # Returns
/// * `Err(AppError::InvalidArgument)` - the segment is empty, `.` or `..`
pub fn encode_path_segment(raw: &str) -> AppResult<String> {
    if raw.is_empty() || raw == "." || raw == ".." {
        return Err(AppError::InvalidArgument(format!(
            "'{raw}' cannot be used as a path segment"
        )));
    }

    let mut url = Url::parse("http://localhost/")
        .map_err(|e| AppError::Protocol(format!("segment encoder base URL: {e}")))?;
    url.path_segments_mut()
        .map_err(|()| AppError::Protocol("segment encoder base URL has no path".to_string()))?
        .pop_if_empty()
        .push(raw);

    Ok(url.path().trim_start_matches('/').to_string())
}

/// Sends one HTTP request and classifies the response by status
///
/// No retry happens here: re-authentication is the caller's business.
///
/// # Arguments
///
/// * `client` - The HTTP client to use for the request
/// * `method` - HTTP method
/// * `url` - Full URL to request
/// * `headers` - Vector of (header_name, header_value) tuples
/// * `query` - Query pairs appended to the URL in order
/// * `body` - Optional request body (serialized to JSON, with `Content-Type: application/json`)
///
/// # Returns
///
/// * `Ok(String)` - The raw body of a 2xx response
/// * `Err(AppError::Api)` - Any other status, with the response body
/// * `Err(AppError::Network)` - The exchange itself failed
pub async fn make_http_request(
    client: &Client,
    method: Method,
    url: &str,
    headers: Vec<(&str, &str)>,
    query: &[(String, String)],
    body: Option<&Value>,
) -> AppResult<String> {
    debug!("{} {}", method, url);

    let mut request = client
        .request(method, url)
        .header("Accept", "application/json");

    for (name, value) in &headers {
        request = request.header(*name, *value);
    }

    if !query.is_empty() {
        request = request.query(query);
    }

    if let Some(b) = body {
        request = request
            .header("Content-Type", "application/json")
            .json(b);
    }

    let response = request.send().await?;
    let status = response.status();
    debug!("Response status: {}", status);

    let text = response.text().await?;

    if status.is_success() {
        return Ok(text);
    }

    debug!("Request failed with status {}: {}", status, text);
    Err(AppError::Api { status, body: text })
}
