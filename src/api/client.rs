//
//  docusign-client
//  api/client.rs
//
//  Created by Ngonidzashe Mangudya on 2026/02/03.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! # HTTP Client Wrapper for the DocuSign API
//!
//! This module provides the execution primitive every feature module goes
//! through. It owns the shared `reqwest` client, the API URL of the selected
//! environment and the debug flag.
//!
//! ## Features
//!
//! - Environment-aware API URL (demo or production)
//! - Standard header construction for bearer-token calls
//! - Structural error detection (`errorCode` bodies)
//! - Request/response dumps through `tracing` when debug is enabled
//! - Custom User-Agent header

use std::time::Duration;

use anyhow::Result;
use reqwest::{Client, StatusCode};
use serde_json::Value;

use super::common::{ApiError, ProviderError, RequestBody, RequestSpec};
use crate::config::Config;

/// Header carrying the account base URL on account-scoped calls.
pub const BASE_URL_HEADER: &str = "X-DocuSign-Base-Url";

/// Builds the standard headers for a DocuSign API call.
///
/// Every call carries the bearer token and JSON content negotiation headers.
/// Account-scoped calls pass their `base_url`, which is bound into the
/// request context through [`BASE_URL_HEADER`].
///
/// # Parameters
///
/// * `access_token` - The OAuth2 access token
/// * `base_url` - The account base URL, for account-scoped calls
///
/// # Example
///
/// ```rust
/// use docusign_client::api::client::build_headers;
///
/// let headers = build_headers("abc", Some("https://demo.docusign.net/restapi/v2/accounts/1"));
/// assert!(headers.contains(&("Authorization".to_string(), "bearer abc".to_string())));
/// assert_eq!(headers.len(), 4);
/// ```
pub fn build_headers(access_token: &str, base_url: Option<&str>) -> Vec<(String, String)> {
    let mut headers = vec![
        ("Authorization".to_string(), format!("bearer {}", access_token)),
        ("Accept".to_string(), "application/json".to_string()),
        ("Content-Type".to_string(), "application/json".to_string()),
    ];

    if let Some(base_url) = base_url {
        headers.push((BASE_URL_HEADER.to_string(), base_url.to_string()));
    }

    headers
}

/// Interprets a raw response into the tagged result callers branch on.
///
/// - An empty body on a success status is `Value::Null`
/// - A JSON object carrying `errorCode` is [`ApiError::Provider`], whatever the status
/// - Other JSON is the success payload
/// - A body that is not JSON is [`ApiError::Http`] on failure statuses and
///   [`ApiError::Decode`] on success statuses
///
/// # Example
///
/// ```rust
/// use docusign_client::api::client::interpret_response;
/// use reqwest::StatusCode;
///
/// let ok = interpret_response(StatusCode::OK, r#"{"users": []}"#).unwrap();
/// assert!(ok["users"].is_array());
///
/// let err = interpret_response(StatusCode::BAD_REQUEST, r#"{"errorCode": "X", "message": "Y"}"#);
/// assert!(err.unwrap_err().provider().is_some());
/// ```
pub fn interpret_response(status: StatusCode, body: &str) -> Result<Value, ApiError> {
    if body.trim().is_empty() {
        if status.is_success() {
            return Ok(Value::Null);
        }
        return Err(ApiError::Http {
            status,
            body: String::new(),
        });
    }

    match serde_json::from_str::<Value>(body) {
        Ok(value) => match ProviderError::from_body(&value) {
            Some(error) => Err(ApiError::Provider(error)),
            None => Ok(value),
        },
        Err(e) if status.is_success() => Err(ApiError::decode("response body is not JSON", e)),
        Err(_) => Err(ApiError::Http {
            status,
            body: body.to_string(),
        }),
    }
}

/// The HTTP client for the DocuSign REST API.
///
/// `DocuSignClient` is cheap to clone: the underlying `reqwest::Client` is
/// reference counted. Feature modules hold a clone and call
/// [`execute`](Self::execute) with a fully built [`RequestSpec`].
///
/// # Example
///
/// ```rust,no_run
/// use docusign_client::api::DocuSignClient;
/// use docusign_client::config::Config;
///
/// let client = DocuSignClient::from_config(&Config::default())?;
/// assert_eq!(client.api_url(), "https://demo.docusign.net/restapi/v2");
/// # Ok::<(), anyhow::Error>(())
/// ```
#[derive(Debug, Clone)]
pub struct DocuSignClient {
    /// The underlying HTTP client
    http: Client,
    /// API root of the selected environment, without a trailing slash
    api_url: String,
    /// Dump requests and responses at `info` level
    debug: bool,
}

impl DocuSignClient {
    /// Creates a client targeting the given API root.
    ///
    /// A trailing slash on `api_url` is removed so that paths can be
    /// appended by plain concatenation.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client could not be created.
    pub fn new(api_url: impl Into<String>) -> Result<Self> {
        Self::with_timeout(api_url, None)
    }

    /// Creates a client from the loaded configuration.
    ///
    /// Picks up the resolved API URL, the debug flag and the request timeout.
    ///
    /// # Errors
    ///
    /// Returns an error if the configured API URL is invalid or the HTTP
    /// client could not be created.
    pub fn from_config(config: &Config) -> Result<Self> {
        let client = Self::with_timeout(
            config.resolved_api_url()?,
            Some(Duration::from_secs(config.timeout_secs)),
        )?;
        Ok(client.with_debug(config.debug))
    }

    fn with_timeout(api_url: impl Into<String>, timeout: Option<Duration>) -> Result<Self> {
        let mut builder = Client::builder().user_agent(format!("ds/{}", crate::VERSION));
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }

        let api_url: String = api_url.into();
        Ok(Self {
            http: builder.build()?,
            api_url: api_url.trim_end_matches('/').to_string(),
            debug: false,
        })
    }

    /// Enables or disables request/response dumps.
    pub fn with_debug(mut self, debug: bool) -> Self {
        self.debug = debug;
        self
    }

    /// Returns the API root (e.g., `https://demo.docusign.net/restapi/v2`).
    pub fn api_url(&self) -> &str {
        &self.api_url
    }

    /// Returns whether request/response dumps are enabled.
    pub fn is_debug(&self) -> bool {
        self.debug
    }

    /// Performs the described call and interprets the response.
    ///
    /// The returned future resolves exactly once, with either the parsed
    /// body or an [`ApiError`]. No retries are attempted.
    ///
    /// # Errors
    ///
    /// - [`ApiError::Network`] if the request could not be sent or read
    /// - [`ApiError::Provider`] if DocuSign returned an `errorCode` body
    /// - [`ApiError::Http`] / [`ApiError::Decode`] if the body is not JSON
    pub async fn execute(&self, spec: &RequestSpec) -> Result<Value, ApiError> {
        if self.debug {
            tracing::info!(label = %spec.label, method = %spec.method, url = %spec.url, "request");
        } else {
            tracing::debug!(label = %spec.label, "request");
        }

        let mut request = self.http.request(spec.method.into(), &spec.url);
        for (name, value) in &spec.headers {
            request = request.header(name.as_str(), value.as_str());
        }
        request = match &spec.body {
            Some(RequestBody::Json(body)) => request.json(body),
            Some(RequestBody::Form(fields)) => request.form(fields),
            None => request,
        };

        let response = request.send().await?;
        let status = response.status();
        let text = response.text().await?;

        if self.debug {
            tracing::info!(label = %spec.label, status = %status, body = %text, "response");
        }

        let result = interpret_response(status, &text);
        if let Err(error) = &result {
            tracing::warn!(label = %spec.label, "{}", error);
        }
        result
    }
}
