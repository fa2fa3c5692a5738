//
//  docusign-client
//  api/common/mod.rs
//
//  Created by Ngonidzashe Mangudya on 2026/02/03.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Common API Types for the DocuSign REST API
//!
//! This module provides the request and error types shared by every feature
//! module. A feature operation builds a [`RequestSpec`], hands it to
//! [`DocuSignClient::execute`](super::DocuSignClient::execute) and receives
//! either the parsed JSON body or an [`ApiError`].
//!
//! # Overview
//!
//! - [`HttpMethod`] - The HTTP verbs used by the DocuSign API
//! - [`RequestSpec`] - A complete, immutable description of one API call
//! - [`RequestBody`] - JSON or form-encoded request payloads
//! - [`ProviderError`] - An error body reported by DocuSign (`errorCode` + `message`)
//! - [`ApiError`] - Unified error type for all API operations
//!
//! # Example
//!
//! ```rust
//! use docusign_client::api::common::{ApiError, ProviderError};
//! use serde_json::json;
//!
//! let body = json!({"errorCode": "USER_AUTHENTICATION_FAILED", "message": "Bad token"});
//! let error = ApiError::Provider(ProviderError::from_body(&body).unwrap());
//!
//! // The JSON form of a provider error is the body DocuSign sent
//! assert_eq!(error.to_json(), body);
//! ```
//!
//! # Notes
//!
//! - Provider errors are detected structurally: any JSON object carrying an
//!   `errorCode` key is an error, whatever the HTTP status was
//! - [`ApiError::to_json`] returns the payload callers inspect, so raw and
//!   simplified error shapes stay distinguishable

use std::fmt;

use reqwest::StatusCode;
use serde_json::{json, Value};
use thiserror::Error;

/// The JSON key DocuSign uses to flag an error response.
pub const ERROR_CODE_KEY: &str = "errorCode";

/// HTTP methods used by the DocuSign API.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HttpMethod {
    Get,
    Post,
    Delete,
}

impl HttpMethod {
    /// Returns the upper-case method name (e.g., `"GET"`).
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Get => "GET",
            Self::Post => "POST",
            Self::Delete => "DELETE",
        }
    }
}

impl fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<HttpMethod> for reqwest::Method {
    fn from(method: HttpMethod) -> Self {
        match method {
            HttpMethod::Get => reqwest::Method::GET,
            HttpMethod::Post => reqwest::Method::POST,
            HttpMethod::Delete => reqwest::Method::DELETE,
        }
    }
}

/// The payload of a request.
#[derive(Debug, Clone, PartialEq)]
pub enum RequestBody {
    /// A JSON document, sent with `Content-Type: application/json`.
    Json(Value),
    /// URL-encoded form fields, used by the OAuth endpoints.
    Form(Vec<(String, String)>),
}

/// A complete description of a single DocuSign API call.
///
/// `RequestSpec` is built fresh for every operation and is never mutated
/// after it is handed to the client. Keeping the description separate from
/// its execution means every request builder can be tested without a
/// network.
///
/// # Fields
///
/// * `label` - Human-readable operation name, used only for logging
/// * `method` - The HTTP method
/// * `url` - The absolute target URL
/// * `headers` - Header name/value pairs, in insertion order
/// * `body` - Optional request payload
///
/// # Example
///
/// ```rust
/// use docusign_client::api::common::{HttpMethod, RequestSpec};
/// use serde_json::json;
///
/// let spec = RequestSpec::new("Add Users", HttpMethod::Post, "https://demo.docusign.net/restapi/v2/accounts/1/users")
///     .header("Authorization", "bearer token")
///     .json(json!({"newUsers": []}));
///
/// assert_eq!(spec.header_value("authorization"), Some("bearer token"));
/// assert_eq!(spec.json_body(), Some(&json!({"newUsers": []})));
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct RequestSpec {
    pub label: String,
    pub method: HttpMethod,
    pub url: String,
    pub headers: Vec<(String, String)>,
    pub body: Option<RequestBody>,
}

impl RequestSpec {
    /// Creates a request description with no headers and no body.
    pub fn new(label: impl Into<String>, method: HttpMethod, url: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            method,
            url: url.into(),
            headers: Vec::new(),
            body: None,
        }
    }

    /// Shorthand for a `GET` request.
    pub fn get(label: impl Into<String>, url: impl Into<String>) -> Self {
        Self::new(label, HttpMethod::Get, url)
    }

    /// Shorthand for a `POST` request.
    pub fn post(label: impl Into<String>, url: impl Into<String>) -> Self {
        Self::new(label, HttpMethod::Post, url)
    }

    /// Shorthand for a `DELETE` request.
    pub fn delete(label: impl Into<String>, url: impl Into<String>) -> Self {
        Self::new(label, HttpMethod::Delete, url)
    }

    /// Appends a single header.
    pub fn header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.push((name.into(), value.into()));
        self
    }

    /// Appends a set of headers, typically from [`build_headers`](super::client::build_headers).
    pub fn headers(mut self, headers: Vec<(String, String)>) -> Self {
        self.headers.extend(headers);
        self
    }

    /// Attaches a JSON body.
    pub fn json(mut self, body: Value) -> Self {
        self.body = Some(RequestBody::Json(body));
        self
    }

    /// Attaches a URL-encoded form body.
    pub fn form<K, V>(mut self, fields: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: Into<String>,
        V: Into<String>,
    {
        let fields = fields
            .into_iter()
            .map(|(k, v)| (k.into(), v.into()))
            .collect();
        self.body = Some(RequestBody::Form(fields));
        self
    }

    /// Looks up a header value by name (case-insensitive).
    pub fn header_value(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(key, _)| key.eq_ignore_ascii_case(name))
            .map(|(_, value)| value.as_str())
    }

    /// Returns the JSON body, if this request carries one.
    pub fn json_body(&self) -> Option<&Value> {
        match &self.body {
            Some(RequestBody::Json(value)) => Some(value),
            _ => None,
        }
    }
}

/// An error body reported by DocuSign.
///
/// DocuSign reports failures as a JSON object of the form
/// `{"errorCode": "...", "message": "..."}`. The raw body is kept so it can
/// be handed back to callers unchanged.
#[derive(Debug, Clone, PartialEq)]
pub struct ProviderError {
    error_code: String,
    message: Option<String>,
    raw: Value,
}

impl ProviderError {
    /// Recognises an error body by the presence of the `errorCode` key.
    ///
    /// Returns `None` for anything that is not a JSON object carrying that key.
    pub fn from_body(body: &Value) -> Option<Self> {
        let object = body.as_object()?;
        let error_code = match object.get(ERROR_CODE_KEY)? {
            Value::String(code) => code.clone(),
            other => other.to_string(),
        };
        let message = object
            .get("message")
            .and_then(Value::as_str)
            .map(str::to_string);

        Some(Self {
            error_code,
            message,
            raw: body.clone(),
        })
    }

    /// The provider's error code (e.g., `"USER_AUTHENTICATION_FAILED"`).
    pub fn error_code(&self) -> &str {
        &self.error_code
    }

    /// The provider's human-readable message, if one was sent.
    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    /// The error body exactly as DocuSign returned it.
    pub fn raw(&self) -> &Value {
        &self.raw
    }

    /// Consumes the error and returns the raw body.
    pub fn into_raw(self) -> Value {
        self.raw
    }

    /// Flattens the error into `"<code>: <message>"`.
    ///
    /// A missing message yields just the code.
    pub fn summary(&self) -> String {
        match &self.message {
            Some(message) => format!("{}: {}", self.error_code, message),
            None => self.error_code.clone(),
        }
    }
}

impl fmt::Display for ProviderError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.summary())
    }
}

/// Unified error type for all DocuSign API operations.
///
/// # Variants
///
/// | Variant | Description |
/// |---------|-------------|
/// | `Provider` | DocuSign returned an `errorCode` body |
/// | `Simplified` | A provider error flattened to a single string |
/// | `Http` | Non-success status with a body that is not JSON |
/// | `Network` | Transport-level failure |
/// | `Decode` | The response could not be interpreted |
///
/// # Example
///
/// ```rust
/// use docusign_client::api::common::ApiError;
/// use serde_json::json;
///
/// let error = ApiError::Simplified("X: Y".to_string());
/// assert_eq!(error.to_json(), json!({"error": "X: Y"}));
/// ```
#[derive(Error, Debug)]
pub enum ApiError {
    /// An error body reported by DocuSign, kept unchanged.
    #[error("{0}")]
    Provider(ProviderError),

    /// A provider error flattened to `"<code>: <message>"`.
    #[error("{0}")]
    Simplified(String),

    /// The server returned a non-success status and a body that is not JSON.
    #[error("API error ({status}): {body}")]
    Http {
        /// The HTTP status code
        status: StatusCode,
        /// The raw response body
        body: String,
    },

    /// A network-level error occurred during the request.
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    /// The response body could not be interpreted.
    #[error("Invalid response: {0}")]
    Decode(String),
}

impl ApiError {
    /// Returns the payload a caller inspects for this error.
    ///
    /// - `Provider` yields the raw DocuSign body
    /// - `Simplified` yields `{"error": "<code>: <message>"}`
    /// - Every other variant yields `{"error": "<display text>"}`
    pub fn to_json(&self) -> Value {
        match self {
            Self::Provider(error) => error.raw().clone(),
            Self::Simplified(message) => json!({ "error": message }),
            other => json!({ "error": other.to_string() }),
        }
    }

    /// Returns the provider error, if this is one.
    pub fn provider(&self) -> Option<&ProviderError> {
        match self {
            Self::Provider(error) => Some(error),
            _ => None,
        }
    }

    /// Converts a provider error into its simplified form.
    ///
    /// Other variants are returned unchanged.
    pub fn simplify(self) -> Self {
        match self {
            Self::Provider(error) => Self::Simplified(error.summary()),
            other => other,
        }
    }

    /// Builds a decode error from a serde failure.
    pub(crate) fn decode(context: &str, error: serde_json::Error) -> Self {
        Self::Decode(format!("{}: {}", context, error))
    }
}
