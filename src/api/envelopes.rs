//
//  docusign-client
//  api/envelopes.rs
//
//  Created by Ngonidzashe Mangudya on 2026/02/05.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Envelope operations.
//!
//! An envelope is one or more documents routed to recipients for signature.
//! This module exposes the [`Envelope`] capability object, bound to an account
//! base URL and access token like [`Admin`](super::Admin).
//!
//! # Example
//!
//! ```rust,no_run
//! use docusign_client::api::{DocuSignClient, Envelope};
//!
//! # async fn example() -> anyhow::Result<()> {
//! let client = DocuSignClient::new("https://demo.docusign.net/restapi/v2")?;
//! let envelope = Envelope::init(client, "https://demo.docusign.net/restapi/v2/accounts/1", "token");
//!
//! let recipients = envelope.get_recipients("a1b2c3").await?;
//! for signer in &recipients.signers {
//!     println!("{} <{}>", signer.name.as_deref().unwrap_or("-"), signer.email.as_deref().unwrap_or("-"));
//! }
//! # Ok(())
//! # }
//! ```

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use url::Url;

use super::client::{build_headers, DocuSignClient};
use super::common::{ApiError, RequestSpec};
use crate::auth::Credentials;

/// A recipient of an envelope.
///
/// DocuSign reports most recipient fields as strings; the fields not named
/// here (`recipientIdGuid`, `requireIdLookup`, `isBulkRecipient`, ...) are
/// kept in `extra`.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Recipient {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub recipient_id: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,

    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// The recipients of an envelope, grouped by role.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Recipients {
    #[serde(default)]
    pub signers: Vec<Recipient>,

    #[serde(default)]
    pub carbon_copies: Vec<Recipient>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub recipient_count: Option<String>,

    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// `GET {baseUrl}/envelopes/{envelopeId}/recipients`
///
/// `envelope_id` is percent-encoded as a single path segment.
pub fn recipients_request(base_url: &str, access_token: &str, envelope_id: &str) -> RequestSpec {
    RequestSpec::get(
        "Get Envelope Recipients",
        account_url(base_url, &["envelopes", envelope_id, "recipients"]),
    )
    .headers(build_headers(access_token, Some(base_url)))
}

/// Appends path segments to the account base URL, encoding each one.
///
/// A base that is not a hierarchical URL is joined as-is; the transport
/// rejects it before anything is sent.
fn account_url(base_url: &str, segments: &[&str]) -> String {
    match Url::parse(base_url) {
        Ok(mut url) if !url.cannot_be_a_base() => {
            if let Ok(mut path) = url.path_segments_mut() {
                path.pop_if_empty().extend(segments);
            }
            url.to_string()
        }
        _ => format!("{}/{}", base_url.trim_end_matches('/'), segments.join("/")),
    }
}

/// Envelope operations bound to one account.
#[derive(Debug, Clone)]
pub struct Envelope {
    client: DocuSignClient,
    base_url: String,
    access_token: String,
}

impl Envelope {
    pub fn init(
        client: DocuSignClient,
        base_url: impl Into<String>,
        access_token: impl Into<String>,
    ) -> Self {
        Self {
            client,
            base_url: base_url.into(),
            access_token: access_token.into(),
        }
    }

    pub fn from_credentials(client: DocuSignClient, credentials: &Credentials) -> Self {
        Self::init(
            client,
            credentials.base_url.clone(),
            credentials.access_token.clone(),
        )
    }

    /// Gets the recipients and their routing status for an envelope.
    ///
    /// A provider error is returned unchanged.
    pub async fn get_recipients(&self, envelope_id: &str) -> Result<Recipients, ApiError> {
        let spec = recipients_request(&self.base_url, &self.access_token, envelope_id);
        let body = self.client.execute(&spec).await?;
        serde_json::from_value(body).map_err(|e| ApiError::decode("invalid recipients", e))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::client::BASE_URL_HEADER;
    use serde_json::json;

    #[test]
    fn test_recipients_request() {
        let spec = recipients_request("https://base/accounts/1", "tok", "env-1");
        assert_eq!(spec.url, "https://base/accounts/1/envelopes/env-1/recipients");
        assert_eq!(spec.header_value(BASE_URL_HEADER), Some("https://base/accounts/1"));
        assert_eq!(spec.header_value("Authorization"), Some("bearer tok"));
    }

    #[test]
    fn test_recipients_request_encodes_envelope_id() {
        let spec = recipients_request("https://base/accounts/1/", "tok", "a/b?c#d");
        assert_eq!(
            spec.url,
            "https://base/accounts/1/envelopes/a%2Fb%3Fc%23d/recipients"
        );
    }

    #[test]
    fn test_recipients_deserialize() {
        let recipients: Recipients = serde_json::from_value(json!({
            "signers": [{
                "name": "Ada Lovelace",
                "email": "ada@example.com",
                "recipientId": "1",
                "recipientIdGuid": "0f3c",
                "requireIdLookup": "false",
                "isBulkRecipient": "false",
                "userId": "u-1",
                "status": "sent"
            }],
            "recipientCount": "1",
            "currentRoutingOrder": "1"
        }))
        .unwrap();

        assert_eq!(recipients.signers.len(), 1);
        assert!(recipients.carbon_copies.is_empty());
        let signer = &recipients.signers[0];
        assert_eq!(signer.name.as_deref(), Some("Ada Lovelace"));
        assert_eq!(signer.extra.get("userId"), Some(&json!("u-1")));
        assert_eq!(recipients.extra.get("currentRoutingOrder"), Some(&json!("1")));
    }

    #[tokio::test]
    async fn test_get_recipients_provider_error() {
        let mut server = mockito::Server::new_async().await;
        let _mock = server
            .mock("GET", "/accounts/1/envelopes/missing/recipients")
            .with_status(400)
            .with_body(r#"{"errorCode": "ENVELOPE_DOES_NOT_EXIST", "message": "Invalid envelope"}"#)
            .create_async()
            .await;

        let client = DocuSignClient::new(server.url()).unwrap();
        let envelope = Envelope::init(client, format!("{}/accounts/1", server.url()), "tok");
        let err = envelope.get_recipients("missing").await.unwrap_err();
        assert_eq!(
            err.to_json(),
            json!({"errorCode": "ENVELOPE_DOES_NOT_EXIST", "message": "Invalid envelope"})
        );
    }
}
