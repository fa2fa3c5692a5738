//
//  docusign-client
//  auth/mod.rs
//
//  Created by Ngonidzashe Mangudya on 2026/02/04.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! # Authentication Module
//!
//! This module obtains and revokes DocuSign OAuth2 access tokens and
//! resolves the account a token belongs to.
//!
//! ## Flow
//!
//! 1. [`login`] exchanges an integrator key, email and password for an
//!    access token (OAuth2 password grant)
//! 2. The same call reads `login_information` to resolve the default
//!    account id and its base URL
//! 3. The resulting [`Credentials`] bind the capability objects
//! 4. [`revoke`] invalidates the token on log out
//!
//! Tokens are never written to disk by this crate.
//!
//! ## Example
//!
//! ```rust,no_run
//! use docusign_client::api::DocuSignClient;
//! use docusign_client::auth;
//!
//! # async fn example() -> anyhow::Result<()> {
//! let client = DocuSignClient::new("https://demo.docusign.net/restapi/v2")?;
//! let credentials = auth::login(&client, "integrator-key", "me@example.com", "password").await?;
//! println!("Account {} at {}", credentials.account_id, credentials.base_url);
//! auth::revoke(&client, &credentials.access_token).await?;
//! # Ok(())
//! # }
//! ```

mod oauth;

pub use oauth::*;

use std::fmt;

use serde::{Deserialize, Serialize};

/// Resolved credentials for one DocuSign account.
///
/// Immutable for the lifetime of the capability objects built from it.
///
/// # Fields
///
/// * `account_id` - The DocuSign account id
/// * `base_url` - The provider-assigned base URL of the account
/// * `access_token` - The opaque OAuth2 access token
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Credentials {
    pub account_id: String,
    pub base_url: String,
    pub access_token: String,
}

impl Credentials {
    pub fn new(
        account_id: impl Into<String>,
        base_url: impl Into<String>,
        access_token: impl Into<String>,
    ) -> Self {
        Self {
            account_id: account_id.into(),
            base_url: base_url.into(),
            access_token: access_token.into(),
        }
    }
}

// Keep the token out of logs.
impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("account_id", &self.account_id)
            .field("base_url", &self.base_url)
            .field("access_token", &"<redacted>")
            .finish()
    }
}
