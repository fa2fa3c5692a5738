//
//  docusign-client
//  api/session.rs
//
//  Created by Ngonidzashe Mangudya on 2026/02/05.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Authenticated session: every capability object over one set of credentials.
//!
//! A [`Session`] is the usual entry point once a token has been obtained. It
//! binds [`Admin`] and [`Envelope`] to the same resolved credentials and can
//! revoke the token when the caller is done.
//!
//! ```text
//! Config ──> DocuSignClient ──> auth::login ──> Session ──> admin() / envelope()
//!                                                   │
//!                                                   └──> log_out()
//! ```
//!
//! # Example
//!
//! ```rust,no_run
//! use docusign_client::api::{DocuSignClient, Session};
//!
//! # async fn example() -> anyhow::Result<()> {
//! let client = DocuSignClient::new("https://demo.docusign.net/restapi/v2")?;
//! let session = Session::login(client, "integrator-key", "me@example.com", "password").await?;
//!
//! let users = session.admin().get_user_list().await?;
//! println!("{} users", users.len());
//!
//! session.log_out().await?;
//! # Ok(())
//! # }
//! ```

use super::admin::Admin;
use super::client::DocuSignClient;
use super::common::ApiError;
use super::envelopes::Envelope;
use crate::auth::{self, Credentials};

/// Capability objects bound to one set of resolved credentials.
#[derive(Debug, Clone)]
pub struct Session {
    client: DocuSignClient,
    credentials: Credentials,
    admin: Admin,
    envelope: Envelope,
}

impl Session {
    /// Binds every capability object to the given credentials.
    pub fn new(client: DocuSignClient, credentials: Credentials) -> Self {
        let admin = Admin::from_credentials(client.clone(), &credentials);
        let envelope = Envelope::from_credentials(client.clone(), &credentials);
        Self {
            client,
            credentials,
            admin,
            envelope,
        }
    }

    /// Authenticates with the password grant and binds a new session.
    ///
    /// # Errors
    ///
    /// Returns the error of whichever login step failed.
    pub async fn login(
        client: DocuSignClient,
        integrator_key: &str,
        email: &str,
        password: &str,
    ) -> Result<Self, ApiError> {
        let credentials = auth::login(&client, integrator_key, email, password).await?;
        Ok(Self::new(client, credentials))
    }

    pub fn admin(&self) -> &Admin {
        &self.admin
    }

    pub fn envelope(&self) -> &Envelope {
        &self.envelope
    }

    pub fn credentials(&self) -> &Credentials {
        &self.credentials
    }

    /// Revokes the access token, consuming the session.
    pub async fn log_out(self) -> Result<(), ApiError> {
        auth::revoke(&self.client, &self.credentials.access_token).await
    }
}
