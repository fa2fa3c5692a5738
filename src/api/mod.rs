//
//  docusign-client
//  api/mod.rs
//
//  Created by Ngonidzashe Mangudya on 2026/02/03.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! # API Client Layer
//!
//! This module provides the HTTP client and the feature modules for the
//! DocuSign eSignature REST API v2.
//!
//! ## Architecture
//!
//! - [`client`]: Execution primitive, header construction, response interpretation
//! - [`common`]: Request descriptors and the [`ApiError`] type
//! - [`admin`]: Account administration (account info, users, templates, billing plan)
//! - [`envelopes`]: Envelope recipients
//! - [`session`]: Capability objects bound to one set of credentials
//!
//! ## Usage
//!
//! ```rust,no_run
//! use docusign_client::api::{Admin, DocuSignClient};
//!
//! # async fn example() -> anyhow::Result<()> {
//! let client = DocuSignClient::new("https://demo.docusign.net/restapi/v2")?;
//! let admin = Admin::init(client, "42", "https://demo.docusign.net/restapi/v2/accounts/42", "token");
//! let templates = admin.get_templates().await?;
//! # Ok(())
//! # }
//! ```
//!
//! ## Error Handling
//!
//! Every operation returns `Result<_, ApiError>`. DocuSign error bodies
//! (`{"errorCode": ..., "message": ...}`) surface as `ApiError::Provider`,
//! except for templates, which flattens them to `ApiError::Simplified`.

/// Core HTTP client wrapper for the DocuSign API.
pub mod client;

/// Request descriptors and error types shared by every feature module.
pub mod common;

/// Account administration operations.
pub mod admin;

/// Envelope operations.
pub mod envelopes;

/// Authenticated session bundling the capability objects.
pub mod session;

pub use admin::{AccountUser, Admin, BillingPlan, NewUser};
pub use client::DocuSignClient;
pub use common::{ApiError, ProviderError, RequestSpec};
pub use envelopes::{Envelope, Recipient, Recipients};
pub use session::Session;
