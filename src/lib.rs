//
//  docusign-client
//  lib.rs
//
//  Created by Ngonidzashe Mangudya on 2026/02/04.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! # DocuSign Client Library
//!
//! An async client for the DocuSign eSignature REST API (v2), with the `ds`
//! command-line tool built on top of it.
//!
//! ## Overview
//!
//! Every operation goes through the same pipeline:
//!
//! 1. A pure builder produces a [`RequestSpec`](api::RequestSpec)
//! 2. [`DocuSignClient::execute`](api::DocuSignClient::execute) sends it and
//!    turns any body carrying `errorCode` into an [`ApiError`]
//! 3. The operation reshapes the result
//!
//! ## Module Structure
//!
//! - [`api`]: HTTP client, admin and envelope operations
//! - [`auth`]: Password-grant login and token revocation
//! - [`config`]: Configuration file and `DS_*` overrides
//! - [`output`]: Table and JSON output
//! - [`interactive`]: Prompts
//! - [`cli`]: The `ds` commands
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use docusign_client::api::{Admin, DocuSignClient};
//!
//! # async fn run() -> anyhow::Result<()> {
//! let client = DocuSignClient::new("https://demo.docusign.net/restapi/v2")?;
//! let admin = Admin::init(
//!     client,
//!     "1234567",
//!     "https://demo.docusign.net/restapi/v2/accounts/1234567",
//!     "access-token",
//! );
//!
//! let plan = admin.get_plan().await?;
//! println!("{:?} envelopes left", plan.envelopes_left());
//! # Ok(())
//! # }
//! ```

/// Command-line interface definitions.
pub mod cli;

/// DocuSign API client and operations.
///
/// The request builders are pure and can be inspected without a network;
/// the operation types ([`api::Admin`], [`api::Envelope`]) execute them.
pub mod api;

/// Authentication against the DocuSign OAuth2 endpoints.
pub mod auth;

/// Configuration file management.
///
/// - Linux: `~/.config/ds/config.toml`
/// - macOS: `~/Library/Application Support/ds/config.toml`
/// - Windows: `%APPDATA%\ds\config\config.toml`
pub mod config;

/// Output formatting for table and JSON modes.
pub mod output;

/// Interactive terminal prompts.
pub mod interactive;

pub use api::{ApiError, DocuSignClient};
pub use cli::Cli;
pub use config::Config;

/// Application name constant.
///
/// The name of the CLI binary, used for completions and configuration paths.
pub const APP_NAME: &str = "ds";

/// Application version constant.
///
/// # Example
///
/// ```rust
/// use docusign_client::VERSION;
///
/// println!("ds version {}", VERSION);
/// ```
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Exit codes for the CLI.
///
/// # Exit Code Ranges
///
/// - `0`: Success
/// - `1-3`: General errors and usage issues
/// - `4-7`: Authentication-related issues
/// - `8-15`: Resource-related issues
/// - `32+`: External service issues
pub mod exit_codes {
    use crate::api::ApiError;

    /// Successful execution.
    pub const SUCCESS: i32 = 0;

    /// General error.
    pub const ERROR: i32 = 1;

    /// Invalid usage or arguments.
    pub const USAGE: i32 = 2;

    /// Authentication required or failed.
    ///
    /// The access token is missing, expired or revoked.
    /// Run `ds auth login` to obtain a new one.
    pub const AUTH_ERROR: i32 = 4;

    /// Resource not found.
    pub const NOT_FOUND: i32 = 8;

    /// API rate limit exceeded.
    pub const RATE_LIMIT: i32 = 32;

    /// Maps an API error to an exit code.
    ///
    /// # Example
    ///
    /// ```rust
    /// use docusign_client::{exit_codes, ApiError};
    ///
    /// let error = ApiError::Simplified("USER_LACKS_PERMISSIONS: denied".into());
    /// assert_eq!(exit_codes::for_api_error(&error), exit_codes::ERROR);
    /// ```
    pub fn for_api_error(error: &ApiError) -> i32 {
        match error {
            ApiError::Http { status, .. } => match status.as_u16() {
                401 | 403 => AUTH_ERROR,
                404 => NOT_FOUND,
                429 => RATE_LIMIT,
                _ => ERROR,
            },
            ApiError::Provider(provider) => {
                let code = provider.error_code();
                if code.starts_with("USER_AUTHENTICATION") || code.starts_with("AUTHORIZATION") {
                    AUTH_ERROR
                } else if code.ends_with("_NOT_FOUND") || code.starts_with("INVALID_ACCOUNT_ID") {
                    NOT_FOUND
                } else if code.starts_with("HOURLY_APIINVOCATION_LIMIT") {
                    RATE_LIMIT
                } else {
                    ERROR
                }
            }
            _ => ERROR,
        }
    }

}
