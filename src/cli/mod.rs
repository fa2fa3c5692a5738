//
//  docusign-client
//  cli/mod.rs
//
//  Created by Ngonidzashe Mangudya on 2026/02/06.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! CLI command definitions using clap derive macros

mod admin;
mod auth;
mod completion;
mod config;
mod envelope;

pub use admin::{AccountCommand, PlanCommand, TemplatesCommand, UsersCommand};
pub use auth::AuthCommand;
pub use completion::CompletionCommand;
pub use config::ConfigCommand;
pub use envelope::EnvelopeCommand;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};

use crate::api::{ApiError, DocuSignClient, Session};
use crate::auth::Credentials;
use crate::config::{Config, Environment};
use crate::output::{OutputFormat, OutputWriter};

/// DocuSign CLI - Work with DocuSign from the command line
#[derive(Parser, Debug)]
#[command(
    name = "ds",
    version,
    about = "Work with DocuSign from the command line",
    long_about = "ds is a CLI for the DocuSign eSignature REST API.\n\n\
                  It manages account users, templates, billing plans and envelopes.",
    propagate_version = true,
    after_help = "Use 'ds <command> --help' for more information about a command."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    #[command(flatten)]
    pub global: GlobalOptions,
}

/// Global options available to all commands
#[derive(Parser, Debug, Clone, Default)]
pub struct GlobalOptions {
    /// DocuSign account id
    #[arg(long, global = true, env = "DS_ACCOUNT_ID")]
    pub account_id: Option<String>,

    /// Account base URL returned by login
    #[arg(long, global = true, env = "DS_BASE_URL")]
    pub base_url: Option<String>,

    /// OAuth2 access token
    #[arg(long, global = true, env = "DS_ACCESS_TOKEN", hide_env_values = true)]
    pub token: Option<String>,

    /// DocuSign environment (demo or live)
    #[arg(long = "env", global = true)]
    pub environment: Option<Environment>,

    /// Log requests and responses
    #[arg(long, global = true)]
    pub debug: bool,

    /// Output format as JSON
    #[arg(long, global = true)]
    pub json: bool,

    /// Disable interactive prompts
    #[arg(long, global = true, env = "DS_NO_PROMPT")]
    pub no_prompt: bool,
}

impl GlobalOptions {
    /// Loads the configuration and applies command-line overrides.
    pub fn config(&self) -> Result<Config> {
        let mut config = Config::load()?;
        if let Some(environment) = self.environment {
            config.environment = environment;
        }
        if self.debug {
            config.debug = true;
        }
        Ok(config)
    }

    pub fn client(&self) -> Result<DocuSignClient> {
        DocuSignClient::from_config(&self.config()?)
    }

    /// Resolves the credentials from flags and `DS_*` variables.
    pub fn credentials(&self) -> Result<Credentials> {
        let missing = |what: &str, flag: &str, var: &str| {
            anyhow::anyhow!(
                "Missing {} (use {} or set {}). Run 'ds auth login' to obtain one.",
                what,
                flag,
                var
            )
        };

        let account_id = self
            .account_id
            .clone()
            .ok_or_else(|| missing("account id", "--account-id", "DS_ACCOUNT_ID"))?;
        let base_url = self
            .base_url
            .clone()
            .ok_or_else(|| missing("base URL", "--base-url", "DS_BASE_URL"))?;
        let token = self
            .token
            .clone()
            .ok_or_else(|| missing("access token", "--token", "DS_ACCESS_TOKEN"))?;

        Ok(Credentials::new(account_id, base_url.trim_end_matches('/'), token))
    }

    pub fn session(&self) -> Result<Session> {
        Ok(Session::new(self.client()?, self.credentials()?))
    }

    pub fn writer(&self) -> OutputWriter {
        OutputWriter::new(OutputFormat::from_json_flag(self.json))
    }
}

/// Hands an API result back, printing the error payload in JSON mode.
pub(crate) fn report<T>(writer: &OutputWriter, result: Result<T, ApiError>) -> Result<T> {
    match result {
        Ok(value) => Ok(value),
        Err(error) => {
            if writer.format() == OutputFormat::Json {
                writer.write_api_error(&error)?;
            }
            Err(error).context("DocuSign request failed")
        }
    }
}

/// Top-level commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Log in to DocuSign and log out
    Auth(AuthCommand),

    /// Show organization account information
    Account(AccountCommand),

    /// Manage account users
    #[command(visible_alias = "user")]
    Users(UsersCommand),

    /// Manage templates
    #[command(visible_alias = "template")]
    Templates(TemplatesCommand),

    /// Show the billing plan
    Plan(PlanCommand),

    /// Work with envelopes
    #[command(visible_alias = "env")]
    Envelope(EnvelopeCommand),

    /// Manage CLI configuration
    Config(ConfigCommand),

    /// Generate shell completion scripts
    Completion(CompletionCommand),

    /// Print version information
    Version,
}
