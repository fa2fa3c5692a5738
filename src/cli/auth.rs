//
//  docusign-client
//  cli/auth.rs
//
//  Created by Ngonidzashe Mangudya on 2026/02/06.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Authentication commands
//!
//! `ds auth login` performs the password grant and prints the resolved
//! credentials; nothing is stored. Export them to use the other commands:
//!
//! ```text
//! export DS_ACCOUNT_ID=... DS_BASE_URL=... DS_ACCESS_TOKEN=...
//! ```

use anyhow::Result;
use clap::{Args, Subcommand};
use console::style;

use crate::auth::{self, Credentials};
use crate::interactive::{input_or_prompt, password_or_prompt};
use crate::output::{print_field, TableOutput};

use super::{report, GlobalOptions};

/// Log in to DocuSign and log out
#[derive(Args, Debug)]
pub struct AuthCommand {
    #[command(subcommand)]
    pub command: AuthSubcommand,
}

#[derive(Subcommand, Debug)]
pub enum AuthSubcommand {
    /// Obtain an access token with email and password
    Login(LoginArgs),

    /// Revoke the current access token
    Logout,
}

#[derive(Args, Debug)]
pub struct LoginArgs {
    /// Login email
    #[arg(long, short = 'e')]
    pub email: Option<String>,

    /// Password (prompted when omitted)
    #[arg(long, env = "DS_PASSWORD", hide_env_values = true)]
    pub password: Option<String>,

    /// Integrator key (defaults to the configured one)
    #[arg(long, short = 'k')]
    pub integrator_key: Option<String>,
}

impl TableOutput for Credentials {
    fn print_table(&self, color: bool) {
        print_field("Account ID", &self.account_id, color);
        print_field("Base URL", &self.base_url, color);
        print_field("Access token", &self.access_token, color);
        println!();
        let hint = format!(
            "export DS_ACCOUNT_ID={} DS_BASE_URL={} DS_ACCESS_TOKEN={}",
            self.account_id, self.base_url, self.access_token
        );
        if color {
            println!("{}", style(hint).dim());
        } else {
            println!("{}", hint);
        }
    }
}

impl AuthCommand {
    pub async fn run(&self, global: &GlobalOptions) -> Result<()> {
        match &self.command {
            AuthSubcommand::Login(args) => self.login(args, global).await,
            AuthSubcommand::Logout => self.logout(global).await,
        }
    }

    async fn login(&self, args: &LoginArgs, global: &GlobalOptions) -> Result<()> {
        let config = global.config()?;
        let writer = global.writer();

        let integrator_key = args
            .integrator_key
            .clone()
            .or_else(|| config.integrator_key.clone())
            .ok_or_else(|| {
                anyhow::anyhow!(
                    "No integrator key. Pass --integrator-key or run 'ds config set integrator_key <key>'."
                )
            })?;
        let email = input_or_prompt(args.email.as_deref(), "Email", global.no_prompt)?;
        let password = password_or_prompt(args.password.as_deref(), "Password", global.no_prompt)?;

        let client = crate::api::DocuSignClient::from_config(&config)?;
        let credentials = report(
            &writer,
            auth::login(&client, &integrator_key, &email, &password).await,
        )?;

        writer.write(&credentials)
    }

    async fn logout(&self, global: &GlobalOptions) -> Result<()> {
        let writer = global.writer();
        let token = global.token.clone().ok_or_else(|| {
            anyhow::anyhow!("No access token to revoke (use --token or set DS_ACCESS_TOKEN)")
        })?;

        let client = global.client()?;
        report(&writer, auth::revoke(&client, &token).await)?;
        writer.write_success("Access token revoked");
        Ok(())
    }
}
