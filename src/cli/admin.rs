//
//  docusign-client
//  cli/admin.rs
//
//  Created by Ngonidzashe Mangudya on 2026/02/06.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Account administration commands
//!
//! `account`, `users`, `templates` and `plan` map one-to-one onto the
//! operations of [`Admin`](crate::api::Admin).

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Args, Subcommand};
use console::style;
use serde::Serialize;
use serde_json::Value;

use crate::api::{AccountUser, BillingPlan, NewUser};
use crate::interactive::{confirm, password_or_prompt};
use crate::output::{
    display_value, format_status, print_field, print_header, truncate, TableBuilder, TableOutput,
};

use super::{report, GlobalOptions};

// Account

/// Show organization account information
#[derive(Args, Debug)]
pub struct AccountCommand {
    #[command(subcommand)]
    pub command: AccountSubcommand,
}

#[derive(Subcommand, Debug)]
pub enum AccountSubcommand {
    /// Show the org account details
    Info,
}

impl AccountCommand {
    pub async fn run(&self, global: &GlobalOptions) -> Result<()> {
        match &self.command {
            AccountSubcommand::Info => {
                let writer = global.writer();
                let session = global.session()?;
                let info = report(&writer, session.admin().get_org_account_info().await)?;
                writer.write(&info)
            }
        }
    }
}

// Users

/// Manage account users
#[derive(Args, Debug)]
pub struct UsersCommand {
    #[command(subcommand)]
    pub command: UsersSubcommand,
}

#[derive(Subcommand, Debug)]
pub enum UsersSubcommand {
    /// List users of the account
    #[command(visible_alias = "ls")]
    List,

    /// Add a user, or a batch of users from a JSON file
    Add(AddArgs),

    /// Delete users by id
    #[command(visible_alias = "rm")]
    Delete(DeleteArgs),
}

#[derive(Args, Debug)]
pub struct AddArgs {
    /// First name
    #[arg(long, required_unless_present = "file")]
    pub first: Option<String>,

    /// Last name
    #[arg(long, required_unless_present = "file")]
    pub last: Option<String>,

    /// Email address
    #[arg(long, required_unless_present = "file")]
    pub email: Option<String>,

    /// Password (prompted when omitted)
    #[arg(long)]
    pub password: Option<String>,

    /// JSON file with an array of {first, last, email, password}
    #[arg(long, short = 'f', conflicts_with_all = ["first", "last", "email", "password"])]
    pub file: Option<PathBuf>,
}

#[derive(Args, Debug)]
pub struct DeleteArgs {
    /// User ids to delete
    #[arg(required = true)]
    pub user_ids: Vec<String>,

    /// Skip the confirmation prompt
    #[arg(long, short = 'y')]
    pub yes: bool,
}

impl AddArgs {
    fn users(&self, no_prompt: bool) -> Result<Vec<NewUser>> {
        if let Some(path) = &self.file {
            let content = std::fs::read_to_string(path)
                .with_context(|| format!("Failed to read {}", path.display()))?;
            return serde_json::from_str(&content)
                .with_context(|| format!("Failed to parse users from {}", path.display()));
        }

        // clap guarantees these when --file is absent
        let first = self.first.clone().unwrap_or_default();
        let last = self.last.clone().unwrap_or_default();
        let email = self.email.clone().unwrap_or_default();
        let password = password_or_prompt(self.password.as_deref(), "Password", no_prompt)?;

        Ok(vec![NewUser {
            first,
            last,
            email,
            password,
        }])
    }
}

/// Rows of the user list.
#[derive(Debug, Serialize)]
#[serde(transparent)]
struct UserList(Vec<AccountUser>);

impl TableOutput for UserList {
    fn print_table(&self, color: bool) {
        if self.0.is_empty() {
            println!("No users found");
            return;
        }

        let mut table = TableBuilder::new()
            .color(color)
            .headers(["User ID", "Name", "Email", "Status"]);
        for user in &self.0 {
            let status = user.user_status.as_deref().unwrap_or("-");
            table = table.row([
                user.user_id.clone().unwrap_or_else(|| "-".to_string()),
                truncate(user.user_name.as_deref().unwrap_or("-"), 30),
                user.email.clone().unwrap_or_else(|| "-".to_string()),
                format_status(status, color),
            ]);
        }
        table.print();
    }
}

impl UsersCommand {
    pub async fn run(&self, global: &GlobalOptions) -> Result<()> {
        match &self.command {
            UsersSubcommand::List => self.list(global).await,
            UsersSubcommand::Add(args) => self.add(args, global).await,
            UsersSubcommand::Delete(args) => self.delete(args, global).await,
        }
    }

    async fn list(&self, global: &GlobalOptions) -> Result<()> {
        let writer = global.writer();
        let session = global.session()?;
        let users = report(&writer, session.admin().get_user_list().await)?;
        writer.write(&UserList(users))
    }

    async fn add(&self, args: &AddArgs, global: &GlobalOptions) -> Result<()> {
        let writer = global.writer();
        let users = args.users(global.no_prompt)?;
        let session = global.session()?;

        let response = report(&writer, session.admin().add_users(&users).await)?;
        if global.json {
            return writer.write_json(&response);
        }

        let created = response
            .get("newUsers")
            .and_then(Value::as_array)
            .map(Vec::len)
            .unwrap_or(0);
        writer.write_success(&format!("Added {} of {} user(s)", created, users.len()));
        Ok(())
    }

    async fn delete(&self, args: &DeleteArgs, global: &GlobalOptions) -> Result<()> {
        let writer = global.writer();
        let prompt = format!("Delete {} user(s)?", args.user_ids.len());
        if !confirm(&prompt, args.yes, global.no_prompt)? {
            writer.write_warning("Cancelled");
            return Ok(());
        }

        let users: Vec<AccountUser> = args.user_ids.iter().map(AccountUser::with_id).collect();
        let session = global.session()?;
        let response = report(&writer, session.admin().delete_users(&users).await)?;

        if global.json {
            return writer.write_json(&response);
        }
        writer.write_success(&format!("Deleted {} user(s)", users.len()));
        Ok(())
    }
}

// Templates

/// Manage templates
#[derive(Args, Debug)]
pub struct TemplatesCommand {
    #[command(subcommand)]
    pub command: TemplatesSubcommand,
}

#[derive(Subcommand, Debug)]
pub enum TemplatesSubcommand {
    /// List templates of the account
    #[command(visible_alias = "ls")]
    List,
}

/// The templates response, rendered as a table of `envelopeTemplates`.
#[derive(Debug, Serialize)]
#[serde(transparent)]
struct TemplateList(Value);

impl TableOutput for TemplateList {
    fn print_table(&self, color: bool) {
        let templates = self
            .0
            .get("envelopeTemplates")
            .and_then(Value::as_array)
            .cloned()
            .unwrap_or_default();

        if templates.is_empty() {
            println!("No templates found");
            return;
        }

        let field = |template: &Value, key: &str| {
            template.get(key).map(display_value).unwrap_or_else(|| "-".to_string())
        };

        let mut table = TableBuilder::new()
            .color(color)
            .headers(["Template ID", "Name", "Last Modified"]);
        for template in &templates {
            table = table.row([
                field(template, "templateId"),
                truncate(&field(template, "name"), 40),
                field(template, "lastModified"),
            ]);
        }
        table.print();
    }
}

impl TemplatesCommand {
    pub async fn run(&self, global: &GlobalOptions) -> Result<()> {
        match &self.command {
            TemplatesSubcommand::List => {
                let writer = global.writer();
                let session = global.session()?;
                let templates = report(&writer, session.admin().get_templates().await)?;
                writer.write(&TemplateList(templates))
            }
        }
    }
}

// Plan

/// Show the billing plan
#[derive(Args, Debug)]
pub struct PlanCommand {}

impl TableOutput for BillingPlan {
    fn print_table(&self, color: bool) {
        let title = self.name().unwrap_or("Billing plan");
        print_header(title);

        let left = match self.envelopes_left() {
            Some(left) if left < 0 => "unlimited".to_string(),
            Some(left) => left.to_string(),
            None => "-".to_string(),
        };
        let left = if color && self.is_unlimited() {
            style(left).green().to_string()
        } else {
            left
        };

        print_field("Envelopes left", &left, color);
        for (label, key) in [
            ("Envelopes allowed", "billingPeriodEnvelopesAllowed"),
            ("Envelopes sent", "billingPeriodEnvelopesSent"),
            ("Period start", "billingPeriodStartDate"),
            ("Period end", "billingPeriodEndDate"),
            ("Plan ID", "planId"),
        ] {
            if let Some(value) = self.get(key) {
                print_field(label, &display_value(value), color);
            }
        }
    }
}

impl PlanCommand {
    pub async fn run(&self, global: &GlobalOptions) -> Result<()> {
        let writer = global.writer();
        let session = global.session()?;
        let plan = report(&writer, session.admin().get_plan().await)?;
        writer.write(&plan)
    }
}
