//
//  docusign-client
//  cli/envelope.rs
//
//  Created by Ngonidzashe Mangudya on 2026/02/07.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Envelope commands

use anyhow::Result;
use clap::{Args, Subcommand};

use crate::api::Recipients;
use crate::output::{format_status, TableBuilder, TableOutput};

use super::{report, GlobalOptions};

/// Work with envelopes
#[derive(Args, Debug)]
pub struct EnvelopeCommand {
    #[command(subcommand)]
    pub command: EnvelopeSubcommand,
}

#[derive(Subcommand, Debug)]
pub enum EnvelopeSubcommand {
    /// Show the recipients of an envelope and their status
    Recipients {
        /// Envelope id
        envelope_id: String,
    },
}

impl TableOutput for Recipients {
    fn print_table(&self, color: bool) {
        if self.signers.is_empty() && self.carbon_copies.is_empty() {
            println!("No recipients");
            return;
        }

        let mut table = TableBuilder::new()
            .color(color)
            .headers(["ID", "Role", "Name", "Email", "Status"]);
        let roles = self
            .signers
            .iter()
            .map(|r| ("signer", r))
            .chain(self.carbon_copies.iter().map(|r| ("cc", r)));
        for (role, recipient) in roles {
            let status = recipient.status.as_deref().unwrap_or("-");
            table = table.row([
                recipient.recipient_id.clone().unwrap_or_else(|| "-".to_string()),
                role.to_string(),
                recipient.name.clone().unwrap_or_else(|| "-".to_string()),
                recipient.email.clone().unwrap_or_else(|| "-".to_string()),
                format_status(status, color),
            ]);
        }
        table.print();
    }
}

impl EnvelopeCommand {
    pub async fn run(&self, global: &GlobalOptions) -> Result<()> {
        match &self.command {
            EnvelopeSubcommand::Recipients { envelope_id } => {
                let writer = global.writer();
                let session = global.session()?;
                let recipients =
                    report(&writer, session.envelope().get_recipients(envelope_id).await)?;
                writer.write(&recipients)
            }
        }
    }
}
