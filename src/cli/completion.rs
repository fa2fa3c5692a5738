//
//  docusign-client
//  cli/completion.rs
//
//  Created by Ngonidzashe Mangudya on 2026/02/07.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Shell completion commands

use anyhow::Result;
use clap::{Args, CommandFactory};
use clap_complete::{generate, Shell};

use super::Cli;
use crate::APP_NAME;

/// Generate shell completion scripts
///
/// ```text
/// ds completion zsh > ~/.zfunc/_ds
/// ```
#[derive(Args, Debug)]
pub struct CompletionCommand {
    /// Target shell
    #[arg(value_enum)]
    pub shell: Shell,
}

impl CompletionCommand {
    pub fn run(&self) -> Result<()> {
        let mut cmd = Cli::command();
        generate(self.shell, &mut cmd, APP_NAME, &mut std::io::stdout());
        Ok(())
    }
}
