//
//  docusign-client
//  interactive/mod.rs
//
//  Created by Ngonidzashe Mangudya on 2026/02/06.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Interactive prompts for the `ds` CLI.
//!
//! Thin wrappers around `dialoguer`. Each helper takes the value a flag may
//! already have supplied and only prompts when it is missing, failing
//! instead when prompts are disabled (`--no-prompt` / `DS_NO_PROMPT`).

use anyhow::Result;
use dialoguer::{Confirm, Input, Password};

/// Returns `value`, or prompts for it.
///
/// # Errors
///
/// Fails when the value is missing and prompting is disabled, or when the
/// terminal interaction fails.
pub fn input_or_prompt(value: Option<&str>, message: &str, no_prompt: bool) -> Result<String> {
    if let Some(value) = value {
        return Ok(value.to_string());
    }
    if no_prompt {
        anyhow::bail!("{} is required when prompts are disabled", message);
    }
    let input: String = Input::new().with_prompt(message).interact_text()?;
    Ok(input)
}

/// Returns `value`, or prompts for it with masked input.
pub fn password_or_prompt(value: Option<&str>, message: &str, no_prompt: bool) -> Result<String> {
    if let Some(value) = value {
        return Ok(value.to_string());
    }
    if no_prompt {
        anyhow::bail!("{} is required when prompts are disabled", message);
    }
    let password = Password::new().with_prompt(message).interact()?;
    Ok(password)
}

/// Asks for confirmation unless `assume_yes` is set.
///
/// With prompts disabled and no `assume_yes`, the answer is no.
pub fn confirm(message: &str, assume_yes: bool, no_prompt: bool) -> Result<bool> {
    if assume_yes {
        return Ok(true);
    }
    if no_prompt {
        return Ok(false);
    }
    let confirmed = Confirm::new()
        .with_prompt(message)
        .default(false)
        .interact()?;
    Ok(confirmed)
}
