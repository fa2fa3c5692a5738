//
//  docusign-client
//  cli/config.rs
//
//  Created by Ngonidzashe Mangudya on 2026/02/07.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! CLI configuration commands
//!
//! Reads and writes the config file only. `DS_*` environment overrides are
//! applied when commands run, never saved.

use anyhow::{bail, Result};
use clap::{Args, Subcommand};
use console::style;

use crate::config::Config;

use super::GlobalOptions;

/// Valid configuration keys
const VALID_KEYS: &[&str] = &[
    "environment",
    "api_url",
    "integrator_key",
    "debug",
    "timeout_secs",
];

/// Manage CLI configuration
#[derive(Args, Debug)]
pub struct ConfigCommand {
    #[command(subcommand)]
    pub command: ConfigSubcommand,
}

#[derive(Subcommand, Debug)]
pub enum ConfigSubcommand {
    /// Get a configuration value
    Get {
        /// Configuration key
        key: String,
    },

    /// Set a configuration value
    Set {
        /// Configuration key
        key: String,

        /// Configuration value
        value: String,
    },

    /// Reset a configuration value to its default
    Unset {
        /// Configuration key
        key: String,
    },

    /// List all configuration values
    #[command(visible_alias = "ls", alias = "show")]
    List,

    /// Show configuration file path
    Path,
}

fn unknown_key(key: &str) -> anyhow::Error {
    anyhow::anyhow!(
        "Unknown configuration key '{}'. Valid keys: {}",
        key,
        VALID_KEYS.join(", ")
    )
}

/// Returns the value of `key`, `None` when unset.
fn get_value(config: &Config, key: &str) -> Result<Option<String>> {
    let value = match key {
        "environment" => Some(config.environment.to_string()),
        "api_url" => config.api_url.clone(),
        "integrator_key" => config.integrator_key.clone(),
        "debug" => Some(config.debug.to_string()),
        "timeout_secs" => Some(config.timeout_secs.to_string()),
        _ => return Err(unknown_key(key)),
    };
    Ok(value)
}

/// Parses and stores `value` under `key`.
fn set_value(config: &mut Config, key: &str, value: &str) -> Result<()> {
    match key {
        "environment" => config.environment = value.parse()?,
        "api_url" => {
            let mut candidate = config.clone();
            candidate.api_url = Some(value.to_string());
            candidate.resolved_api_url()?;
            config.api_url = candidate.api_url;
        }
        "integrator_key" => config.integrator_key = Some(value.to_string()),
        "debug" => {
            config.debug = match value {
                "true" => true,
                "false" => false,
                _ => bail!("Invalid value for debug. Valid values: true, false"),
            }
        }
        "timeout_secs" => {
            config.timeout_secs = match value.parse::<u64>() {
                Ok(secs) if secs > 0 => secs,
                _ => bail!("Invalid value for timeout_secs. Expected a positive number of seconds"),
            }
        }
        _ => return Err(unknown_key(key)),
    }
    Ok(())
}

fn unset_value(config: &mut Config, key: &str) -> Result<()> {
    let defaults = Config::default();
    match key {
        "environment" => config.environment = defaults.environment,
        "api_url" => config.api_url = None,
        "integrator_key" => config.integrator_key = None,
        "debug" => config.debug = defaults.debug,
        "timeout_secs" => config.timeout_secs = defaults.timeout_secs,
        _ => return Err(unknown_key(key)),
    }
    Ok(())
}

impl ConfigCommand {
    pub async fn run(&self, global: &GlobalOptions) -> Result<()> {
        match &self.command {
            ConfigSubcommand::Get { key } => self.get(key, global),
            ConfigSubcommand::Set { key, value } => self.set(key, value, global),
            ConfigSubcommand::Unset { key } => self.unset(key, global),
            ConfigSubcommand::List => self.list(global),
            ConfigSubcommand::Path => self.path(global),
        }
    }

    fn load() -> Result<Config> {
        Config::load_from(&Config::config_path()?)
    }

    fn get(&self, key: &str, global: &GlobalOptions) -> Result<()> {
        let value = get_value(&Self::load()?, key)?;

        if global.json {
            let result = serde_json::json!({ "key": key, "value": value });
            println!("{}", serde_json::to_string_pretty(&result)?);
        } else if let Some(v) = value {
            println!("{}", v);
        }
        Ok(())
    }

    fn set(&self, key: &str, value: &str, global: &GlobalOptions) -> Result<()> {
        let mut config = Self::load()?;
        set_value(&mut config, key, value)?;
        config.save()?;

        if global.json {
            let result = serde_json::json!({ "success": true, "key": key, "value": value });
            println!("{}", serde_json::to_string_pretty(&result)?);
        } else {
            println!(
                "{} Set {} = {}",
                style("✓").green(),
                style(key).cyan(),
                value
            );
        }
        Ok(())
    }

    fn unset(&self, key: &str, global: &GlobalOptions) -> Result<()> {
        let mut config = Self::load()?;
        unset_value(&mut config, key)?;
        config.save()?;

        if global.json {
            let result = serde_json::json!({ "success": true, "key": key });
            println!("{}", serde_json::to_string_pretty(&result)?);
        } else {
            println!("{} Unset {}", style("✓").green(), style(key).cyan());
        }
        Ok(())
    }

    fn list(&self, global: &GlobalOptions) -> Result<()> {
        let config = Self::load()?;

        if global.json {
            println!("{}", serde_json::to_string_pretty(&config)?);
            return Ok(());
        }

        println!();
        println!("{}", style("Configuration").bold());
        println!("{}", "-".repeat(50));
        for key in VALID_KEYS {
            match get_value(&config, key)? {
                Some(value) => println!("  {:<16} {}", style(key).cyan(), value),
                None => println!("  {:<16} {}", style(key).cyan(), style("(not set)").dim()),
            }
        }
        println!();
        Ok(())
    }

    fn path(&self, global: &GlobalOptions) -> Result<()> {
        let path = Config::config_path()?;

        if global.json {
            let result = serde_json::json!({
                "path": path.display().to_string(),
                "exists": path.exists(),
            });
            println!("{}", serde_json::to_string_pretty(&result)?);
        } else {
            println!("{}", path.display());
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Environment;

    #[test]
    fn test_set_and_get() {
        let mut config = Config::default();
        set_value(&mut config, "environment", "live").unwrap();
        set_value(&mut config, "integrator_key", "key-1").unwrap();
        set_value(&mut config, "timeout_secs", "5").unwrap();

        assert_eq!(config.environment, Environment::Live);
        assert_eq!(get_value(&config, "integrator_key").unwrap().as_deref(), Some("key-1"));
        assert_eq!(get_value(&config, "timeout_secs").unwrap().as_deref(), Some("5"));
        assert_eq!(get_value(&config, "api_url").unwrap(), None);
    }

    #[test]
    fn test_set_rejects_invalid_values() {
        let mut config = Config::default();
        assert!(set_value(&mut config, "api_url", "ftp://example.com").is_err());
        assert!(config.api_url.is_none());
        assert!(set_value(&mut config, "debug", "maybe").is_err());
        assert!(set_value(&mut config, "timeout_secs", "0").is_err());
        assert!(set_value(&mut config, "colour", "red").is_err());
    }

    #[test]
    fn test_unset_restores_defaults() {
        let mut config = Config {
            environment: Environment::Live,
            api_url: Some("http://127.0.0.1:9000".to_string()),
            debug: true,
            ..Default::default()
        };
        for key in ["environment", "api_url", "debug"] {
            unset_value(&mut config, key).unwrap();
        }
        assert_eq!(config, Config::default());
        assert!(unset_value(&mut config, "nope").is_err());
    }
}
