//
//  docusign-client
//  config/mod.rs
//
//  Created by Ngonidzashe Mangudya on 2026/02/04.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! # Configuration Module
//!
//! This module loads the client configuration from a TOML file stored in the
//! platform-specific config directory, then applies environment overrides.
//!
//! ## Configuration File Location
//!
//! - **Linux**: `~/.config/ds/config.toml`
//! - **macOS**: `~/Library/Application Support/ds/config.toml`
//! - **Windows**: `C:\Users\<User>\AppData\Roaming\ds\config\config.toml`
//!
//! ## Example Configuration File
//!
//! ```toml
//! environment = "demo"
//! integrator_key = "a1b2c3d4-..."
//! debug = false
//! timeout_secs = 30
//!
//! # Overrides the environment's API URL
//! # api_url = "https://demo.docusign.net/restapi/v2"
//! ```
//!
//! ## Environment Overrides
//!
//! | Variable | Field | Values |
//! |----------|-------|--------|
//! | `DS_ENV` | `environment` | `demo`, `live` |
//! | `DS_DEBUG` | `debug` | `1`/`true`/`yes`/`on` to enable |
//! | `DS_API_URL` | `api_url` | absolute URL |
//! | `DS_INTEGRATOR_KEY` | `integrator_key` | string |
//!
//! The debug flag is read once here and passed on explicitly; nothing in the
//! library reads the environment afterwards.

use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use anyhow::{Context, Result};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use url::Url;

/// DocuSign environment to target.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    /// Developer sandbox at `demo.docusign.net`
    #[default]
    Demo,
    /// Production at `www.docusign.net`
    Live,
}

impl Environment {
    /// The REST API v2 root of the environment.
    ///
    /// # Example
    ///
    /// ```rust
    /// use docusign_client::config::Environment;
    ///
    /// assert_eq!(Environment::Demo.api_url(), "https://demo.docusign.net/restapi/v2");
    /// assert_eq!(Environment::Live.api_url(), "https://www.docusign.net/restapi/v2");
    /// ```
    pub fn api_url(&self) -> &'static str {
        match self {
            Self::Demo => "https://demo.docusign.net/restapi/v2",
            Self::Live => "https://www.docusign.net/restapi/v2",
        }
    }
}

impl FromStr for Environment {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "demo" => Ok(Self::Demo),
            "live" | "www" | "production" => Ok(Self::Live),
            other => anyhow::bail!("Unknown environment '{}' (expected 'demo' or 'live')", other),
        }
    }
}

impl fmt::Display for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Demo => f.write_str("demo"),
            Self::Live => f.write_str("live"),
        }
    }
}

fn default_timeout_secs() -> u64 {
    30
}

/// Client configuration.
///
/// # Fields
///
/// * `environment` - Target environment (default: demo)
/// * `api_url` - Optional override of the environment's API URL
/// * `integrator_key` - Integrator key used by `auth login`
/// * `debug` - Dump requests and responses through `tracing`
/// * `timeout_secs` - Request timeout (default: 30)
///
/// # Examples
///
/// ```rust
/// use docusign_client::config::{Config, Environment};
///
/// let config = Config::default();
/// assert_eq!(config.environment, Environment::Demo);
/// assert!(!config.debug);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub environment: Environment,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub api_url: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub integrator_key: Option<String>,

    #[serde(default)]
    pub debug: bool,

    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            environment: Environment::default(),
            api_url: None,
            integrator_key: None,
            debug: false,
            timeout_secs: default_timeout_secs(),
        }
    }
}

impl Config {
    /// Loads the configuration from the default location and the environment.
    ///
    /// A missing file yields the defaults.
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be read or parsed, or
    /// if an environment override is invalid.
    pub fn load() -> Result<Self> {
        let mut config = Self::load_from(&Self::config_path()?)?;
        config.apply_overrides(|key| std::env::var(key).ok())?;
        Ok(config)
    }

    /// Loads the configuration from a specific file, without environment overrides.
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file {}", path.display()))
    }

    /// Writes the configuration to a specific file, creating parent directories.
    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)
            .with_context(|| format!("Failed to write config file {}", path.display()))?;
        Ok(())
    }

    /// Saves the configuration to the default location.
    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::config_path()?)
    }

    /// Applies `DS_*` overrides from the given lookup.
    pub fn apply_overrides<F>(&mut self, lookup: F) -> Result<()>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(env) = lookup("DS_ENV") {
            self.environment = env.parse()?;
        }
        if let Some(debug) = lookup("DS_DEBUG") {
            self.debug = parse_flag(&debug);
        }
        if let Some(api_url) = lookup("DS_API_URL") {
            self.api_url = Some(api_url);
        }
        if let Some(key) = lookup("DS_INTEGRATOR_KEY") {
            self.integrator_key = Some(key);
        }
        Ok(())
    }

    /// The API URL to use: the override if set, otherwise the environment's.
    ///
    /// # Errors
    ///
    /// Returns an error if the override is not an absolute http(s) URL.
    pub fn resolved_api_url(&self) -> Result<String> {
        let Some(api_url) = &self.api_url else {
            return Ok(self.environment.api_url().to_string());
        };

        let parsed = Url::parse(api_url).with_context(|| format!("Invalid api_url '{}'", api_url))?;
        if !matches!(parsed.scheme(), "http" | "https") {
            anyhow::bail!("Invalid api_url '{}': scheme must be http or https", api_url);
        }
        Ok(api_url.trim_end_matches('/').to_string())
    }

    /// Returns the path to the configuration file.
    pub fn config_path() -> Result<PathBuf> {
        let dirs = ProjectDirs::from("", "", "ds")
            .ok_or_else(|| anyhow::anyhow!("Could not determine config directory"))?;
        Ok(dirs.config_dir().join("config.toml"))
    }
}

/// Interprets an environment flag value.
fn parse_flag(value: &str) -> bool {
    matches!(
        value.trim().to_lowercase().as_str(),
        "1" | "true" | "yes" | "on"
    )
}
