//
//  docusign-client
//  output/mod.rs
//
//  Created by Ngonidzashe Mangudya on 2026/02/06.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! # Output Module
//!
//! Output formatting for the `ds` command-line interface:
//!
//! - **Table format**: Human-readable output for interactive terminal use
//! - **JSON format**: The DocuSign payloads, pretty-printed, for scripting
//!
//! ## Core Components
//!
//! - [`OutputFormat`]: The available output formats
//! - [`OutputWriter`]: Main entry point for writing formatted output
//! - [`TableOutput`]: Trait for types that can be rendered for humans
//! - [`TableBuilder`]: `comfy_table` builder for list output

mod table;

pub use table::*;

use serde::Serialize;

use crate::api::ApiError;

/// Represents the available output formats for CLI output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// Human-readable format with optional color support.
    #[default]
    Table,
    /// Pretty-printed JSON for scripting and automation.
    Json,
}

impl OutputFormat {
    /// Picks the format from the global `--json` flag.
    pub fn from_json_flag(json: bool) -> Self {
        if json {
            Self::Json
        } else {
            Self::Table
        }
    }
}

/// A unified output writer that handles both output formats.
///
/// # Example
///
/// ```rust,ignore
/// use docusign_client::output::{OutputWriter, OutputFormat};
///
/// let writer = OutputWriter::new(OutputFormat::Json);
/// writer.write(&plan)?;
/// writer.write_success("Users added");
/// ```
///
/// # Notes
///
/// Color output is automatically detected based on terminal capabilities.
/// Colors are disabled when output is piped or redirected.
pub struct OutputWriter {
    format: OutputFormat,
    color: bool,
}

impl OutputWriter {
    pub fn new(format: OutputFormat) -> Self {
        Self {
            format,
            color: console::colors_enabled(),
        }
    }

    pub fn format(&self) -> OutputFormat {
        self.format
    }

    /// Writes a value to stdout using the configured output format.
    ///
    /// # Errors
    ///
    /// Returns an error if JSON serialization fails.
    pub fn write<T: Serialize + TableOutput>(&self, value: &T) -> anyhow::Result<()> {
        match self.format {
            OutputFormat::Json => self.write_json(value)?,
            OutputFormat::Table => value.print_table(self.color),
        }
        Ok(())
    }

    /// Writes any serializable value as pretty JSON, regardless of format.
    pub fn write_json<T: Serialize + ?Sized>(&self, value: &T) -> anyhow::Result<()> {
        println!("{}", serde_json::to_string_pretty(value)?);
        Ok(())
    }

    /// Writes an API error.
    ///
    /// In JSON mode the error payload (raw DocuSign body, or
    /// `{"error": ...}`) goes to stdout so scripts can inspect it; otherwise
    /// the message goes to stderr.
    pub fn write_api_error(&self, error: &ApiError) -> anyhow::Result<()> {
        match self.format {
            OutputFormat::Json => self.write_json(&error.to_json()),
            OutputFormat::Table => {
                self.write_error(&error.to_string());
                Ok(())
            }
        }
    }

    /// Writes an error message to stderr.
    pub fn write_error(&self, msg: &str) {
        use console::style;
        if self.color {
            eprintln!("{} {}", style("error:").red().bold(), msg);
        } else {
            eprintln!("error: {}", msg);
        }
    }

    /// Writes a warning message to stderr.
    pub fn write_warning(&self, msg: &str) {
        use console::style;
        if self.color {
            eprintln!("{} {}", style("warning:").yellow().bold(), msg);
        } else {
            eprintln!("warning: {}", msg);
        }
    }

    /// Writes a success message to stdout.
    pub fn write_success(&self, msg: &str) {
        use console::style;
        if self.color {
            println!("{} {}", style("✓").green().bold(), msg);
        } else {
            println!("✓ {}", msg);
        }
    }
}

/// A trait for types that can be rendered as human-readable output.
///
/// For JSON output, types must also implement [`Serialize`].
pub trait TableOutput {
    /// Renders the type for an interactive terminal.
    ///
    /// # Parameters
    ///
    /// * `color` - Whether color output is enabled
    fn print_table(&self, color: bool);
}

impl TableOutput for serde_json::Value {
    fn print_table(&self, color: bool) {
        match self {
            serde_json::Value::Object(map) => {
                for (key, value) in map {
                    print_field(key, &display_value(value), color);
                }
            }
            other => println!("{}", display_value(other)),
        }
    }
}

/// Renders a JSON value as a single line for field output.
pub fn display_value(value: &serde_json::Value) -> String {
    match value {
        serde_json::Value::String(s) => s.clone(),
        serde_json::Value::Null => "-".to_string(),
        other => other.to_string(),
    }
}

/// Prints a styled header with an underline.
pub fn print_header(text: &str) {
    use console::style;
    println!("{}", style(text).bold());
    println!("{}", "-".repeat(text.chars().count()));
}

/// Prints a key-value pair, with the key dimmed when color is enabled.
pub fn print_field(key: &str, value: &str, color: bool) {
    use console::style;
    if color {
        println!("{}: {}", style(key).dim(), value);
    } else {
        println!("{}: {}", key, value);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_from_json_flag() {
        assert_eq!(OutputFormat::from_json_flag(true), OutputFormat::Json);
        assert_eq!(OutputFormat::from_json_flag(false), OutputFormat::Table);
        assert_eq!(OutputFormat::default(), OutputFormat::Table);
    }

    #[test]
    fn test_display_value() {
        assert_eq!(display_value(&json!("abc")), "abc");
        assert_eq!(display_value(&json!(null)), "-");
        assert_eq!(display_value(&json!(12)), "12");
        assert_eq!(display_value(&json!(true)), "true");
    }
}
