//
//  docusign-client
//  output/table.rs
//
//  Created by Ngonidzashe Mangudya on 2026/02/06.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! # Table Output Formatting
//!
//! Tabular output built on `comfy_table`.
//!
//! ```rust,ignore
//! use docusign_client::output::TableBuilder;
//!
//! TableBuilder::new()
//!     .headers(["User ID", "Name", "Status"])
//!     .row(["u-1", "Ada Lovelace", "active"])
//!     .print();
//! ```

use comfy_table::{presets::UTF8_FULL, Cell, Color, ContentArrangement, Table};

/// Creates a new table with UTF-8 borders and dynamic column widths.
pub fn create_table() -> Table {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic);
    table
}

/// A builder for constructing formatted tables with a fluent API.
///
/// Headers are shown in cyan when color is enabled. Color support is
/// detected on creation; use [`color`](TableBuilder::color) to override it.
pub struct TableBuilder {
    table: Table,
    color: bool,
}

impl TableBuilder {
    pub fn new() -> Self {
        Self {
            table: create_table(),
            color: console::colors_enabled(),
        }
    }

    /// Overrides color detection.
    pub fn color(mut self, enabled: bool) -> Self {
        self.color = enabled;
        self
    }

    /// Sets the table headers. Call before adding rows.
    pub fn headers<I, S>(mut self, headers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let headers: Vec<String> = headers.into_iter().map(|s| s.into()).collect();
        if self.color {
            let cells: Vec<Cell> = headers.iter().map(|h| Cell::new(h).fg(Color::Cyan)).collect();
            self.table.set_header(cells);
        } else {
            self.table.set_header(headers);
        }
        self
    }

    /// Adds a single row to the table.
    pub fn row<I, S>(mut self, cells: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let row: Vec<String> = cells.into_iter().map(|s| s.into()).collect();
        self.table.add_row(row);
        self
    }

    /// Returns the finished table.
    pub fn build(self) -> Table {
        self.table
    }

    /// Prints the table to stdout.
    pub fn print(self) {
        println!("{}", self.build());
    }
}

impl Default for TableBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Colors a DocuSign status (user or recipient) by its meaning.
///
/// | Status | Color |
/// |--------|-------|
/// | `active`, `completed`, `signed` | green |
/// | `sent`, `delivered`, `created` | yellow |
/// | `closed`, `declined`, `voided` | red |
pub fn format_status(status: &str, color: bool) -> String {
    if !color {
        return status.to_string();
    }

    use console::style;
    match status.to_lowercase().as_str() {
        "active" | "completed" | "signed" => style(status).green().to_string(),
        "sent" | "delivered" | "created" | "activationsent" => style(status).yellow().to_string(),
        "closed" | "declined" | "voided" | "disabled" => style(status).red().to_string(),
        _ => status.to_string(),
    }
}

/// Truncates a string to `max_len` characters, adding `...` when cut.
pub fn truncate(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        return s.to_string();
    }
    let kept: String = s.chars().take(max_len.saturating_sub(3)).collect();
    format!("{}...", kept)
}
