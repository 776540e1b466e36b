//! Output formatting utilities for text and JSON output.

use anyhow::Result;
use comfort_core::View;
use comfort_types::{HistoryEntry, StatusLevel};
use owo_colors::OwoColorize;
use serde::Serialize;

/// Formatting options for output.
#[derive(Debug, Clone, Copy, Default)]
pub struct FormatOptions {
    /// Disable colored output.
    pub no_color: bool,
    /// Omit header row in CSV output.
    pub no_header: bool,
    /// Use compact JSON output (no pretty-printing).
    pub compact: bool,
}

impl FormatOptions {
    pub fn new(no_color: bool) -> Self {
        Self {
            no_color,
            ..Self::default()
        }
    }

    /// Create with no_header option for CSV output.
    pub fn with_no_header(mut self, no_header: bool) -> Self {
        self.no_header = no_header;
        self
    }

    /// Create with compact JSON option.
    pub fn with_compact(mut self, compact: bool) -> Self {
        self.compact = compact;
        self
    }

    /// Serialize value to JSON string, respecting compact option.
    pub fn as_json<T: Serialize>(&self, value: &T) -> Result<String> {
        let json = if self.compact {
            serde_json::to_string(value)?
        } else {
            serde_json::to_string_pretty(value)?
        };
        Ok(json + "\n")
    }
}

/// Format the comfort badge, e.g. `[Too hot]`.
pub fn format_badge(level: StatusLevel, label: &str, no_color: bool) -> String {
    if no_color {
        format!("[{}]", label)
    } else {
        match level {
            StatusLevel::Ok => format!("[{}]", label.green()),
            StatusLevel::Warn => format!("[{}]", label.yellow()),
            StatusLevel::Bad => format!("[{}]", label.red()),
        }
    }
}

/// Format the full widget view as text.
pub fn format_view_text(view: &View, opts: &FormatOptions) -> String {
    let temperature = format!("{}{}", view.temperature, view.unit_symbol);
    let temperature = if opts.no_color {
        temperature
    } else {
        temperature.bold().to_string()
    };

    let label = |key: &str| {
        if opts.no_color {
            format!("{:>13}:", key)
        } else {
            format!("{:>13}:", key).dimmed().to_string()
        }
    };

    let mut output = String::new();
    output.push_str(&format!(
        "{}  {}  {}\n",
        label("Temperature"),
        temperature,
        format_badge(view.level, view.status_label, opts.no_color)
    ));
    output.push_str(&format!(
        "{}  {} to {} °C\n",
        label("Comfort range"),
        view.min_show,
        view.max_show
    ));
    output.push_str(&format!("{}  {}\n", label("Last saved"), view.saved_info));
    output
}

/// Format history lines (newest first) as text.
pub fn format_history_text(view: &View) -> String {
    if view.history.is_empty() {
        return "No saved readings.\n".to_string();
    }
    let mut output = String::new();
    for line in &view.history {
        output.push_str(line);
        output.push('\n');
    }
    output
}

/// Confirmation line printed after a reading is saved.
pub fn format_saved_entry(entry: &HistoryEntry, no_color: bool) -> String {
    let value = format!("{}{}", entry.value, entry.unit);
    if no_color {
        format!("Saved {} at {}\n", value, entry.time)
    } else {
        format!("Saved {} at {}\n", value.bold(), entry.time)
    }
}
