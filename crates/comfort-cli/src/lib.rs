//! Command-line interface for the Comfort temperature widget.
//!
//! # Commands
//!
//! | Command | Description |
//! |---------|-------------|
//! | `show` | Print temperature, comfort status and last saved reading |
//! | `set` | Move the temperature slider (not saved on its own) |
//! | `unit` | Switch between Celsius and Fahrenheit |
//! | `range` | Apply a comfort range |
//! | `save` | Save the current reading to the history |
//! | `reset` | Restore defaults and clear saved state |
//! | `history` | List saved readings as text, JSON or CSV |
//! | `tui` | Interactive terminal view |
//! | `config` | Manage CLI configuration |
//! | `completions` | Generate shell completions |
//!
//! # Configuration
//!
//! The CLI reads `~/.config/comfort/config.toml` (or platform equivalent):
//!
//! - `store`: widget database path
//! - `no_color`: disable colored output
//! - `slider_min` / `slider_max`: slider travel in the terminal view
//! - `confirm_reset`: ask before `reset`
//!
//! # Environment Variables
//!
//! - `COMFORT_STORE`: widget database path (overridden by `--store`)
//! - `NO_COLOR`: disable colored output when set
//!
//! # Examples
//!
//! ```bash
//! comfort unit f
//! comfort range 19 24
//! comfort save --temp 21
//! comfort history --format csv --output readings.csv
//! ```

pub mod cli;
pub mod commands;
pub mod config;
pub mod format;
pub mod util;

#[cfg(feature = "tui")]
pub mod tui;

// Re-export core dependencies for convenience
pub use comfort_core;
pub use comfort_types;
