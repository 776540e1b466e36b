//! Command implementations for the CLI.

mod adjust;
mod config;
mod history;
mod reset;
mod save;
mod show;

use std::path::PathBuf;

use crate::format::FormatOptions;

pub use adjust::{cmd_range, cmd_set, cmd_unit};
pub use config::cmd_config;
pub use history::cmd_history;
pub use reset::cmd_reset;
pub use save::cmd_save;
pub use show::cmd_show;

/// Output settings shared by every widget command.
#[derive(Debug, Clone, Copy)]
pub struct OutputArgs<'a> {
    pub output: Option<&'a PathBuf>,
    pub opts: &'a FormatOptions,
    pub json: bool,
    pub quiet: bool,
}
