//! Utility functions for CLI operations.

use std::io::{self, IsTerminal, Write};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use comfort_core::Widget;
use comfort_store::SqliteStore;

/// Write output to file or stdout
pub fn write_output(output: Option<&PathBuf>, content: &str) -> Result<()> {
    match output {
        Some(path) => {
            std::fs::write(path, content)
                .with_context(|| format!("Failed to write to {}", path.display()))?;
        }
        None => {
            print!("{}", content);
            io::stdout().flush()?;
        }
    }
    Ok(())
}

/// Open the widget database and restore its state.
pub fn open_widget(path: &Path) -> Result<Widget<SqliteStore>> {
    let store = SqliteStore::open(path)
        .with_context(|| format!("Failed to open widget store: {}", path.display()))?;
    Ok(Widget::new(store))
}

/// Whether prompts can be shown to the user.
pub fn is_interactive() -> bool {
    io::stdin().is_terminal() && io::stderr().is_terminal()
}
