//! Reset command implementation.

use anyhow::{Result, bail};
use comfort_core::{Clock, Input, Widget};
use comfort_store::KeyValueStore;
use dialoguer::{Confirm, theme::ColorfulTheme};

use super::OutputArgs;
use super::show::print_after_change;
use crate::util::is_interactive;

/// Restore defaults and clear the store.
///
/// Asks first unless `skip_confirm` is set. Without a terminal to ask on,
/// refuses instead of guessing.
pub fn cmd_reset<S: KeyValueStore, C: Clock>(
    widget: &mut Widget<S, C>,
    skip_confirm: bool,
    out: &OutputArgs,
) -> Result<()> {
    if !skip_confirm {
        if !is_interactive() {
            bail!("Refusing to reset without confirmation. Re-run with --yes.");
        }
        let confirmed = Confirm::with_theme(&ColorfulTheme::default())
            .with_prompt("Reset temperature, unit, comfort range and history?")
            .default(false)
            .interact()?;
        if !confirmed {
            if !out.quiet {
                eprintln!("Reset cancelled.");
            }
            return Ok(());
        }
    }

    widget.handle(Input::Reset);
    if !out.quiet {
        eprintln!("Widget reset to defaults.");
    }
    print_after_change(widget, out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::test_support::widget;
    use crate::format::FormatOptions;
    use comfort_core::WidgetState;

    #[test]
    fn test_reset_clears_store() {
        let opts = FormatOptions::new(true);
        let out = OutputArgs {
            output: None,
            opts: &opts,
            json: false,
            quiet: true,
        };
        let mut w = widget();
        w.set_temperature(30);
        w.save_reading();
        assert!(!w.store().is_empty());

        cmd_reset(&mut w, true, &out).unwrap();
        assert_eq!(w.state(), &WidgetState::default());
        assert!(w.store().is_empty());
    }
}
