//! Slider, unit and comfort range commands.

use anyhow::Result;
use comfort_core::{Clock, Input, Widget};
use comfort_store::KeyValueStore;
use comfort_types::Unit;
use tracing::warn;

use super::OutputArgs;
use super::show::print_after_change;

/// Move the slider. The value is not persisted on its own.
pub fn cmd_set<S: KeyValueStore, C: Clock>(
    widget: &mut Widget<S, C>,
    celsius: i32,
    out: &OutputArgs,
) -> Result<()> {
    widget.handle(Input::SliderMoved(celsius));
    if !out.quiet {
        eprintln!("Note: the slider position is saved by the next unit, range, or save command.");
    }
    print_after_change(widget, out)
}

pub fn cmd_unit<S: KeyValueStore, C: Clock>(
    widget: &mut Widget<S, C>,
    unit: Unit,
    out: &OutputArgs,
) -> Result<()> {
    widget.handle(Input::UnitSelected(unit));
    print_after_change(widget, out)
}

/// Apply raw bound text. Unparseable text becomes an unset bound.
pub fn cmd_range<S: KeyValueStore, C: Clock>(
    widget: &mut Widget<S, C>,
    min: &str,
    max: &str,
    out: &OutputArgs,
) -> Result<()> {
    widget.handle(Input::apply_range(min, max));
    if !widget.state().range().is_valid() {
        warn!(min, max, "Comfort range is not usable");
    }
    print_after_change(widget, out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::test_support::widget;
    use crate::format::FormatOptions;
    use comfort_store::keys;
    use comfort_types::ComfortStatus;

    fn quiet_out(opts: &FormatOptions) -> OutputArgs<'_> {
        OutputArgs {
            output: None,
            opts,
            json: false,
            quiet: true,
        }
    }

    #[test]
    fn test_set_does_not_persist() {
        let opts = FormatOptions::new(true);
        let mut w = widget();
        cmd_set(&mut w, 30, &quiet_out(&opts)).unwrap();
        assert_eq!(w.status(), ComfortStatus::TooHot);
        assert_eq!(w.store().get(keys::TEMP_C).unwrap(), None);
    }

    #[test]
    fn test_unit_persists() {
        let opts = FormatOptions::new(true);
        let mut w = widget();
        cmd_unit(&mut w, Unit::Fahrenheit, &quiet_out(&opts)).unwrap();
        assert_eq!(w.view().temperature, 72);
        assert_eq!(w.store().get(keys::UNIT).unwrap().as_deref(), Some("F"));
    }

    #[test]
    fn test_range_with_garbage_is_invalid() {
        let opts = FormatOptions::new(true);
        let mut w = widget();
        cmd_range(&mut w, "abc", "26", &quiet_out(&opts)).unwrap();
        assert_eq!(w.status(), ComfortStatus::InvalidRange);
        assert_eq!(w.store().get(keys::MIN_C).unwrap(), None);
        assert_eq!(w.store().get(keys::MAX_C).unwrap().as_deref(), Some("26"));
    }

    #[test]
    fn test_range_inverted() {
        let opts = FormatOptions::new(true);
        let mut w = widget();
        cmd_range(&mut w, "26", "18", &quiet_out(&opts)).unwrap();
        assert_eq!(w.view().status_label, "Fix comfort range");
    }
}
