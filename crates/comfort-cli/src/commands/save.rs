//! Save command implementation.

use anyhow::Result;
use comfort_core::{Clock, Input, Widget};
use comfort_store::KeyValueStore;

use super::OutputArgs;
use crate::format::format_saved_entry;
use crate::util::write_output;

/// Optionally move the slider, then append the reading to the history.
pub fn cmd_save<S: KeyValueStore, C: Clock>(
    widget: &mut Widget<S, C>,
    temp: Option<i32>,
    out: &OutputArgs,
) -> Result<()> {
    if let Some(celsius) = temp {
        widget.handle(Input::SliderMoved(celsius));
    }
    let entry = widget.save_reading();

    if out.json {
        write_output(out.output, &out.opts.as_json(&entry)?)
    } else if out.quiet {
        Ok(())
    } else {
        write_output(out.output, &format_saved_entry(&entry, out.opts.no_color))
    }
}
