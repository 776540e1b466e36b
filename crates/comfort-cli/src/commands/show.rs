//! Show command implementation.

use anyhow::Result;
use comfort_core::{Clock, Widget};
use comfort_store::KeyValueStore;

use super::OutputArgs;
use crate::format::format_view_text;
use crate::util::write_output;

pub fn cmd_show<S: KeyValueStore, C: Clock>(
    widget: &Widget<S, C>,
    out: &OutputArgs,
) -> Result<()> {
    write_output(out.output, &render_view(widget, out)?)
}

/// Render the widget's current view as text or JSON.
pub(crate) fn render_view<S: KeyValueStore, C: Clock>(
    widget: &Widget<S, C>,
    out: &OutputArgs,
) -> Result<String> {
    if out.json {
        out.opts.as_json(widget.view())
    } else {
        Ok(format_view_text(widget.view(), out.opts))
    }
}

/// Print the view after a mutating command, unless quiet text output was asked for.
pub(crate) fn print_after_change<S: KeyValueStore, C: Clock>(
    widget: &Widget<S, C>,
    out: &OutputArgs,
) -> Result<()> {
    if out.quiet && !out.json {
        return Ok(());
    }
    cmd_show(widget, out)
}
