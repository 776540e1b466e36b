//! History command implementation.

use anyhow::Result;
use comfort_core::{Clock, Widget};
use comfort_store::{KeyValueStore, export_history_csv, export_history_json};

use super::OutputArgs;
use crate::cli::OutputFormat;
use crate::format::format_history_text;
use crate::util::write_output;

pub fn cmd_history<S: KeyValueStore, C: Clock>(
    widget: &Widget<S, C>,
    format: OutputFormat,
    out: &OutputArgs,
) -> Result<()> {
    let format = if out.json { OutputFormat::Json } else { format };
    let history = widget.state().history();

    let content = match format {
        OutputFormat::Text => format_history_text(widget.view()),
        OutputFormat::Json => {
            let mut buf = Vec::new();
            export_history_json(history, &mut buf, !out.opts.compact)?;
            buf.push(b'\n');
            String::from_utf8(buf)?
        }
        OutputFormat::Csv => {
            let mut buf = Vec::new();
            export_history_csv(history, &mut buf, !out.opts.no_header)?;
            String::from_utf8(buf)?
        }
    };

    write_output(out.output, &content)
}
