use std::io;

use anyhow::Result;
use clap::{CommandFactory, Parser};
use tracing_subscriber::EnvFilter;

use comfort_cli::cli::{Cli, Commands};
use comfort_cli::commands::{
    OutputArgs, cmd_config, cmd_history, cmd_range, cmd_reset, cmd_save, cmd_set, cmd_show,
    cmd_unit,
};
use comfort_cli::config::{Config, resolve_store_path};
use comfort_cli::format::FormatOptions;
use comfort_cli::util::open_widget;

fn main() -> Result<()> {
    human_panic::setup_panic!();

    let cli = Cli::parse();

    // Handle completions command early (before tracing init)
    if let Commands::Completions { shell } = cli.command {
        let mut cmd = Cli::command();
        clap_complete::generate(shell, &mut cmd, "comfort", &mut io::stdout());
        return Ok(());
    }

    // Logs go to stderr so piped output stays clean
    let filter = match cli.log_directive() {
        Some(directive) => EnvFilter::new(directive),
        None => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();

    if let Commands::Config { action } = cli.command {
        return cmd_config(action, cli.quiet);
    }

    let config = Config::load();
    let store_path = resolve_store_path(cli.store.clone(), &config);
    tracing::debug!("Using store: {}", store_path.display());

    let opts = FormatOptions::new(cli.no_color || config.no_color).with_compact(cli.compact);
    let out = OutputArgs {
        output: cli.output.as_ref(),
        opts: &opts,
        json: cli.json,
        quiet: cli.quiet,
    };

    let mut widget = open_widget(&store_path)?;

    match cli.command {
        Commands::Show => cmd_show(&widget, &out),
        Commands::Set { celsius } => cmd_set(&mut widget, celsius, &out),
        Commands::Unit { unit } => cmd_unit(&mut widget, unit.into(), &out),
        Commands::Range { min, max } => cmd_range(&mut widget, &min, &max, &out),
        Commands::Save { temp } => cmd_save(&mut widget, temp, &out),
        Commands::Reset { yes } => cmd_reset(&mut widget, yes || !config.confirm_reset, &out),
        Commands::History { format, no_header } => {
            let opts = opts.with_no_header(no_header);
            let out = OutputArgs {
                output: cli.output.as_ref(),
                opts: &opts,
                json: cli.json,
                quiet: cli.quiet,
            };
            cmd_history(&widget, format, &out)
        }
        #[cfg(feature = "tui")]
        Commands::Tui => comfort_cli::tui::run(widget, &config),
        Commands::Config { .. } | Commands::Completions { .. } => Ok(()),
    }
}
