//! CLI argument definitions using clap.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

use comfort_types::Unit;

/// Output format for commands
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
    Csv,
}

/// Temperature unit as typed on the command line
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum UnitArg {
    /// Celsius
    #[value(alias = "celsius", alias = "C")]
    C,
    /// Fahrenheit
    #[value(alias = "fahrenheit", alias = "F")]
    F,
}

impl From<UnitArg> for Unit {
    fn from(arg: UnitArg) -> Self {
        match arg {
            UnitArg::C => Unit::Celsius,
            UnitArg::F => Unit::Fahrenheit,
        }
    }
}

#[derive(Parser)]
#[command(name = "comfort")]
#[command(author, version, about = "Temperature comfort widget", long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Suppress non-essential output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Output as JSON (shorthand for --format json)
    #[arg(long, global = true)]
    pub json: bool,

    /// Output compact JSON (no pretty-printing)
    #[arg(long, global = true)]
    pub compact: bool,

    /// Disable colored output
    #[arg(long, global = true, env = "NO_COLOR")]
    pub no_color: bool,

    /// Path to the widget database (overrides config)
    #[arg(long, global = true, env = "COMFORT_STORE")]
    pub store: Option<PathBuf>,

    /// Write output to file instead of stdout
    #[arg(short, long, global = true)]
    pub output: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

impl Cli {
    /// Log filter directive forced by the command line, if any.
    ///
    /// The terminal view owns the screen, so it logs nothing.
    pub fn log_directive(&self) -> Option<&'static str> {
        #[cfg(feature = "tui")]
        if matches!(self.command, Commands::Tui) {
            return Some("off");
        }
        if self.quiet {
            Some("warn")
        } else if self.verbose {
            Some("debug")
        } else {
            None
        }
    }
}

#[derive(Subcommand)]
pub enum Commands {
    /// Show the current temperature, comfort status and last saved reading
    Show,

    /// Move the temperature slider (Celsius). Not saved until a committing command runs
    Set {
        /// Temperature in Celsius
        #[arg(allow_hyphen_values = true)]
        celsius: i32,
    },

    /// Select the display unit
    Unit {
        /// Unit to display (c or f)
        #[arg(value_enum)]
        unit: UnitArg,
    },

    /// Apply a comfort range in Celsius
    Range {
        /// Lower bound
        #[arg(allow_hyphen_values = true)]
        min: String,

        /// Upper bound
        #[arg(allow_hyphen_values = true)]
        max: String,
    },

    /// Save the current reading to the history
    Save {
        /// Move the slider to this Celsius value before saving
        #[arg(short, long, allow_hyphen_values = true)]
        temp: Option<i32>,
    },

    /// Restore defaults and clear all saved state
    Reset {
        /// Skip the confirmation prompt
        #[arg(short, long)]
        yes: bool,
    },

    /// List saved readings, newest first
    History {
        /// Output format
        #[arg(short, long, value_enum, default_value = "text")]
        format: OutputFormat,

        /// Omit header row in CSV output (useful for appending)
        #[arg(long)]
        no_header: bool,
    },

    /// Interactive terminal view
    #[cfg(feature = "tui")]
    Tui,

    /// Manage CLI configuration
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: clap_complete::Shell,
    },
}

#[derive(Debug, Clone, Copy, Subcommand)]
pub enum ConfigAction {
    /// Print the effective configuration
    Show,
    /// Print the configuration file path
    Path,
    /// Write a default configuration file if none exists
    Init,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_unit_aliases() {
        for (arg, unit) in [
            ("c", Unit::Celsius),
            ("celsius", Unit::Celsius),
            ("F", Unit::Fahrenheit),
            ("fahrenheit", Unit::Fahrenheit),
        ] {
            let cli = Cli::try_parse_from(["comfort", "unit", arg]).unwrap();
            match cli.command {
                Commands::Unit { unit: parsed } => assert_eq!(Unit::from(parsed), unit),
                _ => panic!("expected unit command"),
            }
        }
    }

    #[test]
    fn test_parse_negative_values() {
        let cli = Cli::try_parse_from(["comfort", "set", "-5"]).unwrap();
        assert!(matches!(cli.command, Commands::Set { celsius: -5 }));

        let cli = Cli::try_parse_from(["comfort", "range", "-10", "5"]).unwrap();
        match cli.command {
            Commands::Range { min, max } => {
                assert_eq!(min, "-10");
                assert_eq!(max, "5");
            }
            _ => panic!("expected range command"),
        }
    }

    #[test]
    fn test_parse_global_flags() {
        let cli =
            Cli::try_parse_from(["comfort", "show", "--json", "--store", "/tmp/w.db"]).unwrap();
        assert!(cli.json);
        assert_eq!(cli.store, Some(PathBuf::from("/tmp/w.db")));
    }

    #[test]
    fn test_log_directive_from_flags() {
        let cli = Cli::try_parse_from(["comfort", "show"]).unwrap();
        assert_eq!(cli.log_directive(), None);

        let cli = Cli::try_parse_from(["comfort", "show", "--verbose"]).unwrap();
        assert_eq!(cli.log_directive(), Some("debug"));

        let cli = Cli::try_parse_from(["comfort", "show", "-q", "-v"]).unwrap();
        assert_eq!(cli.log_directive(), Some("warn"));
    }

    #[cfg(feature = "tui")]
    #[test]
    fn test_log_directive_silences_tui() {
        let cli = Cli::try_parse_from(["comfort", "tui"]).unwrap();
        assert_eq!(cli.log_directive(), Some("off"));

        let cli = Cli::try_parse_from(["comfort", "tui", "--verbose"]).unwrap();
        assert_eq!(cli.log_directive(), Some("off"));
    }
}
