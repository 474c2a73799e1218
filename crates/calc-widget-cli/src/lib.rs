//! calc-widget CLI library
//!
//! Command-line front end for the keypad calculator: argument parsing,
//! layered configuration, rendering and the command handlers.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::format_push_string)] // String building is clear and correct
#![allow(clippy::missing_errors_doc)] // Error types are self-documenting

mod commands;
mod config;
mod error;
pub mod handlers;
pub mod logging;
mod output;

pub use commands::{
    Cli, ColorArg, Commands, ConfigArgs, EqualLogArg, EvalArgs, FormatArg, KeypadArgs,
    LogFormatArg, ReplArgs,
};
pub use config::{CliConfig, ColorChoice, LogFormat, OutputFormat, Verbosity};
pub use error::{CliError, CliResult};
pub use logging::init_logging;
pub use output::StateRenderer;

/// Builds the effective configuration: defaults, then the YAML file, then flags
pub fn build_config(cli: &Cli) -> CliResult<CliConfig> {
    let mut config = match &cli.config {
        Some(path) => CliConfig::load(path)?,
        None => CliConfig::new(),
    };

    if cli.quiet {
        config = config.with_verbosity(Verbosity::Quiet);
    } else if cli.verbose > 0 {
        config = config.with_verbosity(Verbosity::from_count(cli.verbose));
    }
    if let Some(color) = cli.color {
        config = config.with_color(color.into());
    }
    if let Some(style) = cli.equal_log {
        config = config.with_equal_log(style.into());
    }
    if let Some(format) = cli.log_format {
        config = config.with_log_format(format.into());
    }
    Ok(config)
}

/// Runs the parsed command
pub fn run_command(cli: &Cli, config: &CliConfig) -> CliResult<()> {
    match &cli.command {
        Commands::Eval(args) => handlers::execute_eval(config, args),
        Commands::Repl(args) => handlers::execute_repl(config, args),
        Commands::Keypad(args) => {
            handlers::execute_keypad(config, args);
            Ok(())
        }
        Commands::Config(args) => handlers::execute_config(config, args),
    }
}
