//! calc-widget: keypad calculator on the command line
//!
//! ## Usage
//!
//! ```bash
//! calc-widget eval 12 + 3 =          # Prints the log and `> 15`
//! calc-widget eval --format json 1 / 0 =
//! calc-widget repl                   # One line of tokens at a time
//! calc-widget keypad --ids           # Show the layout
//! calc-widget --config calc.yaml config
//! ```

use calc_widget_cli::{build_config, init_logging, run_command, Cli, CliResult};
use clap::Parser;
use std::process::ExitCode;

fn main() -> ExitCode {
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run() -> CliResult<()> {
    let cli = Cli::parse();
    let config = build_config(&cli)?;

    init_logging(config.verbosity, config.log_format);
    console::set_colors_enabled(config.color.should_color());
    tracing::debug!(?config, "configuration loaded");

    run_command(&cli, &config)
}
