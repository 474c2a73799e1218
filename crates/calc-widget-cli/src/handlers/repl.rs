//! Repl command handler

use std::io::{self, BufRead, Write};

use calc_widget::core::CalculatorEngine;
use tracing::{debug, info};

use crate::config::CliConfig;
use crate::error::CliResult;
use crate::handlers::eval::press_tokens;
use crate::output::StateRenderer;
use crate::ReplArgs;

/// Line that ends the session
pub const QUIT: &str = "quit";

/// Execute the repl command on stdin/stdout
pub fn execute_repl(config: &CliConfig, args: &ReplArgs) -> CliResult<()> {
    let mut config = config.clone();
    if let Some(format) = args.format {
        config = config.with_format(format.into());
    }
    if let Some(rows) = args.log_rows {
        config = config.with_log_rows(rows);
    }

    let stdin = io::stdin();
    let stdout = io::stdout();
    run_repl(&config, stdin.lock(), stdout.lock())
}

/// Feeds each input line to one engine, writing the state after every line
///
/// Tokens are split on whitespace and pressed like `eval` tokens, so an
/// unknown one is logged and ignored. Blank lines are skipped. Stops at EOF
/// or on a `quit` line.
pub fn run_repl<R: BufRead, W: Write>(config: &CliConfig, input: R, mut output: W) -> CliResult<()> {
    let renderer = StateRenderer::from_config(config);
    let mut engine = CalculatorEngine::with_config(config.engine_config());

    for (number, line) in input.lines().enumerate() {
        let line = line?;
        let line = line.trim();
        if line == QUIT {
            debug!(line = number + 1, "quit");
            break;
        }
        if line.is_empty() {
            continue;
        }
        press_tokens(&mut engine, line.split_whitespace(), false)?;
        writeln!(output, "{}", renderer.render(engine.state())?)?;
        output.flush()?;
    }

    info!(lines = engine.log_lines().len(), "repl finished");
    Ok(())
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;
    use crate::config::{ColorChoice, OutputFormat};

    fn run(config: &CliConfig, input: &str) -> String {
        let config = config.clone().with_color(ColorChoice::Never);
        let mut out = Vec::new();
        run_repl(&config, input.as_bytes(), &mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_repl_state_persists_between_lines() {
        let out = run(&CliConfig::new(), "12 +\n3 =\n");
        assert_eq!(out, "12\n+\n>   [12 +]\n12\n+\n3\n=3\n> 15\n");
    }

    #[test]
    fn test_repl_stops_on_quit() {
        let out = run(&CliConfig::new(), "4\nquit\n5\n");
        assert_eq!(out, "> 4\n");
    }

    #[test]
    fn test_repl_skips_blank_lines() {
        let out = run(&CliConfig::new(), "\n   \n7\n");
        assert_eq!(out, "> 7\n");
    }

    #[test]
    fn test_repl_json_lines() {
        let config = CliConfig::new().with_format(OutputFormat::Json);
        let out = run(&config, "2 * 5 =\n");
        let value: serde_json::Value = serde_json::from_str(out.trim()).unwrap();
        assert_eq!(value["current_value"], "10");
    }

    #[test]
    fn test_repl_unknown_token_ignored() {
        let out = run(&CliConfig::new(), "4 sqrt\n+ 1 =\n");
        assert_eq!(out, "> 4\n4\n+\n1\n=1\n> 5\n");
    }

    #[test]
    fn test_repl_empty_input() {
        assert_eq!(run(&CliConfig::new(), ""), "");
    }
}
