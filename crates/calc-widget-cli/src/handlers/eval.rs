//! Eval command handler

use calc_widget::core::{CalculatorEngine, CalculatorState};
use calc_widget::keypad::parse_key_token;
use tracing::{debug, info, warn};

use crate::config::CliConfig;
use crate::error::{CliError, CliResult};
use crate::output::StateRenderer;
use crate::EvalArgs;

/// Execute the eval command
pub fn execute_eval(config: &CliConfig, args: &EvalArgs) -> CliResult<()> {
    let mut config = config.clone();
    if let Some(format) = args.format {
        config = config.with_format(format.into());
    }
    if let Some(rows) = args.log_rows {
        config = config.with_log_rows(rows);
    }

    let state = eval_tokens(&config, &args.tokens, args.strict)?;
    let rendered = StateRenderer::from_config(&config).render(&state)?;
    println!("{rendered}");
    Ok(())
}

/// Presses `tokens` on a fresh engine and returns the final state
pub fn eval_tokens<S: AsRef<str>>(
    config: &CliConfig,
    tokens: &[S],
    strict: bool,
) -> CliResult<CalculatorState> {
    let mut engine = CalculatorEngine::with_config(config.engine_config());
    press_tokens(&mut engine, tokens.iter().map(AsRef::as_ref), strict)?;
    info!(
        lines = engine.log_lines().len(),
        phase = ?engine.phase(),
        "evaluation finished"
    );
    Ok(engine.snapshot())
}

/// Presses each token on `engine` in order
///
/// With `strict`, a token that no key maps to is an error and later tokens
/// are not pressed. Otherwise it is logged at `warn`, delivered as-is, and
/// the engine ignores it.
pub fn press_tokens<'a>(
    engine: &mut CalculatorEngine,
    tokens: impl IntoIterator<Item = &'a str>,
    strict: bool,
) -> CliResult<()> {
    for token in tokens {
        for signal in parse_key_token(token) {
            if let Err(err) = signal.parse() {
                if strict {
                    return Err(CliError::invalid_argument(format!(
                        "unknown token {token:?} ({err})"
                    )));
                }
                warn!(token, %err, "token ignored");
            }
            engine.handle(&signal);
        }
        debug!(token, value = engine.current_value(), "pressed");
    }
    Ok(())
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;
    use calc_widget::core::EqualLogStyle;

    #[test]
    fn test_eval_addition() {
        let state = eval_tokens(&CliConfig::new(), &["12", "+", "3", "="], false).unwrap();
        assert_eq!(state.current_value, "15");
        assert_eq!(state.log_lines, ["12", "+", "3", "=3"]);
    }

    #[test]
    fn test_eval_operator_names() {
        let state =
            eval_tokens(&CliConfig::new(), &["7", "multiply", "6", "equal"], false).unwrap();
        assert_eq!(state.current_value, "42");
    }

    #[test]
    fn test_eval_result_log_style() {
        let config = CliConfig::new().with_equal_log(EqualLogStyle::Result);
        let state = eval_tokens(&config, &["7", "sub", "9", "equal"], false).unwrap();
        assert_eq!(state.current_value, "-2");
        assert_eq!(state.log_lines.last(), Some("=-2"));
    }

    #[test]
    fn test_eval_unknown_token_ignored() {
        let state = eval_tokens(&CliConfig::new(), &["4", "sqrt"], false).unwrap();
        assert_eq!(state.current_value, "4");
        assert!(state.log_lines.is_empty());
    }

    #[test]
    fn test_eval_unknown_token_strict() {
        let err = eval_tokens(&CliConfig::new(), &["4", "sqrt"], true).unwrap_err();
        assert!(matches!(err, CliError::InvalidArgument { .. }));
        assert!(err.to_string().contains("sqrt"));
    }

    #[test]
    fn test_press_tokens_keeps_engine_state() {
        let mut engine = CalculatorEngine::new();
        press_tokens(&mut engine, ["8", "*"], false).unwrap();
        press_tokens(&mut engine, "sqrt 3 =".split_whitespace(), false).unwrap();
        assert_eq!(engine.current_value(), "24");
        assert_eq!(engine.log_lines(), &["8", "*", "3", "=3"]);
    }

    #[test]
    fn test_press_tokens_strict_stops_at_unknown() {
        let mut engine = CalculatorEngine::new();
        let err = press_tokens(&mut engine, ["4", "sqrt", "5"], true).unwrap_err();
        assert!(err.to_string().contains("sqrt"));
        assert_eq!(engine.current_value(), "4");
    }

    #[test]
    fn test_eval_pending_left_open() {
        let state = eval_tokens(&CliConfig::new(), &["9", "divide"], false).unwrap();
        assert_eq!(state.current_value, "");
        assert!(state.pending.is_some());
    }
}
