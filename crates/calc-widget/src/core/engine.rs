//! Calculator engine
//!
//! A synchronous reducer over [`CalculatorState`]. Two phases:
//!
//! ```text
//!            arithmetic op                 equal
//!   Idle ─────────────────────▶ Pending ───────────▶ Idle
//!                                 │  ▲
//!                                 └──┘ arithmetic op (re-captures operand)
//! ```
//!
//! Digits, backspace and reset only touch the current entry and never change
//! the phase.

use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use super::history::LogLines;
use super::number::{format_number, parse_leading_int};
use super::operations::{Arithmetic, Digit, Operator};
use super::signal::{RawSignal, Signal, SignalSink};
use super::{EngineConfig, EqualLogStyle};

/// An operator waiting for its right-hand operand
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PendingOperation {
    /// The captured operator
    pub operator: Arithmetic,
    /// Left-hand operand, as typed
    pub operand: String,
}

/// Engine phase
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Phase {
    /// No operation pending
    Idle,
    /// An operation awaits its second operand
    Pending,
}

/// Complete engine state
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalculatorState {
    /// Entry being typed
    pub current_value: String,
    /// History lines
    pub log_lines: LogLines,
    /// Captured operator and left operand
    pub pending: Option<PendingOperation>,
}

impl CalculatorState {
    /// Returns the phase implied by `pending`
    #[must_use]
    pub const fn phase(&self) -> Phase {
        if self.pending.is_some() {
            Phase::Pending
        } else {
            Phase::Idle
        }
    }

    fn apply(&mut self, signal: Signal, config: EngineConfig) {
        match signal {
            Signal::Digit(d) => self.current_value.push(d.as_char()),
            Signal::Operator(op) => match op.arithmetic() {
                Some(arith) => self.capture(arith),
                None => match op {
                    Operator::Backspace => {
                        self.current_value.pop();
                    }
                    Operator::Reset => self.current_value.clear(),
                    Operator::Equal => self.evaluate(config.equal_log),
                    // Arithmetic operators are handled above
                    Operator::Add | Operator::Sub | Operator::Multiply | Operator::Divide => {}
                },
            },
        }
    }

    fn capture(&mut self, operator: Arithmetic) {
        let operand = std::mem::take(&mut self.current_value);
        self.log_lines.extend_pair(&operand, operator.symbol());
        if let Some(previous) = &self.pending {
            debug!(
                discarded = %previous.operator,
                operand = %previous.operand,
                "pending operation overwritten"
            );
        }
        self.pending = Some(PendingOperation { operator, operand });
    }

    fn evaluate(&mut self, style: EqualLogStyle) {
        let Some(pending) = self.pending.take() else {
            trace!("equal without pending operation ignored");
            return;
        };

        let entered = std::mem::take(&mut self.current_value);
        self.log_lines.push(entered.as_str());

        let lhs = parse_leading_int(&pending.operand);
        let rhs = parse_leading_int(&entered);
        let result = format_number(pending.operator.apply(lhs, rhs));
        debug!(
            lhs = %pending.operand,
            operator = %pending.operator,
            rhs = %entered,
            result = %result,
            "evaluated"
        );

        let equal_line = match style {
            EqualLogStyle::Operand => format!("={entered}"),
            EqualLogStyle::Result => format!("={result}"),
        };
        self.log_lines.push(equal_line);
        self.current_value = result;
    }
}

/// Pure reducer: returns the state after applying `signal`
#[must_use]
pub fn reduce(state: &CalculatorState, signal: Signal, config: EngineConfig) -> CalculatorState {
    let mut next = state.clone();
    next.apply(signal, config);
    next
}

/// Stateful engine; sole owner of its [`CalculatorState`]
///
/// ```
/// use calc_widget::core::{CalculatorEngine, Digit, Operator};
///
/// let mut engine = CalculatorEngine::new();
/// engine.put_digit(Digit::new(1).unwrap());
/// engine.put_digit(Digit::new(2).unwrap());
/// engine.apply_operator(Operator::Add);
/// engine.put_digit(Digit::new(3).unwrap());
/// engine.apply_operator(Operator::Equal);
/// assert_eq!(engine.current_value(), "15");
/// ```
#[derive(Debug, Clone, Default)]
pub struct CalculatorEngine {
    state: CalculatorState,
    config: EngineConfig,
}

impl CalculatorEngine {
    /// Creates an engine with default settings
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an engine with the given settings
    #[must_use]
    pub fn with_config(config: EngineConfig) -> Self {
        Self {
            state: CalculatorState::default(),
            config,
        }
    }

    /// Resumes from an existing state
    #[must_use]
    pub fn from_state(state: CalculatorState, config: EngineConfig) -> Self {
        Self { state, config }
    }

    /// Appends a digit to the current entry
    pub fn put_digit(&mut self, digit: Digit) {
        self.dispatch(Signal::Digit(digit));
    }

    /// Applies an operator
    pub fn apply_operator(&mut self, operator: Operator) {
        self.dispatch(Signal::Operator(operator));
    }

    /// Applies a validated signal
    pub fn dispatch(&mut self, signal: Signal) {
        trace!(?signal, phase = ?self.phase(), "dispatch");
        self.state.apply(signal, self.config);
    }

    /// Parses and applies an untyped event. Unrecognized payloads are ignored.
    pub fn handle(&mut self, raw: &RawSignal) {
        match raw.parse() {
            Ok(signal) => self.dispatch(signal),
            Err(err) => debug!(kind = %raw.kind, detail = %raw.detail, %err, "signal ignored"),
        }
    }

    /// Returns the entry being typed
    #[must_use]
    pub fn current_value(&self) -> &str {
        &self.state.current_value
    }

    /// Returns the history log
    #[must_use]
    pub fn log_lines(&self) -> &LogLines {
        &self.state.log_lines
    }

    /// Returns the pending operation, if any
    #[must_use]
    pub fn pending(&self) -> Option<&PendingOperation> {
        self.state.pending.as_ref()
    }

    /// Returns the current phase
    #[must_use]
    pub const fn phase(&self) -> Phase {
        self.state.phase()
    }

    /// Returns the settings
    #[must_use]
    pub const fn config(&self) -> EngineConfig {
        self.config
    }

    /// Borrows the full state
    #[must_use]
    pub fn state(&self) -> &CalculatorState {
        &self.state
    }

    /// Returns an owned copy of the state
    #[must_use]
    pub fn snapshot(&self) -> CalculatorState {
        self.state.clone()
    }
}

impl SignalSink for CalculatorEngine {
    fn receive(&mut self, signal: &RawSignal) {
        self.handle(signal);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn digit(d: u8) -> Digit {
        Digit::new(d).unwrap()
    }

    fn press(engine: &mut CalculatorEngine, keys: &str) {
        for key in keys.split_whitespace() {
            match key.parse::<Digit>() {
                Ok(d) => engine.put_digit(d),
                Err(_) => engine.handle(&RawSignal::operator(key)),
            }
        }
    }

    // ===== Digits / backspace / reset =====

    #[test]
    fn test_new_engine_is_idle_and_empty() {
        let engine = CalculatorEngine::new();
        assert_eq!(engine.current_value(), "");
        assert!(engine.log_lines().is_empty());
        assert_eq!(engine.pending(), None);
        assert_eq!(engine.phase(), Phase::Idle);
    }

    #[test]
    fn test_digits_append() {
        let mut engine = CalculatorEngine::new();
        engine.put_digit(digit(1));
        engine.put_digit(digit(2));
        assert_eq!(engine.current_value(), "12");
    }

    #[test]
    fn test_leading_zeros_kept() {
        let mut engine = CalculatorEngine::new();
        press(&mut engine, "0 0 7");
        assert_eq!(engine.current_value(), "007");
    }

    #[test]
    fn test_backspace_removes_last() {
        let mut engine = CalculatorEngine::new();
        press(&mut engine, "1 2 3 backspace");
        assert_eq!(engine.current_value(), "12");
    }

    #[test]
    fn test_backspace_on_empty_is_noop() {
        let mut engine = CalculatorEngine::new();
        engine.apply_operator(Operator::Backspace);
        assert_eq!(engine.current_value(), "");
        assert!(engine.log_lines().is_empty());
    }

    #[test]
    fn test_reset_keeps_pending_and_log() {
        let mut engine = CalculatorEngine::new();
        press(&mut engine, "4 multiply 5 reset");
        assert_eq!(engine.current_value(), "");
        assert_eq!(engine.log_lines(), &["4", "*"]);
        assert_eq!(
            engine.pending(),
            Some(&PendingOperation {
                operator: Arithmetic::Multiply,
                operand: "4".into()
            })
        );
    }

    // ===== Operators =====

    #[test]
    fn test_operator_captures_entry() {
        let mut engine = CalculatorEngine::new();
        press(&mut engine, "1 2 add");
        assert_eq!(engine.log_lines(), &["12", "+"]);
        assert_eq!(engine.current_value(), "");
        assert_eq!(engine.phase(), Phase::Pending);
        let pending = engine.pending().unwrap();
        assert_eq!(pending.operator, Arithmetic::Add);
        assert_eq!(pending.operand, "12");
    }

    #[test]
    fn test_operator_symbols_logged() {
        for (name, symbol) in [("add", "+"), ("sub", "-"), ("multiply", "*"), ("divide", "/")] {
            let mut engine = CalculatorEngine::new();
            press(&mut engine, &format!("9 {name}"));
            assert_eq!(engine.log_lines().last(), Some(symbol));
        }
    }

    #[test]
    fn test_operator_on_empty_entry_logs_empty_line() {
        let mut engine = CalculatorEngine::new();
        engine.apply_operator(Operator::Sub);
        assert_eq!(engine.log_lines(), &["", "-"]);
        assert_eq!(engine.pending().unwrap().operand, "");
    }

    #[test]
    fn test_repeated_operator_recaptures() {
        let mut engine = CalculatorEngine::new();
        press(&mut engine, "1 add 2 add");
        assert_eq!(engine.log_lines(), &["1", "+", "2", "+"]);
        assert_eq!(engine.pending().unwrap().operand, "2");
        press(&mut engine, "5 equal");
        assert_eq!(engine.current_value(), "7");
    }

    #[test]
    fn test_operator_switch_uses_latest() {
        let mut engine = CalculatorEngine::new();
        press(&mut engine, "8 add 2 multiply 3 equal");
        assert_eq!(engine.current_value(), "6");
    }

    // ===== Equal =====

    #[test]
    fn test_spec_scenario_twelve_plus_three() {
        let mut engine = CalculatorEngine::new();
        press(&mut engine, "1 2 add 3 equal");
        assert_eq!(engine.current_value(), "15");
        assert_eq!(engine.pending(), None);
        assert_eq!(engine.phase(), Phase::Idle);
        assert_eq!(engine.log_lines(), &["12", "+", "3", "=3"]);
    }

    #[test]
    fn test_equal_without_pending_is_noop() {
        let mut engine = CalculatorEngine::new();
        press(&mut engine, "4 2");
        let before = engine.snapshot();
        engine.apply_operator(Operator::Equal);
        assert_eq!(engine.snapshot(), before);
    }

    #[test]
    fn test_equal_twice_second_is_noop() {
        let mut engine = CalculatorEngine::new();
        press(&mut engine, "2 multiply 3 equal");
        let before = engine.snapshot();
        engine.apply_operator(Operator::Equal);
        assert_eq!(engine.snapshot(), before);
        assert_eq!(engine.current_value(), "6");
    }

    #[test]
    fn test_subtraction_negative_result() {
        let mut engine = CalculatorEngine::new();
        press(&mut engine, "1 sub 5 equal");
        assert_eq!(engine.current_value(), "-4");
    }

    #[test]
    fn test_division_is_real() {
        let mut engine = CalculatorEngine::new();
        press(&mut engine, "1 divide 3 equal");
        assert_eq!(engine.current_value(), "0.3333333333333333");

        let mut engine = CalculatorEngine::new();
        press(&mut engine, "7 divide 2 equal");
        assert_eq!(engine.current_value(), "3.5");
    }

    #[test]
    fn test_divide_by_zero_is_infinity() {
        let mut engine = CalculatorEngine::new();
        press(&mut engine, "5 divide 0 equal");
        assert_eq!(engine.current_value(), "Infinity");
        assert_eq!(engine.phase(), Phase::Idle);
    }

    #[test]
    fn test_zero_over_zero_is_nan() {
        let mut engine = CalculatorEngine::new();
        press(&mut engine, "0 divide 0 equal");
        assert_eq!(engine.current_value(), "NaN");
    }

    #[test]
    fn test_empty_right_operand_is_nan() {
        let mut engine = CalculatorEngine::new();
        press(&mut engine, "3 add equal");
        assert_eq!(engine.current_value(), "NaN");
        assert_eq!(engine.log_lines(), &["3", "+", "", "="]);
    }

    #[test]
    fn test_nan_result_accepts_further_input() {
        let mut engine = CalculatorEngine::new();
        press(&mut engine, "add equal 1");
        assert_eq!(engine.current_value(), "NaN1");
        press(&mut engine, "add 2 equal");
        assert_eq!(engine.current_value(), "NaN");
    }

    #[test]
    fn test_infinity_backspace_edits_text() {
        let mut engine = CalculatorEngine::new();
        press(&mut engine, "1 divide 0 equal backspace");
        assert_eq!(engine.current_value(), "Infinit");
    }

    #[test]
    fn test_result_chains_into_next_operation() {
        let mut engine = CalculatorEngine::new();
        press(&mut engine, "6 multiply 7 equal add 8 equal");
        assert_eq!(engine.current_value(), "50");
        assert_eq!(
            engine.log_lines(),
            &["6", "*", "7", "=7", "42", "+", "8", "=8"]
        );
    }

    #[test]
    fn test_fractional_result_truncated_on_reuse() {
        let mut engine = CalculatorEngine::new();
        press(&mut engine, "7 divide 2 equal multiply 2 equal");
        assert_eq!(engine.current_value(), "6");
    }

    #[test]
    fn test_result_log_style() {
        let config = EngineConfig::new().with_equal_log(EqualLogStyle::Result);
        let mut engine = CalculatorEngine::with_config(config);
        press(&mut engine, "1 2 add 3 equal");
        assert_eq!(engine.log_lines(), &["12", "+", "3", "=15"]);
        assert_eq!(engine.config(), config);
    }

    // ===== Raw signals =====

    #[test]
    fn test_unknown_operator_ignored() {
        let mut engine = CalculatorEngine::new();
        press(&mut engine, "1 add 2");
        let before = engine.snapshot();
        engine.handle(&RawSignal::operator("percent"));
        engine.handle(&RawSignal::operator("ADD"));
        assert_eq!(engine.snapshot(), before);
    }

    #[test]
    fn test_invalid_digit_payload_ignored() {
        let mut engine = CalculatorEngine::new();
        engine.handle(&RawSignal::digit("a"));
        engine.handle(&RawSignal::digit("42"));
        assert_eq!(engine.current_value(), "");
    }

    #[test]
    fn test_signal_sink_routes_to_handle() {
        let mut engine = CalculatorEngine::new();
        let sink: &mut dyn SignalSink = &mut engine;
        sink.receive(&RawSignal::digit("9"));
        sink.receive(&RawSignal::operator("divide"));
        assert_eq!(engine.log_lines(), &["9", "/"]);
    }

    // ===== Reducer =====

    #[test]
    fn test_reduce_is_pure() {
        let state = CalculatorState::default();
        let next = reduce(&state, Signal::Digit(digit(5)), EngineConfig::default());
        assert_eq!(state.current_value, "");
        assert_eq!(next.current_value, "5");
    }

    #[test]
    fn test_reduce_matches_engine() {
        let signals = [
            Signal::Digit(digit(4)),
            Signal::Operator(Operator::Sub),
            Signal::Digit(digit(9)),
            Signal::Operator(Operator::Equal),
        ];
        let mut engine = CalculatorEngine::new();
        let mut state = CalculatorState::default();
        for signal in signals {
            engine.dispatch(signal);
            state = reduce(&state, signal, EngineConfig::default());
        }
        assert_eq!(engine.state(), &state);
        assert_eq!(state.current_value, "-5");
    }

    #[test]
    fn test_from_state_resumes() {
        let state = CalculatorState {
            current_value: "2".into(),
            log_lines: LogLines::new(),
            pending: Some(PendingOperation {
                operator: Arithmetic::Multiply,
                operand: "21".into(),
            }),
        };
        let mut engine = CalculatorEngine::from_state(state, EngineConfig::default());
        engine.apply_operator(Operator::Equal);
        assert_eq!(engine.current_value(), "42");
    }

    #[test]
    fn test_state_serializes() {
        let mut engine = CalculatorEngine::new();
        press(&mut engine, "1 add");
        let json = serde_json::to_string(engine.state()).unwrap();
        assert_eq!(
            json,
            r#"{"current_value":"","log_lines":["1","+"],"pending":{"operator":"add","operand":"1"}}"#
        );
    }
}
