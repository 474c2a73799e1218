//! Calculator core: signal contract, engine state machine and log
//!
//! Everything in here is synchronous and owns its state. One signal is fully
//! applied before the next is looked at.

pub mod engine;
pub mod history;
pub mod number;
mod operations;
mod signal;

pub use engine::{reduce, CalculatorEngine, CalculatorState, PendingOperation, Phase};
pub use history::LogLines;
pub use operations::{Arithmetic, Digit, Operator};
pub use signal::{RawSignal, Signal, SignalKind, SignalSink};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Reasons a raw signal payload is rejected
///
/// The engine never surfaces these: a rejected signal leaves state unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SignalError {
    /// Operator name outside the seven known names
    #[error("unknown operator: {0:?}")]
    UnknownOperator(String),
    /// Digit payload that is not a single 0-9 character
    #[error("invalid digit: {0:?}")]
    InvalidDigit(String),
    /// Event name other than `digit` / `operator`
    #[error("unknown signal kind: {0:?}")]
    UnknownKind(String),
}

/// What the `=` line records after an evaluation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EqualLogStyle {
    /// `=` followed by the right-hand operand as typed (historical log format)
    #[default]
    Operand,
    /// `=` followed by the computed result
    Result,
}

impl EqualLogStyle {
    /// Returns the config name
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Operand => "operand",
            Self::Result => "result",
        }
    }
}

/// Engine settings
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Content of the `=` log line
    pub equal_log: EqualLogStyle,
}

impl EngineConfig {
    /// Creates the default configuration
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the `=` line style
    #[must_use]
    pub const fn with_equal_log(mut self, style: EqualLogStyle) -> Self {
        self.equal_log = style;
        self
    }
}
