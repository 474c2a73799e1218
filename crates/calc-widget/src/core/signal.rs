//! Signals flowing from keypad buttons into the engine

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::operations::{Digit, Operator};
use super::SignalError;

/// The two event kinds a button can emit
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SignalKind {
    /// Carries a single digit character
    Digit,
    /// Carries an operator name
    Operator,
}

impl SignalKind {
    /// Returns the event name
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Digit => "digit",
            Self::Operator => "operator",
        }
    }
}

impl FromStr for SignalKind {
    type Err = SignalError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "digit" => Ok(Self::Digit),
            "operator" => Ok(Self::Operator),
            other => Err(SignalError::UnknownKind(other.to_string())),
        }
    }
}

impl fmt::Display for SignalKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Untyped event as emitted by a button: an event name plus a string detail
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RawSignal {
    /// Event kind
    pub kind: SignalKind,
    /// Event payload (a digit character or an operator name)
    pub detail: String,
}

impl RawSignal {
    /// Creates a `digit` event
    #[must_use]
    pub fn digit(detail: impl Into<String>) -> Self {
        Self {
            kind: SignalKind::Digit,
            detail: detail.into(),
        }
    }

    /// Creates an `operator` event
    #[must_use]
    pub fn operator(detail: impl Into<String>) -> Self {
        Self {
            kind: SignalKind::Operator,
            detail: detail.into(),
        }
    }

    /// Validates the payload
    pub fn parse(&self) -> Result<Signal, SignalError> {
        match self.kind {
            SignalKind::Digit => self.detail.parse().map(Signal::Digit),
            SignalKind::Operator => self.detail.parse().map(Signal::Operator),
        }
    }
}

/// A validated signal
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value", rename_all = "lowercase")]
pub enum Signal {
    /// Digit press
    Digit(Digit),
    /// Operator press
    Operator(Operator),
}

impl Signal {
    /// Converts back into the untyped event form
    #[must_use]
    pub fn to_raw(&self) -> RawSignal {
        match self {
            Self::Digit(d) => RawSignal::digit(d.as_char().to_string()),
            Self::Operator(op) => RawSignal::operator(op.name()),
        }
    }
}

impl From<Digit> for Signal {
    fn from(d: Digit) -> Self {
        Self::Digit(d)
    }
}

impl From<Operator> for Signal {
    fn from(op: Operator) -> Self {
        Self::Operator(op)
    }
}

impl TryFrom<&RawSignal> for Signal {
    type Error = SignalError;

    fn try_from(raw: &RawSignal) -> Result<Self, Self::Error> {
        raw.parse()
    }
}

/// Receiver side of the button → engine callback interface
pub trait SignalSink {
    /// Delivers one untyped event
    fn receive(&mut self, signal: &RawSignal);
}

impl SignalSink for Vec<RawSignal> {
    fn receive(&mut self, signal: &RawSignal) {
        self.push(signal.clone());
    }
}
