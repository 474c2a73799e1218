//! Keypad operators and digits
//!
//! Type-safe operator names: the wire names buttons emit are parsed once and
//! the engine only ever sees these enums.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::SignalError;

/// The four arithmetic operators that can be pending
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Arithmetic {
    /// Addition (+)
    Add,
    /// Subtraction (-)
    Sub,
    /// Multiplication (*)
    Multiply,
    /// Real division (/)
    Divide,
}

impl Arithmetic {
    /// All arithmetic operators in keypad order
    pub const ALL: [Self; 4] = [Self::Add, Self::Sub, Self::Multiply, Self::Divide];

    /// Returns the symbol written to the log
    #[must_use]
    pub const fn symbol(&self) -> &'static str {
        match self {
            Self::Add => "+",
            Self::Sub => "-",
            Self::Multiply => "*",
            Self::Divide => "/",
        }
    }

    /// Returns the wire name carried by `operator` signals
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Add => "add",
            Self::Sub => "sub",
            Self::Multiply => "multiply",
            Self::Divide => "divide",
        }
    }

    /// Applies the operator. NaN and infinities propagate, division by zero
    /// yields an infinity (or NaN for `0 / 0`).
    #[must_use]
    pub fn apply(&self, lhs: f64, rhs: f64) -> f64 {
        match self {
            Self::Add => lhs + rhs,
            Self::Sub => lhs - rhs,
            Self::Multiply => lhs * rhs,
            Self::Divide => lhs / rhs,
        }
    }
}

impl fmt::Display for Arithmetic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

/// Every operator a keypad button can emit
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Operator {
    /// Addition
    Add,
    /// Subtraction
    Sub,
    /// Multiplication
    Multiply,
    /// Division
    Divide,
    /// Remove the last entered character
    Backspace,
    /// Clear the current entry
    Reset,
    /// Evaluate the pending operation
    Equal,
}

impl Operator {
    /// All operators in keypad order
    pub const ALL: [Self; 7] = [
        Self::Add,
        Self::Sub,
        Self::Multiply,
        Self::Divide,
        Self::Backspace,
        Self::Reset,
        Self::Equal,
    ];

    /// Returns the wire name
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Add => "add",
            Self::Sub => "sub",
            Self::Multiply => "multiply",
            Self::Divide => "divide",
            Self::Backspace => "backspace",
            Self::Reset => "reset",
            Self::Equal => "equal",
        }
    }

    /// Returns the arithmetic part of this operator, if any
    #[must_use]
    pub const fn arithmetic(&self) -> Option<Arithmetic> {
        match self {
            Self::Add => Some(Arithmetic::Add),
            Self::Sub => Some(Arithmetic::Sub),
            Self::Multiply => Some(Arithmetic::Multiply),
            Self::Divide => Some(Arithmetic::Divide),
            Self::Backspace | Self::Reset | Self::Equal => None,
        }
    }
}

impl From<Arithmetic> for Operator {
    fn from(op: Arithmetic) -> Self {
        match op {
            Arithmetic::Add => Self::Add,
            Arithmetic::Sub => Self::Sub,
            Arithmetic::Multiply => Self::Multiply,
            Arithmetic::Divide => Self::Divide,
        }
    }
}

impl FromStr for Operator {
    type Err = SignalError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|op| op.name() == s)
            .ok_or_else(|| SignalError::UnknownOperator(s.to_string()))
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A single decimal digit (0-9)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Digit(u8);

impl Digit {
    /// Digits in keypad order (1-9, then 0)
    pub const KEYPAD_ORDER: [u8; 10] = [1, 2, 3, 4, 5, 6, 7, 8, 9, 0];

    /// Creates a digit, or `None` when `value > 9`
    #[must_use]
    pub const fn new(value: u8) -> Option<Self> {
        if value <= 9 {
            Some(Self(value))
        } else {
            None
        }
    }

    /// Creates a digit from its character
    #[must_use]
    pub fn from_char(ch: char) -> Option<Self> {
        ch.to_digit(10).map(|d| Self(d as u8))
    }

    /// Returns the numeric value
    #[must_use]
    pub const fn value(self) -> u8 {
        self.0
    }

    /// Returns the character for this digit
    #[must_use]
    pub const fn as_char(self) -> char {
        (b'0' + self.0) as char
    }
}

impl TryFrom<u8> for Digit {
    type Error = SignalError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value).ok_or_else(|| SignalError::InvalidDigit(value.to_string()))
    }
}

impl TryFrom<char> for Digit {
    type Error = SignalError;

    fn try_from(ch: char) -> Result<Self, Self::Error> {
        Self::from_char(ch).ok_or_else(|| SignalError::InvalidDigit(ch.to_string()))
    }
}

impl From<Digit> for u8 {
    fn from(d: Digit) -> Self {
        d.0
    }
}

impl FromStr for Digit {
    type Err = SignalError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.chars();
        match (chars.next(), chars.next()) {
            (Some(ch), None) => Self::try_from(ch),
            _ => Err(SignalError::InvalidDigit(s.to_string())),
        }
    }
}

impl fmt::Display for Digit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
