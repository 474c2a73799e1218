//! Calculation log
//!
//! Append-only record of entered operands, operator symbols and `=` lines.
//! Lines are never edited or dropped.

use serde::{Deserialize, Serialize};

/// Append-only sequence of display lines
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LogLines {
    lines: Vec<String>,
}

impl LogLines {
    /// Creates an empty log
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends one line
    pub fn push(&mut self, line: impl Into<String>) {
        self.lines.push(line.into());
    }

    /// Appends an operand followed by an operator symbol
    pub fn extend_pair(&mut self, operand: &str, symbol: &str) {
        self.lines.reserve(2);
        self.push(operand);
        self.push(symbol);
    }

    /// Returns the number of lines
    #[must_use]
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    /// Returns true if nothing has been logged
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Iterates over lines, oldest first
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.lines.iter().map(String::as_str)
    }

    /// Returns the newest line
    #[must_use]
    pub fn last(&self) -> Option<&str> {
        self.lines.last().map(String::as_str)
    }

    /// Returns the line at `index` (0 = oldest)
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&str> {
        self.lines.get(index).map(String::as_str)
    }

    /// Returns the newest `n` lines, oldest first
    #[must_use]
    pub fn tail(&self, n: usize) -> &[String] {
        let start = self.lines.len().saturating_sub(n);
        &self.lines[start..]
    }

    /// Returns all lines as a slice
    #[must_use]
    pub fn as_slice(&self) -> &[String] {
        &self.lines
    }

    /// Joins the lines with newlines, as the log view displays them
    #[must_use]
    pub fn export_formatted(&self) -> String {
        self.lines.join("\n")
    }

    /// Serializes the log to a JSON array
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(&self.lines)
    }

    /// Deserializes a log from a JSON array
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}

impl<'a> IntoIterator for &'a LogLines {
    type Item = &'a String;
    type IntoIter = std::slice::Iter<'a, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.lines.iter()
    }
}

impl PartialEq<[&str]> for LogLines {
    fn eq(&self, other: &[&str]) -> bool {
        self.lines.len() == other.len() && self.lines.iter().zip(other).all(|(a, b)| a == b)
    }
}

impl<const N: usize> PartialEq<[&str; N]> for LogLines {
    fn eq(&self, other: &[&str; N]) -> bool {
        *self == other[..]
    }
}
