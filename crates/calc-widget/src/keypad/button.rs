//! The `calc-button` element
//!
//! A button carries an `operator` attribute, a `digit` attribute, or neither.
//! Activating it emits the matching signal; `operator` wins when both are set.

use crate::core::{Digit, Operator, RawSignal, SignalError, SignalKind, SignalSink};
use crate::dom::{CustomEvent, DomElement};

/// Attribute holding an operator name
pub const OPERATOR_ATTR: &str = "operator";
/// Attribute holding a digit character
pub const DIGIT_ATTR: &str = "digit";

/// Reusable keypad button
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CalcButton {
    /// Element ID
    pub id: String,
    /// Visible label
    pub label: String,
    /// `operator` attribute
    pub operator: Option<String>,
    /// `digit` attribute
    pub digit: Option<String>,
}

impl CalcButton {
    /// Custom element tag name
    pub const TAG: &'static str = "calc-button";

    /// Creates a digit button labelled with the digit
    #[must_use]
    pub fn digit(digit: Digit) -> Self {
        let ch = digit.as_char().to_string();
        Self {
            id: format!("btn-{ch}"),
            label: ch.clone(),
            operator: None,
            digit: Some(ch),
        }
    }

    /// Creates an operator button with the given label
    #[must_use]
    pub fn operator(operator: Operator, label: &str) -> Self {
        Self::named_operator(operator.name(), label)
    }

    /// Creates an operator button from a raw name; unknown names are kept as-is
    #[must_use]
    pub fn named_operator(name: &str, label: &str) -> Self {
        Self {
            id: format!("btn-{name}"),
            label: label.to_string(),
            operator: Some(name.to_string()),
            digit: None,
        }
    }

    /// Creates a button without any signal attribute
    #[must_use]
    pub fn blank(id: &str, label: &str) -> Self {
        Self {
            id: id.to_string(),
            label: label.to_string(),
            operator: None,
            digit: None,
        }
    }

    /// Overrides the element ID
    #[must_use]
    pub fn with_id(mut self, id: &str) -> Self {
        self.id = id.to_string();
        self
    }

    /// Returns the signal this button emits when activated
    #[must_use]
    pub fn activate(&self) -> Option<RawSignal> {
        if let Some(name) = &self.operator {
            return Some(RawSignal::operator(name.as_str()));
        }
        self.digit.as_deref().map(|digit| RawSignal::digit(digit))
    }

    /// Activates the button into `sink`. Returns false if nothing was emitted.
    pub fn activate_into<S: SignalSink + ?Sized>(&self, sink: &mut S) -> bool {
        match self.activate() {
            Some(signal) => {
                sink.receive(&signal);
                true
            }
            None => false,
        }
    }

    /// Renders the element
    #[must_use]
    pub fn to_element(&self) -> DomElement {
        let mut element = DomElement::new(Self::TAG)
            .with_id(&self.id)
            .with_text(&self.label);
        if let Some(name) = &self.operator {
            element = element.with_attr(OPERATOR_ATTR, name);
        }
        if let Some(digit) = &self.digit {
            element = element.with_attr(DIGIT_ATTR, digit);
        }
        element
    }

    /// Reads a button back from an element with the `calc-button` tag
    #[must_use]
    pub fn from_element(element: &DomElement) -> Option<Self> {
        if element.tag != Self::TAG {
            return None;
        }
        Some(Self {
            id: element.id.clone(),
            label: element.text_content.clone(),
            operator: element.get_attr(OPERATOR_ATTR).map(str::to_string),
            digit: element.get_attr(DIGIT_ATTR).map(str::to_string),
        })
    }

    /// Click behaviour registered with the DOM for the `calc-button` tag
    #[must_use]
    pub fn click_behavior(element: &DomElement) -> Option<CustomEvent> {
        Self::from_element(element)?
            .activate()
            .map(|signal| CustomEvent::bubbling(signal.kind.as_str(), &signal.detail))
    }
}

impl TryFrom<&CustomEvent> for RawSignal {
    type Error = SignalError;

    fn try_from(event: &CustomEvent) -> Result<Self, Self::Error> {
        let kind: SignalKind = event.name.parse()?;
        Ok(Self {
            kind,
            detail: event.detail.clone(),
        })
    }
}
