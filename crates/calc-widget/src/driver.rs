//! Unified calculator driver
//!
//! Keypad behaviour is written once against [`CalculatorDriver`] and checked
//! against both the bare engine and the DOM-backed widget.

use crate::core::{CalculatorEngine, Digit, Operator, RawSignal};
use crate::keypad::parse_key_token;
use crate::widget::CalculatorWidget;

/// Abstract driver for calculator interactions
///
/// # Example
///
/// ```rust
/// use calc_widget::driver::{verify_addition_scenario, CalculatorDriver};
/// use calc_widget::widget::CalculatorWidget;
///
/// let mut widget = CalculatorWidget::default();
/// widget.press_keys("4 add 5 equal");
/// assert_eq!(widget.entry(), "9");
///
/// verify_addition_scenario(&mut widget);
/// ```
pub trait CalculatorDriver {
    /// Presses a digit button
    fn press_digit(&mut self, digit: Digit);

    /// Presses an operator button
    fn press_operator(&mut self, operator: Operator);

    /// Delivers an untyped event, including ones no button would emit
    fn press_raw(&mut self, signal: &RawSignal);

    /// Returns the current entry
    fn entry(&self) -> String;

    /// Returns the log lines, oldest first
    fn history(&self) -> Vec<String>;

    /// Returns true while an operation is pending
    fn has_pending(&self) -> bool;

    /// Starts over with fresh state and the same settings
    fn restart(&mut self);

    /// Presses each whitespace-separated token (see [`parse_key_token`])
    fn press_keys(&mut self, keys: &str) {
        for token in keys.split_whitespace() {
            for signal in parse_key_token(token) {
                self.press_raw(&signal);
            }
        }
    }
}

impl CalculatorDriver for CalculatorEngine {
    fn press_digit(&mut self, digit: Digit) {
        self.put_digit(digit);
    }

    fn press_operator(&mut self, operator: Operator) {
        self.apply_operator(operator);
    }

    fn press_raw(&mut self, signal: &RawSignal) {
        self.handle(signal);
    }

    fn entry(&self) -> String {
        self.current_value().to_string()
    }

    fn history(&self) -> Vec<String> {
        self.log_lines().as_slice().to_vec()
    }

    fn has_pending(&self) -> bool {
        self.pending().is_some()
    }

    fn restart(&mut self) {
        *self = Self::with_config(self.config());
    }
}

impl CalculatorDriver for CalculatorWidget {
    fn press_digit(&mut self, digit: Digit) {
        self.press_raw(&RawSignal::digit(digit.as_char().to_string()));
    }

    fn press_operator(&mut self, operator: Operator) {
        self.press_raw(&RawSignal::operator(operator.name()));
    }

    /// Clicks the keypad button that emits `signal`, falling back to direct
    /// delivery when no button does
    fn press_raw(&mut self, signal: &RawSignal) {
        let button_id = self
            .keypad()
            .buttons()
            .iter()
            .find(|def| def.button.activate().as_ref() == Some(signal))
            .map(|def| def.button.id.clone());

        match button_id {
            Some(id) => {
                if let Err(err) = self.click(&id) {
                    tracing::warn!(%err, "keypad click failed");
                }
            }
            None => crate::core::SignalSink::receive(self, signal),
        }
    }

    fn entry(&self) -> String {
        self.engine().current_value().to_string()
    }

    fn history(&self) -> Vec<String> {
        self.engine().log_lines().as_slice().to_vec()
    }

    fn has_pending(&self) -> bool {
        self.engine().pending().is_some()
    }

    fn restart(&mut self) {
        let rows = self.visible_rows();
        *self = Self::new(self.engine().config()).with_visible_rows(rows);
    }
}

// ===== Unified specifications =====
// These work with ANY CalculatorDriver implementation

/// Digits concatenate in order and backspace removes the last one
pub fn verify_digit_entry<D: CalculatorDriver>(driver: &mut D) {
    driver.restart();
    driver.press_keys("1 2 3");
    assert_eq!(driver.entry(), "123");
    driver.press_keys("backspace 4");
    assert_eq!(driver.entry(), "124");
    driver.press_keys("backspace backspace backspace backspace");
    assert_eq!(driver.entry(), "");
}

/// Backspace on an empty entry changes nothing
pub fn verify_backspace_on_empty<D: CalculatorDriver>(driver: &mut D) {
    driver.restart();
    driver.press_operator(Operator::Backspace);
    assert_eq!(driver.entry(), "");
    assert!(driver.history().is_empty());
}

/// Reset clears the entry only
pub fn verify_reset<D: CalculatorDriver>(driver: &mut D) {
    driver.restart();
    driver.press_keys("8 multiply 9 reset");
    assert_eq!(driver.entry(), "");
    assert!(driver.has_pending());
    assert_eq!(driver.history(), ["8", "*"]);
    driver.press_keys("2 equal");
    assert_eq!(driver.entry(), "16");
}

/// Equal with nothing pending changes nothing
pub fn verify_equal_without_pending<D: CalculatorDriver>(driver: &mut D) {
    driver.restart();
    driver.press_keys("4 2");
    let log = driver.history();
    driver.press_operator(Operator::Equal);
    assert_eq!(driver.entry(), "42");
    assert_eq!(driver.history(), log);
    assert!(!driver.has_pending());
}

/// `12 + 3 =` gives 15
pub fn verify_addition_scenario<D: CalculatorDriver>(driver: &mut D) {
    driver.restart();
    driver.press_keys("1 2");
    assert_eq!(driver.entry(), "12");
    driver.press_operator(Operator::Add);
    assert_eq!(driver.history(), ["12", "+"]);
    assert_eq!(driver.entry(), "");
    assert!(driver.has_pending());
    driver.press_keys("3");
    assert_eq!(driver.entry(), "3");
    driver.press_operator(Operator::Equal);
    assert_eq!(driver.entry(), "15");
    assert!(!driver.has_pending());
}

/// Division by zero shows Infinity and keeps accepting input
pub fn verify_divide_by_zero<D: CalculatorDriver>(driver: &mut D) {
    driver.restart();
    driver.press_keys("5 divide 0 equal");
    assert_eq!(driver.entry(), "Infinity");
    driver.press_keys("1");
    assert_eq!(driver.entry(), "Infinity1");
}

/// A second operator press re-captures the pending operand
pub fn verify_repeated_operator<D: CalculatorDriver>(driver: &mut D) {
    driver.restart();
    driver.press_keys("1 add 2 add");
    assert_eq!(driver.history(), ["1", "+", "2", "+"]);
    driver.press_keys("3 equal");
    assert_eq!(driver.entry(), "5");
}

/// Unknown operator names leave state untouched
pub fn verify_unknown_operator<D: CalculatorDriver>(driver: &mut D) {
    driver.restart();
    driver.press_keys("7 add 1");
    let entry = driver.entry();
    let log = driver.history();
    driver.press_raw(&RawSignal::operator("power"));
    assert_eq!(driver.entry(), entry);
    assert_eq!(driver.history(), log);
    assert!(driver.has_pending());
}

/// Complete verification suite
pub fn run_full_specification<D: CalculatorDriver>(driver: &mut D) {
    verify_digit_entry(driver);
    verify_backspace_on_empty(driver);
    verify_reset(driver);
    verify_equal_without_pending(driver);
    verify_addition_scenario(driver);
    verify_divide_by_zero(driver);
    verify_repeated_operator(driver);
    verify_unknown_operator(driver);
}
