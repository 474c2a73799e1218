//! Keypad layout
//!
//! Three blocks of `calc-button`s, four columns each:
//!
//! ```text
//! digits      operators   controls
//! [1][2][3][4]  [+][-][*][/]  [◀️][C][=]
//! [5][6][7][8]
//! [9][0]
//! ```

use crate::core::{Digit, Operator, RawSignal};
use crate::dom::DomElement;

use super::button::CalcButton;

/// Columns per block
pub const BLOCK_COLUMNS: usize = 4;

/// Keypad block
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeypadBlock {
    /// Digits 1-9 then 0
    Digits,
    /// Arithmetic operators
    Operators,
    /// Backspace, reset and equal
    Controls,
}

impl KeypadBlock {
    /// Blocks in display order
    pub const ALL: [Self; 3] = [Self::Digits, Self::Operators, Self::Controls];

    /// Returns the CSS class of the block container
    #[must_use]
    pub const fn class(&self) -> &'static str {
        match self {
            Self::Digits => "block-digits",
            Self::Operators => "block-operators",
            Self::Controls => "block-controls",
        }
    }
}

/// A button placed on the keypad
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeypadButtonDef {
    /// The button
    pub button: CalcButton,
    /// Block the button sits in
    pub block: KeypadBlock,
    /// Row within the block (0-indexed)
    pub row: usize,
    /// Column within the block (0-indexed)
    pub col: usize,
}

/// Standard calculator keypad
#[derive(Debug, Clone)]
pub struct Keypad {
    buttons: Vec<KeypadButtonDef>,
}

impl Default for Keypad {
    fn default() -> Self {
        Self::new()
    }
}

impl Keypad {
    /// Creates the standard keypad
    #[must_use]
    pub fn new() -> Self {
        let digits = Digit::KEYPAD_ORDER
            .into_iter()
            .filter_map(Digit::new)
            .map(CalcButton::digit);
        let operators = [
            CalcButton::operator(Operator::Add, "+"),
            CalcButton::operator(Operator::Sub, "-"),
            CalcButton::operator(Operator::Multiply, "*"),
            CalcButton::operator(Operator::Divide, "/"),
        ];
        let controls = [
            CalcButton::operator(Operator::Backspace, "◀️"),
            CalcButton::operator(Operator::Reset, "C"),
            CalcButton::operator(Operator::Equal, "="),
        ];

        let mut buttons = Vec::with_capacity(17);
        Self::place(&mut buttons, KeypadBlock::Digits, digits);
        Self::place(&mut buttons, KeypadBlock::Operators, operators);
        Self::place(&mut buttons, KeypadBlock::Controls, controls);
        Self { buttons }
    }

    fn place(
        into: &mut Vec<KeypadButtonDef>,
        block: KeypadBlock,
        buttons: impl IntoIterator<Item = CalcButton>,
    ) {
        into.extend(
            buttons
                .into_iter()
                .enumerate()
                .map(|(i, button)| KeypadButtonDef {
                    button,
                    block,
                    row: i / BLOCK_COLUMNS,
                    col: i % BLOCK_COLUMNS,
                }),
        );
    }

    /// Returns the number of buttons
    #[must_use]
    pub fn button_count(&self) -> usize {
        self.buttons.len()
    }

    /// Gets all button definitions
    #[must_use]
    pub fn buttons(&self) -> &[KeypadButtonDef] {
        &self.buttons
    }

    /// Gets the buttons of one block
    pub fn block(&self, block: KeypadBlock) -> impl Iterator<Item = &KeypadButtonDef> {
        self.buttons.iter().filter(move |b| b.block == block)
    }

    /// Gets a button by block, row and column
    #[must_use]
    pub fn get_button_at(
        &self,
        block: KeypadBlock,
        row: usize,
        col: usize,
    ) -> Option<&KeypadButtonDef> {
        self.buttons
            .iter()
            .find(|b| b.block == block && b.row == row && b.col == col)
    }

    /// Finds a button by element ID
    #[must_use]
    pub fn find_button_by_id(&self, id: &str) -> Option<&KeypadButtonDef> {
        self.buttons.iter().find(|b| b.button.id == id)
    }

    /// Finds a button by its label
    #[must_use]
    pub fn find_button_by_label(&self, label: &str) -> Option<&KeypadButtonDef> {
        self.buttons.iter().find(|b| b.button.label == label)
    }

    /// Returns the signal emitted by clicking the button with this ID
    #[must_use]
    pub fn handle_click(&self, element_id: &str) -> Option<RawSignal> {
        self.find_button_by_id(element_id)
            .and_then(|b| b.button.activate())
    }

    /// Builds the keypad container with one child per block
    #[must_use]
    pub fn create_keypad_element(&self) -> DomElement {
        KeypadBlock::ALL.into_iter().fold(
            DomElement::new("div")
                .with_id("calc-keypad")
                .with_class("buttons"),
            |keypad, block| {
                let container = self.block(block).fold(
                    DomElement::new("div")
                        .with_class("block")
                        .with_class(block.class()),
                    |container, def| container.with_child(def.button.to_element()),
                );
                keypad.with_child(container)
            },
        )
    }

    /// Maps a keyboard key to a signal
    #[must_use]
    pub fn key_to_signal(key: &str) -> Option<RawSignal> {
        let operator = match key {
            "+" => Operator::Add,
            "-" => Operator::Sub,
            "*" => Operator::Multiply,
            "/" => Operator::Divide,
            "Backspace" => Operator::Backspace,
            "Escape" | "c" | "C" => Operator::Reset,
            "Enter" | "=" => Operator::Equal,
            _ => {
                return key
                    .parse::<Digit>()
                    .ok()
                    .map(|d| RawSignal::digit(d.as_char().to_string()));
            }
        };
        Some(RawSignal::operator(operator.name()))
    }

    /// Renders the layout as text, one line per block row
    #[must_use]
    pub fn render_text(&self) -> String {
        let mut lines = Vec::new();
        for block in KeypadBlock::ALL {
            let mut row_labels: Vec<Vec<&str>> = Vec::new();
            for def in self.block(block) {
                if row_labels.len() <= def.row {
                    row_labels.resize_with(def.row + 1, Vec::new);
                }
                row_labels[def.row].push(def.button.label.as_str());
            }
            for row in row_labels {
                lines.push(
                    row.iter()
                        .map(|label| format!("[{label}]"))
                        .collect::<String>(),
                );
            }
            lines.push(String::new());
        }
        lines.pop();
        lines.join("\n")
    }
}

/// Expands one input token into signals.
///
/// Accepts digits (`"7"`), digit runs (`"12"` → two digit signals), keyboard
/// keys and symbols (`"+"`, `"="`, `"Enter"`), and operator names
/// (`"add"`). Any other token becomes an operator signal carrying the token,
/// which the engine ignores.
#[must_use]
pub fn parse_key_token(token: &str) -> Vec<RawSignal> {
    if !token.is_empty() && token.bytes().all(|b| b.is_ascii_digit()) {
        return token
            .chars()
            .map(|ch| RawSignal::digit(ch.to_string()))
            .collect();
    }
    if let Some(signal) = Keypad::key_to_signal(token) {
        return vec![signal];
    }
    vec![RawSignal::operator(token)]
}
