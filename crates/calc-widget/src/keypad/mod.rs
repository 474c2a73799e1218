//! Keypad input source
//!
//! `calc-button` elements and the standard keypad built from them.

mod button;
mod layout;

pub use button::{CalcButton, DIGIT_ATTR, OPERATOR_ATTR};
pub use layout::{parse_key_token, Keypad, KeypadBlock, KeypadButtonDef, BLOCK_COLUMNS};
