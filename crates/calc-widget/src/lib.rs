//! Calc Widget - keypad calculator with a running log
//!
//! A keypad of `calc-button` elements emits `digit` and `operator` signals.
//! The engine holds at most one pending binary operation and appends every
//! captured operand, operator symbol and `=` marker to an append-only log.
//!
//! # Layers
//!
//! - [`core`]: signal contract, state machine, number handling, log
//! - [`keypad`]: `calc-button` and the standard 17-button layout
//! - [`dom`]: in-memory document used to mount and click the keypad
//! - [`widget`]: engine wired to the rendered log and current value
//! - [`driver`]: one behavioural suite run against engine and widget
//!
//! # Example
//!
//! ```rust
//! use calc_widget::prelude::*;
//!
//! let mut widget = CalculatorWidget::default();
//! for id in ["btn-1", "btn-2", "btn-add", "btn-3", "btn-equal"] {
//!     widget.click(id).unwrap();
//! }
//! assert_eq!(widget.current_value_text(), "15");
//! assert_eq!(widget.log_text(), "12\n+\n3\n=3");
//! ```

// Allow common test patterns
#![cfg_attr(
    test,
    allow(
        clippy::unwrap_used,
        clippy::expect_used,
        clippy::panic,
        clippy::float_cmp
    )
)]
#![deny(missing_docs)]
#![deny(missing_debug_implementations)]

pub mod core;
pub mod dom;
pub mod driver;
pub mod keypad;
pub mod widget;

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::core::number::{format_number, parse_leading_int};
    pub use crate::core::{
        reduce, Arithmetic, CalculatorEngine, CalculatorState, Digit, EngineConfig,
        EqualLogStyle, LogLines, Operator, PendingOperation, Phase, RawSignal, Signal,
        SignalError, SignalKind, SignalSink,
    };
    pub use crate::dom::{CustomEvent, DomElement, DomError, DomEvent, MockDom};
    pub use crate::driver::CalculatorDriver;
    pub use crate::keypad::{parse_key_token, CalcButton, Keypad, KeypadBlock};
    pub use crate::widget::CalculatorWidget;
}
