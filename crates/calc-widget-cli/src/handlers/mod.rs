//! Command handlers
//!
//! Each handler takes the effective [`CliConfig`](crate::CliConfig) and its
//! parsed arguments.

pub mod config;
pub mod eval;
pub mod keypad;
pub mod repl;

pub use config::execute_config;
pub use eval::{eval_tokens, execute_eval, press_tokens};
pub use keypad::execute_keypad;
pub use repl::{execute_repl, run_repl};
