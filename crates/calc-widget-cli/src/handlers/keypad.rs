//! Keypad command handler

use calc_widget::keypad::Keypad;

use crate::config::CliConfig;
use crate::output::StateRenderer;
use crate::KeypadArgs;

/// Execute the keypad command
pub fn execute_keypad(config: &CliConfig, args: &KeypadArgs) {
    let keypad = Keypad::new();
    println!(
        "{}",
        StateRenderer::from_config(config).render_keypad(&keypad, args.ids)
    );
}
