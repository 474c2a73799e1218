//! Output formatting

use calc_widget::core::{CalculatorState, Phase};
use calc_widget::keypad::Keypad;
use console::style;

use crate::config::{CliConfig, OutputFormat};
use crate::error::CliResult;

/// Renders calculator state for the terminal
#[derive(Debug, Clone, Copy)]
pub struct StateRenderer {
    /// Whether to use colors
    pub use_color: bool,
    /// Log lines to show (0 = all)
    pub log_rows: usize,
    /// Output format
    pub format: OutputFormat,
}

impl Default for StateRenderer {
    fn default() -> Self {
        Self::new(false, 0, OutputFormat::Text)
    }
}

impl StateRenderer {
    /// Create a new renderer
    #[must_use]
    pub const fn new(use_color: bool, log_rows: usize, format: OutputFormat) -> Self {
        Self {
            use_color,
            log_rows,
            format,
        }
    }

    /// Create a renderer from CLI configuration
    #[must_use]
    pub fn from_config(config: &CliConfig) -> Self {
        Self::new(config.color.should_color(), config.log_rows, config.format)
    }

    /// Render in the configured format
    pub fn render(&self, state: &CalculatorState) -> CliResult<String> {
        match self.format {
            OutputFormat::Text => Ok(self.render_text(state)),
            OutputFormat::Json => Ok(serde_json::to_string(state)?),
        }
    }

    /// Render as text
    ///
    /// ```text
    /// 12
    /// +
    /// 3
    /// =3
    /// > 15
    /// ```
    #[must_use]
    pub fn render_text(&self, state: &CalculatorState) -> String {
        let mut out = String::new();
        let lines = if self.log_rows == 0 {
            state.log_lines.as_slice()
        } else {
            state.log_lines.tail(self.log_rows)
        };
        let hidden = state.log_lines.len() - lines.len();
        if hidden > 0 {
            out.push_str(&self.dim(&format!("... {hidden} earlier")));
            out.push('\n');
        }
        for line in lines {
            out.push_str(&self.log_line(line));
            out.push('\n');
        }

        let value = if state.current_value.is_empty() {
            " "
        } else {
            state.current_value.as_str()
        };
        let prompt = if self.use_color {
            style(">").cyan().bold().to_string()
        } else {
            ">".to_string()
        };
        out.push_str(&format!("{prompt} {value}"));

        if let (Phase::Pending, Some(pending)) = (state.phase(), &state.pending) {
            let note = format!("[{} {}]", pending.operand, pending.operator);
            out.push(' ');
            out.push_str(&self.dim(&note));
        }
        out
    }

    /// Render the keypad layout
    #[must_use]
    pub fn render_keypad(&self, keypad: &Keypad, with_ids: bool) -> String {
        let mut out = keypad.render_text();
        if with_ids {
            out.push_str("\n\n");
            let listing: Vec<String> = keypad
                .buttons()
                .iter()
                .map(|def| {
                    let signal = def.button.activate().map_or_else(
                        || "-".to_string(),
                        |s| format!("{}:{}", s.kind, s.detail),
                    );
                    format!("{:<14} {}", def.button.id, signal)
                })
                .collect();
            out.push_str(&listing.join("\n"));
        }
        out
    }

    fn log_line(&self, line: &str) -> String {
        if !self.use_color {
            return line.to_string();
        }
        if line.starts_with('=') {
            style(line).green().to_string()
        } else if matches!(line, "+" | "-" | "*" | "/") {
            style(line).yellow().to_string()
        } else {
            line.to_string()
        }
    }

    fn dim(&self, text: &str) -> String {
        if self.use_color {
            style(text).dim().to_string()
        } else {
            text.to_string()
        }
    }
}
