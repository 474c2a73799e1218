//! CLI command definitions using clap

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

use calc_widget::core::EqualLogStyle;

use crate::config::{ColorChoice, LogFormat, OutputFormat};

/// calc-widget: keypad calculator with a running log
#[derive(Parser, Debug)]
#[command(name = "calc-widget")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Quiet mode (errors only)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Color output (auto, always, never)
    #[arg(long, global = true)]
    pub color: Option<ColorArg>,

    /// YAML configuration file
    #[arg(long, global = true, env = "CALC_WIDGET_CONFIG")]
    pub config: Option<PathBuf>,

    /// What the `=` log line records (operand, result)
    #[arg(long, global = true)]
    pub equal_log: Option<EqualLogArg>,

    /// Diagnostic log format on stderr (text, json)
    #[arg(long, global = true)]
    pub log_format: Option<LogFormatArg>,

    /// Subcommand to run
    #[command(subcommand)]
    pub command: Commands,
}

/// CLI subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Evaluate key tokens and print the final state
    ///
    /// Tokens are digits or digit runs (`12`), keyboard symbols
    /// (`+ - * / =`) and operator names (`add sub multiply divide equal
    /// reset backspace`).
    Eval(EvalArgs),

    /// Read tokens line by line from stdin
    Repl(ReplArgs),

    /// Print the keypad layout
    Keypad(KeypadArgs),

    /// Show configuration
    Config(ConfigArgs),
}

/// Arguments for the eval command
#[derive(Parser, Debug)]
pub struct EvalArgs {
    /// Key tokens, pressed in order. Flags may follow the tokens.
    #[arg(required = true)]
    pub tokens: Vec<String>,

    /// Output format
    #[arg(short, long)]
    pub format: Option<FormatArg>,

    /// Log lines to show (0 = all)
    #[arg(long)]
    pub log_rows: Option<usize>,

    /// Reject tokens that are not keypad input
    #[arg(long)]
    pub strict: bool,
}

/// Arguments for the repl command
#[derive(Parser, Debug)]
pub struct ReplArgs {
    /// Output format
    #[arg(short, long)]
    pub format: Option<FormatArg>,

    /// Log lines to show (0 = all)
    #[arg(long)]
    pub log_rows: Option<usize>,
}

/// Arguments for the keypad command
#[derive(Parser, Debug)]
pub struct KeypadArgs {
    /// Also list button IDs and the signal each emits
    #[arg(long)]
    pub ids: bool,
}

/// Arguments for the config command
#[derive(Parser, Debug)]
pub struct ConfigArgs {
    /// Print built-in defaults instead of the effective configuration
    #[arg(long)]
    pub defaults: bool,
}

/// Output format argument
#[derive(ValueEnum, Clone, Copy, Debug, Default)]
pub enum FormatArg {
    /// Human-readable text
    #[default]
    Text,
    /// JSON state
    Json,
}

impl From<FormatArg> for OutputFormat {
    fn from(arg: FormatArg) -> Self {
        match arg {
            FormatArg::Text => Self::Text,
            FormatArg::Json => Self::Json,
        }
    }
}

/// `=` log line argument
#[derive(ValueEnum, Clone, Copy, Debug, Default)]
pub enum EqualLogArg {
    /// `=` plus the right-hand operand
    #[default]
    Operand,
    /// `=` plus the result
    Result,
}

impl From<EqualLogArg> for EqualLogStyle {
    fn from(arg: EqualLogArg) -> Self {
        match arg {
            EqualLogArg::Operand => Self::Operand,
            EqualLogArg::Result => Self::Result,
        }
    }
}

/// Log format argument
#[derive(ValueEnum, Clone, Copy, Debug, Default)]
pub enum LogFormatArg {
    /// Human-readable lines
    #[default]
    Text,
    /// JSON objects
    Json,
}

impl From<LogFormatArg> for LogFormat {
    fn from(arg: LogFormatArg) -> Self {
        match arg {
            LogFormatArg::Text => Self::Text,
            LogFormatArg::Json => Self::Json,
        }
    }
}

/// Color argument for CLI
#[derive(ValueEnum, Clone, Copy, Debug, Default)]
pub enum ColorArg {
    /// Automatic color detection
    #[default]
    Auto,
    /// Always use colors
    Always,
    /// Never use colors
    Never,
}

impl From<ColorArg> for ColorChoice {
    fn from(arg: ColorArg) -> Self {
        match arg {
            ColorArg::Auto => Self::Auto,
            ColorArg::Always => Self::Always,
            ColorArg::Never => Self::Never,
        }
    }
}
