//! Diagnostic logging
//!
//! Logs go to stderr so that stdout stays machine-readable.

use tracing_subscriber::EnvFilter;

use crate::config::{LogFormat, Verbosity};

/// Builds the filter: `RUST_LOG` when set, otherwise the verbosity level
#[must_use]
pub fn env_filter(verbosity: Verbosity) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| default_filter(verbosity))
}

/// Filter used when `RUST_LOG` is unset
#[must_use]
pub fn default_filter(verbosity: Verbosity) -> EnvFilter {
    let level = verbosity.log_level();
    EnvFilter::new(format!("calc_widget={level},calc_widget_cli={level}"))
}

/// Installs the global subscriber. A second call is a no-op.
pub fn init_logging(verbosity: Verbosity, format: LogFormat) {
    let builder = tracing_subscriber::fmt()
        .with_env_filter(env_filter(verbosity))
        .with_target(true)
        .with_writer(std::io::stderr);
    let _ = match format {
        LogFormat::Text => builder.try_init(),
        LogFormat::Json => builder.json().try_init(),
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_filter_levels() {
        let quiet = default_filter(Verbosity::Quiet).to_string();
        assert!(quiet.contains("calc_widget=error"));
        assert!(quiet.contains("calc_widget_cli=error"));
        let trace = default_filter(Verbosity::Trace).to_string();
        assert!(trace.contains("calc_widget=trace"));
    }

    #[test]
    fn test_init_twice() {
        init_logging(Verbosity::Normal, LogFormat::Text);
        init_logging(Verbosity::Debug, LogFormat::Json);
    }
}
