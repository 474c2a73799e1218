//! Config command handler

use crate::config::CliConfig;
use crate::error::CliResult;
use crate::ConfigArgs;

/// Execute the config command
pub fn execute_config(config: &CliConfig, args: &ConfigArgs) -> CliResult<()> {
    print!("{}", render_config(config, args)?);
    Ok(())
}

/// YAML shown by the config command
pub fn render_config(config: &CliConfig, args: &ConfigArgs) -> CliResult<String> {
    if args.defaults {
        CliConfig::default().to_yaml()
    } else {
        config.to_yaml()
    }
}
