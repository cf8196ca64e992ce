//! # Configuration — `kyc config`

use anyhow::{Context, Result};
use clap::{Args, Subcommand};

use kyc_core::ScreeningConfig;

use crate::EXIT_OK;

/// Arguments for `kyc config`.
#[derive(Args, Debug)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub command: ConfigCommand,
}

/// Configuration subcommands.
#[derive(Subcommand, Debug)]
pub enum ConfigCommand {
    /// Print the effective configuration as YAML.
    Show,
}

/// Execute `kyc config`.
pub fn run_config(args: &ConfigArgs, config: &ScreeningConfig) -> Result<u8> {
    match args.command {
        ConfigCommand::Show => {
            let yaml = config.to_yaml().context("failed to render configuration")?;
            print!("{yaml}");
            Ok(EXIT_OK)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn show_defaults() {
        let args = ConfigArgs {
            command: ConfigCommand::Show,
        };
        assert_eq!(run_config(&args, &ScreeningConfig::default()).unwrap(), EXIT_OK);
    }
}
