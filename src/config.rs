use crate::cli::Cli;
use crate::constants::OUTPUT_FILE_NAME;
use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;

/// Application configuration derived from CLI arguments
#[derive(Debug, Clone)]
pub struct Config {
    /// Destination of the payload, relative to the working directory.
    pub output: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            output: PathBuf::from(OUTPUT_FILE_NAME),
        }
    }
}

impl Config {
    /// Parse CLI arguments into a Config
    pub fn from_cli() -> Result<Self> {
        // No operational flags; parsing still serves --help, --version and usage errors.
        let _cli = Cli::parse();
        Ok(Config::default())
    }
}
