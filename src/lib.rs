pub mod cli;
pub mod config;
pub mod constants;
pub mod error;
pub mod report;
pub mod writer;

pub use config::Config;
pub use error::WriteError;
pub use report::Written;
pub use writer::FileWriter;

/// Write the fixed payload to the configured destination.
pub fn run(config: &Config) -> Result<Written, WriteError> {
    FileWriter::new(&config.output).write(&constants::PAYLOAD)
}
