use anyhow::Result;
use binary_fixture::{Config, report};
use std::process::ExitCode;

fn init_tracing() {
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn"));

    if let Err(err) = tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init()
    {
        eprintln!("tracing already initialised: {err}");
    }
}

fn main() -> Result<ExitCode> {
    init_tracing();
    let config = Config::from_cli()?;

    match binary_fixture::run(&config) {
        Ok(written) => {
            print!("{}", report::confirmation(&written));
            Ok(ExitCode::SUCCESS)
        }
        Err(e) => {
            tracing::debug!("run failed: {e:?}");
            eprintln!("{e}");
            Ok(ExitCode::FAILURE)
        }
    }
}
