use std::io::{self, Write};
use std::process::ExitCode;

use anyhow::Context;
use clap::Parser;
use console::style;
use tracing_subscriber::EnvFilter;

use tabulate::{run, Cli};

/// Environment variable holding the log filter, e.g. `TABULATE_LOG=debug`.
const LOG_ENV: &str = "TABULATE_LOG";

fn setup_logging() {
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn try_main(cli: &Cli) -> anyhow::Result<()> {
    let output = run(cli, io::stdin().lock())?;

    let mut stdout = io::stdout().lock();
    stdout
        .write_all(output.as_bytes())
        .and_then(|()| stdout.flush())
        .context("failed to write table")?;
    Ok(())
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    setup_logging();

    match try_main(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{} {:#}", style("error:").red().bold().for_stderr(), err);
            ExitCode::FAILURE
        }
    }
}
