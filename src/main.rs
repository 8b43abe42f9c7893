use anyhow::Context;
use clap::Parser;
use std::ffi::OsString;
use std::io::IsTerminal;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use mktmpdir_core::{create_random_dir, write_report, MkTmpDirConfig};

#[derive(Parser)]
#[command(name = "mktmpdir")]
#[command(version)]
#[command(about = "Create a randomly named directory and print its path")]
struct Cli {
    /// Directory to create the new directory in (created if missing; "" means the current
    /// directory)
    #[arg(value_parser = clap::value_parser!(OsString))]
    parent_dir: Option<OsString>,
}

/// Initialise stderr logging.
///
/// Logs never go to stdout: stdout carries only the `#@@#` success line. Verbosity follows
/// `RUST_LOG`, defaulting to warnings from this tool.
fn init_logging() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("mktmpdir=warn".parse()?),
        )
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_ansi(std::io::stderr().is_terminal()),
        )
        .try_init()?;
    Ok(())
}

/// Generate, create, report.
///
/// The success line is written only after the directory exists; any earlier failure returns
/// before stdout is touched.
fn run(cli: Cli) -> anyhow::Result<PathBuf> {
    let config = MkTmpDirConfig::new(cli.parent_dir.map(PathBuf::from))?;
    tracing::debug!(parent_dir = %config.parent_dir().display(), "resolved configuration");

    let created = create_random_dir(config.parent_dir(), &mut rand::thread_rng())
        .context("could not create random directory")?;
    tracing::info!(path = %created.display(), "created random directory");

    write_report(&mut std::io::stdout().lock(), &created)?;
    Ok(created)
}

fn main() -> ExitCode {
    if let Err(e) = init_logging() {
        eprintln!("Error initialising logging: {e}");
        return ExitCode::FAILURE;
    }

    match run(Cli::parse()) {
        Ok(_) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::debug!(error = ?e, "mktmpdir failed");
            eprintln!("Error: {e:#}");
            ExitCode::FAILURE
        }
    }
}
