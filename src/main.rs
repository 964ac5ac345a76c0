//! genimages - timestamped JPEG fixtures for directory-polling consumers.

mod adapters;
mod cli;
mod config;
mod context;
mod error;
mod generator;
mod output;
mod params;
mod ports;
mod render;

use std::io::Write;
use std::process;

use clap::Parser;

use crate::cli::Cli;
use crate::config::{Config, RunConfig};
use crate::context::ServiceContext;

#[tokio::main(flavor = "current_thread")]
async fn main() {
    let cli = Cli::parse();
    init_logger(cli.verbose);

    if let Err(e) = run(cli).await {
        eprintln!("Error: {e}");
        process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<(), error::GenError> {
    // Load config
    let config = match config::discover_config_path(cli.config.as_deref()) {
        Some(path) => {
            log::debug!("Loading config from {}", path.display());
            Config::load(&path).map_err(error::GenError::Config)?
        }
        None => Config::default(),
    };

    // Validate and freeze the run settings
    let run_config = RunConfig::resolve(&cli, &config)?;

    let ctx = ServiceContext::live();
    let summary = generator::run(&ctx, &run_config, interrupted()).await?;
    if summary.interrupted {
        log::debug!("Stopped by interrupt after {} images", summary.created);
    } else {
        log::debug!("Finished after {} images", summary.created);
    }

    Ok(())
}

/// Resolves on Ctrl-C. If the handler cannot be installed, never resolves.
async fn interrupted() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        log::warn!("Cannot listen for Ctrl-C: {e}");
        std::future::pending::<()>().await;
    }
}

/// Log to stderr as `[HH:MM:SS LEVEL file:line] message`.
///
/// Defaults to `warn`, or `debug` with `--verbose`; `RUST_LOG` overrides both.
fn init_logger(verbose: bool) {
    let level = if verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level))
        .format(|buf, record| {
            let style = buf.default_level_style(record.level());
            writeln!(
                buf,
                "[{} {style}{}{style:#} {}:{}] {}",
                chrono::Local::now().format("%H:%M:%S"),
                record.level(),
                record.file().unwrap_or("None").rsplit('/').next().unwrap_or("None"),
                record.line().unwrap_or(0),
                record.args()
            )
        })
        .init();
}
