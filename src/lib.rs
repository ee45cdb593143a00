pub mod analyzer;
pub mod bootstrap;
pub mod cli;
pub mod config;
pub mod error;
pub mod output;
pub mod runtime;
#[cfg(test)]
mod test_support;
pub mod transcript;

use clap::Parser;

use crate::analyzer::HttpAnalyzer;
use crate::bootstrap::AppPaths;
use crate::cli::Cli;
use crate::config::{config_path, load_config, seed_default_config};
use crate::error::{AppError, AppResult};
use crate::runtime::{execute_session, usage_banner};

const INTERRUPTED_EXIT_CODE: i32 = 130;

pub fn run() -> AppResult<()> {
    let cli = Cli::parse();

    let Some(transcript) = cli.transcript else {
        println!("{}", usage_banner());
        return Ok(());
    };

    // The per-user config is optional: defaults plus env overrides must be
    // enough to run when the config dir is missing or read-only.
    let paths = AppPaths::resolve();
    let config_path = config_path(paths.as_ref().ok());
    let config = load_config(config_path.as_deref())?;

    init_tracing(&config.diagnostics.log_level);
    if let Err(error) = &paths {
        tracing::warn!(%error, "no per-user config directory; using defaults");
    }
    if let Some(path) = config_path.as_deref() {
        seed_default_config(path);
    }
    install_interrupt_handler()?;

    let analyzer = HttpAnalyzer::new(config.service.clone());
    execute_session(&transcript, &config, &analyzer)?;
    Ok(())
}

// RUST_LOG wins over the configured level. Diagnostics stay on stderr so
// stdout carries only the report.
fn init_tracing(default_level: &str) {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default_level.into()),
        )
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_level(true)
        .compact()
        .init();
}

fn install_interrupt_handler() -> AppResult<()> {
    ctrlc::set_handler(|| {
        tracing::warn!("interrupted; abandoning in-flight request");
        std::process::exit(INTERRUPTED_EXIT_CODE);
    })
    .map_err(|error| AppError::Signal(format!("failed to register ctrl-c handler: {error}")))
}
