//! appjson CLI - app.json deploy lifecycle
//!
//! Usage: appjson [--attempt <TOKEN>] <COMMAND>
//!
//! Commands:
//!   stage        Stage app.json for an attempt
//!   commit       Promote the staged app.json
//!   pre-release  Run the predeploy script
//!   release      Run release, scale, then the first-deploy script
//!   post-deploy  Run the postdeploy script

mod commands;

use std::io::IsTerminal;

use anyhow::{Context as _, Result};
use clap::Parser;
use tracing::warn;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

use appjson::presentation::{Cli, OutputFormat};
use appjson::Config;

/// Log level for `-v` repetitions; `RUST_LOG` wins when set.
fn default_level(verbose: u8) -> &'static str {
    match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

/// Logs always go to stderr so stdout stays reserved for command output.
fn init_tracing(verbose: u8) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_level(verbose)));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_ansi(std::io::stderr().is_terminal())
                .with_target(false),
        )
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let (config, warnings) =
        Config::load_or_default(cli.config.as_deref()).context("failed to load configuration")?;
    for warning in &warnings {
        warn!("{warning}");
    }

    let ctx = commands::Context::new(
        config,
        cli.attempt.as_deref(),
        OutputFormat::from_json_flag(cli.json),
    )?;
    commands::dispatch(&ctx, cli.command)
}
