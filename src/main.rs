//! Tatap — natural filename ordering and inotify event decoding.
//!
//! Thin binary entry point. All logic lives in the `tatap-core` crate.

use clap::Parser;

mod cli;
mod commands;

fn main() -> anyhow::Result<()> {
    let cli = cli::Cli::parse();

    // Initialise structured logging on stderr so stdout stays pipeable.
    let level = if cli.verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::INFO
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();

    commands::run_command(cli)
}
