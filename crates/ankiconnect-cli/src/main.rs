//! Command-line front end for AnkiConnect.

mod cli;
mod commands;

use std::time::Duration;

use ankiconnect::AnkiClient;
use clap::Parser;
use tracing::info;

use crate::cli::Cli;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let log_level = match cli.verbose {
        0 => tracing::Level::WARN,
        1 => tracing::Level::INFO,
        2 => tracing::Level::DEBUG,
        _ => tracing::Level::TRACE,
    };

    tracing_subscriber::fmt()
        .with_max_level(log_level)
        .with_writer(std::io::stderr)
        .init();

    let mut builder = AnkiClient::builder()
        .url(&cli.url)
        .timeout(Duration::from_secs(cli.timeout_secs));
    if let Some(key) = &cli.api_key {
        builder = builder.api_key(key);
    }
    let client = builder.build()?;

    info!(url = %cli.url, command = ?cli.command, "running command");
    commands::run(&client, cli.command).await
}
