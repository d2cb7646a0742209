//! alff - Main entry point

use alff::logging::{init_logging, LogConfig};
use clap::Parser;
use std::process;
use tracing::error;

#[tokio::main]
async fn main() {
    let cli = alff::Cli::parse();

    // Initialize logging (ignore errors, the tool should work without it)
    let _ = init_logging(&LogConfig::for_run(cli.verbose));

    if let Err(e) = alff::run::run(&cli).await {
        error!(error = %e, "Run failed");
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}
