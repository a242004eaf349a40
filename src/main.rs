//! Main entry point for the texcombine CLI application.

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use texcombine::{Cli, CombineOptions, combine};

#[tokio::main]
async fn main() -> Result<()> {
    init_logging();
    let cli = Cli::parse();

    let options = CombineOptions {
        client: cli.client_source()?,
        pack: cli.pack_path()?,
        output: cli.output_path()?,
        quiet: cli.quiet,
    };

    combine(&options).await?;
    Ok(())
}

/// Diagnostics go to stderr so they never mix with progress output.
/// `RUST_LOG` overrides the default level.
fn init_logging() {
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| "texcombine=warn".into());

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
