use std::io::{self, Write};

use anyhow::Result;
use clap::Parser;
use tracing::debug;

use welcome::greeting;

#[derive(Parser)]
#[command(name = "welcome")]
#[command(about = "Prints a fixed greeting")]
#[command(version)]
struct Cli {}

fn main() -> Result<()> {
    // Diagnostics go to stderr; stdout carries only the greeting.
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let _cli = Cli::parse();

    let stdout = io::stdout();
    let mut out = stdout.lock();
    greeting::write_greeting(&mut out)?;
    out.flush()?;
    debug!("greeting written");

    Ok(())
}
