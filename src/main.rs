use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use fotogalerie::cli::{Cli, Command};

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Set up logging; stdout is reserved for the per-file status lines
    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    // Change working directory if --workdir is specified
    if let Some(ref dir) = cli.workdir {
        std::env::set_current_dir(dir)?;
    }

    let config = cli.config.as_deref();
    match &cli.command {
        Command::Blog(args) => fotogalerie::cli::blog::run(args, config, cli.strict)?,
        Command::Zapasy(args) => fotogalerie::cli::zapasy::run(args, config, cli.strict)?,
    }

    Ok(())
}
