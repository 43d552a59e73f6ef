//! lawcases CLI
//!
//! Command-line interface for the lawcases read API.

use anyhow::Context;
use clap::Parser;
use lawcases_cli::{logging, Cli, Commands};
use tracing::info;

#[tokio::main]
async fn main() {
    if let Err(e) = run().await {
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}

async fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();

    if let Commands::Completion(cmd) = &cli.command {
        cmd.execute();
        return Ok(());
    }

    let loaded = if cli.needs_config() {
        let path = cli.config_path();
        Some(
            lawcases_parser::load(path)
                .with_context(|| format!("failed to load configuration from {}", path))?,
        )
    } else {
        None
    };

    logging::init(cli.verbose, loaded.as_ref().map(|(config, _)| config));
    if let Some((_, source)) = &loaded {
        info!("Configuration loaded from {}", source);
    }

    match (cli.command, loaded) {
        (Commands::Run(cmd), Some((config, _))) => cmd.execute(config).await?,
        (Commands::Validate(cmd), Some((config, source))) => cmd.execute(config, &source).await?,
        (Commands::Docs(cmd), Some((config, _))) => cmd.execute(&config)?,
        (Commands::Init(cmd), _) => cmd.execute()?,
        (Commands::Completion(_), _) => {}
        (_, None) => anyhow::bail!("configuration was not loaded"),
    }

    Ok(())
}
