//! Docs command implementation

use clap::Args;
use lawcases_core::{Config, LawCasesError};
use lawcases_runtime::OpenApiHandler;
use std::path::PathBuf;
use tracing::info;

/// Docs command arguments
#[derive(Args, Debug)]
pub struct DocsCommand {
    /// Write the document to this file instead of stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

impl DocsCommand {
    /// Execute the docs command
    pub fn execute(&self, config: &Config) -> Result<(), LawCasesError> {
        let spec = OpenApiHandler::generate_spec(config);
        let rendered = serde_json::to_string_pretty(&spec)?;

        match &self.output {
            Some(path) => {
                std::fs::write(path, rendered)?;
                info!("Wrote OpenAPI document to {}", path.display());
            }
            None => println!("{}", rendered),
        }
        Ok(())
    }
}
