//! CLI commands

mod completion;
mod docs;
mod init;
mod run;
mod validate;

pub use completion::CompletionCommand;
pub use docs::DocsCommand;
pub use init::InitCommand;
pub use run::RunCommand;
pub use validate::ValidateCommand;

use clap::{Parser, Subcommand};

/// lawcases - paginated read API over a hosted law-case store
#[derive(Parser, Debug)]
#[command(name = "lawcases")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Configuration file path
    ///
    /// When the file does not exist, configuration is read from
    /// `SUPABASE_URL`, `SUPABASE_KEY`, `STORE_CONNECTOR` and `PORT`.
    #[arg(
        short = 'f',
        long = "file",
        global = true,
        default_value = "lawcases.yaml"
    )]
    pub config: String,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Start the server
    Run(RunCommand),

    /// Check the configuration and, optionally, the store
    Validate(ValidateCommand),

    /// Print the OpenAPI document
    Docs(DocsCommand),

    /// Write a starter configuration
    Init(InitCommand),

    #[command(hide = true)]
    Completion(CompletionCommand),
}

impl Cli {
    /// Effective configuration path
    pub fn config_path(&self) -> &str {
        &self.config
    }

    /// Whether the selected command needs a loaded configuration
    pub fn needs_config(&self) -> bool {
        matches!(
            self.command,
            Commands::Run(_) | Commands::Validate(_) | Commands::Docs(_)
        )
    }
}
