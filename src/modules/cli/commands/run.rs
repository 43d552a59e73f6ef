//! Run command implementation

use clap::Args;
use lawcases_core::{Config, LawCasesError};
use lawcases_runtime::Runtime;

/// Run command arguments
#[derive(Args, Debug)]
pub struct RunCommand {
    /// Override server port
    #[arg(short, long)]
    pub port: Option<u16>,
}

impl RunCommand {
    /// Execute the run command
    pub async fn execute(&self, mut config: Config) -> Result<(), LawCasesError> {
        if let Some(port) = self.port {
            config.set_port(port);
        }

        let runtime = Runtime::new(config).await?;
        runtime.run().await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_run_command_args() {
        let cmd = RunCommand { port: Some(8080) };
        assert_eq!(cmd.port, Some(8080));
    }
}
