//! Tracing subscriber setup

use lawcases_core::{Config, LogFormat};
use tracing::Level;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Map the configured log level (0=DEBUG .. 3=ERROR) to a tracing level
pub fn level_for(verbose: bool, config: Option<&Config>) -> Level {
    if verbose {
        return Level::DEBUG;
    }

    match config.map(Config::log_level).unwrap_or(1) {
        0 => Level::DEBUG,
        1 => Level::INFO,
        2 => Level::WARN,
        _ => Level::ERROR,
    }
}

/// Install the global subscriber; `RUST_LOG` overrides the configured level
pub fn init(verbose: bool, config: Option<&Config>) {
    let filter = EnvFilter::builder()
        .with_default_directive(level_for(verbose, config).into())
        .from_env_lossy();

    let format = config.map(Config::log_format).unwrap_or_default();
    let (text, json) = match format {
        LogFormat::Text => (Some(fmt::layer()), None),
        LogFormat::Json => (None, Some(fmt::layer().json())),
    };

    tracing_subscriber::registry()
        .with(text)
        .with(json)
        .with(filter)
        .init();
}

#[cfg(test)]
mod tests {
    use super::*;
    use lawcases_core::ServerConfig;

    #[test]
    fn test_level_for() {
        assert_eq!(level_for(true, None), Level::DEBUG);
        assert_eq!(level_for(false, None), Level::INFO);

        let mut config = Config::default();
        config.server = Some(ServerConfig {
            log_level: Some(2),
            ..ServerConfig::default()
        });
        assert_eq!(level_for(false, Some(&config)), Level::WARN);
        assert_eq!(level_for(true, Some(&config)), Level::DEBUG);
    }
}
