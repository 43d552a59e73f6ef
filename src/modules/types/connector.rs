//! Store connector type definitions

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Supported store connector types
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Connector {
    /// Hosted store reached through its PostgREST HTTP interface
    #[default]
    Postgrest,
    /// Direct PostgreSQL connection
    Postgres,
    /// In-process rows, loaded from a JSON file or built in code
    Memory,
}

impl fmt::Display for Connector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Connector::Postgrest => write!(f, "postgrest"),
            Connector::Postgres => write!(f, "postgres"),
            Connector::Memory => write!(f, "memory"),
        }
    }
}

impl FromStr for Connector {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "postgrest" | "rest" | "supabase" => Ok(Connector::Postgrest),
            "postgres" | "postgresql" => Ok(Connector::Postgres),
            "memory" => Ok(Connector::Memory),
            _ => Err(format!("Unknown connector type: {}", s)),
        }
    }
}

impl Connector {
    /// Returns all supported connector types
    pub fn all() -> &'static [Connector] {
        &[Connector::Postgrest, Connector::Postgres, Connector::Memory]
    }

    /// Returns true if the connector needs an access key alongside its URL
    pub fn requires_key(&self) -> bool {
        matches!(self, Connector::Postgrest)
    }
}
