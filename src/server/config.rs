use std::net::SocketAddr;

use crate::server::error::{config::ConfigError, AppError};

const DEFAULT_DATABASE_URL: &str = "sqlite://camp.db?mode=rwc";
const DEFAULT_BIND_ADDRESS: &str = "127.0.0.1:5555";

pub struct Config {
    pub database_url: String,
    pub bind_address: SocketAddr,
    /// Insert sample activities and campers on startup when the store has no activities
    pub seed_database: bool,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        Self::from_vars(|name| std::env::var(name).ok())
    }

    /// Builds the configuration from a variable lookup, falling back to defaults for unset
    /// variables.
    pub fn from_vars<F>(var: F) -> Result<Self, AppError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let database_url =
            var("DATABASE_URL").unwrap_or_else(|| DEFAULT_DATABASE_URL.to_string());

        let bind_address = var("BIND_ADDRESS").unwrap_or_else(|| DEFAULT_BIND_ADDRESS.to_string());
        let bind_address =
            bind_address
                .parse::<SocketAddr>()
                .map_err(|e| ConfigError::InvalidEnvVar {
                    name: "BIND_ADDRESS".to_string(),
                    reason: e.to_string(),
                    value: bind_address.clone(),
                })?;

        let seed_database = match var("SEED_DATABASE") {
            Some(value) => parse_flag("SEED_DATABASE", value)?,
            None => false,
        };

        Ok(Self {
            database_url,
            bind_address,
            seed_database,
        })
    }
}

fn parse_flag(name: &str, value: String) -> Result<bool, ConfigError> {
    match value.trim().to_ascii_lowercase().as_str() {
        "true" | "1" | "yes" => Ok(true),
        "false" | "0" | "no" | "" => Ok(false),
        _ => Err(ConfigError::InvalidEnvVar {
            name: name.to_string(),
            value,
            reason: "expected true or false".to_string(),
        }),
    }
}
