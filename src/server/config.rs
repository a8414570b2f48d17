use std::net::SocketAddr;

use crate::server::error::{config::ConfigError, AppError};

const DEFAULT_BIND_ADDRESS: &str = "0.0.0.0:8000";

pub struct Config {
    /// MongoDB connection string.
    pub mongodb_uri: String,
    /// Database name; falls back to the connection string's default database when unset.
    pub database_name: Option<String>,
    pub collection_name: String,
    pub bind_address: SocketAddr,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Builds the configuration from an arbitrary variable lookup.
    ///
    /// Empty values are treated as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, AppError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |name: &str| lookup(name).filter(|value| !value.is_empty());

        let bind_address = var("BIND_ADDRESS").unwrap_or_else(|| DEFAULT_BIND_ADDRESS.to_string());

        Ok(Self {
            mongodb_uri: var("MONGODB_URI")
                .ok_or_else(|| ConfigError::MissingEnvVar("MONGODB_URI".to_string()))?,
            database_name: var("MONGODB_DATABASE"),
            collection_name: var("MONGODB_COLLECTION")
                .unwrap_or_else(|| entity::student::COLLECTION_NAME.to_string()),
            bind_address: bind_address
                .parse()
                .map_err(|e: std::net::AddrParseError| ConfigError::InvalidEnvVar {
                    name: "BIND_ADDRESS".to_string(),
                    value: bind_address.clone(),
                    reason: e.to_string(),
                })?,
        })
    }
}
