use std::{path::PathBuf, time::Duration};

use crate::server::error::config::ConfigError;

pub const DEFAULT_PORT: u16 = 5100;
pub const DEFAULT_CLIENT_URL: &str = "http://localhost:5173";
pub const DEFAULT_STATIC_DIR: &str = "client/dist";

pub struct Config {
    pub database_url: String,
    pub valkey_url: String,
    pub port: u16,
    /// Origin allowed to make credentialed cross-origin requests
    pub client_url: String,
    pub country_api_url: String,
    pub country_api_timeout: Duration,
    /// Single-page application build served for non-API paths
    pub static_dir: PathBuf,
    pub user_agent: String,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_vars(|key| std::env::var(key).ok())
    }

    /// Builds the configuration from an arbitrary variable lookup.
    ///
    /// Empty values are treated as unset.
    pub fn from_vars<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());
        let required =
            |key: &str| var(key).ok_or_else(|| ConfigError::MissingEnvVar(key.to_string()));

        let port = match var("PORT") {
            Some(raw) => raw.trim().parse::<u16>().map_err(|e| ConfigError::InvalidEnvValue {
                var: "PORT".to_string(),
                reason: e.to_string(),
            })?,
            None => DEFAULT_PORT,
        };

        let country_api_timeout = match var("COUNTRY_API_TIMEOUT_SECS") {
            Some(raw) => match raw.trim().parse::<u64>() {
                Ok(secs) if secs > 0 => Duration::from_secs(secs),
                Ok(_) => {
                    return Err(ConfigError::InvalidEnvValue {
                        var: "COUNTRY_API_TIMEOUT_SECS".to_string(),
                        reason: "must be greater than zero".to_string(),
                    })
                }
                Err(e) => {
                    return Err(ConfigError::InvalidEnvValue {
                        var: "COUNTRY_API_TIMEOUT_SECS".to_string(),
                        reason: e.to_string(),
                    })
                }
            },
            None => country_api::DEFAULT_TIMEOUT,
        };

        let user_agent = match var("CONTACT_EMAIL") {
            Some(email) => format!(
                "atlas/{} ({})",
                env!("CARGO_PKG_VERSION"),
                email.trim()
            ),
            None => format!("atlas/{}", env!("CARGO_PKG_VERSION")),
        };

        Ok(Self {
            database_url: required("DATABASE_URL")?,
            valkey_url: required("VALKEY_URL")?,
            port,
            client_url: var("CLIENT_URL").unwrap_or_else(|| DEFAULT_CLIENT_URL.to_string()),
            country_api_url: var("COUNTRY_API_URL")
                .unwrap_or_else(|| country_api::DEFAULT_BASE_URL.to_string()),
            country_api_timeout,
            static_dir: PathBuf::from(
                var("STATIC_DIR").unwrap_or_else(|| DEFAULT_STATIC_DIR.to_string()),
            ),
            user_agent,
        })
    }
}
