use std::env;

use errors::Error;

pub const DEFAULT_BIND_ADDRESS: &str = "0.0.0.0:8080";

#[derive(Clone, Debug, PartialEq)]
pub struct Config {
    pub database_url: String,
    pub bind_address: String,
    /// Origin allowed through CORS. CORS is left off when unset.
    pub client_host: Option<String>,
}

impl Config {
    pub fn from_env() -> Result<Config, Error> {
        Config::from_vars(|key| env::var(key).ok())
    }

    fn from_vars<F>(var: F) -> Result<Config, Error>
    where
        F: Fn(&str) -> Option<String>,
    {
        let database_url = var("DATABASE_URL")
            .filter(|url| !url.is_empty())
            .ok_or_else(|| Error::InternalServerError("DATABASE_URL must be set".to_string()))?;

        Ok(Config {
            database_url,
            bind_address: var("BIND_ADDRESS").unwrap_or_else(|| DEFAULT_BIND_ADDRESS.to_string()),
            client_host: var("CLIENT_HOST").filter(|host| !host.is_empty()),
        })
    }
}
