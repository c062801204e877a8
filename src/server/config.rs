use std::net::SocketAddr;

use crate::server::error::{config::ConfigError, AppError};

const DEFAULT_HOST: &str = "0.0.0.0";
const DEFAULT_PORT: u16 = 8000;
const DEFAULT_CORS_ALLOW_ORIGIN: &str = "http://localhost:4200";

pub struct Config {
    pub database_url: String,

    pub host: String,
    pub port: u16,

    pub cors_allow_origin: String,
}

impl Config {
    /// Reads configuration from the process environment.
    ///
    /// # Returns
    /// - `Ok(Config)` - All required variables present and parsable
    /// - `Err(AppError::ConfigErr)` - `DATABASE_URL` missing or `PORT` not a port number
    pub fn from_env() -> Result<Self, AppError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, AppError> {
        let database_url = lookup("DATABASE_URL")
            .ok_or_else(|| ConfigError::MissingEnvVar("DATABASE_URL".to_string()))?;

        let port = match lookup("PORT") {
            Some(value) => value
                .trim()
                .parse()
                .map_err(|_| ConfigError::InvalidEnvVar {
                    name: "PORT".to_string(),
                    value,
                })?,
            None => DEFAULT_PORT,
        };

        Ok(Self {
            database_url,
            host: lookup("HOST").unwrap_or_else(|| DEFAULT_HOST.to_string()),
            port,
            cors_allow_origin: lookup("CORS_ALLOW_ORIGIN")
                .unwrap_or_else(|| DEFAULT_CORS_ALLOW_ORIGIN.to_string()),
        })
    }

    /// Socket address the HTTP server binds to.
    pub fn bind_addr(&self) -> Result<SocketAddr, AppError> {
        format!("{}:{}", self.host, self.port)
            .parse()
            .map_err(|_| {
                ConfigError::InvalidEnvVar {
                    name: "HOST".to_string(),
                    value: self.host.clone(),
                }
                .into()
            })
    }
}
