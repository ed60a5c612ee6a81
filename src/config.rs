use std::env;
use std::str::FromStr;

use axum::http::HeaderValue;

/// Persistence backend selected at startup
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreBackend {
    Memory,
    Postgres,
}

impl FromStr for StoreBackend {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "memory" => Ok(Self::Memory),
            "postgres" | "postgresql" => Ok(Self::Postgres),
            _ => Err(ConfigError::Invalid("STORE_BACKEND")),
        }
    }
}

#[derive(Debug, Clone)]
pub struct Config {
    pub store_backend: StoreBackend,

    // Database
    pub db_host: String,
    pub db_port: u16,
    pub db_user: String,
    pub db_password: String,
    pub db_name: String,
    pub db_max_connections: u32,

    // Server
    pub host: String,
    pub port: u16,
    pub cors_allowed_origin: HeaderValue,

    /// Load the sample projects into an empty store on startup
    pub seed_demo_data: bool,
    /// Emit JSON log lines instead of the human-readable format
    pub log_json: bool,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok(); // Load .env file if exists

        Ok(Self {
            store_backend: var_or("STORE_BACKEND", "postgres").parse()?,

            // Database
            db_host: var_or("DB_HOST", "localhost"),
            db_port: parse_var("DB_PORT", "5432")?,
            db_user: var_or("DB_USER", "postgres"),
            db_password: var_or("DB_PASSWORD", "postgres"),
            db_name: var_or("DB_NAME", "trackp"),
            db_max_connections: parse_var("DB_MAX_CONNECTIONS", "10")?,

            // Server
            host: var_or("HOST", "0.0.0.0"),
            port: parse_var("PORT", "8080")?,
            cors_allowed_origin: HeaderValue::from_str(&var_or(
                "CORS_ALLOWED_ORIGIN",
                "http://localhost:3000",
            ))
            .map_err(|_| ConfigError::Invalid("CORS_ALLOWED_ORIGIN"))?,

            seed_demo_data: parse_flag("SEED_DEMO_DATA", false)?,
            log_json: var_or("LOG_FORMAT", "pretty").eq_ignore_ascii_case("json"),
        })
    }

    /// Get server address as "host:port"
    pub fn server_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// Read a variable, treating unset and empty the same way
fn var_or(key: &str, default: &str) -> String {
    match env::var(key) {
        Ok(value) if !value.is_empty() => value,
        _ => default.to_string(),
    }
}

fn parse_var<T: FromStr>(key: &'static str, default: &str) -> Result<T, ConfigError> {
    var_or(key, default)
        .parse()
        .map_err(|_| ConfigError::Invalid(key))
}

fn parse_flag(key: &'static str, default: bool) -> Result<bool, ConfigError> {
    match env::var(key) {
        Ok(value) if !value.is_empty() => parse_bool(&value).ok_or(ConfigError::Invalid(key)),
        _ => Ok(default),
    }
}

fn parse_bool(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid environment variable: {0}")]
    Invalid(&'static str),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_store_backend_from_str() {
        assert_eq!("memory".parse::<StoreBackend>().unwrap(), StoreBackend::Memory);
        assert_eq!(" Postgres ".parse::<StoreBackend>().unwrap(), StoreBackend::Postgres);
        assert_eq!("postgresql".parse::<StoreBackend>().unwrap(), StoreBackend::Postgres);
        assert!("sqlite".parse::<StoreBackend>().is_err());
    }

    #[test]
    fn test_parse_bool() {
        assert_eq!(parse_bool("true"), Some(true));
        assert_eq!(parse_bool("ON"), Some(true));
        assert_eq!(parse_bool("0"), Some(false));
        assert_eq!(parse_bool("maybe"), None);
    }
}
