//! Application configuration loaded from environment variables.
//!
//! Configuration is loaded once at startup and validated before the server
//! starts. `main` calls `dotenvy::dotenv()` first, so a `.env` file in the
//! working directory is honoured.
//!
//! ## Variables
//!
//! - `APP_ENV` - Environment tier: `local`, `dev` or `prod` (default: `local`)
//! - `LISTEN` - Bind address (default: `localhost:8082`)
//! - `STORAGE_PATH` - SQLite database path or `sqlite:` URL (default: `./storage.db`)
//! - `HTTP_TIMEOUT` - Per-request deadline in seconds (default: 4)
//! - `DB_MAX_CONNECTIONS` - SQLite pool size (default: 5)
//! - `RUST_LOG` - Overrides the tier's log level

use anyhow::{Context, Result};
use std::env;
use std::fmt;
use std::str::FromStr;
use std::time::Duration;

/// Deployment tier; selects the logging setup.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Environment {
    Local,
    Dev,
    Prod,
}

impl FromStr for Environment {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "local" => Ok(Self::Local),
            "dev" => Ok(Self::Dev),
            "prod" => Ok(Self::Prod),
            other => anyhow::bail!("APP_ENV must be 'local', 'dev' or 'prod', got '{}'", other),
        }
    }
}

impl fmt::Display for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Local => "local",
            Self::Dev => "dev",
            Self::Prod => "prod",
        })
    }
}

/// Service configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    pub env: Environment,
    pub listen_addr: String,
    pub storage_path: String,
    /// Per-request deadline in seconds (`HTTP_TIMEOUT`).
    pub http_timeout_secs: u64,
    pub db_max_connections: u32,
}

impl Config {
    /// Loads configuration from environment variables.
    ///
    /// # Errors
    ///
    /// Returns an error if a variable is set but cannot be parsed.
    pub fn from_env() -> Result<Self> {
        let env = match env::var("APP_ENV") {
            Ok(value) => value.parse()?,
            Err(_) => Environment::Local,
        };

        let listen_addr = env::var("LISTEN").unwrap_or_else(|_| "localhost:8082".to_string());
        let storage_path =
            env::var("STORAGE_PATH").unwrap_or_else(|_| "./storage.db".to_string());

        let http_timeout_secs = parse_var("HTTP_TIMEOUT")?.unwrap_or(4);
        let db_max_connections = parse_var("DB_MAX_CONNECTIONS")?.unwrap_or(5);

        Ok(Self {
            env,
            listen_addr,
            storage_path,
            http_timeout_secs,
            db_max_connections,
        })
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - `listen_addr` is not in `host:port` form
    /// - `storage_path` is empty
    /// - the timeout or pool size is zero
    pub fn validate(&self) -> Result<()> {
        if !self.listen_addr.contains(':') {
            anyhow::bail!(
                "LISTEN must be in format 'host:port', got '{}'",
                self.listen_addr
            );
        }

        if self.storage_path.trim().is_empty() {
            anyhow::bail!("STORAGE_PATH must not be empty");
        }

        if self.http_timeout_secs == 0 {
            anyhow::bail!("HTTP_TIMEOUT must be greater than 0");
        }

        if self.db_max_connections == 0 {
            anyhow::bail!("DB_MAX_CONNECTIONS must be at least 1");
        }

        Ok(())
    }

    /// Per-request deadline.
    pub fn http_timeout(&self) -> Duration {
        Duration::from_secs(self.http_timeout_secs)
    }

    /// Logs the effective configuration.
    pub fn print_summary(&self) {
        tracing::info!("Configuration loaded:");
        tracing::info!("  Environment: {}", self.env);
        tracing::info!("  Listen address: {}", self.listen_addr);
        tracing::info!("  Storage: {}", self.storage_path);
        tracing::info!("  HTTP timeout: {}s", self.http_timeout_secs);
        tracing::info!("  DB max connections: {}", self.db_max_connections);
    }
}

/// Reads and parses an optional variable; unset yields `None`.
fn parse_var<T>(name: &str) -> Result<Option<T>>
where
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match env::var(name) {
        Ok(value) => value
            .parse()
            .map(Some)
            .with_context(|| format!("{name} has an invalid value '{value}'")),
        Err(_) => Ok(None),
    }
}

/// Loads and validates configuration from environment variables.
///
/// # Errors
///
/// Returns an error if a variable is malformed or validation fails.
pub fn load_from_env() -> Result<Config> {
    let config = Config::from_env()?;
    config.validate()?;
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    const VARS: &[&str] = &[
        "APP_ENV",
        "LISTEN",
        "STORAGE_PATH",
        "HTTP_TIMEOUT",
        "DB_MAX_CONNECTIONS",
    ];

    fn clear_env() {
        // SAFETY: Tests touching the environment run serially
        unsafe {
            for var in VARS {
                env::remove_var(var);
            }
        }
    }

    fn valid_config() -> Config {
        Config {
            env: Environment::Local,
            listen_addr: "localhost:8082".to_string(),
            storage_path: "./storage.db".to_string(),
            http_timeout_secs: 4,
            db_max_connections: 5,
        }
    }

    #[test]
    fn test_environment_parse() {
        assert_eq!("local".parse::<Environment>().unwrap(), Environment::Local);
        assert_eq!("DEV".parse::<Environment>().unwrap(), Environment::Dev);
        assert_eq!("prod".parse::<Environment>().unwrap(), Environment::Prod);
        assert!("staging".parse::<Environment>().is_err());
    }

    #[test]
    fn test_config_validation() {
        let mut config = valid_config();
        assert!(config.validate().is_ok());

        config.listen_addr = "8082".to_string();
        assert!(config.validate().is_err());
        config.listen_addr = "0.0.0.0:8082".to_string();

        config.storage_path = "  ".to_string();
        assert!(config.validate().is_err());
        config.storage_path = "sqlite::memory:".to_string();

        config.http_timeout_secs = 0;
        assert!(config.validate().is_err());
        config.http_timeout_secs = 4;

        config.db_max_connections = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    #[serial]
    fn test_defaults() {
        clear_env();

        let config = Config::from_env().unwrap();

        assert_eq!(config.env, Environment::Local);
        assert_eq!(config.listen_addr, "localhost:8082");
        assert_eq!(config.storage_path, "./storage.db");
        assert_eq!(config.http_timeout(), Duration::from_secs(4));
        assert_eq!(config.db_max_connections, 5);
    }

    #[test]
    #[serial]
    fn test_from_env_overrides() {
        clear_env();
        // SAFETY: Tests are run serially due to #[serial], so no concurrent access
        unsafe {
            env::set_var("APP_ENV", "prod");
            env::set_var("LISTEN", "0.0.0.0:9000");
            env::set_var("STORAGE_PATH", "/var/lib/shortener.db");
            env::set_var("HTTP_TIMEOUT", "10");
        }

        let config = load_from_env().unwrap();

        assert_eq!(config.env, Environment::Prod);
        assert_eq!(config.listen_addr, "0.0.0.0:9000");
        assert_eq!(config.storage_path, "/var/lib/shortener.db");
        assert_eq!(config.http_timeout_secs, 10);

        clear_env();
    }

    #[test]
    #[serial]
    fn test_invalid_number() {
        clear_env();
        // SAFETY: Tests are run serially due to #[serial], so no concurrent access
        unsafe {
            env::set_var("HTTP_TIMEOUT", "soon");
        }

        assert!(Config::from_env().is_err());

        clear_env();
    }

    #[test]
    #[serial]
    fn test_invalid_environment() {
        clear_env();
        // SAFETY: Tests are run serially due to #[serial], so no concurrent access
        unsafe {
            env::set_var("APP_ENV", "staging");
        }

        assert!(Config::from_env().is_err());

        clear_env();
    }
}
