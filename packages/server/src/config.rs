use clap::Parser;
use thiserror::Error;
use userbox_env_utils::{EnvParseError, default_env, default_env_u16, option_env_usize};

pub const DEFAULT_BIND_ADDR: &str = "0.0.0.0";
pub const DEFAULT_PORT: u16 = 8080;

/// In-memory user records over HTTP.
#[derive(Parser, Debug)]
#[command(version, about)]
pub struct Args {
    /// Port to listen on. Takes precedence over the `PORT` environment variable
    pub port: Option<u16>,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error(transparent)]
    Env(#[from] EnvParseError),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub bind_addr: String,
    pub port: u16,
    pub workers: Option<usize>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_addr: DEFAULT_BIND_ADDR.to_string(),
            port: DEFAULT_PORT,
            workers: None,
        }
    }
}

impl ServerConfig {
    /// Reads `BIND_ADDR`, `PORT` and `ACTIX_WORKERS`.
    ///
    /// # Errors
    ///
    /// * If `PORT` or `ACTIX_WORKERS` is set to something that isn't a number
    pub fn from_env() -> Result<Self, ConfigError> {
        Ok(Self {
            bind_addr: default_env("BIND_ADDR", DEFAULT_BIND_ADDR),
            port: default_env_u16("PORT", DEFAULT_PORT)?,
            workers: option_env_usize("ACTIX_WORKERS")?,
        })
    }

    #[must_use]
    pub fn with_args(mut self, args: &Args) -> Self {
        if let Some(port) = args.port {
            self.port = port;
        }
        self
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test_log::test]
    fn default_config_listens_on_8080() {
        let config = ServerConfig::default();

        assert_eq!(config.bind_addr, "0.0.0.0");
        assert_eq!(config.port, 8080);
        assert_eq!(config.workers, None);
    }

    #[test_log::test]
    fn port_argument_overrides_config() {
        let args = Args::try_parse_from(["userbox_server", "9000"]).unwrap();

        let config = ServerConfig::default().with_args(&args);

        assert_eq!(config.port, 9000);
    }

    #[test_log::test]
    fn missing_port_argument_keeps_config() {
        let args = Args::try_parse_from(["userbox_server"]).unwrap();
        let config = ServerConfig {
            port: 3000,
            ..ServerConfig::default()
        };

        assert_eq!(config.clone().with_args(&args), config);
    }

    #[test_log::test]
    fn invalid_port_argument_is_rejected() {
        assert!(Args::try_parse_from(["userbox_server", "http"]).is_err());
        assert!(Args::try_parse_from(["userbox_server", "65536"]).is_err());
    }
}
