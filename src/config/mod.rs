pub mod toml_config;

use crate::core::ConfigProvider;
use crate::utils::error::Result;
use crate::utils::validation::{validate_non_empty_string, validate_range, validate_url, Validate};
use clap::Parser;
use std::time::Duration;

pub const DEFAULT_HOST: &str = "0.0.0.0";
pub const DEFAULT_PORT: u16 = 8000;
pub const DEFAULT_TRIVIA_ENDPOINT: &str = "http://numbersapi.com";
pub const DEFAULT_TRIVIA_TIMEOUT_SECS: u64 = 3;
pub const MAX_TRIVIA_TIMEOUT_SECS: u64 = 60;

#[derive(Debug, Clone, Parser)]
#[command(name = "number-classifier")]
#[command(about = "HTTP service that classifies integers and adds a fun fact")]
pub struct ServerConfig {
    #[arg(long, default_value = DEFAULT_HOST)]
    pub host: String,

    #[arg(long, default_value_t = DEFAULT_PORT)]
    pub port: u16,

    #[arg(long, default_value = DEFAULT_TRIVIA_ENDPOINT)]
    pub trivia_endpoint: String,

    #[arg(long, default_value_t = DEFAULT_TRIVIA_TIMEOUT_SECS)]
    pub trivia_timeout_secs: u64,

    #[arg(long, help = "Answer negative numbers with a 400 instead of classifying them")]
    pub reject_negatives: bool,

    #[arg(short, long, help = "Load settings from a TOML file instead of flags")]
    pub config: Option<String>,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, help = "Emit logs as JSON lines")]
    pub json_logs: bool,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            trivia_endpoint: DEFAULT_TRIVIA_ENDPOINT.to_string(),
            trivia_timeout_secs: DEFAULT_TRIVIA_TIMEOUT_SECS,
            reject_negatives: false,
            config: None,
            verbose: false,
            json_logs: false,
        }
    }
}

impl ConfigProvider for ServerConfig {
    fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    fn trivia_endpoint(&self) -> &str {
        &self.trivia_endpoint
    }

    fn trivia_timeout(&self) -> Duration {
        Duration::from_secs(self.trivia_timeout_secs)
    }

    fn reject_negatives(&self) -> bool {
        self.reject_negatives
    }
}

impl Validate for ServerConfig {
    fn validate(&self) -> Result<()> {
        validate_settings(
            &self.host,
            self.port,
            &self.trivia_endpoint,
            self.trivia_timeout_secs,
        )
    }
}

/// Checks shared by every configuration source.
pub(crate) fn validate_settings(
    host: &str,
    port: u16,
    trivia_endpoint: &str,
    trivia_timeout_secs: u64,
) -> Result<()> {
    validate_non_empty_string("host", host)?;
    validate_range("port", port, 1, u16::MAX)?;
    validate_url("trivia_endpoint", trivia_endpoint)?;
    validate_range(
        "trivia_timeout_secs",
        trivia_timeout_secs,
        1,
        MAX_TRIVIA_TIMEOUT_SECS,
    )?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_from_empty_command_line() {
        let config = ServerConfig::parse_from(["number-classifier"]);

        assert_eq!(config.bind_address(), "0.0.0.0:8000");
        assert_eq!(config.trivia_endpoint(), DEFAULT_TRIVIA_ENDPOINT);
        assert_eq!(config.trivia_timeout(), Duration::from_secs(3));
        assert!(!config.reject_negatives());
        assert!(config.config.is_none());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_flags_override_defaults() {
        let config = ServerConfig::parse_from([
            "number-classifier",
            "--host",
            "127.0.0.1",
            "--port",
            "9090",
            "--trivia-endpoint",
            "https://trivia.internal",
            "--trivia-timeout-secs",
            "5",
            "--reject-negatives",
            "--json-logs",
        ]);

        assert_eq!(config.bind_address(), "127.0.0.1:9090");
        assert_eq!(config.trivia_endpoint(), "https://trivia.internal");
        assert_eq!(config.trivia_timeout(), Duration::from_secs(5));
        assert!(config.reject_negatives());
        assert!(config.json_logs);
    }

    #[test]
    fn test_validation_rejects_bad_values() {
        let bad_endpoint = ServerConfig {
            trivia_endpoint: "numbersapi.com".to_string(),
            ..ServerConfig::default()
        };
        assert!(bad_endpoint.validate().is_err());

        let bad_port = ServerConfig {
            port: 0,
            ..ServerConfig::default()
        };
        assert!(bad_port.validate().is_err());

        let bad_timeout = ServerConfig {
            trivia_timeout_secs: 0,
            ..ServerConfig::default()
        };
        assert!(bad_timeout.validate().is_err());
    }
}
