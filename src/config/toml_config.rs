use crate::config::{
    validate_settings, DEFAULT_HOST, DEFAULT_PORT, DEFAULT_TRIVIA_ENDPOINT,
    DEFAULT_TRIVIA_TIMEOUT_SECS,
};
use crate::core::ConfigProvider;
use crate::utils::error::{Result, ServiceError};
use crate::utils::validation::Validate;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TomlConfig {
    #[serde(default)]
    pub server: ServerSection,
    #[serde(default)]
    pub trivia: TriviaSection,
    #[serde(default)]
    pub classification: ClassificationSection,
    #[serde(default)]
    pub logging: LoggingSection,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ServerSection {
    pub host: Option<String>,
    pub port: Option<u16>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TriviaSection {
    pub endpoint: Option<String>,
    pub timeout_seconds: Option<u64>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ClassificationSection {
    pub reject_negatives: Option<bool>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LoggingSection {
    pub verbose: Option<bool>,
    pub json: Option<bool>,
}

impl TomlConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(ServiceError::IoError)?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析配置
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| ServiceError::ConfigValidationError {
            field: "toml_parsing".to_string(),
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// 替換環境變數 (例如 ${TRIVIA_ENDPOINT})，未設定的變數保持原樣
    fn substitute_env_vars(content: &str) -> Result<String> {
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| ServiceError::ConfigValidationError {
            field: "env_substitution".to_string(),
            message: e.to_string(),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }

    pub fn host(&self) -> &str {
        self.server.host.as_deref().unwrap_or(DEFAULT_HOST)
    }

    pub fn port(&self) -> u16 {
        self.server.port.unwrap_or(DEFAULT_PORT)
    }

    pub fn trivia_timeout_secs(&self) -> u64 {
        self.trivia
            .timeout_seconds
            .unwrap_or(DEFAULT_TRIVIA_TIMEOUT_SECS)
    }

    pub fn verbose(&self) -> bool {
        self.logging.verbose.unwrap_or(false)
    }

    pub fn json_logs(&self) -> bool {
        self.logging.json.unwrap_or(false)
    }
}

impl ConfigProvider for TomlConfig {
    fn bind_address(&self) -> String {
        format!("{}:{}", self.host(), self.port())
    }

    fn trivia_endpoint(&self) -> &str {
        self.trivia
            .endpoint
            .as_deref()
            .unwrap_or(DEFAULT_TRIVIA_ENDPOINT)
    }

    fn trivia_timeout(&self) -> Duration {
        Duration::from_secs(self.trivia_timeout_secs())
    }

    fn reject_negatives(&self) -> bool {
        self.classification.reject_negatives.unwrap_or(false)
    }
}

impl Validate for TomlConfig {
    fn validate(&self) -> Result<()> {
        validate_settings(
            self.host(),
            self.port(),
            self.trivia_endpoint(),
            self.trivia_timeout_secs(),
        )
    }
}
