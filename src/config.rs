use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use std::time::Duration;

/// Generation service configuration
#[derive(Debug, Deserialize, Clone)]
pub struct GeneratorConfig {
    /// Endpoint answering a bare GET with a freshly generated wallet record
    pub url: String,
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

fn default_timeout_secs() -> u64 {
    30
}

impl GeneratorConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

/// Toast acknowledgment settings
#[derive(Debug, Deserialize, Clone)]
pub struct FeedbackConfig {
    /// How long a notice stays on screen
    #[serde(default = "default_toast_millis")]
    pub toast_millis: u64,
}

fn default_toast_millis() -> u64 {
    2000
}

impl Default for FeedbackConfig {
    fn default() -> Self {
        Self {
            toast_millis: default_toast_millis(),
        }
    }
}

impl FeedbackConfig {
    pub fn toast_ttl(&self) -> Duration {
        Duration::from_millis(self.toast_millis)
    }
}

/// Diagnostic log settings
#[derive(Debug, Deserialize, Clone)]
pub struct LoggingConfig {
    /// Log file path. The terminal is owned by the UI, so logs go here.
    #[serde(default = "default_log_file")]
    pub file: String,
}

fn default_log_file() -> String {
    "solgen.log".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            file: default_log_file(),
        }
    }
}

/// Environment layer, e.g. SOLGEN_GENERATOR__URL, SOLGEN_FEEDBACK__TOAST_MILLIS
fn environment() -> Environment {
    Environment::with_prefix("SOLGEN")
        .prefix_separator("_")
        .separator("__")
        .try_parsing(true)
}

/// Root application configuration
#[derive(Debug, Deserialize, Clone)]
pub struct AppConfig {
    pub generator: GeneratorConfig,
    #[serde(default)]
    pub feedback: FeedbackConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl AppConfig {
    /// Load configuration from files and environment variables
    pub fn load() -> Result<Self, ConfigError> {
        // A missing .env file is fine; real env vars still apply
        let _ = dotenvy::dotenv();

        let config = Config::builder()
            // Start with default config file
            .add_source(File::with_name("config/default").required(false))
            // Override with local config if present
            .add_source(File::with_name("config/local").required(false))
            // Override with environment variables (prefix: SOLGEN_)
            .add_source(environment())
            .build()?;

        config.try_deserialize()
    }

    /// Replace the generation endpoint, e.g. from a command-line flag
    pub fn with_generator_url(mut self, url: impl Into<String>) -> Self {
        self.generator.url = url.into();
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_fill_optional_sections() {
        let config: AppConfig = Config::builder()
            .set_override("generator.url", "http://localhost:3000/api/generate")
            .unwrap()
            .build()
            .unwrap()
            .try_deserialize()
            .unwrap();

        assert_eq!(config.generator.url, "http://localhost:3000/api/generate");
        assert_eq!(config.generator.timeout(), Duration::from_secs(30));
        assert_eq!(config.feedback.toast_ttl(), Duration::from_millis(2000));
        assert_eq!(config.logging.file, "solgen.log");
    }

    #[test]
    fn test_missing_generator_url_is_an_error() {
        let result: Result<AppConfig, _> = Config::builder()
            .set_override("feedback.toast_millis", 500)
            .unwrap()
            .build()
            .unwrap()
            .try_deserialize();
        assert!(result.is_err());
    }

    #[test]
    fn test_environment_sets_generator_url() {
        let vars = config::Map::from([
            (
                "SOLGEN_GENERATOR__URL".to_string(),
                "http://documented.example/api".to_string(),
            ),
            ("SOLGEN_FEEDBACK__TOAST_MILLIS".to_string(), "750".to_string()),
        ]);
        let config: AppConfig = Config::builder()
            .set_default("generator.url", "http://localhost:3000/api/generate")
            .unwrap()
            .add_source(environment().source(Some(vars)))
            .build()
            .unwrap()
            .try_deserialize()
            .unwrap();

        assert_eq!(config.generator.url, "http://documented.example/api");
        assert_eq!(config.feedback.toast_ttl(), Duration::from_millis(750));
    }

    #[test]
    fn test_environment_ignores_double_underscore_prefix() {
        let vars = config::Map::from([(
            "SOLGEN__GENERATOR__URL".to_string(),
            "http://double.example/api".to_string(),
        )]);
        let config: AppConfig = Config::builder()
            .set_default("generator.url", "http://localhost:3000/api/generate")
            .unwrap()
            .add_source(environment().source(Some(vars)))
            .build()
            .unwrap()
            .try_deserialize()
            .unwrap();

        assert_eq!(config.generator.url, "http://localhost:3000/api/generate");
    }

    #[test]
    fn test_endpoint_override() {
        let config = AppConfig {
            generator: GeneratorConfig {
                url: "http://a".to_string(),
                timeout_secs: 5,
            },
            feedback: FeedbackConfig::default(),
            logging: LoggingConfig::default(),
        }
        .with_generator_url("http://b");
        assert_eq!(config.generator.url, "http://b");
        assert_eq!(config.generator.timeout_secs, 5);
    }
}
