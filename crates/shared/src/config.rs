//! Application configuration management.

use serde::Deserialize;

/// Application configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Check-IBAN worker configuration.
    #[serde(default)]
    pub worker: WorkerConfig,
    /// Logging configuration.
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Check-IBAN worker configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct WorkerConfig {
    /// Task definition name the worker answers to.
    #[serde(default = "default_task_def_name")]
    pub task_def_name: String,
    /// Input field carrying the raw IBAN.
    #[serde(default = "default_input_field")]
    pub input_field: String,
    /// Output field receiving the resolved entity name.
    #[serde(default = "default_output_field")]
    pub output_field: String,
    /// Value written to the output field when resolution fails.
    #[serde(default)]
    pub failure_output_value: String,
}

fn default_task_def_name() -> String {
    "worker_task_check_iban".to_string()
}

fn default_input_field() -> String {
    "iban".to_string()
}

fn default_output_field() -> String {
    "entity".to_string()
}

impl Default for WorkerConfig {
    fn default() -> Self {
        Self {
            task_def_name: default_task_def_name(),
            input_field: default_input_field(),
            output_field: default_output_field(),
            failure_output_value: String::new(),
        }
    }
}

/// Logging configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    /// `EnvFilter` directive used when `RUST_LOG` is unset.
    #[serde(default = "default_filter")]
    pub filter: String,
    /// Output format.
    #[serde(default)]
    pub format: LogFormat,
}

fn default_filter() -> String {
    "ibancheck=info".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: default_filter(),
            format: LogFormat::default(),
        }
    }
}

/// Log line format.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    /// Human readable lines.
    #[default]
    Text,
    /// One JSON object per line.
    Json,
}

impl AppConfig {
    /// Loads configuration from environment and config files.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration cannot be loaded.
    pub fn load() -> Result<Self, config::ConfigError> {
        let run_mode = std::env::var("RUN_MODE").unwrap_or_else(|_| "development".to_string());

        let config = config::Config::builder()
            .add_source(config::File::with_name("config/default").required(false))
            .add_source(config::File::with_name(&format!("config/{run_mode}")).required(false))
            .add_source(
                config::Environment::with_prefix("IBANCHECK")
                    .prefix_separator("__")
                    .separator("__"),
            )
            .build()?;

        config.try_deserialize()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = AppConfig::default();
        assert_eq!(config.worker.task_def_name, "worker_task_check_iban");
        assert_eq!(config.worker.input_field, "iban");
        assert_eq!(config.worker.output_field, "entity");
        assert!(config.worker.failure_output_value.is_empty());
        assert_eq!(config.logging.filter, "ibancheck=info");
        assert_eq!(config.logging.format, LogFormat::Text);
    }

    #[test]
    fn test_load_without_sources_uses_defaults() {
        temp_env::with_vars(
            [
                ("RUN_MODE", None::<&str>),
                ("IBANCHECK__WORKER__TASK_DEF_NAME", None),
                ("IBANCHECK__LOGGING__FORMAT", None),
            ],
            || {
                let config = AppConfig::load().unwrap();
                assert_eq!(config.worker.task_def_name, "worker_task_check_iban");
                assert_eq!(config.logging.format, LogFormat::Text);
            },
        );
    }

    #[test]
    fn test_load_from_environment() {
        temp_env::with_vars(
            [
                ("RUN_MODE", None),
                ("IBANCHECK__WORKER__TASK_DEF_NAME", Some("check_iban_v2")),
                ("IBANCHECK__LOGGING__FORMAT", Some("json")),
            ],
            || {
                let config = AppConfig::load().unwrap();
                assert_eq!(config.worker.task_def_name, "check_iban_v2");
                assert_eq!(config.worker.input_field, "iban");
                assert_eq!(config.logging.format, LogFormat::Json);
            },
        );
    }

    #[test]
    fn test_rejects_unknown_log_format() {
        temp_env::with_vars(
            [
                ("RUN_MODE", None),
                ("IBANCHECK__LOGGING__FORMAT", Some("xml")),
            ],
            || {
                assert!(AppConfig::load().is_err());
            },
        );
    }
}
