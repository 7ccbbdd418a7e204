use std::env;
use std::fmt;

/// Top-level configuration for the command-line host.
///
/// The analysis engine itself never reads the environment; only binaries load this.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub telemetry: TelemetryConfig,
}

impl AppConfig {
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let log_level = match env::var("DRIVE_LOG_LEVEL") {
            Ok(value) if value.trim().is_empty() => return Err(ConfigError::EmptyLogLevel),
            Ok(value) => value.trim().to_string(),
            Err(_) => "warn".to_string(),
        };

        Ok(Self {
            telemetry: TelemetryConfig { log_level },
        })
    }
}

/// Tracing controls.
#[derive(Debug, Clone)]
pub struct TelemetryConfig {
    pub log_level: String,
}

#[derive(Debug)]
pub enum ConfigError {
    EmptyLogLevel,
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::EmptyLogLevel => {
                write!(f, "DRIVE_LOG_LEVEL must not be empty when set")
            }
        }
    }
}

impl std::error::Error for ConfigError {}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;
    use std::sync::{Mutex, OnceLock};

    fn env_guard() -> &'static Mutex<()> {
        static GUARD: OnceLock<Mutex<()>> = OnceLock::new();
        GUARD.get_or_init(|| Mutex::new(()))
    }

    fn reset_env() {
        env::remove_var("DRIVE_LOG_LEVEL");
    }

    #[test]
    fn load_uses_defaults_when_env_missing() {
        let _lock = env_guard().lock().expect("env mutex poisoned");
        reset_env();
        let config = AppConfig::load().expect("config loads with defaults");
        assert_eq!(config.telemetry.log_level, "warn");
    }

    #[test]
    fn load_reads_log_level() {
        let _lock = env_guard().lock().expect("env mutex poisoned");
        reset_env();
        env::set_var("DRIVE_LOG_LEVEL", " drive_insights=debug ");
        let config = AppConfig::load().expect("config loads");
        assert_eq!(config.telemetry.log_level, "drive_insights=debug");
        reset_env();
    }

    #[test]
    fn rejects_blank_log_level() {
        let _lock = env_guard().lock().expect("env mutex poisoned");
        reset_env();
        env::set_var("DRIVE_LOG_LEVEL", "   ");
        let err = AppConfig::load().expect_err("blank level rejected");
        assert!(matches!(err, ConfigError::EmptyLogLevel));
        reset_env();
    }
}
