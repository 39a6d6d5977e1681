use std::env;
use std::fmt;

use serde::{Deserialize, Serialize};

/// Distinguishes runtime behavior for different stages of the application.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppEnvironment {
    Development,
    Test,
    Production,
}

impl AppEnvironment {
    fn from_str(value: &str) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "prod" | "production" => Self::Production,
            "test" | "ci" => Self::Test,
            _ => Self::Development,
        }
    }
}

/// Top-level configuration for the application.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub environment: AppEnvironment,
    pub eligibility: EligibilityConfig,
    pub telemetry: TelemetryConfig,
}

impl AppConfig {
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let environment = AppEnvironment::from_str(
            &env::var("APP_ENV").unwrap_or_else(|_| "development".to_string()),
        );

        let eligibility = EligibilityConfig::from_env()?;

        let log_level = env::var("APP_LOG_LEVEL").unwrap_or_else(|_| "info".to_string());

        Ok(Self {
            environment,
            eligibility,
            telemetry: TelemetryConfig { log_level },
        })
    }
}

/// Inclusive adult age bounds applied by the age criterion.
///
/// The engine never reads ambient state; these bounds are resolved once by
/// the caller and passed in explicitly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct EligibilityConfig {
    pub age_adult_lower: i16,
    pub age_adult_upper: i16,
}

impl EligibilityConfig {
    pub fn new(age_adult_lower: i16, age_adult_upper: i16) -> Result<Self, ConfigError> {
        if age_adult_lower > age_adult_upper {
            return Err(ConfigError::InvertedAgeBounds {
                lower: age_adult_lower,
                upper: age_adult_upper,
            });
        }

        Ok(Self {
            age_adult_lower,
            age_adult_upper,
        })
    }

    pub fn from_env() -> Result<Self, ConfigError> {
        let lower = parse_age_bound("SCREENING_AGE_ADULT_LOWER", 18)?;
        let upper = parse_age_bound("SCREENING_AGE_ADULT_UPPER", 64)?;
        Self::new(lower, upper)
    }
}

impl Default for EligibilityConfig {
    fn default() -> Self {
        Self {
            age_adult_lower: 18,
            age_adult_upper: 64,
        }
    }
}

fn parse_age_bound(var: &str, default: i16) -> Result<i16, ConfigError> {
    match env::var(var) {
        Ok(value) => value
            .trim()
            .parse::<i16>()
            .ok()
            .filter(|bound| *bound >= 0)
            .ok_or_else(|| ConfigError::InvalidAgeBound {
                var: var.to_string(),
                value,
            }),
        Err(_) => Ok(default),
    }
}

/// Tracing controls.
#[derive(Debug, Clone)]
pub struct TelemetryConfig {
    pub log_level: String,
}

#[derive(Debug)]
pub enum ConfigError {
    InvalidAgeBound { var: String, value: String },
    InvertedAgeBounds { lower: i16, upper: i16 },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::InvalidAgeBound { var, value } => {
                write!(f, "{} must be a non-negative age in years, got '{}'", var, value)
            }
            ConfigError::InvertedAgeBounds { lower, upper } => {
                write!(
                    f,
                    "lower age bound {} exceeds upper age bound {}",
                    lower, upper
                )
            }
        }
    }
}

impl std::error::Error for ConfigError {}
