use std::env;
use std::fmt;
use std::net::{IpAddr, SocketAddr};
use std::str::FromStr;

use crate::workflows::fintech::{ScoringConfig, ScoringModel};

/// Distinguishes runtime behavior for different stages of the service.
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

/// Top-level configuration for the eligibility service.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub environment: AppEnvironment,
    pub server: ServerConfig,
    pub telemetry: TelemetryConfig,
    pub scoring: ScoringConfig,
}

impl AppConfig {
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let environment = AppEnvironment::from_str(
            &env::var("APP_ENV").unwrap_or_else(|_| "development".to_string()),
        );

        let host = env::var("APP_HOST").unwrap_or_else(|_| "127.0.0.1".to_string());
        let port = env::var("APP_PORT")
            .unwrap_or_else(|_| "3000".to_string())
            .parse::<u16>()
            .map_err(|_| ConfigError::InvalidPort)?;

        let log_level = env::var("APP_LOG_LEVEL").unwrap_or_else(|_| "info".to_string());

        Ok(Self {
            environment,
            server: ServerConfig { host, port },
            telemetry: TelemetryConfig { log_level },
            scoring: scoring_from_env()?,
        })
    }
}

/// Fintech scoring thresholds may be tuned per deployment; unset keys keep the defaults.
fn scoring_from_env() -> Result<ScoringConfig, ConfigError> {
    let defaults = ScoringConfig::default();
    let scoring = ScoringConfig {
        min_net_monthly_income: env_or("FINTECH_MIN_INCOME", defaults.min_net_monthly_income)?,
        max_debt_to_income: env_or("FINTECH_MAX_DTI", defaults.max_debt_to_income)?,
        income_multiplier: env_or("FINTECH_INCOME_MULTIPLIER", defaults.income_multiplier)?,
        loan_cap: env_or("FINTECH_LOAN_CAP", defaults.loan_cap)?,
        pass_score: env_or("FINTECH_PASS_SCORE", defaults.pass_score)?,
        ..defaults
    };
    validate_scoring(&scoring)?;
    Ok(scoring)
}

fn validate_scoring(scoring: &ScoringConfig) -> Result<(), ConfigError> {
    let dti = scoring.max_debt_to_income;
    if !(dti.is_finite() && dti > 0.0) {
        return Err(ConfigError::OutOfRange {
            key: "FINTECH_MAX_DTI",
            value: dti.to_string(),
            expected: "a finite ratio above zero",
        });
    }

    if scoring.pass_score > ScoringModel::standard().max_score() {
        return Err(ConfigError::OutOfRange {
            key: "FINTECH_PASS_SCORE",
            value: scoring.pass_score.to_string(),
            expected: "at most the number of scoring criteria (6)",
        });
    }

    if scoring.income_multiplier == 0 {
        return Err(ConfigError::OutOfRange {
            key: "FINTECH_INCOME_MULTIPLIER",
            value: scoring.income_multiplier.to_string(),
            expected: "a positive multiple",
        });
    }

    if scoring.loan_cap < scoring.rounding_step {
        return Err(ConfigError::OutOfRange {
            key: "FINTECH_LOAN_CAP",
            value: scoring.loan_cap.to_string(),
            expected: "at least 1000",
        });
    }

    Ok(())
}

fn env_or<T: FromStr>(key: &'static str, default: T) -> Result<T, ConfigError> {
    match env::var(key) {
        Ok(raw) => raw
            .trim()
            .parse::<T>()
            .map_err(|_| ConfigError::InvalidNumber { key, value: raw }),
        Err(_) => Ok(default),
    }
}

/// Settings controlling the HTTP server binding.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl ServerConfig {
    pub fn socket_addr(&self) -> Result<SocketAddr, ConfigError> {
        if self.host.eq_ignore_ascii_case("localhost") {
            return Ok(SocketAddr::new(IpAddr::from([127, 0, 0, 1]), self.port));
        }

        let ip: IpAddr = self
            .host
            .parse()
            .map_err(|source| ConfigError::InvalidHost { source })?;

        Ok(SocketAddr::new(ip, self.port))
    }
}

/// Tracing controls.
#[derive(Debug, Clone)]
pub struct TelemetryConfig {
    pub log_level: String,
}

#[derive(Debug)]
pub enum ConfigError {
    InvalidPort,
    InvalidHost { source: std::net::AddrParseError },
    InvalidNumber { key: &'static str, value: String },
    OutOfRange {
        key: &'static str,
        value: String,
        expected: &'static str,
    },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::InvalidPort => write!(f, "APP_PORT must be a valid u16"),
            ConfigError::InvalidHost { .. } => {
                write!(f, "APP_HOST must parse to an IPv4 or IPv6 address")
            }
            ConfigError::InvalidNumber { key, value } => {
                write!(f, "{key} must be numeric, found '{value}'")
            }
            ConfigError::OutOfRange {
                key,
                value,
                expected,
            } => write!(f, "{key} must be {expected}, found '{value}'"),
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigError::InvalidPort
            | ConfigError::InvalidNumber { .. }
            | ConfigError::OutOfRange { .. } => None,
            ConfigError::InvalidHost { source } => Some(source),
        }
    }
}
